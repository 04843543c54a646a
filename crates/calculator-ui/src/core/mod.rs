//! Core calculator logic, independent of any DOM
//!
//! Both the mock DOM and the browser binding go through `Calculator::apply`,
//! so this is the one place that decides what a click produces.

mod format;
mod operations;

pub use format::format_number;
pub use operations::{parse_operand, Calculator, Operation, Output};

use std::fmt;
use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Which of the two input fields a value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// Left-hand operand (`#input1`)
    First,
    /// Right-hand operand (`#input2`)
    Second,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first operand"),
            Self::Second => write!(f, "second operand"),
        }
    }
}

/// Calculator errors
///
/// Every variant surfaces to the user as the same error marker; the variants
/// only exist so tests and logs can tell the cases apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The input field was empty or had no value at all
    #[error("{0} is missing")]
    MissingOperand(Operand),
    /// The input field held text that is not a number
    #[error("{operand} is not a number: {raw:?}")]
    InvalidOperand {
        /// Which field was rejected
        operand: Operand,
        /// The raw text as read from the field
        raw: String,
    },
}

impl CalcError {
    /// The operand that caused the error
    #[must_use]
    pub const fn operand(&self) -> Operand {
        match self {
            Self::MissingOperand(operand) | Self::InvalidOperand { operand, .. } => *operand,
        }
    }
}
