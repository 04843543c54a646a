//! The four binary operations and operand parsing

use super::format::format_number;
use super::{CalcError, CalcResult, Operand};

/// Operator bound to one of the page's buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operation {
    /// All operators in page order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the button label
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Short name used in element ids
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Parses a button label or its ASCII spelling
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim() {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "×" | "*" | "x" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator. Division by zero follows IEEE 754.
    #[must_use]
    pub fn evaluate(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

/// What the output region shows
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Output {
    /// Nothing computed yet, or cleared
    #[default]
    Empty,
    /// Result of the last operation
    Value(f64),
    /// The last operation had a missing or invalid operand
    Error,
}

impl Output {
    /// Display text for the output region
    #[must_use]
    pub fn render(&self, error_text: &str) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Value(v) => format_number(*v),
            Self::Error => error_text.to_string(),
        }
    }

    /// Returns true for the error marker
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Returns the numeric value, if any
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<CalcResult<f64>> for Output {
    fn from(result: CalcResult<f64>) -> Self {
        match result {
            Ok(v) => Self::Value(v),
            Err(_) => Self::Error,
        }
    }
}

/// Parses the raw value of an input field
///
/// `None` stands for an input whose value was set to `null`. Whitespace-only
/// text counts as missing. Text that parses to NaN is rejected.
pub fn parse_operand(raw: Option<&str>, operand: Operand) -> CalcResult<f64> {
    let text = raw.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(CalcError::MissingOperand(operand));
    }
    match text.parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(CalcError::InvalidOperand {
            operand,
            raw: text.to_string(),
        }),
    }
}

/// Stateless two-operand calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    /// Creates a calculator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parses both operands and applies `op`
    ///
    /// The first operand is checked before the second.
    pub fn apply(&self, op: Operation, raw_a: Option<&str>, raw_b: Option<&str>) -> CalcResult<f64> {
        let a = parse_operand(raw_a, Operand::First)?;
        let b = parse_operand(raw_b, Operand::Second)?;
        let result = op.evaluate(a, b);
        tracing::debug!(op = op.name(), a, b, result, "applied operation");
        Ok(result)
    }

    /// Like [`Calculator::apply`], folded into the display value
    #[must_use]
    pub fn compute(&self, op: Operation, raw_a: Option<&str>, raw_b: Option<&str>) -> Output {
        let result = self.apply(op, raw_a, raw_b);
        if let Err(e) = &result {
            tracing::warn!(op = op.name(), error = %e, "rejected operands");
        }
        Output::from(result)
    }
}
