//! Calculator UI
//!
//! A two-input browser calculator: four operator buttons, a clear button and
//! an output region. Clicking an operator reads both inputs, applies the
//! operator and writes the result, or the text `error` when an input is
//! missing or not a number. Clicking clear empties both inputs and the output.
//!
//! The page logic runs natively against [`wasm::MockDom`], and on
//! `wasm32` (feature `wasm`) against the real document.
//!
//! # Example
//!
//! ```rust
//! use calculator_ui::prelude::*;
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.apply(Operation::Multiply, Some("8"), Some("4")), Ok(32.0));
//! assert_eq!(calc.compute(Operation::Add, None, Some("4")).render("error"), "error");
//!
//! let mut driver = WasmDriver::new();
//! driver.calculate(Some("8"), Some("4"), Operation::Divide);
//! assert_eq!(driver.output_text(), "2");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
#[cfg(not(target_arch = "wasm32"))]
pub mod telemetry;
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{ConfigError, UiConfig};
    pub use crate::core::{
        format_number, parse_operand, CalcError, CalcResult, Calculator, Operand, Operation,
        Output,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::wasm::{
        ButtonAction, ButtonDef, ButtonPanel, DomElement, DomEvent, MockDom, WasmCalculator,
        WasmDriver,
    };
}
