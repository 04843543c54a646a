//! Stateful calculator component
//!
//! Owns the two raw input values and the output. Inputs change freely;
//! the output only changes on `apply` or `clear`, and always in one step.

use crate::config::UiConfig;
use crate::core::{CalcResult, Calculator, Operation, Output};

/// Calculator component backing the page
#[derive(Debug, Clone)]
pub struct WasmCalculator {
    calculator: Calculator,
    config: UiConfig,
    /// Raw value of the first input (`None` = null)
    first: Option<String>,
    /// Raw value of the second input (`None` = null)
    second: Option<String>,
    output: Output,
}

impl Default for WasmCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmCalculator {
    /// Creates a calculator with the default page config
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(UiConfig::default())
    }

    /// Creates a calculator with a custom config
    #[must_use]
    pub fn with_config(config: UiConfig) -> Self {
        Self {
            calculator: Calculator::new(),
            config,
            first: None,
            second: None,
            output: Output::Empty,
        }
    }

    /// The config in use
    #[must_use]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Sets the first input's raw value
    pub fn set_first(&mut self, value: Option<&str>) {
        self.first = value.map(str::to_string);
    }

    /// Sets the second input's raw value
    pub fn set_second(&mut self, value: Option<&str>) {
        self.second = value.map(str::to_string);
    }

    /// Raw value of the first input
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.first.as_deref()
    }

    /// Raw value of the second input
    #[must_use]
    pub fn second(&self) -> Option<&str> {
        self.second.as_deref()
    }

    /// Applies `op` to the current inputs and replaces the output
    pub fn apply(&mut self, op: Operation) -> CalcResult<f64> {
        let result = self.calculator.apply(op, self.first(), self.second());
        if let Err(e) = &result {
            tracing::warn!(op = op.name(), error = %e, "rejected operands");
        }
        self.output = Output::from(result.clone());
        result
    }

    /// Resets both inputs and the output
    pub fn clear(&mut self) {
        self.first = None;
        self.second = None;
        self.output = Output::Empty;
        tracing::debug!("cleared calculator");
    }

    /// Current output value
    #[must_use]
    pub fn output(&self) -> Output {
        self.output
    }

    /// Output text as shown on the page
    #[must_use]
    pub fn output_display(&self) -> String {
        self.output.render(&self.config.error_text)
    }
}
