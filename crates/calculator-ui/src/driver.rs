//! Calculator driver abstraction
//!
//! Behavioral checks are written once against [`CalculatorDriver`] and run
//! against any implementation: the mock DOM driver in unit tests, or a real
//! page driver in the browser.

use crate::core::Operation;

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use calculator_ui::driver::{verify_basic_arithmetic, CalculatorDriver};
/// use calculator_ui::wasm::WasmDriver;
///
/// let mut driver = WasmDriver::new();
/// verify_basic_arithmetic(&mut driver);
/// ```
pub trait CalculatorDriver {
    /// Sets the first input (`None` assigns null)
    fn set_first(&mut self, value: Option<&str>);

    /// Sets the second input (`None` assigns null)
    fn set_second(&mut self, value: Option<&str>);

    /// Clicks the button for `op`
    fn press(&mut self, op: Operation);

    /// Clicks the clear button
    fn clear(&mut self);

    /// Current value of the first input
    fn first_value(&self) -> Option<String>;

    /// Current value of the second input
    fn second_value(&self) -> Option<String>;

    /// Text of the output region
    fn output_text(&self) -> String;

    /// Sets both inputs and clicks `op`, returning the output text
    fn calculate(&mut self, a: Option<&str>, b: Option<&str>, op: Operation) -> String {
        self.set_first(a);
        self.set_second(b);
        self.press(op);
        self.output_text()
    }
}

/// Output text parsed as a number, the way the page's tests read it
#[must_use]
pub fn output_number<D: CalculatorDriver>(driver: &D) -> Option<f64> {
    driver.output_text().trim().parse().ok()
}

/// Returns true when the output shows the error marker
#[must_use]
pub fn output_is_error<D: CalculatorDriver>(driver: &D) -> bool {
    driver.output_text().to_lowercase() == "error"
}

// ===== Reusable specifications =====

/// 8 and 4 through each operator
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    let cases = [
        (Operation::Add, 12.0),
        (Operation::Subtract, 4.0),
        (Operation::Multiply, 32.0),
        (Operation::Divide, 2.0),
    ];
    for (op, expected) in cases {
        driver.calculate(Some("8"), Some("4"), op);
        assert_eq!(output_number(driver), Some(expected), "8 {} 4", op.symbol());
    }
    driver.clear();
}

/// A null operand on either side yields the error marker for every operator
pub fn verify_missing_operands<D: CalculatorDriver>(driver: &mut D) {
    for op in Operation::ALL {
        driver.calculate(None, Some("4"), op);
        assert!(output_is_error(driver), "null first operand with {}", op.symbol());

        driver.calculate(Some("4"), None, op);
        assert!(output_is_error(driver), "null second operand with {}", op.symbol());
    }
    driver.clear();
}

/// Empty and non-numeric text yields the error marker
pub fn verify_invalid_operands<D: CalculatorDriver>(driver: &mut D) {
    for (a, b) in [("", "4"), ("4", ""), ("abc", "4"), ("4", "four")] {
        driver.calculate(Some(a), Some(b), Operation::Add);
        assert!(output_is_error(driver), "{a:?} + {b:?}");
    }
    driver.clear();
}

/// Clear empties both inputs and the output, whatever they held
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.calculate(Some("8"), Some("4"), Operation::Add);
    driver.clear();
    assert_eq!(driver.first_value(), None);
    assert_eq!(driver.second_value(), None);
    assert!(driver.output_text().is_empty());

    driver.calculate(None, Some("4"), Operation::Add);
    driver.clear();
    assert!(driver.output_text().is_empty());
}

/// Editing inputs leaves the output at the last completed operation
pub fn verify_output_not_partial<D: CalculatorDriver>(driver: &mut D) {
    driver.calculate(Some("8"), Some("4"), Operation::Multiply);
    driver.set_first(Some("1"));
    driver.set_second(None);
    assert_eq!(output_number(driver), Some(32.0));
    driver.clear();
}

/// Complete verification suite
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_missing_operands(driver);
    verify_invalid_operands(driver);
    verify_clear(driver);
    verify_output_not_partial(driver);
}
