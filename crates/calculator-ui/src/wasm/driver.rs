//! Mock DOM driver
//!
//! Routes DOM events through [`ButtonPanel`] into [`WasmCalculator`] and
//! writes the result back, the way the page's event listeners would.

use super::buttons::{ButtonAction, ButtonPanel};
use super::calculator::WasmCalculator;
use super::dom::{DomEvent, MockDom};
use crate::config::UiConfig;
use crate::core::Operation;
use crate::driver::CalculatorDriver;

/// WASM Driver wrapping calculator and mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    calculator: WasmCalculator,
    buttons: ButtonPanel,
    dom: MockDom,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver over the default page
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(UiConfig::default())
    }

    /// Creates a driver over a page built from `config`
    #[must_use]
    pub fn with_config(config: UiConfig) -> Self {
        Self {
            buttons: ButtonPanel::new(&config),
            dom: MockDom::calculator(&config),
            calculator: WasmCalculator::with_config(config),
        }
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub fn calculator(&self) -> &WasmCalculator {
        &self.calculator
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns a mutable reference to the DOM
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }

    /// Fires a change event on an input and feeds the value to the calculator
    pub fn change_input(&mut self, element_id: &str, value: Option<&str>) {
        self.dom.dispatch_event(DomEvent::change(element_id, value));
        self.read_input(element_id);
    }

    /// Fires an input event (single keystroke) on an input
    pub fn type_input(&mut self, element_id: &str, value: &str) {
        self.dom.dispatch_event(DomEvent::input(element_id, value));
        self.read_input(element_id);
    }

    /// Fires a click on the element with `element_id`
    ///
    /// Returns false when the element is not a calculator button.
    pub fn click(&mut self, element_id: &str) -> bool {
        self.dom.dispatch_event(DomEvent::click(element_id));
        let Some(action) = self.buttons.handle_click(element_id) else {
            return false;
        };
        match action {
            ButtonAction::Operator(op) => {
                if let Err(e) = self.calculator.apply(op) {
                    tracing::debug!(element_id, error = %e, "click produced the error marker");
                }
            }
            ButtonAction::Clear => self.calculator.clear(),
        }
        self.sync_dom();
        true
    }

    /// Clicks the element whose text is `text` (like `getByText` + click)
    pub fn click_text(&mut self, text: &str) -> bool {
        let Some(id) = self.dom.find_by_text(text).map(|e| e.id.clone()) else {
            return false;
        };
        self.click(&id)
    }

    /// Copies an input's DOM value into the calculator
    fn read_input(&mut self, element_id: &str) {
        let value = self.dom.get_value(element_id).map(str::to_string);
        let is_first = element_id == self.calculator.config().first_input_id;
        let is_second = element_id == self.calculator.config().second_input_id;
        if is_first {
            self.calculator.set_first(value.as_deref());
        } else if is_second {
            self.calculator.set_second(value.as_deref());
        }
    }

    /// Writes calculator state into the DOM
    fn sync_dom(&mut self) {
        let config = self.calculator.config().clone();
        self.dom
            .set_value(&config.first_input_id, self.calculator.first());
        self.dom
            .set_value(&config.second_input_id, self.calculator.second());
        self.dom
            .set_element_text(&config.output_id, &self.calculator.output_display());
    }

    /// Gets the output element's text
    #[must_use]
    pub fn output_element_text(&self) -> Option<&str> {
        self.dom
            .get_element_text(&self.calculator.config().output_id)
    }
}

impl CalculatorDriver for WasmDriver {
    fn set_first(&mut self, value: Option<&str>) {
        let id = self.calculator.config().first_input_id.clone();
        self.change_input(&id, value);
    }

    fn set_second(&mut self, value: Option<&str>) {
        let id = self.calculator.config().second_input_id.clone();
        self.change_input(&id, value);
    }

    fn press(&mut self, op: Operation) {
        self.click_text(op.symbol());
    }

    fn clear(&mut self) {
        let label = self.calculator.config().clear_label.clone();
        self.click_text(&label);
    }

    fn first_value(&self) -> Option<String> {
        self.dom
            .get_value(&self.calculator.config().first_input_id)
            .map(str::to_string)
    }

    fn second_value(&self) -> Option<String> {
        self.dom
            .get_value(&self.calculator.config().second_input_id)
            .map(str::to_string)
    }

    fn output_text(&self) -> String {
        self.output_element_text().unwrap_or_default().to_string()
    }
}
