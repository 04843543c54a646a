//! Button definitions for the calculator page
//!
//! One row of buttons: the four operators followed by clear. The same
//! definitions build the mock DOM and wire listeners in the browser.

use crate::config::UiConfig;
use crate::core::Operation;

/// What a button does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    /// Apply an operator to the two inputs
    Operator(Operation),
    /// Reset both inputs and the output
    Clear,
}

impl ButtonAction {
    /// Element id for this action
    #[must_use]
    pub fn element_id(&self) -> String {
        match self {
            Self::Operator(op) => format!("btn-{}", op.name()),
            Self::Clear => "btn-clear".to_string(),
        }
    }
}

/// A single button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonDef {
    /// The action this button performs
    pub action: ButtonAction,
    /// The DOM element ID for this button
    pub id: String,
    /// Visible label
    pub label: String,
    /// CSS classes
    pub classes: Vec<String>,
}

impl ButtonDef {
    /// Creates a button definition using the config's label and classes
    #[must_use]
    pub fn new(action: ButtonAction, config: &UiConfig) -> Self {
        let (label, classes) = match action {
            ButtonAction::Operator(op) => (op.symbol().to_string(), vec![config.button_class.clone()]),
            ButtonAction::Clear => (
                config.clear_label.clone(),
                vec![config.button_class.clone(), config.clear_class.clone()],
            ),
        };
        Self {
            action,
            id: action.element_id(),
            label,
            classes,
        }
    }
}

/// The page's buttons in document order
#[derive(Debug, Clone)]
pub struct ButtonPanel {
    buttons: Vec<ButtonDef>,
}

impl Default for ButtonPanel {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}

impl ButtonPanel {
    /// Creates the standard panel: + - × ÷ c
    #[must_use]
    pub fn new(config: &UiConfig) -> Self {
        let buttons = Operation::ALL
            .into_iter()
            .map(ButtonAction::Operator)
            .chain(std::iter::once(ButtonAction::Clear))
            .map(|action| ButtonDef::new(action, config))
            .collect();
        Self { buttons }
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[ButtonDef] {
        &self.buttons
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Gets a button by element ID
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&ButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Gets a button by its visible label
    #[must_use]
    pub fn get_by_label(&self, label: &str) -> Option<&ButtonDef> {
        self.buttons.iter().find(|b| b.label == label)
    }

    /// Resolves a click on an element ID to its action
    #[must_use]
    pub fn handle_click(&self, id: &str) -> Option<ButtonAction> {
        self.get_by_id(id).map(|b| b.action)
    }
}
