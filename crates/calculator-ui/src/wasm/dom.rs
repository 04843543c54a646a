//! Mock DOM for testing the calculator without a browser
//!
//! Holds the page's elements by id in document order, with the handful of
//! queries the tests need (`getByText`, `querySelector("#id")`, input values).

use std::collections::HashMap;

use super::buttons::ButtonPanel;
use crate::config::UiConfig;

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content (innerHTML for the output div)
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class
    pub fn add_class(&mut self, class: &str) {
        if !class.is_empty() && !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Current value of an input, `None` when unset
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.get_attr("value")
    }

    /// Sets or removes the `value` attribute
    pub fn set_value(&mut self, value: Option<&str>) {
        match value {
            Some(v) => {
                self.attributes.insert("value".to_string(), v.to_string());
            }
            None => {
                self.attributes.remove("value");
            }
        }
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Keystroke-level input event with the field's new value
    Input {
        /// The ID of the input element
        element_id: String,
        /// The new value entered
        value: String,
    },
    /// Change event; `None` models assigning `null` to the value
    Change {
        /// The ID of the input element
        element_id: String,
        /// The committed value
        value: Option<String>,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates an input event
    #[must_use]
    pub fn input(element_id: &str, value: &str) -> Self {
        Self::Input {
            element_id: element_id.to_string(),
            value: value.to_string(),
        }
    }

    /// Creates a change event
    #[must_use]
    pub fn change(element_id: &str, value: Option<&str>) -> Self {
        Self::Change {
            element_id: element_id.to_string(),
            value: value.map(str::to_string),
        }
    }

    /// The id of the event target
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::Click { element_id }
            | Self::Input { element_id, .. }
            | Self::Change { element_id, .. } => element_id,
        }
    }
}

/// Mock DOM for testing the calculator without a browser
#[derive(Debug, Default)]
pub struct MockDom {
    /// Elements by ID for quick lookup
    elements: HashMap<String, DomElement>,
    /// Element IDs in document order
    order: Vec<String>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the calculator page
    ///
    /// Document order: first input, second input, operator buttons, clear
    /// button, output.
    #[must_use]
    pub fn calculator(config: &UiConfig) -> Self {
        let mut dom = Self::new();

        dom.register_element(
            DomElement::new("input")
                .with_id(&config.first_input_id)
                .with_attr("type", "number"),
        );
        dom.register_element(
            DomElement::new("input")
                .with_id(&config.second_input_id)
                .with_attr("type", "number"),
        );

        for button in ButtonPanel::new(config).buttons() {
            let mut elem = DomElement::new("button")
                .with_id(&button.id)
                .with_text(&button.label);
            for class in &button.classes {
                elem.add_class(class);
            }
            dom.register_element(elem);
        }

        dom.register_element(DomElement::new("div").with_id(&config.output_id));
        dom
    }

    /// Registers an element for ID lookup; elements without an ID are ignored
    pub fn register_element(&mut self, element: DomElement) {
        if element.id.is_empty() {
            return;
        }
        if !self.elements.contains_key(&element.id) {
            self.order.push(element.id.clone());
        }
        self.elements.insert(element.id.clone(), element);
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Elements in document order
    pub fn elements(&self) -> impl Iterator<Item = &DomElement> {
        self.order.iter().filter_map(|id| self.elements.get(id))
    }

    /// Number of registered elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true when no element is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// First element whose text content equals `text`
    #[must_use]
    pub fn find_by_text(&self, text: &str) -> Option<&DomElement> {
        self.elements().find(|e| e.text_content == text)
    }

    /// All elements carrying `class`
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Vec<&DomElement> {
        self.elements().filter(|e| e.has_class(class)).collect()
    }

    /// Dispatches an event, applying its effect on input values
    pub fn dispatch_event(&mut self, event: DomEvent) {
        match &event {
            DomEvent::Input { element_id, value } => {
                self.set_value(element_id, Some(value.as_str()));
            }
            DomEvent::Change { element_id, value } => {
                self.set_value(element_id, value.as_deref());
            }
            DomEvent::Click { .. } => {}
        }
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Sets an input's value by ID
    pub fn set_value(&mut self, id: &str, value: Option<&str>) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_value(value);
        }
    }

    /// Gets an input's value by ID
    #[must_use]
    pub fn get_value(&self, id: &str) -> Option<&str> {
        self.elements.get(id).and_then(DomElement::value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> MockDom {
        MockDom::calculator(&UiConfig::default())
    }

    // ===== DomElement tests =====

    #[test]
    fn test_dom_element_new() {
        let elem = DomElement::new("span");
        assert_eq!(elem.tag, "span");
        assert!(elem.id.is_empty());
        assert!(elem.text_content.is_empty());
    }

    #[test]
    fn test_dom_element_default() {
        assert_eq!(DomElement::default().tag, "div");
    }

    #[test]
    fn test_dom_element_builders() {
        let elem = DomElement::new("button")
            .with_id("b")
            .with_text("+")
            .with_class("btn")
            .with_attr("type", "button");
        assert_eq!(elem.id, "b");
        assert_eq!(elem.text_content, "+");
        assert!(elem.has_class("btn"));
        assert_eq!(elem.get_attr("type"), Some("button"));
    }

    #[test]
    fn test_dom_element_add_class_dedup() {
        let mut elem = DomElement::new("div");
        elem.add_class("foo");
        elem.add_class("foo");
        elem.add_class("");
        assert_eq!(elem.classes, vec!["foo".to_string()]);
    }

    #[test]
    fn test_dom_element_value() {
        let mut elem = DomElement::new("input");
        assert_eq!(elem.value(), None);
        elem.set_value(Some("8"));
        assert_eq!(elem.value(), Some("8"));
        elem.set_value(None);
        assert_eq!(elem.value(), None);
    }

    // ===== DomEvent tests =====

    #[test]
    fn test_dom_event_constructors() {
        assert!(matches!(DomEvent::click("b"), DomEvent::Click { element_id } if element_id == "b"));
        assert!(matches!(
            DomEvent::input("i", "4"),
            DomEvent::Input { element_id, value } if element_id == "i" && value == "4"
        ));
        assert!(matches!(
            DomEvent::change("i", None),
            DomEvent::Change { value: None, .. }
        ));
    }

    #[test]
    fn test_dom_event_target() {
        assert_eq!(DomEvent::click("a").target(), "a");
        assert_eq!(DomEvent::input("b", "1").target(), "b");
        assert_eq!(DomEvent::change("c", Some("1")).target(), "c");
    }

    // ===== MockDom tests =====

    #[test]
    fn test_mock_dom_new_is_empty() {
        let dom = MockDom::new();
        assert!(dom.is_empty());
        assert!(dom.event_history().is_empty());
    }

    #[test]
    fn test_calculator_layout() {
        let dom = page();
        let input1 = dom.get_element("input1").unwrap();
        assert_eq!(input1.tag, "input");
        let input2 = dom.get_element("input2").unwrap();
        assert_eq!(input2.tag, "input");
        let output = dom.get_element("output").unwrap();
        assert_eq!(output.tag, "div");
        assert_eq!(dom.len(), 8);
    }

    #[test]
    fn test_calculator_buttons_by_text() {
        let dom = page();
        for label in ["+", "-", "×", "÷", "c"] {
            let node = dom.find_by_text(label).unwrap();
            assert_eq!(node.tag, "button");
            assert!(node.has_class("btn"), "{label} should carry btn");
        }
        assert!(dom.find_by_text("c").unwrap().has_class("clear-button"));
        assert!(!dom.find_by_text("+").unwrap().has_class("clear-button"));
    }

    #[test]
    fn test_document_order() {
        let dom = page();
        let ids: Vec<&str> = dom.elements().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.first(), Some(&"input1"));
        assert_eq!(ids.last(), Some(&"output"));
    }

    #[test]
    fn test_find_by_class() {
        let dom = page();
        assert_eq!(dom.find_by_class("btn").len(), 5);
        assert_eq!(dom.find_by_class("clear-button").len(), 1);
    }

    #[test]
    fn test_find_by_text_missing() {
        assert!(page().find_by_text("=").is_none());
    }

    #[test]
    fn test_register_element_no_id() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("span"));
        assert!(dom.is_empty());
    }

    #[test]
    fn test_register_element_replaces_same_id() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("span").with_id("x").with_text("a"));
        dom.register_element(DomElement::new("span").with_id("x").with_text("b"));
        assert_eq!(dom.len(), 1);
        assert_eq!(dom.get_element_text("x"), Some("b"));
    }

    #[test]
    fn test_dispatch_change_sets_value() {
        let mut dom = page();
        dom.dispatch_event(DomEvent::change("input1", Some("8")));
        assert_eq!(dom.get_value("input1"), Some("8"));
        dom.dispatch_event(DomEvent::change("input1", None));
        assert_eq!(dom.get_value("input1"), None);
    }

    #[test]
    fn test_dispatch_input_sets_value() {
        let mut dom = page();
        dom.dispatch_event(DomEvent::input("input2", "4"));
        assert_eq!(dom.get_value("input2"), Some("4"));
    }

    #[test]
    fn test_dispatch_records_history() {
        let mut dom = page();
        dom.dispatch_event(DomEvent::change("input1", Some("1")));
        dom.dispatch_event(DomEvent::click("btn-add"));
        assert_eq!(dom.event_history().len(), 2);
        dom.clear_event_history();
        assert!(dom.event_history().is_empty());
    }

    #[test]
    fn test_set_element_text() {
        let mut dom = page();
        dom.set_element_text("output", "100");
        assert_eq!(dom.get_element_text("output"), Some("100"));
        assert_eq!(dom.get_element_text("nonexistent"), None);
    }

    #[test]
    fn test_get_element_mut() {
        let mut dom = page();
        if let Some(elem) = dom.get_element_mut("output") {
            elem.set_text("42");
        }
        assert_eq!(dom.get_element_text("output"), Some("42"));
    }
}
