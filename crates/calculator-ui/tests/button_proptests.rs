//! Property-based tests for the button panel and page behavior

use calculator_ui::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

fn action_strategy() -> impl Strategy<Value = ButtonAction> {
    prop_oneof![
        operation_strategy().prop_map(ButtonAction::Operator),
        Just(ButtonAction::Clear),
    ]
}

/// Raw input text: a number, empty, or null
fn raw_input_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        (-1e6f64..1e6f64).prop_map(|v| Some(v.to_string())),
        Just(Some(String::new())),
        Just(None),
    ]
}

// ===== Button panel =====

proptest! {
    /// Every action resolves back to itself through its element id
    #[test]
    fn prop_action_id_round_trip(action in action_strategy()) {
        let panel = ButtonPanel::default();
        prop_assert_eq!(panel.handle_click(&action.element_id()), Some(action));
    }

    /// Operator labels find their button
    #[test]
    fn prop_operator_label_lookup(op in operation_strategy()) {
        let panel = ButtonPanel::default();
        let button = panel.get_by_label(op.symbol());
        prop_assert!(button.is_some());
        prop_assert_eq!(button.unwrap().action, ButtonAction::Operator(op));
    }

    /// Every button carries the shared button class
    #[test]
    fn prop_every_button_has_btn_class(action in action_strategy()) {
        let panel = ButtonPanel::default();
        let button = panel.get_by_id(&action.element_id()).unwrap();
        prop_assert!(button.classes.iter().any(|c| c == "btn"));
    }
}

// ===== Page behavior =====

proptest! {
    /// The output is either a number or the error marker after any click
    #[test]
    fn prop_output_is_number_or_error(
        a in raw_input_strategy(),
        b in raw_input_strategy(),
        op in operation_strategy(),
    ) {
        let mut driver = WasmDriver::new();
        let text = driver.calculate(a.as_deref(), b.as_deref(), op);
        let numeric = a.as_deref().is_some_and(|s| !s.is_empty())
            && b.as_deref().is_some_and(|s| !s.is_empty());
        if numeric {
            prop_assert!(text.parse::<f64>().is_ok() || text.ends_with("Infinity") || text == "NaN");
        } else {
            prop_assert_eq!(text, "error");
        }
    }

    /// Clear always leaves an empty page
    #[test]
    fn prop_clear_empties_page(
        a in raw_input_strategy(),
        b in raw_input_strategy(),
        op in operation_strategy(),
    ) {
        let mut driver = WasmDriver::new();
        driver.calculate(a.as_deref(), b.as_deref(), op);
        driver.clear();
        prop_assert_eq!(driver.first_value(), None);
        prop_assert_eq!(driver.second_value(), None);
        prop_assert_eq!(driver.output_text(), "");
    }

    /// The page shows exactly what the core calculator computes
    #[test]
    fn prop_page_matches_core(
        a in -1e6f64..1e6f64,
        b in -1e6f64..1e6f64,
        op in operation_strategy(),
    ) {
        let (ta, tb) = (a.to_string(), b.to_string());
        let expected = Calculator::new()
            .compute(op, Some(ta.as_str()), Some(tb.as_str()))
            .render("error");
        let mut driver = WasmDriver::new();
        prop_assert_eq!(driver.calculate(Some(ta.as_str()), Some(tb.as_str()), op), expected);
    }
}

// ===== Invariant tests =====

#[test]
fn invariant_panel_has_five_buttons() {
    assert_eq!(ButtonPanel::default().button_count(), 5);
}

#[test]
fn invariant_exactly_one_clear_button() {
    let panel = ButtonPanel::default();
    let clears = panel
        .buttons()
        .iter()
        .filter(|b| b.action == ButtonAction::Clear)
        .count();
    assert_eq!(clears, 1);
}
