//! Browser bindings
//!
//! Binds [`WasmCalculator`] to the live page: one click listener per button,
//! one change listener per input. The DOM text is written once per click.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, HtmlElement, HtmlInputElement};

use super::buttons::{ButtonAction, ButtonPanel};
use super::calculator::WasmCalculator;
use crate::config::UiConfig;
use crate::core::Operation;

/// Handles on the page elements the calculator reads and writes
#[derive(Debug, Clone)]
struct Page {
    first: HtmlInputElement,
    second: HtmlInputElement,
    output: HtmlElement,
}

impl Page {
    fn lookup(document: &Document, config: &UiConfig) -> Result<Self, JsValue> {
        Ok(Self {
            first: element_as(document, &config.first_input_id)?,
            second: element_as(document, &config.second_input_id)?,
            output: element_as(document, &config.output_id)?,
        })
    }

    /// Reads both inputs, performs `action`, writes the page back
    fn run(&self, calc: &mut WasmCalculator, action: ButtonAction) -> String {
        match action {
            ButtonAction::Operator(op) => {
                calc.set_first(Some(self.first.value().as_str()));
                calc.set_second(Some(self.second.value().as_str()));
                if let Err(e) = calc.apply(op) {
                    tracing::debug!(error = %e, "click produced the error marker");
                }
            }
            ButtonAction::Clear => {
                calc.clear();
                self.first.set_value("");
                self.second.set_value("");
            }
        }
        let text = calc.output_display();
        self.output.set_text_content(Some(text.as_str()));
        text
    }
}

thread_local! {
    /// Calculator installed by [`start`], shared with later JS handles
    static MOUNTED: RefCell<Option<(Rc<RefCell<WasmCalculator>>, Page)>> =
        const { RefCell::new(None) };
}

fn element_as<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{id} not found")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} has the wrong type")))
}

/// Calculator mounted on the live page
#[wasm_bindgen]
pub struct BrowserCalculator {
    state: Rc<RefCell<WasmCalculator>>,
    page: Page,
    listeners: Vec<Closure<dyn FnMut()>>,
}

impl fmt::Debug for BrowserCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserCalculator")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Handle on the page calculator
    ///
    /// Attaches to the calculator `start` already mounted instead of adding a
    /// second set of listeners. Mounts with the default layout otherwise.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<BrowserCalculator, JsValue> {
        match Self::attached() {
            Some(handle) => Ok(handle),
            None => Self::mount(UiConfig::default()),
        }
    }

    /// Mounts using a JSON config
    ///
    /// Always installs its own listeners, so use it on a page where `start`
    /// is not mounted on the same elements.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<BrowserCalculator, JsValue> {
        let config = UiConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::mount(config)
    }

    /// Current output text
    #[wasm_bindgen(getter)]
    pub fn output(&self) -> String {
        self.state.borrow().output_display()
    }

    /// Applies the operator labelled `symbol` and returns the output text
    pub fn apply(&self, symbol: &str) -> Result<String, JsValue> {
        let op = Operation::from_symbol(symbol)
            .ok_or_else(|| JsValue::from_str(&format!("unknown operator {symbol:?}")))?;
        Ok(self
            .page
            .run(&mut self.state.borrow_mut(), ButtonAction::Operator(op)))
    }

    /// Clears both inputs and the output
    pub fn clear(&self) {
        self.page.run(&mut self.state.borrow_mut(), ButtonAction::Clear);
    }
}

impl BrowserCalculator {
    /// Handle sharing the state of the detached calculator, if any
    fn attached() -> Option<Self> {
        MOUNTED.with(|mounted| {
            mounted.borrow().as_ref().map(|(state, page)| Self {
                state: Rc::clone(state),
                page: page.clone(),
                listeners: Vec::new(),
            })
        })
    }

    /// Looks up the page elements and installs the listeners
    pub fn mount(config: UiConfig) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let page = Page::lookup(&document, &config)?;
        let state = Rc::new(RefCell::new(WasmCalculator::with_config(config.clone())));
        let mut listeners = Vec::new();

        for button in ButtonPanel::new(&config).buttons() {
            let target: HtmlElement = element_as(&document, &button.id)?;
            let action = button.action;
            let state = Rc::clone(&state);
            let page = page.clone();
            let listener = Closure::<dyn FnMut()>::new(move || {
                page.run(&mut state.borrow_mut(), action);
            });
            target.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
            listeners.push(listener);
        }

        for (input, is_first) in [(page.first.clone(), true), (page.second.clone(), false)] {
            let state = Rc::clone(&state);
            let source = input.clone();
            let listener = Closure::<dyn FnMut()>::new(move || {
                let value = source.value();
                let mut calc = state.borrow_mut();
                if is_first {
                    calc.set_first(Some(value.as_str()));
                } else {
                    calc.set_second(Some(value.as_str()));
                }
            });
            input.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())?;
            listeners.push(listener);
        }

        Ok(Self {
            state,
            page,
            listeners,
        })
    }

    /// Keeps the listeners installed for the lifetime of the page
    ///
    /// The state stays reachable through [`BrowserCalculator::new`].
    pub fn detach(self) {
        MOUNTED.with(|mounted| {
            *mounted.borrow_mut() = Some((Rc::clone(&self.state), self.page.clone()));
        });
        for listener in self.listeners {
            listener.forget();
        }
    }
}

/// Entry point: mounts the calculator on page load
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    BrowserCalculator::mount(UiConfig::default())?.detach();
    console::log_1(&"calculator mounted".into());
    Ok(())
}
