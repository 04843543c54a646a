//! Browser-side calculator
//!
//! Everything except `browser` builds natively, so the page logic is tested
//! against a mock DOM without a browser.

#[cfg(feature = "wasm")]
mod browser;
mod buttons;
mod calculator;
mod dom;
mod driver;

#[cfg(feature = "wasm")]
pub use browser::{start, BrowserCalculator};
pub use buttons::{ButtonAction, ButtonDef, ButtonPanel};
pub use calculator::WasmCalculator;
pub use dom::{DomElement, DomEvent, MockDom};
pub use driver::WasmDriver;
