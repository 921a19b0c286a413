//! WASM frontend for the form controller.
//!
//! The controller state, mock DOM, and driver are always available so the
//! full page behavior tests natively; real browser bindings live behind
//! the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod form;

#[cfg(feature = "wasm")]
pub use browser::{attach, attach_with_config, init};
pub use dom::{DomElement, DomEvent, MockDom};
pub use driver::WasmDriver;
pub use form::WasmForm;
