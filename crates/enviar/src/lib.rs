//! Enviar - WASM prompt-form controller
//!
//! A client-side controller for an AI video-generation page: it mirrors a
//! textarea's length into a counter label, validates the prompt before
//! submission (non-empty after trimming, at most 500 characters), and
//! applies a one-way UI transition (hide form, show loading indicator,
//! disable submit) once validation passes.
//!
//! The core logic and the mock-DOM harness are browser-free, so every
//! behavior tests natively; real `web-sys` bindings sit behind the `wasm`
//! feature.
//!
//! # Example
//!
//! ```rust
//! use enviar::prelude::*;
//!
//! let mut driver = WasmDriver::new();
//!
//! // Typing mirrors into the counter label
//! driver.type_prompt("Generate a sunset");
//! assert_eq!(driver.counter_element_text(), Some("17"));
//!
//! // A valid submit proceeds natively and flips the page into loading
//! assert!(driver.submit_form().is_accepted());
//! assert!(driver.dom().is_visible("loadingState"));
//! assert!(driver.dom().is_disabled("generateBtn"));
//! ```

// Allow common test patterns
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod web;

/// WASM module - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{FormConfig, FormConfigBuilder};
    pub use crate::core::{
        counter_text, prompt_char_count, FormPhase, FormResult, FormSnapshot, PromptValidator,
        SubmitOutcome, ValidatedPrompt, ValidationError, MAX_PROMPT_CHARS,
    };
    pub use crate::driver::{ControllerDriver, FormDriver};
    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmDriver, WasmForm};
    pub use crate::web::{GeneratedLoader, GeneratedPage, LoaderBuilder, PageBuilder, PageError};
}
