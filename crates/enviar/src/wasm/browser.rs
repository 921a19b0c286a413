//! Real-browser bindings for the form controller.
//!
//! Wires the two event listeners onto the host page. Each capability set
//! is wired independently: missing elements make that feature silently
//! inert, they never raise an error.

// Note: This module is conditionally compiled via #[cfg(feature = "wasm")] in mod.rs

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Event, HtmlButtonElement, HtmlElement, HtmlTextAreaElement};

use crate::config::FormConfig;
use crate::core::{counter_text, SubmitOutcome};
use crate::wasm::form::WasmForm;

/// Module entry point: runs once when the WASM module loads
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"enviar controller loaded".into());
}

/// Attaches the controller using the default element identifiers
///
/// # Errors
///
/// Returns an error when no window/document is available or a DOM call
/// fails; absent elements are not errors.
#[wasm_bindgen]
pub fn attach() -> Result<(), JsValue> {
    attach_controller(FormConfig::default())
}

/// Attaches the controller with a JSON-encoded [`FormConfig`]
///
/// # Errors
///
/// Returns an error for invalid JSON (to the embedder, never as a user
/// alert), or when a DOM call fails.
#[wasm_bindgen]
pub fn attach_with_config(json: &str) -> Result<(), JsValue> {
    let config = parse_config(json).map_err(|e| JsValue::from_str(&format!("invalid form config: {e}")))?;
    attach_controller(config)
}

/// Parses an embedder-supplied configuration string
fn parse_config(json: &str) -> Result<FormConfig, serde_json::Error> {
    serde_json::from_str(json)
}

fn attach_controller(config: FormConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let form = Rc::new(RefCell::new(WasmForm::with_config(&config)));

    let counter_wired = wire_counter(&document, &config)?;
    let submit_wired = wire_submit(&document, &config, &form)?;

    if counter_wired && submit_wired {
        console::log_1(&"enviar: counter and submit handlers attached".into());
    } else {
        console::warn_1(
            &format!("enviar: partial wiring (counter: {counter_wired}, submit: {submit_wired})")
                .into(),
        );
    }

    Ok(())
}

/// Looks up an element by id and casts it to the expected type
fn lookup<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Wires the character counter: {prompt field, counter display}
fn wire_counter(document: &Document, config: &FormConfig) -> Result<bool, JsValue> {
    let Some(textarea) = lookup::<HtmlTextAreaElement>(document, &config.prompt_id) else {
        return Ok(false);
    };
    let Some(counter) = document.get_element_by_id(&config.counter_id) else {
        return Ok(false);
    };

    let source = textarea.clone();
    let on_input = Closure::wrap(Box::new(move |_event: Event| {
        counter.set_text_content(Some(&counter_text(&source.value())));
    }) as Box<dyn FnMut(_)>);
    textarea.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    // Listener lives for the page lifetime
    on_input.forget();

    Ok(true)
}

/// Wires submit validation and the UI transition:
/// {form, loading indicator, submit button}
fn wire_submit(
    document: &Document,
    config: &FormConfig,
    form: &Rc<RefCell<WasmForm>>,
) -> Result<bool, JsValue> {
    let Some(form_el) = lookup::<HtmlElement>(document, &config.form_id) else {
        return Ok(false);
    };
    let Some(loading) = lookup::<HtmlElement>(document, &config.loading_id) else {
        return Ok(false);
    };
    let Some(button) = lookup::<HtmlButtonElement>(document, &config.submit_id) else {
        return Ok(false);
    };

    // The prompt field is not part of this capability set; when absent,
    // the handler validates the empty string and rejects.
    let textarea = lookup::<HtmlTextAreaElement>(document, &config.prompt_id);

    let state = Rc::clone(form);
    let form_style = form_el.style();
    let loading_style = loading.style();
    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        let value = textarea
            .as_ref()
            .map(HtmlTextAreaElement::value)
            .unwrap_or_default();

        let mut controller = state.borrow_mut();
        controller.set_prompt(&value);
        match controller.submit() {
            SubmitOutcome::Accepted => {
                // Native submission proceeds; apply the one-way transition
                let _ = form_style.set_property("display", "none");
                let _ = loading_style.set_property("display", "block");
                button.set_disabled(true);
            }
            SubmitOutcome::Rejected(err) => {
                event.prevent_default();
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(&err.to_string());
                }
            }
        }
    }) as Box<dyn FnMut(_)>);
    form_el.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    Ok(true)
}
