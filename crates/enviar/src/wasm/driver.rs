//! Mock-DOM driver: the controller wired to an in-memory page.
//!
//! `WasmDriver` dispatches events the way the browser glue does and keeps
//! the mock DOM in sync with the controller, so the full page behavior —
//! counter text, visibility flips, alerts, native submissions — is
//! observable in native tests.

use super::dom::{DomEvent, MockDom};
use super::form::WasmForm;
use crate::config::FormConfig;
use crate::core::SubmitOutcome;
use crate::driver::FormDriver;

/// Driver wrapping the form controller and a mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    /// The controller instance
    form: WasmForm,
    /// Mock DOM for testing
    dom: MockDom,
    /// Element identifiers and ceiling
    config: FormConfig,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver over the default page structure
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    /// Creates a driver with a custom configuration
    #[must_use]
    pub fn with_config(config: FormConfig) -> Self {
        Self {
            form: WasmForm::with_config(&config),
            dom: MockDom::with_config(&config),
            config,
        }
    }

    /// Returns a reference to the controller
    #[must_use]
    pub fn form(&self) -> &WasmForm {
        &self.form
    }

    /// Returns a mutable reference to the controller
    pub fn form_mut(&mut self) -> &mut WasmForm {
        &mut self.form
    }

    /// Returns a reference to the mock DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns a mutable reference to the mock DOM
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }

    /// Returns the configuration in use
    #[must_use]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Simulates typing into the prompt textarea
    ///
    /// Dispatches the input event, updates the controller, and refreshes
    /// the counter label — the same path the real input listener takes.
    pub fn type_prompt(&mut self, value: &str) {
        self.dom
            .dispatch_event(DomEvent::input(&self.config.prompt_id, value));
        self.form.set_prompt(value);
        self.sync_dom();
    }

    /// Simulates submitting the form
    ///
    /// On rejection the alert fires and nothing else changes; on
    /// acceptance the native submission is recorded and the UI
    /// transition applied.
    pub fn submit_form(&mut self) -> SubmitOutcome {
        self.dom
            .dispatch_event(DomEvent::submit(&self.config.form_id));
        let outcome = self.form.submit();

        match &outcome {
            SubmitOutcome::Accepted => {
                self.dom.record_native_submission(&self.config.form_id);
            }
            SubmitOutcome::Rejected(err) => {
                self.dom.alert(&err.to_string());
            }
        }

        self.sync_dom();
        outcome
    }

    /// Simulates clicking the submit button
    ///
    /// A button click inside a form triggers the form's submit event.
    pub fn click_submit(&mut self) -> SubmitOutcome {
        self.dom
            .dispatch_event(DomEvent::click(&self.config.submit_id));
        self.submit_form()
    }

    /// Synchronizes the mock DOM with the controller state
    fn sync_dom(&mut self) {
        self.dom
            .set_element_text(&self.config.counter_id, &self.form.counter_text());

        let phase = self.form.phase();
        self.dom
            .set_visible(&self.config.form_id, phase.form_visible());
        self.dom
            .set_visible(&self.config.loading_id, phase.loading_visible());
        self.dom
            .set_disabled(&self.config.submit_id, !phase.submit_enabled());
    }

    /// Gets the counter label's text
    #[must_use]
    pub fn counter_element_text(&self) -> Option<&str> {
        self.dom.get_element_text(&self.config.counter_id)
    }
}

impl FormDriver for WasmDriver {
    fn enter_prompt(&mut self, value: &str) {
        self.type_prompt(value);
    }

    fn submit(&mut self) -> SubmitOutcome {
        self.submit_form()
    }

    fn counter_text(&self) -> String {
        self.counter_element_text().unwrap_or_default().to_string()
    }

    fn form_visible(&self) -> bool {
        self.dom.is_visible(&self.config.form_id)
    }

    fn loading_visible(&self) -> bool {
        self.dom.is_visible(&self.config.loading_id)
    }

    fn submit_enabled(&self) -> bool {
        !self.dom.is_disabled(&self.config.submit_id)
    }

    fn last_alert(&self) -> Option<String> {
        self.dom.alerts().last().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValidationError;
    use crate::driver::{
        run_full_specification, verify_boundary_acceptance, verify_counter_after_submission,
        verify_counter_mirror, verify_empty_rejection, verify_too_long_rejection,
        verify_typical_acceptance,
    };

    // ===== Constructor tests =====

    #[test]
    fn test_wasm_driver_new() {
        let driver = WasmDriver::new();
        assert!(driver.form_visible());
        assert!(!driver.loading_visible());
        assert!(driver.submit_enabled());
        assert_eq!(driver.counter_text(), "0");
    }

    #[test]
    fn test_wasm_driver_default() {
        let driver = WasmDriver::default();
        assert!(driver.last_alert().is_none());
    }

    #[test]
    fn test_wasm_driver_with_config() {
        let config = FormConfig::builder()
            .prompt_id("story")
            .max_prompt_chars(10)
            .build();
        let mut driver = WasmDriver::with_config(config);
        driver.enter_prompt("well over ten chars");
        assert!(matches!(
            driver.submit(),
            SubmitOutcome::Rejected(ValidationError::TooLong { max_chars: 10 })
        ));
    }

    #[test]
    fn test_wasm_driver_debug() {
        let driver = WasmDriver::new();
        assert!(format!("{:?}", driver).contains("WasmDriver"));
    }

    // ===== Access tests =====

    #[test]
    fn test_form_access() {
        let mut driver = WasmDriver::new();
        driver.form_mut().set_prompt("direct");
        assert_eq!(driver.form().prompt(), "direct");
    }

    #[test]
    fn test_dom_access() {
        let mut driver = WasmDriver::new();
        driver.dom_mut().set_element_text("charCount", "99");
        assert_eq!(driver.dom().get_element_text("charCount"), Some("99"));
    }

    #[test]
    fn test_config_access() {
        let driver = WasmDriver::new();
        assert_eq!(driver.config().form_id, "videoForm");
    }

    // ===== Typing tests =====

    #[test]
    fn test_type_prompt_updates_textarea_and_counter() {
        let mut driver = WasmDriver::new();
        driver.type_prompt("a sunset");
        assert_eq!(driver.dom().get_element_text("prompt"), Some("a sunset"));
        assert_eq!(driver.counter_element_text(), Some("8"));
    }

    #[test]
    fn test_type_prompt_per_keystroke() {
        let mut driver = WasmDriver::new();
        driver.type_prompt("a");
        assert_eq!(driver.counter_text(), "1");
        driver.type_prompt("ab");
        assert_eq!(driver.counter_text(), "2");
        driver.type_prompt("");
        assert_eq!(driver.counter_text(), "0");
    }

    // ===== Submission tests =====

    #[test]
    fn test_submit_empty_alerts_and_blocks() {
        let mut driver = WasmDriver::new();
        let outcome = driver.submit_form();
        assert!(!outcome.is_accepted());
        assert_eq!(
            driver.dom().alerts(),
            &["Please provide a video prompt".to_string()]
        );
        assert!(driver.dom().native_submissions().is_empty());
        assert!(driver.form_visible());
        assert!(!driver.loading_visible());
        assert!(driver.submit_enabled());
    }

    #[test]
    fn test_submit_too_long_alerts_and_blocks() {
        let mut driver = WasmDriver::new();
        driver.type_prompt(&"x".repeat(501));
        driver.submit_form();
        assert_eq!(
            driver.last_alert().as_deref(),
            Some("Prompt is too long (max 500 characters)")
        );
        assert!(driver.dom().native_submissions().is_empty());
    }

    #[test]
    fn test_submit_accepted_transitions_and_proceeds() {
        let mut driver = WasmDriver::new();
        driver.type_prompt("Generate a sunset");
        let outcome = driver.submit_form();
        assert!(outcome.is_accepted());
        assert_eq!(driver.dom().native_submissions(), &["videoForm".to_string()]);
        assert!(!driver.form_visible());
        assert!(driver.loading_visible());
        assert!(!driver.submit_enabled());
        assert!(driver.dom().alerts().is_empty());
    }

    #[test]
    fn test_click_submit_goes_through_form() {
        let mut driver = WasmDriver::new();
        driver.type_prompt("a storm over the sea");
        let outcome = driver.click_submit();
        assert!(outcome.is_accepted());
        let events = driver.dom().event_history();
        assert!(events.iter().any(|e| matches!(e, DomEvent::Click { .. })));
        assert!(events.iter().any(|e| matches!(e, DomEvent::Submit { .. })));
    }

    #[test]
    fn test_rejected_submit_still_dispatches_event() {
        let mut driver = WasmDriver::new();
        driver.submit_form();
        assert!(driver
            .dom()
            .event_history()
            .iter()
            .any(|e| matches!(e, DomEvent::Submit { .. })));
    }

    #[test]
    fn test_transition_never_reverses() {
        let mut driver = WasmDriver::new();
        driver.type_prompt("Generate a sunset");
        driver.submit_form();
        driver.type_prompt("");
        driver.submit_form();
        // The failed later submit alerts but leaves the transition in place
        assert!(driver.loading_visible());
        assert!(!driver.form_visible());
        assert_eq!(
            driver.last_alert().as_deref(),
            Some("Please provide a video prompt")
        );
    }

    // ===== Unified specification tests =====

    #[test]
    fn test_unified_counter_mirror_mock_dom() {
        let mut driver = WasmDriver::new();
        verify_counter_mirror(&mut driver);
    }

    #[test]
    fn test_unified_empty_rejection_mock_dom() {
        let mut driver = WasmDriver::new();
        verify_empty_rejection(&mut driver);
    }

    #[test]
    fn test_unified_too_long_rejection_mock_dom() {
        let mut driver = WasmDriver::new();
        verify_too_long_rejection(&mut driver);
    }

    #[test]
    fn test_unified_boundary_acceptance_mock_dom() {
        let mut driver = WasmDriver::new();
        verify_boundary_acceptance(&mut driver);
    }

    #[test]
    fn test_unified_typical_acceptance_mock_dom() {
        let mut driver = WasmDriver::new();
        verify_typical_acceptance(&mut driver);
    }

    #[test]
    fn test_unified_counter_after_submission_mock_dom() {
        let mut driver = WasmDriver::new();
        verify_counter_after_submission(&mut driver);
    }

    #[test]
    fn test_full_specification_mock_dom() {
        run_full_specification::<WasmDriver>();
    }
}
