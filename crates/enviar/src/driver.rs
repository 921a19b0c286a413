//! Unified form driver: write the behavior checks once, run them against
//! any stack.
//!
//! [`FormDriver`] abstracts over the pure controller, the mock-DOM harness,
//! and any future real-browser driver; the `verify_*` functions below are
//! the reusable behavior contract they all must satisfy.

use crate::core::{SubmitOutcome, ValidationError};

/// Abstract driver trait for form interactions
///
/// # Example
///
/// ```rust,ignore
/// fn verify<D: FormDriver>(driver: &mut D) {
///     driver.enter_prompt("Generate a sunset");
///     assert!(driver.submit().is_accepted());
///     assert!(driver.loading_visible());
/// }
/// ```
pub trait FormDriver {
    /// Types a value into the prompt field (fires the input-change handler)
    fn enter_prompt(&mut self, value: &str);

    /// Attempts to submit the form, returning the validation outcome
    fn submit(&mut self) -> SubmitOutcome;

    /// The current counter label text
    fn counter_text(&self) -> String;

    /// Whether the form is visible
    fn form_visible(&self) -> bool;

    /// Whether the loading indicator is visible
    fn loading_visible(&self) -> bool;

    /// Whether the submit button is enabled
    fn submit_enabled(&self) -> bool;

    /// The most recent blocking alert message, if any
    fn last_alert(&self) -> Option<String>;
}

// ===== Unified behavior specifications =====
// These checks work with ANY FormDriver implementation.

/// Verifies the counter mirrors the raw prompt length
pub fn verify_counter_mirror<D: FormDriver>(driver: &mut D) {
    driver.enter_prompt("");
    assert_eq!(driver.counter_text(), "0");

    driver.enter_prompt("Generate a sunset");
    assert_eq!(driver.counter_text(), "17");

    // Raw length: surrounding whitespace counts
    driver.enter_prompt("  hi  ");
    assert_eq!(driver.counter_text(), "6");
}

/// Verifies empty and whitespace-only prompts are rejected with no UI change
pub fn verify_empty_rejection<D: FormDriver>(driver: &mut D) {
    for raw in ["", "   "] {
        driver.enter_prompt(raw);
        let outcome = driver.submit();
        assert_eq!(outcome, SubmitOutcome::Rejected(ValidationError::Empty));
        assert_eq!(
            driver.last_alert().as_deref(),
            Some("Please provide a video prompt")
        );
        assert!(driver.form_visible());
        assert!(!driver.loading_visible());
        assert!(driver.submit_enabled());
    }
}

/// Verifies an over-length prompt is rejected with no UI change
pub fn verify_too_long_rejection<D: FormDriver>(driver: &mut D) {
    driver.enter_prompt(&"x".repeat(501));
    let outcome = driver.submit();
    assert!(matches!(
        outcome,
        SubmitOutcome::Rejected(ValidationError::TooLong { .. })
    ));
    assert_eq!(
        driver.last_alert().as_deref(),
        Some("Prompt is too long (max 500 characters)")
    );
    assert!(driver.form_visible());
    assert!(!driver.loading_visible());
    assert!(driver.submit_enabled());
}

/// Verifies a prompt of exactly the ceiling length is accepted
pub fn verify_boundary_acceptance<D: FormDriver>(driver: &mut D) {
    driver.enter_prompt(&"x".repeat(500));
    assert!(driver.submit().is_accepted());
    assert!(!driver.form_visible());
    assert!(driver.loading_visible());
    assert!(!driver.submit_enabled());
}

/// Verifies a typical prompt is accepted with the full UI transition
pub fn verify_typical_acceptance<D: FormDriver>(driver: &mut D) {
    driver.enter_prompt("Generate a sunset");
    assert!(driver.submit().is_accepted());
    assert!(!driver.form_visible());
    assert!(driver.loading_visible());
    assert!(!driver.submit_enabled());
}

/// Verifies the counter keeps working after a passing submission
pub fn verify_counter_after_submission<D: FormDriver>(driver: &mut D) {
    driver.enter_prompt("Generate a sunset");
    assert!(driver.submit().is_accepted());

    driver.enter_prompt("abc");
    assert_eq!(driver.counter_text(), "3");

    // The transition never reverses
    assert!(driver.loading_visible());
    assert!(!driver.submit_enabled());
}

/// Complete behavior contract - runs every specification on a fresh driver
pub fn run_full_specification<D: FormDriver + Default>() {
    let mut driver = D::default();
    verify_counter_mirror(&mut driver);

    let mut driver = D::default();
    verify_empty_rejection(&mut driver);

    let mut driver = D::default();
    verify_too_long_rejection(&mut driver);

    let mut driver = D::default();
    verify_boundary_acceptance(&mut driver);

    let mut driver = D::default();
    verify_typical_acceptance(&mut driver);

    let mut driver = D::default();
    verify_counter_after_submission(&mut driver);
}

/// Pure-controller driver: [`FormDriver`] over [`WasmForm`] alone
///
/// The UI bits come straight from the phase; no DOM is involved. This is
/// the minimal implementation every other driver must agree with.
#[derive(Debug, Default)]
pub struct ControllerDriver {
    form: crate::wasm::WasmForm,
}

impl ControllerDriver {
    /// Creates a new pure-controller driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the underlying controller
    #[must_use]
    pub fn form(&self) -> &crate::wasm::WasmForm {
        &self.form
    }
}

impl FormDriver for ControllerDriver {
    fn enter_prompt(&mut self, value: &str) {
        self.form.set_prompt(value);
    }

    fn submit(&mut self) -> SubmitOutcome {
        self.form.submit()
    }

    fn counter_text(&self) -> String {
        self.form.counter_text()
    }

    fn form_visible(&self) -> bool {
        self.form.phase().form_visible()
    }

    fn loading_visible(&self) -> bool {
        self.form.phase().loading_visible()
    }

    fn submit_enabled(&self) -> bool {
        self.form.phase().submit_enabled()
    }

    fn last_alert(&self) -> Option<String> {
        self.form.last_alert().map(ToString::to_string)
    }
}
