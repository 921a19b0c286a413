//! Pure controller state for the prompt form.
//!
//! `WasmForm` holds everything the page-side controller knows — the raw
//! prompt value, the lifecycle phase, and the most recent alert — with no
//! browser dependencies, so the full submit behavior tests natively.

use crate::config::FormConfig;
use crate::core::{
    counter_text, prompt_char_count, FormPhase, FormSnapshot, PromptValidator, SubmitOutcome,
};

/// Browser-ready form controller state
#[derive(Debug, Clone)]
pub struct WasmForm {
    /// Prompt validator with the configured ceiling
    validator: PromptValidator,
    /// Raw (untrimmed) prompt value, mirroring the textarea
    prompt: String,
    /// Current lifecycle phase
    phase: FormPhase,
    /// Most recent blocking alert message
    last_alert: Option<String>,
}

impl Default for WasmForm {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmForm {
    /// Creates a controller with the default 500-character ceiling
    #[must_use]
    pub fn new() -> Self {
        Self {
            validator: PromptValidator::new(),
            prompt: String::new(),
            phase: FormPhase::Editing,
            last_alert: None,
        }
    }

    /// Creates a controller configured from a [`FormConfig`]
    #[must_use]
    pub fn with_config(config: &FormConfig) -> Self {
        Self {
            validator: PromptValidator::with_max_chars(config.max_prompt_chars),
            prompt: String::new(),
            phase: FormPhase::Editing,
            last_alert: None,
        }
    }

    /// Sets the raw prompt value (the input-change handler)
    pub fn set_prompt(&mut self, value: &str) {
        self.prompt = value.to_string();
    }

    /// Returns the raw prompt value
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the character count of the raw prompt value
    #[must_use]
    pub fn char_count(&self) -> usize {
        prompt_char_count(&self.prompt)
    }

    /// Returns the counter label text for the current prompt value
    #[must_use]
    pub fn counter_text(&self) -> String {
        counter_text(&self.prompt)
    }

    /// Returns the current lifecycle phase
    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Returns the most recent blocking alert message, if any
    #[must_use]
    pub fn last_alert(&self) -> Option<&str> {
        self.last_alert.as_deref()
    }

    /// Handles one submit attempt
    ///
    /// On acceptance the phase transition fires (a no-op when already
    /// submitting); on rejection the alert message is recorded and no
    /// other state changes.
    pub fn submit(&mut self) -> SubmitOutcome {
        match self.validator.validate(&self.prompt) {
            Ok(_) => {
                self.phase.begin_submission();
                SubmitOutcome::Accepted
            }
            Err(err) => {
                self.last_alert = Some(err.to_string());
                SubmitOutcome::Rejected(err)
            }
        }
    }

    /// Returns a snapshot of the controller state
    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            prompt: self.prompt.clone(),
            char_count: self.char_count(),
            phase: self.phase,
            last_alert: self.last_alert.clone(),
        }
    }

    /// Returns the controller state as JSON (for WASM interop)
    #[must_use]
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }
}
