//! Submission state machine and controller snapshots.
//!
//! The three post-validation UI bits (form hidden, loading visible, submit
//! disabled) all derive from one two-phase state, so a half-transitioned
//! page is unrepresentable.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// The form's lifecycle phase
///
/// The transition is one-way: once a submission has passed validation the
/// form stays in [`FormPhase::Submitting`] for the rest of the page's life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormPhase {
    /// User is editing the prompt; form visible, submit enabled
    #[default]
    Editing,
    /// Validation has passed; form hidden, loading visible, submit disabled
    Submitting,
}

impl FormPhase {
    /// Enters the submitting phase
    ///
    /// Returns `true` if the transition fired, `false` if the form was
    /// already submitting (re-entry is a no-op).
    pub fn begin_submission(&mut self) -> bool {
        match self {
            Self::Editing => {
                *self = Self::Submitting;
                true
            }
            Self::Submitting => false,
        }
    }

    /// Whether the form element is visible in this phase
    #[must_use]
    pub const fn form_visible(&self) -> bool {
        matches!(self, Self::Editing)
    }

    /// Whether the loading indicator is visible in this phase
    #[must_use]
    pub const fn loading_visible(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Whether the submit button is enabled in this phase
    #[must_use]
    pub const fn submit_enabled(&self) -> bool {
        matches!(self, Self::Editing)
    }

    /// Whether a submission has passed validation
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// The result of one submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; the native submission proceeds
    Accepted,
    /// Validation failed; the default action is cancelled and the alert shown
    Rejected(ValidationError),
}

impl SubmitOutcome {
    /// Whether the native submission was allowed to proceed
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The blocking alert message for a rejection, if any
    #[must_use]
    pub fn alert_message(&self) -> Option<String> {
        match self {
            Self::Accepted => None,
            Self::Rejected(err) => Some(err.to_string()),
        }
    }
}

/// A serializable snapshot of controller state
///
/// Exposed through `WasmForm::state_json` so embedders and test harnesses
/// can inspect the controller without reaching into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    /// Raw (untrimmed) prompt value
    pub prompt: String,
    /// Character count of the raw value
    pub char_count: usize,
    /// Current lifecycle phase
    pub phase: FormPhase,
    /// Most recent blocking alert message, if a submit was rejected
    pub last_alert: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== FormPhase tests =====

    #[test]
    fn test_phase_default_is_editing() {
        assert_eq!(FormPhase::default(), FormPhase::Editing);
    }

    #[test]
    fn test_phase_editing_ui_bits() {
        let phase = FormPhase::Editing;
        assert!(phase.form_visible());
        assert!(!phase.loading_visible());
        assert!(phase.submit_enabled());
        assert!(!phase.is_submitting());
    }

    #[test]
    fn test_phase_submitting_ui_bits() {
        let phase = FormPhase::Submitting;
        assert!(!phase.form_visible());
        assert!(phase.loading_visible());
        assert!(!phase.submit_enabled());
        assert!(phase.is_submitting());
    }

    #[test]
    fn test_begin_submission_fires_once() {
        let mut phase = FormPhase::Editing;
        assert!(phase.begin_submission());
        assert_eq!(phase, FormPhase::Submitting);
    }

    #[test]
    fn test_begin_submission_reentry_noop() {
        let mut phase = FormPhase::Submitting;
        assert!(!phase.begin_submission());
        assert_eq!(phase, FormPhase::Submitting);
    }

    #[test]
    fn test_loading_visible_iff_submitting() {
        // The page-lifetime invariant: loading shows exactly when a
        // submission has passed validation.
        for phase in [FormPhase::Editing, FormPhase::Submitting] {
            assert_eq!(phase.loading_visible(), phase.is_submitting());
            assert_eq!(phase.form_visible(), !phase.is_submitting());
            assert_eq!(phase.submit_enabled(), !phase.is_submitting());
        }
    }

    #[test]
    fn test_phase_serde_round_trip() {
        let json = serde_json::to_string(&FormPhase::Submitting).unwrap();
        let back: FormPhase = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FormPhase::Submitting);
    }

    // ===== SubmitOutcome tests =====

    #[test]
    fn test_outcome_accepted() {
        let outcome = SubmitOutcome::Accepted;
        assert!(outcome.is_accepted());
        assert_eq!(outcome.alert_message(), None);
    }

    #[test]
    fn test_outcome_rejected_empty() {
        let outcome = SubmitOutcome::Rejected(ValidationError::Empty);
        assert!(!outcome.is_accepted());
        assert_eq!(
            outcome.alert_message(),
            Some("Please provide a video prompt".to_string())
        );
    }

    #[test]
    fn test_outcome_rejected_too_long() {
        let outcome = SubmitOutcome::Rejected(ValidationError::TooLong { max_chars: 500 });
        assert_eq!(
            outcome.alert_message(),
            Some("Prompt is too long (max 500 characters)".to_string())
        );
    }

    // ===== FormSnapshot tests =====

    #[test]
    fn test_snapshot_serde_round_trip() {
        let snapshot = FormSnapshot {
            prompt: "a sunset".to_string(),
            char_count: 8,
            phase: FormPhase::Editing,
            last_alert: None,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: FormSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_snapshot_json_fields() {
        let snapshot = FormSnapshot {
            prompt: String::new(),
            char_count: 0,
            phase: FormPhase::Editing,
            last_alert: Some("Please provide a video prompt".to_string()),
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"phase\":\"Editing\""));
        assert!(json.contains("\"char_count\":0"));
        assert!(json.contains("Please provide a video prompt"));
    }
}
