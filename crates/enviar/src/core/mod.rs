//! Core form logic: validation, counting, and the submission state machine.
//!
//! Everything in this module is pure and browser-free, so the whole
//! behavior of the page can be verified in native unit tests.

pub mod counter;
pub mod state;
pub mod validation;

pub use counter::{counter_text, prompt_char_count};
pub use state::{FormPhase, FormSnapshot, SubmitOutcome};
pub use validation::{PromptValidator, ValidatedPrompt, MAX_PROMPT_CHARS};

use thiserror::Error;

/// Result type for prompt validation
pub type FormResult<T> = Result<T, ValidationError>;

/// Validation failures surfaced to the user.
///
/// The `Display` output of each variant is the exact blocking message
/// shown in the browser alert.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Prompt is empty after trimming leading/trailing whitespace
    #[error("Please provide a video prompt")]
    Empty,
    /// Trimmed prompt exceeds the configured character ceiling
    #[error("Prompt is too long (max {max_chars} characters)")]
    TooLong {
        /// The ceiling that was exceeded
        max_chars: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== ValidationError tests =====

    #[test]
    fn test_validation_error_display_empty() {
        let err = ValidationError::Empty;
        assert_eq!(format!("{err}"), "Please provide a video prompt");
    }

    #[test]
    fn test_validation_error_display_too_long() {
        let err = ValidationError::TooLong {
            max_chars: MAX_PROMPT_CHARS,
        };
        assert_eq!(
            format!("{err}"),
            "Prompt is too long (max 500 characters)"
        );
    }

    #[test]
    fn test_validation_error_display_custom_ceiling() {
        let err = ValidationError::TooLong { max_chars: 120 };
        assert_eq!(
            format!("{err}"),
            "Prompt is too long (max 120 characters)"
        );
    }

    #[test]
    fn test_validation_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(ValidationError::Empty);
        assert!(err.to_string().contains("video prompt"));
    }

    #[test]
    fn test_validation_error_copy_eq() {
        let err = ValidationError::TooLong { max_chars: 500 };
        let copied = err;
        assert_eq!(err, copied);
        assert_ne!(err, ValidationError::Empty);
    }

    #[test]
    fn test_form_result_alias() {
        let ok: FormResult<u32> = Ok(7);
        let bad: FormResult<u32> = Err(ValidationError::Empty);
        assert!(ok.is_ok());
        assert!(bad.is_err());
    }
}
