//! Prompt validation: trim, then bounds-check the character count.
//!
//! Validation is the only gate between the textarea and native form
//! submission; everything downstream assumes a `ValidatedPrompt`.

use super::{FormResult, ValidationError};

/// Maximum prompt length in characters (counted after trimming)
pub const MAX_PROMPT_CHARS: usize = 500;

/// Validates prompt text before submission
///
/// A prompt passes when it is non-empty after trimming leading/trailing
/// whitespace and its trimmed length does not exceed the configured
/// character ceiling. Lengths are counted in Unicode scalar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptValidator {
    /// Maximum allowed trimmed length
    max_chars: usize,
}

impl Default for PromptValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptValidator {
    /// Creates a validator with the default 500-character ceiling
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_chars: MAX_PROMPT_CHARS,
        }
    }

    /// Creates a validator with a custom character ceiling
    #[must_use]
    pub const fn with_max_chars(max_chars: usize) -> Self {
        Self { max_chars }
    }

    /// Returns the configured character ceiling
    #[must_use]
    pub const fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Validates raw prompt text
    ///
    /// Returns the trimmed prompt on success, or the validation failure
    /// whose `Display` output is the user-facing blocking message.
    pub fn validate(&self, raw: &str) -> FormResult<ValidatedPrompt> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }

        let char_count = trimmed.chars().count();
        if char_count > self.max_chars {
            return Err(ValidationError::TooLong {
                max_chars: self.max_chars,
            });
        }

        Ok(ValidatedPrompt {
            text: trimmed.to_string(),
            char_count,
        })
    }
}

/// A prompt that has passed validation
///
/// Construction goes through [`PromptValidator::validate`] only, so holding
/// one proves the text is trimmed, non-empty, and within the ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPrompt {
    /// Trimmed prompt text
    text: String,
    /// Character count of the trimmed text
    char_count: usize,
}

impl ValidatedPrompt {
    /// Returns the trimmed prompt text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the character count of the trimmed text
    #[must_use]
    pub const fn char_count(&self) -> usize {
        self.char_count
    }

    /// Consumes the prompt, returning the trimmed text
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}
