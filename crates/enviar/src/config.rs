//! Form controller configuration
//!
//! Carries the five host-page element identifiers and the prompt ceiling.
//! Defaults match the identifiers the host page ships with; embedders with
//! different markup override them through the builder or a JSON string at
//! attach time.

use serde::{Deserialize, Serialize};

use crate::core::MAX_PROMPT_CHARS;

/// Default id of the form element
pub const DEFAULT_FORM_ID: &str = "videoForm";
/// Default id of the loading indicator container
pub const DEFAULT_LOADING_ID: &str = "loadingState";
/// Default id of the submit button
pub const DEFAULT_SUBMIT_ID: &str = "generateBtn";
/// Default id of the prompt textarea
pub const DEFAULT_PROMPT_ID: &str = "prompt";
/// Default id of the character-count label
pub const DEFAULT_COUNTER_ID: &str = "charCount";

/// Configuration for the form controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Id of the form element
    pub form_id: String,
    /// Id of the loading indicator container
    pub loading_id: String,
    /// Id of the submit button
    pub submit_id: String,
    /// Id of the prompt textarea
    pub prompt_id: String,
    /// Id of the character-count label
    pub counter_id: String,
    /// Maximum prompt length in characters (after trimming)
    pub max_prompt_chars: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: DEFAULT_FORM_ID.to_string(),
            loading_id: DEFAULT_LOADING_ID.to_string(),
            submit_id: DEFAULT_SUBMIT_ID.to_string(),
            prompt_id: DEFAULT_PROMPT_ID.to_string(),
            counter_id: DEFAULT_COUNTER_ID.to_string(),
            max_prompt_chars: MAX_PROMPT_CHARS,
        }
    }
}

impl FormConfig {
    /// Creates a new builder
    #[must_use]
    pub fn builder() -> FormConfigBuilder {
        FormConfigBuilder::default()
    }

    /// Returns the five element ids in role order
    /// (form, loading, submit, prompt, counter)
    #[must_use]
    pub fn element_ids(&self) -> [&str; 5] {
        [
            &self.form_id,
            &self.loading_id,
            &self.submit_id,
            &self.prompt_id,
            &self.counter_id,
        ]
    }
}

/// Builder for [`FormConfig`]
#[derive(Debug, Clone, Default)]
pub struct FormConfigBuilder {
    config: FormConfig,
}

impl FormConfigBuilder {
    /// Set the form element id
    #[must_use]
    pub fn form_id(mut self, id: &str) -> Self {
        self.config.form_id = id.to_string();
        self
    }

    /// Set the loading indicator id
    #[must_use]
    pub fn loading_id(mut self, id: &str) -> Self {
        self.config.loading_id = id.to_string();
        self
    }

    /// Set the submit button id
    #[must_use]
    pub fn submit_id(mut self, id: &str) -> Self {
        self.config.submit_id = id.to_string();
        self
    }

    /// Set the prompt textarea id
    #[must_use]
    pub fn prompt_id(mut self, id: &str) -> Self {
        self.config.prompt_id = id.to_string();
        self
    }

    /// Set the character-count label id
    #[must_use]
    pub fn counter_id(mut self, id: &str) -> Self {
        self.config.counter_id = id.to_string();
        self
    }

    /// Set the maximum prompt length
    #[must_use]
    pub fn max_prompt_chars(mut self, max: usize) -> Self {
        self.config.max_prompt_chars = max;
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> FormConfig {
        self.config
    }
}
