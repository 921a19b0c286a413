//! Host-page generation for the prompt form.
//!
//! Produces the markup the controller wires onto: the form with its
//! textarea, counter label and submit button, plus the initially hidden
//! loading section. Only the two functional inline `display` properties
//! are emitted; styling stays out of scope.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{PageError, PageResult};
use crate::config::FormConfig;

/// Default endpoint the generated form posts to
pub const DEFAULT_FORM_ACTION: &str = "/generate";

/// Generated host-page output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPage {
    /// Document title
    pub title: String,
    /// Endpoint the form posts to
    pub form_action: String,
    /// Full HTML document
    pub content: String,
    /// The five element ids in role order
    pub element_ids: Vec<String>,
}

/// Builder for the host page
#[derive(Debug, Clone)]
pub struct PageBuilder {
    config: FormConfig,
    title: String,
    action: String,
    placeholder: String,
    loader_script: Option<String>,
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PageBuilder {
    /// Creates a builder with the default identifiers and action
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: FormConfig::default(),
            title: "AI Video Generator".to_string(),
            action: DEFAULT_FORM_ACTION.to_string(),
            placeholder: "Describe the video you want to generate".to_string(),
            loader_script: None,
        }
    }

    /// Use custom element identifiers
    #[must_use]
    pub fn config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the document title
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Set the endpoint the form posts to
    #[must_use]
    pub fn action(mut self, action: &str) -> Self {
        self.action = action.to_string();
        self
    }

    /// Set the textarea placeholder
    #[must_use]
    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    /// Embed a generated module-loader script at the end of the body
    #[must_use]
    pub fn loader(mut self, loader: &super::GeneratedLoader) -> Self {
        self.loader_script = Some(loader.as_script_tag());
        self
    }

    /// Build the page
    ///
    /// # Errors
    ///
    /// Returns [`PageError::EmptyAction`] for an empty form action, or
    /// [`PageError::DuplicateId`] when two element roles share an id.
    pub fn build(self) -> PageResult<GeneratedPage> {
        if self.action.is_empty() {
            return Err(PageError::EmptyAction);
        }

        let ids = self.config.element_ids();
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                return Err(PageError::DuplicateId(id.to_string()));
            }
        }

        let script = self.loader_script.as_deref().unwrap_or_default();
        let content = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
</head>
<body>
<form id="{form_id}" method="post" action="{action}">
<textarea id="{prompt_id}" name="prompt" rows="4" placeholder="{placeholder}"></textarea>
<span id="{counter_id}">0</span>
<button id="{submit_id}" type="submit">Generate Video</button>
</form>
<div id="{loading_id}" style="display:none">Generating your video, this may take a while</div>
{script}
</body>
</html>"#,
            title = self.title,
            form_id = self.config.form_id,
            action = self.action,
            prompt_id = self.config.prompt_id,
            placeholder = self.placeholder,
            counter_id = self.config.counter_id,
            submit_id = self.config.submit_id,
            loading_id = self.config.loading_id,
        );

        Ok(GeneratedPage {
            title: self.title,
            form_action: self.action,
            content,
            element_ids: self
                .config
                .element_ids()
                .iter()
                .map(ToString::to_string)
                .collect(),
        })
    }
}
