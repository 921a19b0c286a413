//! Module-loader generation.
//!
//! The only script on the host page is the glue that loads the compiled
//! module and calls `attach`. It is generated here, never hand-written,
//! with a hard line ceiling enforced at build time.

use serde::{Deserialize, Serialize};

use super::{PageError, PageResult};
use crate::config::FormConfig;

/// Maximum allowed lines in the generated loader
pub const MAX_LOADER_LINES: usize = 8;

/// Generated module-loader output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedLoader {
    /// Loader script content (module body, without the script tag)
    pub content: String,
    /// Number of lines
    pub line_count: usize,
}

impl GeneratedLoader {
    /// Check if the loader is within the line ceiling
    #[must_use]
    pub fn within_limit(&self) -> bool {
        self.line_count <= MAX_LOADER_LINES
    }

    /// Render the loader as a `<script type="module">` tag
    #[must_use]
    pub fn as_script_tag(&self) -> String {
        format!("<script type=\"module\">\n{}\n</script>", self.content)
    }
}

/// Builder for the module loader
#[derive(Debug, Clone)]
pub struct LoaderBuilder {
    module_path: String,
    config: Option<FormConfig>,
}

impl LoaderBuilder {
    /// Creates a builder for the module at `module_path`
    #[must_use]
    pub fn new(module_path: &str) -> Self {
        Self {
            module_path: module_path.to_string(),
            config: None,
        }
    }

    /// Pass a configuration to the controller at attach time
    #[must_use]
    pub fn config(mut self, config: FormConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the loader
    ///
    /// # Errors
    ///
    /// Returns [`PageError::LoaderTooLong`] past the line ceiling, or
    /// [`PageError::ConfigSerialization`] when the configuration cannot
    /// be encoded.
    pub fn build(self) -> PageResult<GeneratedLoader> {
        let content = match &self.config {
            None => format!(
                "import init, {{ attach }} from '{path}';\nawait init();\nattach();",
                path = self.module_path
            ),
            Some(config) => {
                let json = serde_json::to_string(config)
                    .map_err(|e| PageError::ConfigSerialization(e.to_string()))?;
                format!(
                    "import init, {{ attach_with_config }} from '{path}';\nawait init();\nattach_with_config({json:?});",
                    path = self.module_path
                )
            }
        };

        let line_count = content.lines().count();
        if line_count > MAX_LOADER_LINES {
            return Err(PageError::LoaderTooLong {
                limit: MAX_LOADER_LINES,
                lines: line_count,
            });
        }

        Ok(GeneratedLoader {
            content,
            line_count,
        })
    }
}
