//! Host-page generation.
//!
//! The controller contract requires a page carrying the five element
//! identifiers; this module generates that page and the module-loader
//! script as typed output. Errors here are developer-facing build
//! failures, never user-visible.

pub mod loader;
pub mod page;

pub use loader::{GeneratedLoader, LoaderBuilder, MAX_LOADER_LINES};
pub use page::{GeneratedPage, PageBuilder};

use thiserror::Error;

/// Result type for host-page generation
pub type PageResult<T> = Result<T, PageError>;

/// Host-page generation failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    /// The form's action attribute is empty
    #[error("form action must not be empty")]
    EmptyAction,
    /// Two element roles share the same id, making lookup ambiguous
    #[error("duplicate element id: {0}")]
    DuplicateId(String),
    /// The generated loader script exceeds the line ceiling
    #[error("loader exceeds {limit} line limit: {lines} lines")]
    LoaderTooLong {
        /// The enforced ceiling
        limit: usize,
        /// The actual line count
        lines: usize,
    },
    /// The embedder configuration could not be serialized into the loader
    #[error("config serialization failed: {0}")]
    ConfigSerialization(String),
}
