//! Error types for game data loading.

use thiserror::Error;

/// Errors that can occur when loading class or enemy data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// A class or enemy kind has no definition.
    #[error("No definition for '{0}'")]
    MissingDefinition(String),
}
