//! Error types for the tabforge crate.

use thiserror::Error;

/// Errors that can occur when assembling or serializing a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A bulk column entry is missing a required key.
    #[error("column entry {index} is missing required key '{key}'")]
    MissingField {
        /// Zero-based position of the offending entry.
        index: usize,
        /// The absent key, `title` or `field`.
        key: &'static str,
    },

    /// An accumulated value has no JSON representation.
    ///
    /// Raised for stored render callbacks and non-finite floats. The key is
    /// the dotted path of the offending slot, e.g. `columns[2].formatter`.
    #[error("option '{key}' cannot be represented as JSON")]
    Unserializable {
        /// Dotted path of the offending option.
        key: String,
    },

    /// The JSON encoder itself failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
