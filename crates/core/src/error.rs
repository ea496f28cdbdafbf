//! Error types for keyed-defaults
//!
//! Absence and type mismatch are never errors: they resolve through the
//! default-value policy. What remains here are programming errors (a caller
//! broke a static contract) and ambient failures such as reading a config file.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::contract::UrlError;
use std::io;
use thiserror::Error;

/// Result type alias for keyed-defaults operations
pub type DefaultsResult<T> = std::result::Result<T, DefaultsError>;

/// Error types for keyed-defaults
#[derive(Debug, Error)]
pub enum DefaultsError {
    /// I/O error (config file access)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Encoding a value for archival failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A caller broke a static contract of the facade
    #[error("Contract violation on key '{key}': {reason}")]
    Contract {
        /// Key the write was addressed to
        key: String,
        /// What was violated
        reason: String,
    },

    /// A dynamically-typed value has no stored representation
    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),

    /// A string could not be parsed as a URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] UrlError),

    /// Configuration could not be parsed or is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DefaultsError {
    /// Build a contract violation for `key`
    pub fn contract(key: impl Into<String>, reason: impl Into<String>) -> Self {
        DefaultsError::Contract {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// True for errors that signal a caller bug rather than an environment failure
    pub fn is_programming_error(&self) -> bool {
        matches!(
            self,
            DefaultsError::Contract { .. } | DefaultsError::UnsupportedValue(_)
        )
    }
}

impl From<bincode::Error> for DefaultsError {
    fn from(e: bincode::Error) -> Self {
        DefaultsError::Serialization(e.to_string())
    }
}

impl From<rmp_serde::encode::Error> for DefaultsError {
    fn from(e: rmp_serde::encode::Error) -> Self {
        DefaultsError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for DefaultsError {
    fn from(e: toml::de::Error) -> Self {
        DefaultsError::Config(e.to_string())
    }
}
