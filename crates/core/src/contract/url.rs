//! URL type
//!
//! Stores keep URLs as plain strings. `Url` is the typed view the facade hands
//! out: a string that parsed as an absolute URL.
//!
//! ## Validation
//!
//! A URL must:
//! - Be non-empty
//! - Start with a scheme: an ASCII letter followed by letters, digits, `+`, `-` or `.`
//! - Have a `:` after the scheme
//! - Contain no whitespace
//!
//! Anything past the scheme is kept verbatim; there is no normalization.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error when parsing a URL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// Input is empty
    #[error("URL cannot be empty")]
    Empty,
    /// No `scheme:` prefix
    #[error("URL has no scheme")]
    MissingScheme,
    /// Scheme contains a character outside `[A-Za-z0-9+.-]` or starts with a non-letter
    #[error("invalid character '{char}' in URL scheme at position {position}")]
    InvalidScheme {
        /// The invalid character
        char: char,
        /// Byte position of the invalid character
        position: usize,
    },
    /// Whitespace anywhere in the URL
    #[error("whitespace in URL at position {position}")]
    Whitespace {
        /// Byte position of the whitespace
        position: usize,
    },
}

/// Absolute URL
///
/// ## Examples
///
/// Valid:
/// - "https://example.com/path"
/// - "file:///tmp/cache"
/// - "mailto:someone@example.com"
///
/// Invalid:
/// - "" (empty)
/// - "example.com" (no scheme)
/// - "1http://x" (scheme starts with a digit)
/// - "https://exa mple.com" (whitespace)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Url(String);

impl Url {
    /// Parse a URL, validating the input
    ///
    /// # Errors
    ///
    /// Returns `UrlError` if the string is not an absolute URL.
    pub fn parse(input: impl Into<String>) -> Result<Self, UrlError> {
        let input = input.into();
        Self::validate(&input)?;
        Ok(Url(input))
    }

    /// Validate a URL string
    pub fn validate(input: &str) -> Result<(), UrlError> {
        if input.is_empty() {
            return Err(UrlError::Empty);
        }

        if let Some((position, _)) = input.char_indices().find(|(_, c)| c.is_whitespace()) {
            return Err(UrlError::Whitespace { position });
        }

        let colon = input.find(':').ok_or(UrlError::MissingScheme)?;
        if colon == 0 {
            return Err(UrlError::MissingScheme);
        }

        for (position, ch) in input[..colon].char_indices() {
            let valid = if position == 0 {
                ch.is_ascii_alphabetic()
            } else {
                ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.')
            };
            if !valid {
                return Err(UrlError::InvalidScheme { char: ch, position });
            }
        }

        Ok(())
    }

    /// Scheme, as written (no lowercasing)
    pub fn scheme(&self) -> &str {
        // validated: a ':' exists past position 0
        self.0.split(':').next().unwrap_or_default()
    }

    /// Get the URL as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Url {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Url::parse(s)
    }
}

impl TryFrom<String> for Url {
    type Error = UrlError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Url::parse(s)
    }
}

impl From<Url> for String {
    fn from(url: Url) -> Self {
        url.0
    }
}

impl AsRef<str> for Url {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
