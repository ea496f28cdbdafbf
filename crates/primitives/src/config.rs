//! Facade configuration via `defaults.toml`
//!
//! Two settings, both with defaults, so an empty or missing file is valid:
//! - `archive_codec`: blob format for archived values
//! - `contract_violation`: what the facade does when a caller breaks a
//!   static contract (panic or return the error)

use crate::archive::ArchiveCodec;
use defaults_core::{DefaultsError, DefaultsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Config file name conventionally placed next to the application's data.
pub const CONFIG_FILE_NAME: &str = "defaults.toml";

/// What the facade does with a programming error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationPolicy {
    /// Log and panic at the offending call
    Panic,
    /// Log and return the error to the caller
    Error,
}

impl Default for ViolationPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            ViolationPolicy::Panic
        } else {
            ViolationPolicy::Error
        }
    }
}

/// Facade configuration loaded from `defaults.toml`.
///
/// # Example
///
/// ```toml
/// archive_codec = "msgpack"
/// contract_violation = "error"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Codec for archived values: `"msgpack"` or `"bincode"`.
    #[serde(default)]
    pub archive_codec: ArchiveCodec,
    /// Contract violation policy: `"panic"` or `"error"`.
    /// Defaults to `"panic"` in debug builds and `"error"` in release builds.
    #[serde(default)]
    pub contract_violation: ViolationPolicy,
}

impl DefaultsConfig {
    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `DefaultsError::Config` on malformed TOML or unknown values.
    pub fn from_toml_str(content: &str) -> DefaultsResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read config from `path`, falling back to defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> DefaultsResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no defaults config, using built-in settings");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| {
            DefaultsError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# keyed-defaults configuration
#
# Blob format for archived values: "msgpack" (default) or "bincode"
archive_codec = "msgpack"

# On a contract violation (unencodable archive, unsupported dynamic value):
#   "panic" = log and panic at the call site (default in debug builds)
#   "error" = log and return the error (default in release builds)
# contract_violation = "error"
"#
    }

    /// Serialize this config and write it to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or the file cannot be written.
    pub fn write_to_file(&self, path: &Path) -> DefaultsResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DefaultsError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Same config with another archive codec
    pub fn with_archive_codec(mut self, codec: ArchiveCodec) -> Self {
        self.archive_codec = codec;
        self
    }

    /// Same config with another violation policy
    pub fn with_contract_violation(mut self, policy: ViolationPolicy) -> Self {
        self.contract_violation = policy;
        self
    }
}
