//! `defaults.toml` loading

use crate::common::*;
use keyed_defaults::{ArchiveCodec, CONFIG_FILE_NAME};
use std::fs;
use tempfile::TempDir;

#[test]
fn missing_file_is_default() {
    let dir = TempDir::new().unwrap();
    let config = DefaultsConfig::load(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
    assert_eq!(config, DefaultsConfig::default());
}

#[test]
fn default_toml_written_and_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, DefaultsConfig::default_toml()).unwrap();
    let config = DefaultsConfig::load(&path).unwrap();
    assert_eq!(config.archive_codec, ArchiveCodec::MessagePack);
}

#[test]
fn loaded_config_drives_facade() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "archive_codec = \"bincode\"\ncontract_violation = \"error\"\n").unwrap();
    let config = DefaultsConfig::load(&path).unwrap();

    let defaults = Defaults::with_config(LocalStore::new(), config);
    assert_eq!(defaults.config().archive_codec, ArchiveCodec::Bincode);
    let err = defaults
        .set_json("k", serde_json::json!([null]))
        .unwrap_err();
    assert!(matches!(err, DefaultsError::UnsupportedValue(_)));
}

#[test]
fn malformed_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "archive_codec = [").unwrap();
    assert!(matches!(
        DefaultsConfig::load(&path),
        Err(DefaultsError::Config(_))
    ));
}
