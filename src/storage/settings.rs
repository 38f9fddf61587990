//! Settings storage
//!
//! Manages persistence of the two parent-facing settings records. Each record
//! is serialized whole to its own JSON file; saving always overwrites the
//! previous record, and a missing or corrupted file loads as defaults.

use crate::storage::{get_data_dir, StorageError};
use crate::types::{AgeContentSettings, PrivacySettings};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage key for the age/content settings record
pub const AGE_CONTENT_KEY: &str = "age_content_settings";
/// Storage key for the privacy settings record
pub const PRIVACY_KEY: &str = "privacy_settings";

fn record_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

/// Load a record from `<dir>/<key>.json`
///
/// Returns the default-constructed record if the file doesn't exist.
fn load_record<T>(dir: &Path, key: &str) -> Result<T, StorageError>
where
    T: DeserializeOwned + Default,
{
    let path = record_path(dir, key);

    if !path.exists() {
        tracing::info!("No {} record on disk, using defaults", key);
        return Ok(T::default());
    }

    let json = fs::read_to_string(&path)?;
    let record = serde_json::from_str(&json)?;

    tracing::debug!("Loaded {} from disk", key);
    Ok(record)
}

/// Save a record to `<dir>/<key>.json`, overwriting any previous record
fn save_record<T: Serialize>(dir: &Path, key: &str, record: &T) -> Result<(), StorageError> {
    fs::create_dir_all(dir)?;

    let json = serde_json::to_string_pretty(record)?;
    fs::write(record_path(dir, key), json)?;

    tracing::debug!("Saved {} to disk", key);
    Ok(())
}

/// Load the age/content settings record
///
/// Returns default settings if the file doesn't exist or is corrupted.
pub fn load_age_content_settings() -> AgeContentSettings {
    let mut settings = get_data_dir()
        .and_then(|dir| load_record(&dir, AGE_CONTENT_KEY))
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to load age/content settings, using defaults: {}", e);
            AgeContentSettings::default()
        });
    settings.validate();
    settings
}

/// Save the age/content settings record to disk
pub fn save_age_content_settings(settings: &AgeContentSettings) -> Result<(), StorageError> {
    save_record(&get_data_dir()?, AGE_CONTENT_KEY, settings)
}

/// Load the privacy settings record
///
/// Returns default settings if the file doesn't exist or is corrupted.
pub fn load_privacy_settings() -> PrivacySettings {
    let mut settings = get_data_dir()
        .and_then(|dir| load_record(&dir, PRIVACY_KEY))
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to load privacy settings, using defaults: {}", e);
            PrivacySettings::default()
        });
    settings.validate();
    settings
}

/// Save the privacy settings record to disk
pub fn save_privacy_settings(settings: &PrivacySettings) -> Result<(), StorageError> {
    save_record(&get_data_dir()?, PRIVACY_KEY, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AgeContentLevel, LoggingLevel};

    #[test]
    fn test_load_missing_record_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings: PrivacySettings = load_record(dir.path(), PRIVACY_KEY).unwrap();
        assert_eq!(settings, PrivacySettings::default());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();

        let mut settings = AgeContentSettings::default();
        settings.content_level = AgeContentLevel::Toddler;
        settings.auto_detect_age = false;

        save_record(dir.path(), AGE_CONTENT_KEY, &settings).unwrap();
        let loaded: AgeContentSettings = load_record(dir.path(), AGE_CONTENT_KEY).unwrap();

        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_save_overwrites_whole_record() {
        let dir = tempfile::tempdir().unwrap();

        let mut first = PrivacySettings::default();
        first.add_keyword("monster");
        save_record(dir.path(), PRIVACY_KEY, &first).unwrap();

        let mut second = PrivacySettings::default();
        second.logging_level = LoggingLevel::HighPrivacy;
        save_record(dir.path(), PRIVACY_KEY, &second).unwrap();

        let loaded: PrivacySettings = load_record(dir.path(), PRIVACY_KEY).unwrap();
        assert_eq!(loaded, second);
        assert!(loaded.custom_blocked_keywords.is_empty());
    }

    #[test]
    fn test_corrupt_record_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(record_path(dir.path(), PRIVACY_KEY), "not json {").unwrap();

        let result: Result<PrivacySettings, StorageError> = load_record(dir.path(), PRIVACY_KEY);
        assert!(matches!(result, Err(StorageError::Serde(_))));
    }
}
