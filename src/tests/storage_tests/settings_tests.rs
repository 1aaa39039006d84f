// Settings Tests - Testing Settings load/save and validation

use crate::roster::RosterConfig;
use crate::storage::Settings;
use crate::Error;
use std::time::Duration;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_settings_default() {
    let settings = Settings::default();

    assert_eq!(settings.page_size, 10);
    assert_eq!(settings.max_students, 50);
    assert_eq!(settings.load_delay_ms, 500);
    assert_eq!(settings.database_path, "./app_data/roster.db");
    assert_eq!(settings.log_path, "./app_data/roster.log");
    assert_eq!(settings.load_delay(), Duration::from_millis(500));
}

#[test]
fn test_settings_missing_file_returns_default() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let settings = Settings::load(temp_dir.path().join("absent.json")).expect("Failed to load");
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_settings_empty_file_returns_default() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(temp_file.path(), "  \n").unwrap();

    let settings = Settings::load(temp_file.path()).expect("Failed to load");
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_settings_save_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config").join("roster.json");

    let mut settings = Settings::default();
    settings.page_size = 5;
    settings.max_students = 20;
    settings.load_delay_ms = 0;
    settings.save(&path).expect("Failed to save");

    let loaded = Settings::load(&path).expect("Failed to load");
    assert_eq!(loaded, settings);
}

#[test]
fn test_settings_partial_file_uses_defaults() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(temp_file.path(), r#"{"page_size": 4}"#).unwrap();

    let settings = Settings::load(temp_file.path()).expect("Failed to load");
    assert_eq!(settings.page_size, 4);
    assert_eq!(settings.max_students, 50);
}

#[test]
fn test_settings_invalid_json() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(temp_file.path(), "{ page_size: ").unwrap();

    let result = Settings::load(temp_file.path());
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_settings_validation() {
    let mut settings = Settings::default();
    assert!(settings.validate().is_ok());

    settings.page_size = 0;
    assert!(matches!(settings.validate(), Err(Error::Config(_))));

    settings.page_size = 10;
    settings.max_students = 0;
    assert!(matches!(settings.validate(), Err(Error::Config(_))));
}

#[test]
fn test_settings_zero_page_size_rejected_on_load() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(temp_file.path(), r#"{"page_size": 0}"#).unwrap();

    assert!(Settings::load(temp_file.path()).is_err());
}

#[test]
fn test_roster_config_from_settings() {
    let mut settings = Settings::default();
    settings.page_size = 3;
    settings.max_students = 7;
    settings.load_delay_ms = 25;

    let config = RosterConfig::from(&settings);
    assert_eq!(config.page_size, 3);
    assert_eq!(config.capacity, 7);
    assert_eq!(config.load_delay, Duration::from_millis(25));

    assert_eq!(RosterConfig::from(&Settings::default()), RosterConfig::default());
}
