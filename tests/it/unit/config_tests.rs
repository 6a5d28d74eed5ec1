//! Unit tests for config loading.

use keyboard_handoff::{ConfigError, ControllerConfig};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("handoff.json");
    fs::write(&path, r#"{"reference_drag_distance": 400.0}"#).unwrap();

    let config = ControllerConfig::load(&path).unwrap();
    assert_eq!(config.reference_drag_distance, 400.0);
    assert_eq!(config.catch_up_max_duration, 0.25);
}

#[test]
fn test_empty_object_is_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("handoff.json");
    fs::write(&path, "{}").unwrap();

    assert_eq!(
        ControllerConfig::load(&path).unwrap(),
        ControllerConfig::default()
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = ControllerConfig::load(dir.path().join("absent.json"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_invalid_file_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("handoff.json");
    fs::write(&path, r#"{"catch_up_max_duration": "fast"}"#).unwrap();
    assert!(matches!(
        ControllerConfig::load(&path),
        Err(ConfigError::Json(_))
    ));
}
