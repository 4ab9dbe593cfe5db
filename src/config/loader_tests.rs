//! Tests for config loading

use std::fs;

use tempfile::TempDir;

use super::{load_config, load_config_from};
use crate::config::Config;

#[test]
fn test_missing_file_is_none() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    assert!(load_config_from(&path).unwrap().is_none());
}

#[test]
fn test_missing_file_yields_defaults_without_warning() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let result = load_config(Some(&path));
    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_none());
}

#[test]
fn test_valid_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[picker]\ndebounce_ms = 120\n").unwrap();

    let result = load_config(Some(&path));
    assert_eq!(result.config.picker.debounce_ms, 120);
    assert!(result.warning.is_none());
}

#[test]
fn test_invalid_file_falls_back_with_warning() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[picker\ndebounce_ms = ").unwrap();

    let result = load_config(Some(&path));
    assert_eq!(result.config, Config::default());
    let warning = result.warning.expect("warning expected");
    assert!(warning.contains("Invalid config file"));
}

#[test]
fn test_wrong_type_falls_back_with_warning() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[picker]\nmax_visible = \"lots\"\n").unwrap();

    let result = load_config(Some(&path));
    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_some());
}

#[test]
fn test_directory_path_is_read_error() {
    let dir = TempDir::new().unwrap();

    let err = load_config_from(dir.path()).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read config file"));
}
