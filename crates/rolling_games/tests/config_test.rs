//! Tests for loading the front-end configuration.

use rolling_games::GameConfig;
use std::io::Write;

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(config.log_filter(), "info");
    assert_eq!(config.log_file(), "rolling_games.log");
    assert!(*config.show_stages());
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_stages = false").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert!(!*config.show_stages());
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_full_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
log_filter = "rolling_tictactoe=debug"
log_file = "/tmp/rolling.log"
show_stages = true
"#
    )
    .unwrap();

    let config = GameConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.log_filter(), "rolling_tictactoe=debug");
    assert_eq!(config.log_file(), "/tmp/rolling.log");
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::load(Some(dir.path().join("missing.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_stages = \"sometimes\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
