//! Tests for loading settings from disk.

use randtoe::{Mark, Settings};
use std::io::Write;

#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load(dir.path().join("missing.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "player_name = \"Ana\"\nmark = \"O\"\ncomputer_name = \"HAL\"\nseed = 7"
    )
    .unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings.player_name().as_deref(), Some("Ana"));
    assert_eq!(settings.mark(), &Some(Mark::O));
    assert_eq!(settings.computer_name(), "HAL");
    assert_eq!(settings.seed(), &Some(7));
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mark = \"Q\"").unwrap();

    let err = Settings::load(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
