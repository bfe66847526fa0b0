//! Session settings loaded from TOML.

use crate::games::tictactoe::Mark;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a session.
///
/// Anything left unset is asked for on the console.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Human player's name.
    player_name: Option<String>,

    /// Human player's mark; the computer takes the other one.
    mark: Option<Mark>,

    /// Name shown for the computer opponent.
    computer_name: String,

    /// Seed for the computer's random moves. Fresh entropy when unset.
    seed: Option<u64>,
}

#[instrument]
fn default_computer_name() -> String {
    "Computer".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_name: None,
            mark: None,
            computer_name: default_computer_name(),
            seed: None,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path`, or returns the defaults if the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces file values with whichever command-line values were given.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        player_name: Option<String>,
        mark: Option<Mark>,
        seed: Option<u64>,
    ) -> Self {
        if player_name.is_some() {
            self.player_name = player_name;
        }
        if mark.is_some() {
            self.mark = mark;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// A settings file that could not be read or parsed.
///
/// Records where in this crate the failure was raised.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} (raised at {}:{})", message, file, line)]
pub struct ConfigError {
    /// What went wrong with the settings file.
    pub message: String,
    /// Line that raised the error.
    pub line: u32,
    /// Source file that raised the error.
    pub file: &'static str,
}

impl ConfigError {
    /// Wraps a read or parse failure, tagging it with the calling location.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: caller.line(),
            file: caller.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.computer_name(), "Computer");
        assert_eq!(settings.player_name(), &None);
        assert_eq!(settings.seed(), &None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str("mark = \"o\"\nseed = 12\n").unwrap();
        assert_eq!(settings.mark(), &Some(Mark::O));
        assert_eq!(settings.seed(), &Some(12));
        assert_eq!(settings.computer_name(), "Computer");
    }

    #[test]
    fn test_config_error_names_its_origin() {
        let err = ConfigError::new("Failed to parse config: bad mark");
        assert_eq!(err.file, file!());
        assert!(err.to_string().starts_with("Settings error: Failed to parse config"));
    }

    #[test]
    fn test_overrides_only_replace_given_values() {
        let settings: Settings = toml::from_str("player_name = \"Ana\"\nseed = 1\n").unwrap();
        let settings = settings.with_overrides(None, Some(Mark::X), Some(2));
        assert_eq!(settings.player_name().as_deref(), Some("Ana"));
        assert_eq!(settings.mark(), &Some(Mark::X));
        assert_eq!(settings.seed(), &Some(2));
    }
}
