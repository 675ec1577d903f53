// Configuration module.
// Loads presentation settings from a JSON file in the platform config directory.

pub mod paths;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{MixerError, Result};

/// Upper bound for the move-to-front highlight.
pub const MAX_TRANSITION_MS: u64 = 5000;

/// User settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Title shown in the header bar.
    pub title: String,
    /// How long a row stays highlighted after moving to the front.
    pub transition_ms: u64,
    /// Fixed seed for reproducible shuffles.
    pub seed: Option<u64>,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Task 4".to_string(),
            transition_ms: 350,
            seed: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults on any error.
    ///
    /// The error is returned alongside so the caller can report it.
    pub fn load_or_default() -> (Self, Option<MixerError>) {
        match paths::config_path() {
            Some(path) => Self::load_from_or_default(&path),
            None => (Self::default(), None),
        }
    }

    /// Same as [`Config::load_or_default`] for an explicit path.
    pub fn load_from_or_default(path: &Path) -> (Self, Option<MixerError>) {
        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(MixerError::InvalidConfig("title must not be empty".into()));
        }
        if self.transition_ms > MAX_TRANSITION_MS {
            return Err(MixerError::InvalidConfig(format!(
                "transition_ms must be at most {MAX_TRANSITION_MS}, got {}",
                self.transition_ms
            )));
        }
        Ok(())
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("config.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{ "title": "Mixer", "seed": 9 }"#);

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.title, "Mixer");
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.transition_ms, 350);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = TempDir::new().unwrap();

        let path = write_config(&dir, r#"{ "title": "  " }"#);
        assert!(matches!(
            Config::load_from(&path),
            Err(MixerError::InvalidConfig(_))
        ));

        let path = write_config(&dir, r#"{ "transition_ms": 60000 }"#);
        assert!(matches!(
            Config::load_from(&path),
            Err(MixerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "{ title: ");
        assert!(matches!(Config::load_from(&path), Err(MixerError::Json(_))));
    }

    #[test]
    fn test_bad_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{ "title": "" }"#);

        let (config, error) = Config::load_from_or_default(&path);
        assert_eq!(config, Config::default());
        assert!(matches!(error, Some(MixerError::InvalidConfig(_))));
    }

    #[test]
    fn test_unreadable_path_falls_back_to_defaults() {
        // A directory exists but cannot be read as a file
        let dir = TempDir::new().unwrap();

        let (config, error) = Config::load_from_or_default(dir.path());
        assert_eq!(config, Config::default());
        assert!(matches!(error, Some(MixerError::Io(_))));
    }

    #[test]
    fn test_good_file_has_no_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{ "transition_ms": 0 }"#);

        let (config, error) = Config::load_from_or_default(&path);
        assert_eq!(config.transition_ms, 0);
        assert!(error.is_none());
    }

    #[test]
    fn test_transition_duration() {
        let config = Config {
            transition_ms: 120,
            ..Config::default()
        };
        assert_eq!(config.transition_duration(), Duration::from_millis(120));
    }
}
