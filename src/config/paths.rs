// Config and log path utilities.
// Resolves platform directories for the config file and the log file.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use directories::ProjectDirs;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "MIXERTABLE_CONFIG";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "mixertable")
}

/// Get the base config directory (~/.config/mixertable on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the base cache directory (~/.cache/mixertable on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the config file, honoring `MIXERTABLE_CONFIG`.
pub fn config_path() -> Option<PathBuf> {
    config_path_from(env::var_os(CONFIG_ENV))
}

/// Config file path given the value of `MIXERTABLE_CONFIG`. Empty means unset.
fn config_path_from(override_path: Option<OsString>) -> Option<PathBuf> {
    match override_path {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => config_dir().map(|dir| dir.join("config.json")),
    }
}

/// Path to the log file.
pub fn log_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("mixertable.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_override() {
        let dir = tempfile::TempDir::new().unwrap();
        let custom = dir.path().join("custom.json");

        let path = config_path_from(Some(custom.clone().into_os_string()));
        assert_eq!(path, Some(custom));
    }

    #[test]
    fn test_config_path_empty_override_uses_default() {
        if let Some(path) = config_path_from(Some(OsString::new())) {
            assert!(path.ends_with("config.json"));
        }
        assert_eq!(config_path_from(Some(OsString::new())), config_path_from(None));
    }

    #[test]
    fn test_config_path_reads_env() {
        let dir = tempfile::TempDir::new().unwrap();
        let custom = dir.path().join("from_env.json");

        // Only this test touches MIXERTABLE_CONFIG
        unsafe { env::set_var(CONFIG_ENV, &custom) };
        let path = config_path();
        unsafe { env::remove_var(CONFIG_ENV) };

        assert_eq!(path, Some(custom));
    }

    #[test]
    fn test_log_path() {
        // Path construction only, nothing touches the filesystem
        if let Some(path) = log_path() {
            assert!(path.ends_with("mixertable.log"));
        }
    }
}
