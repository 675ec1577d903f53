// Logging setup.
// The terminal belongs to the UI, so tracing output goes to a log file.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::paths;
use crate::error::Result;

/// Install the global subscriber. `RUST_LOG` wins over `default_filter`.
///
/// Does nothing when no cache directory is available. An error means the log
/// file could not be opened and no subscriber was installed.
pub fn init(default_filter: &str) -> Result<()> {
    let Some(path) = paths::log_path() else {
        return Ok(());
    };
    let file = open_log_file(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    Ok(())
}

/// Open `path` for appending, creating parent directories.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MixerError;
    use tempfile::TempDir;

    #[test]
    fn test_open_log_file_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("mixertable.log");

        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_reports_bad_parent() {
        // Parent is a regular file, so the directory cannot be created
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let result = open_log_file(&blocker.join("mixertable.log"));
        assert!(matches!(result, Err(MixerError::Io(_))));
    }
}
