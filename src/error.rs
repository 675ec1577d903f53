// Error types for mixertable.
// Covers config loading and terminal I/O; the row list itself never fails.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MixerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, MixerError>;
