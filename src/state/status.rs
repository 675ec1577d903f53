// Status bar messages.
// Timestamped one-line feedback for the last action.

use chrono::{DateTime, Local, Utc};

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

/// A message shown in the status bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warn,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// `HH:MM:SS message` in local time.
    pub fn display(&self) -> String {
        format!(
            "{} {}",
            self.timestamp.with_timezone(&Local).format("%H:%M:%S"),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes_time() {
        let msg = StatusMessage::warn("config ignored");
        assert_eq!(msg.level, StatusLevel::Warn);

        let text = msg.display();
        assert!(text.ends_with(" config ignored"));
        // "HH:MM:SS " prefix
        assert_eq!(text.len(), "00:00:00 config ignored".len());
        assert_eq!(&text[2..3], ":");
    }
}
