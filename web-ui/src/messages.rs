// Status line presentation

use chrono::{Local, TimeZone};
use signage_editor_core::{EditorStatus, StatusLevel};

/// Message level for UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

impl From<StatusLevel> for MessageLevel {
    fn from(level: StatusLevel) -> Self {
        match level {
            StatusLevel::Info => MessageLevel::Info,
            StatusLevel::Warning => MessageLevel::Warning,
            StatusLevel::Error => MessageLevel::Error,
        }
    }
}

/// Get CSS class for message level
pub fn get_message_class(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => "message-text",
        MessageLevel::Warning => "message-text warning",
        MessageLevel::Error => "message-text error",
    }
}

/// Status text with the local time it was set
pub fn status_text(status: &EditorStatus) -> String {
    match Local.timestamp_opt(status.at, 0).single() {
        Some(at) => format!("{} ({})", status.message(), at.format("%H:%M:%S")),
        None => status.message().to_string(),
    }
}

/// Text of a native dialog; the browser has no separate title line
pub fn dialog_text(title: &str, body: &str) -> String {
    format!("{}\n\n{}", title, body)
}
