// Core data models for the slide editor

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Slide identifier as assigned by the server
///
/// Records that were never persisted carry the [`SlideId::UNSAVED`] sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlideId(pub String);

impl SlideId {
    /// Placeholder id the API uses for "no id yet"
    pub const UNSAVED: &'static str = "__API_K_NULL__";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Sentinel id for a record that only exists in memory
    pub fn unsaved() -> Self {
        Self(Self::UNSAVED.to_string())
    }

    /// True once the server has assigned a real id
    pub fn is_persisted(&self) -> bool {
        !self.0.is_empty() && self.0 != Self::UNSAVED
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A signage slide record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Server id or the unsaved sentinel
    pub id: SlideId,

    /// Slide name
    pub name: String,

    /// Owning account, `None` until the server assigns one
    #[serde(default)]
    pub owner: Option<String>,

    /// Display time in milliseconds
    pub time: u64,

    /// Free-text slide markup
    #[serde(default)]
    pub markup: String,

    /// Ordering index
    pub index: u32,

    /// Whether the slide is shown in the rotation
    pub enabled: bool,
}

impl Slide {
    pub const DEFAULT_NAME: &'static str = "NewSlide";
    pub const DEFAULT_TIME_MS: u64 = 5000;

    /// In-memory slide built from the new-slide template
    pub fn new_default() -> Self {
        Self {
            id: SlideId::unsaved(),
            name: Self::DEFAULT_NAME.to_string(),
            owner: None,
            time: Self::DEFAULT_TIME_MS,
            markup: String::new(),
            index: 0,
            enabled: true,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_persisted()
    }
}

/// Slide entry as shown in the slide list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSummary {
    pub id: SlideId,
    pub name: String,
    pub index: u32,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// Numeric limits supplied by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ServerLimits {
    /// Maximum slide name length in characters
    pub slide_name_max_len: usize,

    /// Maximum markup length in characters
    pub slide_markup_max_len: usize,

    /// Largest accepted ordering index
    pub slide_max_index: u32,

    /// Shortest display time in milliseconds
    #[serde(default = "default_min_time")]
    pub slide_min_time: u64,

    /// Longest display time in milliseconds
    #[serde(default = "default_max_time")]
    pub slide_max_time: u64,
}

fn default_min_time() -> u64 {
    ServerLimits::default().slide_min_time
}

fn default_max_time() -> u64 {
    ServerLimits::default().slide_max_time
}

impl Default for ServerLimits {
    fn default() -> Self {
        Self {
            slide_name_max_len: 32,
            slide_markup_max_len: 2048,
            slide_max_index: 65536,
            slide_min_time: 1000,
            slide_max_time: 20000,
        }
    }
}

impl ServerLimits {
    /// Longest display time the editor accepts from a server (one day)
    pub const MAX_TIME_CEILING: u64 = 24 * 60 * 60 * 1000;

    /// Parse a limits document as served by the API
    pub fn from_json(json: &str) -> Result<Self, LimitsError> {
        let limits: ServerLimits = serde_json::from_str(json)?;
        limits.validate()?;
        Ok(limits)
    }

    /// Reject limits the editor can't work with
    pub fn validate(&self) -> Result<(), LimitsError> {
        if self.slide_name_max_len == 0 {
            return Err(LimitsError::Inconsistent(
                "SLIDE_NAME_MAX_LEN must be at least 1".to_string(),
            ));
        }
        if self.slide_min_time > self.slide_max_time {
            return Err(LimitsError::Inconsistent(format!(
                "SLIDE_MIN_TIME ({}) exceeds SLIDE_MAX_TIME ({})",
                self.slide_min_time, self.slide_max_time
            )));
        }
        if self.slide_max_time > Self::MAX_TIME_CEILING {
            return Err(LimitsError::Inconsistent(format!(
                "SLIDE_MAX_TIME ({}) exceeds {} ms",
                self.slide_max_time,
                Self::MAX_TIME_CEILING
            )));
        }
        Ok(())
    }
}

/// Server limit errors
#[derive(Debug, thiserror::Error)]
pub enum LimitsError {
    #[error("invalid limits document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("inconsistent limits: {0}")]
    Inconsistent(String),
}

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub limits: ServerLimits,

    /// Period of the background slide list refresh
    pub refresh_interval: Duration,

    /// Path prefix the slide id is appended to when previewing
    pub preview_base: String,
}

impl EditorConfig {
    pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

    pub fn new(limits: ServerLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Preview location for a persisted slide
    pub fn preview_url(&self, id: &SlideId) -> String {
        format!("{}{}", self.preview_base, id)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            limits: ServerLimits::default(),
            refresh_interval: Self::REFRESH_INTERVAL,
            preview_base: "/app/?preview=".to_string(),
        }
    }
}

/// Status level for editor messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Editor status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCode {
    LoadFailed,
    Created,
    Saving,
    Saved,
    SaveFailed,
    Deleting,
    Deleted,
    RemoveFailed,
}

impl StatusCode {
    /// Status line text
    pub fn to_message(&self) -> &'static str {
        match self {
            StatusCode::LoadFailed => "Failed to load slide!",
            StatusCode::Created => "Slide created!",
            StatusCode::Saving => "Saving...",
            StatusCode::Saved => "Saved!",
            StatusCode::SaveFailed => "Save failed!",
            StatusCode::Deleting => "Deleting slide...",
            StatusCode::Deleted => "Slide deleted!",
            StatusCode::RemoveFailed => "Failed to remove slide!",
        }
    }

    pub fn status_level(&self) -> StatusLevel {
        match self {
            StatusCode::LoadFailed | StatusCode::RemoveFailed => StatusLevel::Error,
            StatusCode::SaveFailed => StatusLevel::Warning,
            _ => StatusLevel::Info,
        }
    }
}

/// Latest editor status line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorStatus {
    pub code: StatusCode,
    pub level: StatusLevel,

    /// When the status was set (Unix timestamp)
    pub at: i64,
}

impl EditorStatus {
    pub fn new(code: StatusCode) -> Self {
        Self {
            code,
            level: code.status_level(),
            at: chrono::Utc::now().timestamp(),
        }
    }

    pub fn message(&self) -> &'static str {
        self.code.to_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsaved_sentinel_is_not_persisted() {
        assert!(!SlideId::unsaved().is_persisted());
        assert!(!SlideId::new("").is_persisted());
        assert!(SlideId::new("0x12ab").is_persisted());
    }

    #[test]
    fn test_new_default_template() {
        let slide = Slide::new_default();
        assert_eq!(slide.name, "NewSlide");
        assert_eq!(slide.time, 5000);
        assert_eq!(slide.index, 0);
        assert!(slide.enabled);
        assert!(slide.markup.is_empty());
        assert!(!slide.is_persisted());
    }

    #[test]
    fn test_limits_from_json() {
        let limits = ServerLimits::from_json(
            r#"{"SLIDE_NAME_MAX_LEN": 16, "SLIDE_MARKUP_MAX_LEN": 100, "SLIDE_MAX_INDEX": 10}"#,
        )
        .unwrap();
        assert_eq!(limits.slide_name_max_len, 16);
        assert_eq!(limits.slide_markup_max_len, 100);
        assert_eq!(limits.slide_max_index, 10);
        assert_eq!(limits.slide_min_time, 1000);
        assert_eq!(limits.slide_max_time, 20000);
    }

    #[test]
    fn test_limits_inconsistent_times() {
        let result = ServerLimits::from_json(
            r#"{"SLIDE_NAME_MAX_LEN": 16, "SLIDE_MARKUP_MAX_LEN": 100, "SLIDE_MAX_INDEX": 10,
                "SLIDE_MIN_TIME": 5000, "SLIDE_MAX_TIME": 1000}"#,
        );
        assert!(matches!(result, Err(LimitsError::Inconsistent(_))));
    }

    #[test]
    fn test_limits_reject_oversized_max_time() {
        let limits = ServerLimits {
            slide_max_time: u64::MAX,
            ..ServerLimits::default()
        };
        assert!(matches!(limits.validate(), Err(LimitsError::Inconsistent(_))));

        let limits = ServerLimits {
            slide_max_time: ServerLimits::MAX_TIME_CEILING,
            ..ServerLimits::default()
        };
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn test_preview_url() {
        let config = EditorConfig::default();
        assert_eq!(config.preview_url(&SlideId::new("abc")), "/app/?preview=abc");
    }
}
