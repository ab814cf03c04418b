// Web UI error types

/// Web UI specific errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// A browser API the editor needs is unavailable
    BrowserError(String),
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiError::BrowserError(msg) => write!(f, "Browser error: {}", msg),
        }
    }
}

impl std::error::Error for UiError {}
