// API client errors

/// API client error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Network communication error or unreadable response
    NetworkError(String),
    /// Server returned a non-success HTTP status or unusable data
    ServerError(String),
    /// Server reported a non-zero API error code
    ApiCode(i32),
}

impl ApiError {
    /// Map a response `error` field to a result
    pub fn check_code(code: i64) -> Result<(), ApiError> {
        match code {
            0 => Ok(()),
            code => Err(ApiError::ApiCode(
                i32::try_from(code).unwrap_or(i32::MAX),
            )),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ApiError::ServerError(msg) => write!(f, "Server error: {}", msg),
            ApiError::ApiCode(code) => write!(f, "API error code {}", code),
        }
    }
}

impl std::error::Error for ApiError {}
