use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Preference storage error: {0}")]
    Storage(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    #[error("Could not decode response: {0}")]
    Decode(String),

    #[error("Login rejected: {0}")]
    LoginRejected(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Failures of the role authority that downgrade the session instead of surfacing.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AppError::Network(_) | AppError::HttpStatus { .. } | AppError::Timeout(_) | AppError::Decode(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
