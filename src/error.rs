use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for request-composer operations
pub type Result<T> = std::result::Result<T, ComposerError>;

/// Error types for composing requests and loading report data
#[derive(Debug, Error)]
pub enum ComposerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parameter file parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Parameter file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid request parameters: {message}")]
    InvalidParams { message: String },

    #[error("General error: {message}")]
    General { message: String },
}

impl ComposerError {
    /// Create a new invalid parameters error
    pub fn invalid_params<S: Into<String>>(message: S) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }
}
