//! Error types for the F1 statistics service

use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    /// Rejected request options. The message is shown to the caller verbatim.
    #[error("{message}")]
    InvalidOptions { message: String },

    #[error("Upstream data is missing {what}")]
    MissingData { what: String },

    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error("Background task failed: {message}")]
    Task { message: String },
}

impl StatsError {
    pub fn invalid_options(message: impl Into<String>) -> Self {
        StatsError::InvalidOptions {
            message: message.into(),
        }
    }

    pub fn missing(what: impl Into<String>) -> Self {
        StatsError::MissingData { what: what.into() }
    }

    /// True for errors caused by the request itself rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, StatsError::InvalidOptions { .. })
    }
}

impl From<rayon::ThreadPoolBuildError> for StatsError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        StatsError::Config {
            message: err.to_string(),
        }
    }
}
