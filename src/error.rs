//! Error handling for reqcurl

use thiserror::Error;

/// Main error type for reqcurl operations
#[derive(Error, Debug)]
pub enum ReqcurlError {
    #[error("Payload error: {0}")]
    PayloadShape(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Network timeout")]
    Timeout,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for reqcurl operations
pub type Result<T> = std::result::Result<T, ReqcurlError>;
