//! Common error types for moji

use thiserror::Error;

/// Common result type for moji operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the moji crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode/decode error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Remote source could not be fetched
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
