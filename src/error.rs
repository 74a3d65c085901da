//! Unified error types for hsts-toolkit

use thiserror::Error;

/// Main error type for hsts-toolkit operations
#[derive(Error, Debug)]
pub enum HstsToolkitError {
    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("DNS error: {0}")]
    Dns(String),

    #[error("Preload list unavailable: {0}")]
    ListUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using HstsToolkitError
pub type Result<T> = std::result::Result<T, HstsToolkitError>;
