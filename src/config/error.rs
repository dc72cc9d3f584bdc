//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Margin '{0}' must be a finite value of at least 0")]
    InvalidMargin(&'static str),

    #[error("Surcharge bounds must satisfy 0 <= min <= max")]
    InvalidSurchargeBounds,

    #[error("Multiplier '{0}' must be greater than 0")]
    InvalidMultiplier(&'static str),

    #[error("Invalid PDF timeout")]
    InvalidPdfTimeout,

    #[error("At least one quote must be kept in the workspace")]
    InvalidQuoteCapacity,

    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),
}
