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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),

    #[error("Notice display time must be between 1 and 60 seconds")]
    InvalidNoticeTtl,

    #[error("Answers file not found: {0}")]
    AnswersFileNotFound(String),
}
