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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid enrichment timeout (must be 1..={max} seconds)")]
    InvalidTimeout { max: u64 },

    #[error("Invalid max_retries (must be at most {max})")]
    InvalidRetries { max: u32 },

    #[error("Invalid token limit: {0} must be greater than zero")]
    InvalidTokenLimit(&'static str),

    #[error("Invalid temperature (must be a finite value in 0.0..=2.0)")]
    InvalidTemperature,

    #[error("Invalid analysis settings: {0}")]
    InvalidAnalysis(#[from] crate::domain::foundation::ValidationError),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}
