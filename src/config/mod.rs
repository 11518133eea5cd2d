//! Application configuration module
//!
//! This module provides type-safe configuration loading from an optional
//! file and environment variables using the `config` and `dotenvy` crates.
//! Environment variables use the `BEHAVIORAL_RISK` prefix and nested values
//! are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use behavioral_risk::config::AppConfig;
//!
//! let config = AppConfig::load(None).expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reading corpus from {}", config.input.input_dir.display());
//! ```

mod analysis;
mod enrichment;
mod error;
mod input;
mod logging;

pub use analysis::AnalysisSettings;
pub use enrichment::{EnrichmentConfig, MAX_RETRIES, MAX_TIMEOUT_SECS};
pub use error::{ConfigError, ValidationError};
pub use input::InputConfig;
pub use logging::LoggingConfig;

use serde::Deserialize;
use std::path::Path;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "BEHAVIORAL_RISK";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Corpus directory and output file
    #[serde(default)]
    pub input: InputConfig,

    /// Weight preset and scoring overrides
    #[serde(default)]
    pub analysis: AnalysisSettings,

    /// Drop-in file and LLM enrichment
    #[serde(default)]
    pub enrichment: EnrichmentConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads `path` if given (format chosen by extension: TOML, JSON, YAML)
    /// 3. Reads environment variables with `BEHAVIORAL_RISK` prefix,
    ///    overriding file values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `BEHAVIORAL_RISK__INPUT__INPUT_DIR=data` -> `input.input_dir = data`
    /// - `BEHAVIORAL_RISK__ENRICHMENT__OPENAI_API_KEY=...` -> `enrichment.openai_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed, or if values
    /// cannot be parsed into expected types.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.input.validate()?;
        self.analysis.validate()?;
        self.enrichment.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
