//! Configuration management for Elo Comunitário.
//!
//! Configuration can be set via environment variables:
//! - `GEMINI_API_KEY` - Required. Your Gemini API key (`GOOGLE_API_KEY` is
//!   accepted as a fallback, matching the Google SDK convention).
//! - `ELO_MODEL` - Optional. The Gemini model to use. Defaults to
//!   `gemini-2.0-flash`.

use thiserror::Error;

/// Model used when `ELO_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// Pipeline configuration, loaded once at startup and read-only thereafter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key
    pub api_key: String,

    /// Gemini model identifier
    pub model: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if neither `GEMINI_API_KEY` nor
    /// `GOOGLE_API_KEY` is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .map_err(|_| ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()))?;

        let model = std::env::var("ELO_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self { api_key, model })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(api_key: String, model: String) -> Self {
        Self { api_key, model }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_config_keeps_values() {
        let config = Config::new("test-key".to_string(), DEFAULT_MODEL.to_string());
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.model, "gemini-2.0-flash");
    }
}
