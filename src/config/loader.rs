//! Configuration loading from the environment.
//!
//! # Responsibilities
//! - Read `PORT` and `API_KEY` from the process environment
//! - Resolve defaults (missing or unparseable port falls back to 5000)
//! - Validate required values eagerly, before the server binds
//!
//! # Design Decisions
//! - A missing `API_KEY` is a startup error, not a deferred fault inside the
//!   request handler. An empty key is accepted (it has a length of 0).
//! - `resolve` is a pure function over the raw variable values, so tests can
//!   exercise every combination without touching the process environment.

use std::env;

use crate::config::schema::{AppConfig, DEFAULT_PORT};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required API key variable is not set.
    #[error("required environment variable API_KEY is not set")]
    MissingApiKey,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(env::var("PORT").ok(), env::var("API_KEY").ok())
    }

    /// Resolve configuration from raw variable values.
    pub fn resolve(port: Option<String>, api_key: Option<String>) -> Result<Self, ConfigError> {
        let port = port
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let api_key = api_key.ok_or(ConfigError::MissingApiKey)?;

        Ok(Self { port, api_key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_from_valid_string() {
        let config = AppConfig::resolve(Some("8080".into()), Some("key".into())).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_port_defaults_when_absent() {
        let config = AppConfig::resolve(None, Some("key".into())).unwrap();
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_port_defaults_when_unparseable() {
        let config = AppConfig::resolve(Some("not-a-port".into()), Some("key".into())).unwrap();
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let err = AppConfig::resolve(None, None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
        assert!(err.to_string().contains("API_KEY"));
    }

    #[test]
    fn test_empty_api_key_is_accepted() {
        let config = AppConfig::resolve(None, Some(String::new())).unwrap();
        assert_eq!(config.api_key, "");
    }
}
