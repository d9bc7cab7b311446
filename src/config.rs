//! Configuration management for the agent panel.
//!
//! Configuration can be set via environment variables:
//! - `HOST` - Optional. Server host. Defaults to `0.0.0.0`.
//! - `PORT` - Optional. Server port. Defaults to `8001`.
//! - `AGENT_RUNTIME_URL` - Optional. Base URL of the agent runtime that
//!   executes commands. Until it is set, command execution requests fail
//!   with a construction error; the server itself still starts.
//! - `AGENT_RUNTIME_API_KEY` - Optional. Bearer token for the agent runtime.
//! - `COMMAND_TIMEOUT_SECS` - Optional. Upper bound in seconds for a single
//!   command execution. Defaults to `300`.

use std::time::Duration;
use thiserror::Error;

/// Default bound for a single command execution.
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Base URL of the agent runtime commands are delegated to
    pub agent_runtime_url: Option<String>,

    /// Bearer token for the agent runtime
    pub agent_runtime_api_key: Option<String>,

    /// Upper bound for a single command execution
    pub command_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `PORT` or
    /// `COMMAND_TIMEOUT_SECS` cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8001".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let agent_runtime_url = std::env::var("AGENT_RUNTIME_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let agent_runtime_api_key = std::env::var("AGENT_RUNTIME_API_KEY").ok();

        let timeout_secs: u64 = std::env::var("COMMAND_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_COMMAND_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|e| {
                ConfigError::InvalidValue("COMMAND_TIMEOUT_SECS".to_string(), format!("{}", e))
            })?;

        Ok(Self {
            host,
            port,
            agent_runtime_url,
            agent_runtime_api_key,
            command_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            agent_runtime_url: None,
            agent_runtime_api_key: None,
            command_timeout: Duration::from_secs(DEFAULT_COMMAND_TIMEOUT_SECS),
        }
    }
}
