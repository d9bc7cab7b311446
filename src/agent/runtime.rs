//! Runtime-backed agent.
//!
//! Delegates command execution to an external agent runtime over HTTP. The
//! runtime owns the reasoning loop and tool use; this client sends one
//! command and waits for the final result.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::Config;

use super::{Agent, AgentError};

/// Agent that forwards commands to a configured agent runtime.
#[derive(Debug)]
pub struct RuntimeAgent {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl RuntimeAgent {
    /// Create a new agent bound to the runtime named in `config`.
    ///
    /// # Errors
    ///
    /// Returns `AgentError::Construction` if no runtime URL is configured or
    /// the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, AgentError> {
        let base = config.agent_runtime_url.as_deref().ok_or_else(|| {
            AgentError::Construction("AGENT_RUNTIME_URL is not configured".to_string())
        })?;

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| AgentError::Construction(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/run", base.trim_end_matches('/')),
            api_key: config.agent_runtime_api_key.clone(),
        })
    }
}

#[async_trait]
impl Agent for RuntimeAgent {
    async fn run(&self, command: &str) -> Result<Value, AgentError> {
        debug!("Forwarding command to agent runtime at {}", self.endpoint);

        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "command": command }));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AgentError::Execution(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::Execution(format!(
                "agent runtime returned HTTP {}: {}",
                status.as_u16(),
                body
            )));
        }

        let mut value: Value = response
            .json()
            .await
            .map_err(|e| AgentError::Execution(format!("invalid runtime response: {}", e)))?;

        // The runtime replies either with a bare value or `{"result": ...}`.
        if let Value::Object(map) = &mut value {
            if let Some(result) = map.remove("result") {
                return Ok(result);
            }
        }
        Ok(value)
    }
}
