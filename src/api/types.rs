//! API request and response types.
//!
//! Every endpoint answers with [`ResponseEnvelope`]: a `status` field plus
//! either a success payload or an error message, never both. Echo types
//! (`LlmSettingsEcho`, `AgentConfigEcho`) structurally omit the API key, so
//! a secret can only leak if a field is added here - redaction is not a
//! runtime filter.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::agent::AgentError;

/// Validation failure for a request payload, naming the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field '{0}' is required and must not be empty")]
    EmptyField(&'static str),

    #[error("field '{0}' must be a positive integer")]
    NotPositive(&'static str),
}

/// Request to execute a command.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandRequest {
    /// The natural-language command for the agent
    pub command: String,
}

impl CommandRequest {
    /// Check domain constraints beyond JSON shape.
    ///
    /// Runs to rejection before any agent is constructed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.command.trim().is_empty() {
            return Err(ValidationError::EmptyField("command"));
        }
        Ok(())
    }
}

/// LLM provider settings submitted by the dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub model: String,
    pub base_url: String,
    /// Secret - never echoed back; see [`LlmSettingsEcho`]
    pub api_key: String,
    pub max_tokens: u32,
    pub temperature: f32,
    #[serde(default)]
    pub api_type: String,
    #[serde(default)]
    pub api_version: String,
}

impl LlmSettings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model.trim().is_empty() {
            return Err(ValidationError::EmptyField("model"));
        }
        if self.max_tokens == 0 {
            return Err(ValidationError::NotPositive("max_tokens"));
        }
        Ok(())
    }
}

/// Echo shape for LLM settings: the submitted settings minus the API key.
#[derive(Debug, Clone, Serialize)]
pub struct LlmSettingsEcho {
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub api_type: String,
    pub api_version: String,
}

impl From<LlmSettings> for LlmSettingsEcho {
    fn from(settings: LlmSettings) -> Self {
        Self {
            model: settings.model,
            base_url: settings.base_url,
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            api_type: settings.api_type,
            api_version: settings.api_version,
        }
    }
}

/// A tool exposed to an agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentTool {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Agent configuration submitted for registration.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub agent_type: String,
    #[serde(default)]
    pub tools: Vec<AgentTool>,
    pub llm_config: LlmSettings,
}

impl AgentConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        if self.agent_type.trim().is_empty() {
            return Err(ValidationError::EmptyField("type"));
        }
        for tool in &self.tools {
            if tool.name.trim().is_empty() {
                return Err(ValidationError::EmptyField("tools.name"));
            }
        }
        self.llm_config.validate()
    }
}

/// Echo shape for an agent configuration, with the nested secret removed.
#[derive(Debug, Clone, Serialize)]
pub struct AgentConfigEcho {
    pub name: String,
    #[serde(rename = "type")]
    pub agent_type: String,
    pub tools: Vec<AgentTool>,
    pub llm_config: LlmSettingsEcho,
}

impl From<AgentConfig> for AgentConfigEcho {
    fn from(config: AgentConfig) -> Self {
        Self {
            name: config.name,
            agent_type: config.agent_type,
            tools: config.tools,
            llm_config: config.llm_config.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Human-readable liveness message
    pub message: String,

    /// Current server time, ISO 8601
    pub timestamp: String,
}

/// Classification of a failed attempt, used to pick the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Malformed or out-of-range input field
    Validation,
    /// The agent could not be instantiated
    Construction,
    /// The agent ran but failed internally
    Execution,
    /// The bounded execution deadline elapsed
    Timeout,
}

impl FailureKind {
    fn status_code(self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Construction | Self::Execution => StatusCode::BAD_GATEWAY,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

/// Uniform response envelope returned by every endpoint.
///
/// # Invariants
/// - A success never carries an error message; an error never carries a
///   result. The constructors are the only way to build one.
/// - Core executions populate `result`; configuration echoes populate
///   `message` + `data`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResponseEnvelope {
    Success {
        #[serde(skip_serializing_if = "Option::is_none")]
        result: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        data: Option<Value>,
    },
    Error {
        message: String,
        #[serde(skip)]
        kind: FailureKind,
    },
}

impl ResponseEnvelope {
    /// Successful command execution carrying the agent's result.
    pub fn success(result: Value) -> Self {
        Self::Success {
            result: Some(result),
            message: None,
            data: None,
        }
    }

    /// Successful configuration echo: confirmation message plus redacted data.
    ///
    /// A payload that cannot be serialized is normalized into an error
    /// envelope rather than panicking.
    pub fn success_with_data<T: Serialize>(message: impl Into<String>, data: &T) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => Self::Success {
                result: None,
                message: Some(message.into()),
                data: Some(value),
            },
            Err(e) => Self::error(
                FailureKind::Execution,
                format!("failed to serialize response data: {}", e),
            ),
        }
    }

    /// Failure with a human-readable message.
    pub fn error(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            kind,
        }
    }

    /// Whether this envelope reports a failure.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl From<ValidationError> for ResponseEnvelope {
    fn from(e: ValidationError) -> Self {
        Self::error(FailureKind::Validation, e.to_string())
    }
}

impl From<AgentError> for ResponseEnvelope {
    fn from(e: AgentError) -> Self {
        let kind = match &e {
            AgentError::Construction(_) => FailureKind::Construction,
            AgentError::Execution(_) => FailureKind::Execution,
            AgentError::Timeout(_) => FailureKind::Timeout,
        };
        Self::error(kind, e.to_string())
    }
}

impl IntoResponse for ResponseEnvelope {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Success { .. } => StatusCode::OK,
            Self::Error { kind, .. } => kind.status_code(),
        };
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_settings() -> LlmSettings {
        LlmSettings {
            model: "gpt-4o".to_string(),
            base_url: "https://api.example.com/v1".to_string(),
            api_key: "sk-secret-value".to_string(),
            max_tokens: 4096,
            temperature: 0.7,
            api_type: String::new(),
            api_version: String::new(),
        }
    }

    #[test]
    fn command_validation_rejects_empty_and_whitespace() {
        let empty = CommandRequest {
            command: String::new(),
        };
        assert_eq!(
            empty.validate().unwrap_err(),
            ValidationError::EmptyField("command")
        );

        let blank = CommandRequest {
            command: "   ".to_string(),
        };
        assert_eq!(
            blank.validate().unwrap_err(),
            ValidationError::EmptyField("command")
        );
    }

    #[test]
    fn command_validation_is_deterministic() {
        let req = CommandRequest {
            command: String::new(),
        };
        assert_eq!(req.validate().unwrap_err(), req.validate().unwrap_err());
    }

    #[test]
    fn settings_validation_rejects_zero_max_tokens() {
        let mut settings = sample_settings();
        settings.max_tokens = 0;
        assert_eq!(
            settings.validate().unwrap_err(),
            ValidationError::NotPositive("max_tokens")
        );
    }

    #[test]
    fn settings_echo_never_contains_api_key() {
        let settings = sample_settings();
        let echoed = serde_json::to_value(LlmSettingsEcho::from(settings)).unwrap();
        assert!(echoed.get("api_key").is_none());
        assert!(!echoed.to_string().contains("sk-secret-value"));
        assert_eq!(echoed["model"], "gpt-4o");
    }

    #[test]
    fn agent_config_echo_redacts_nested_secret() {
        let config = AgentConfig {
            name: "manus".to_string(),
            agent_type: "general".to_string(),
            tools: vec![AgentTool {
                name: "browser".to_string(),
                description: None,
            }],
            llm_config: sample_settings(),
        };
        let echoed = serde_json::to_value(AgentConfigEcho::from(config)).unwrap();
        assert!(echoed["llm_config"].get("api_key").is_none());
        assert!(!echoed.to_string().contains("sk-secret-value"));
        assert_eq!(echoed["type"], "general");
        assert_eq!(echoed["tools"][0]["name"], "browser");
    }

    #[test]
    fn success_envelope_shape() {
        let envelope = ResponseEnvelope::success(json!("3 files found"));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({"status": "success", "result": "3 files found"})
        );
    }

    #[test]
    fn error_envelope_shape() {
        let envelope = ResponseEnvelope::error(FailureKind::Execution, "boom");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!({"status": "error", "message": "boom"}));
    }

    #[test]
    fn envelope_never_mixes_result_and_message() {
        let success = serde_json::to_value(ResponseEnvelope::success(json!(1))).unwrap();
        assert!(success.get("message").is_none());

        let error =
            serde_json::to_value(ResponseEnvelope::error(FailureKind::Execution, "x")).unwrap();
        assert!(error.get("result").is_none());
        assert!(error.get("data").is_none());
    }

    #[test]
    fn failure_kinds_map_to_distinct_non_200_statuses() {
        assert_eq!(
            FailureKind::Validation.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            FailureKind::Construction.status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(FailureKind::Execution.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            FailureKind::Timeout.status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
    }

    #[test]
    fn agent_error_messages_surface_verbatim() {
        let envelope = ResponseEnvelope::from(AgentError::Execution("boom".to_string()));
        match envelope {
            ResponseEnvelope::Error { message, kind } => {
                assert_eq!(message, "boom");
                assert_eq!(kind, FailureKind::Execution);
            }
            _ => panic!("expected error envelope"),
        }
    }
}
