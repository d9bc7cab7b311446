//! API endpoint for agent configuration registration.
//!
//! A thin passthrough: the configuration is validated and echoed back with
//! the nested API key removed. Nothing is persisted.

use axum::response::Json;
use tracing::info;

use super::types::{AgentConfig, AgentConfigEcho, ResponseEnvelope};

/// POST /api/agents
/// Validate an agent configuration and echo it back, redacted.
pub async fn create_agent(Json(config): Json<AgentConfig>) -> ResponseEnvelope {
    if let Err(e) = config.validate() {
        return ResponseEnvelope::from(e);
    }

    info!("Creating agent: {}", config.name);
    let message = format!("Agent {} created successfully", config.name);
    ResponseEnvelope::success_with_data(message, &AgentConfigEcho::from(config))
}
