//! API endpoint for LLM provider settings.
//!
//! A thin passthrough: the payload is validated and echoed back with the
//! API key removed. Nothing is persisted.

use axum::response::Json;
use tracing::info;

use super::types::{LlmSettings, LlmSettingsEcho, ResponseEnvelope};

/// POST /api/llm/settings
/// Validate LLM settings and echo them back, redacted.
pub async fn update_llm_settings(Json(settings): Json<LlmSettings>) -> ResponseEnvelope {
    if let Err(e) = settings.validate() {
        return ResponseEnvelope::from(e);
    }

    info!(model = %settings.model, "Updating LLM settings");
    ResponseEnvelope::success_with_data(
        "LLM settings updated successfully",
        &LlmSettingsEcho::from(settings),
    )
}
