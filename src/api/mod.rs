//! HTTP API for the agent panel.
//!
//! ## Endpoints
//!
//! - `GET /` - Liveness probe
//! - `POST /api/execute` - Execute a command against a fresh agent
//! - `POST /api/llm/settings` - Validate and echo LLM provider settings
//! - `POST /api/agents` - Validate and echo an agent configuration

mod agents;
mod llm;
mod routes;
pub mod types;

pub use routes::{router, serve, AppState};
pub use types::*;
