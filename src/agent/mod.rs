//! Agent collaborator contract.
//!
//! The panel treats the agent as an opaque collaborator: it accepts one
//! natural-language command and asynchronously produces a result or a
//! failure. A fresh agent is constructed for every command; instances are
//! never pooled or reused, so no agent state crosses requests.
//!
//! Construction goes through an [`AgentFactory`] injected into the
//! dispatcher, which lets tests substitute stub agents without touching the
//! HTTP layer.

mod runtime;

pub use runtime::RuntimeAgent;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;

/// Errors from agent construction or invocation.
///
/// Messages are surfaced verbatim to the caller, so they carry no internal
/// detail beyond what the failure itself reports.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AgentError {
    /// The agent could not be instantiated.
    #[error("{0}")]
    Construction(String),

    /// The agent ran but failed internally.
    #[error("{0}")]
    Execution(String),

    /// The bounded execution deadline elapsed.
    #[error("command execution timed out after {0}s")]
    Timeout(u64),
}

/// Base trait for agents.
///
/// # Invariants
/// - `run()` never panics; all failures are returned as `Err`
/// - One instance serves exactly one command
#[async_trait]
pub trait Agent: Send + Sync {
    /// Execute a single natural-language command to completion.
    ///
    /// # Errors
    ///
    /// Returns `AgentError::Execution` if the agent ran but could not
    /// complete the command.
    async fn run(&self, command: &str) -> Result<serde_json::Value, AgentError>;
}

/// Factory that constructs a fresh agent for each command.
pub type AgentFactory = Arc<dyn Fn() -> Result<Box<dyn Agent>, AgentError> + Send + Sync>;

/// Factory producing [`RuntimeAgent`] instances from the server config.
pub fn runtime_factory(config: Config) -> AgentFactory {
    Arc::new(move || {
        let agent = RuntimeAgent::new(&config)?;
        Ok(Box::new(agent) as Box<dyn Agent>)
    })
}
