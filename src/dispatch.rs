//! Command dispatch - the execution lifecycle for one command.
//!
//! Each call walks a fixed path: construct a fresh agent through the
//! injected factory, invoke it under a bounded deadline, and normalize the
//! outcome into a [`ResponseEnvelope`]. Failures of any kind are converted
//! at this boundary; nothing propagates to the HTTP layer as an unhandled
//! fault.
//!
//! Execution is at-most-once. A failed command is surfaced to the caller
//! rather than retried, since commands may have file or network side
//! effects inside the agent's tools.

use std::time::Duration;

use tracing::{error, info};
use uuid::Uuid;

use crate::agent::{AgentError, AgentFactory};
use crate::api::types::ResponseEnvelope;

/// Dispatches commands to freshly constructed agent instances.
pub struct CommandDispatcher {
    factory: AgentFactory,
    timeout: Duration,
}

impl CommandDispatcher {
    /// Create a dispatcher with an injected agent factory and execution bound.
    pub fn new(factory: AgentFactory, timeout: Duration) -> Self {
        Self { factory, timeout }
    }

    /// Execute one command against a fresh agent.
    ///
    /// The validator upstream already rejects empty commands; an empty
    /// command reaching this point is treated as an invocation error, not a
    /// crash.
    pub async fn execute(&self, command: &str) -> ResponseEnvelope {
        let attempt = Uuid::new_v4();
        info!(%attempt, command, "Executing command");

        if command.trim().is_empty() {
            let e = AgentError::Execution("command must not be empty".to_string());
            error!(%attempt, error = %e, "Command execution failed");
            return ResponseEnvelope::from(e);
        }

        let agent = match (self.factory)() {
            Ok(agent) => agent,
            Err(e) => {
                error!(%attempt, command, error = %e, "Agent construction failed");
                return ResponseEnvelope::from(e);
            }
        };
        info!(%attempt, "Agent constructed");

        match tokio::time::timeout(self.timeout, agent.run(command)).await {
            Ok(Ok(result)) => {
                info!(%attempt, "Command completed");
                ResponseEnvelope::success(result)
            }
            Ok(Err(e)) => {
                error!(%attempt, command, error = %e, "Command execution failed");
                ResponseEnvelope::from(e)
            }
            Err(_) => {
                let e = AgentError::Timeout(self.timeout.as_secs());
                error!(%attempt, command, error = %e, "Command execution timed out");
                ResponseEnvelope::from(e)
            }
        }
    }
}
