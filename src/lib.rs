//! # Agent Panel
//!
//! HTTP control surface for an autonomous task-execution agent.
//!
//! Clients submit natural-language commands over HTTP; the panel constructs
//! a fresh agent instance for each command, awaits its asynchronous result,
//! and returns a uniform response envelope.
//!
//! ## Request Flow
//! 1. The router parses and type-checks the payload at the boundary
//! 2. Domain validation rejects bad input before any agent exists
//! 3. The dispatcher constructs an agent, runs the command under a bounded
//!    deadline, and normalizes the outcome into the envelope
//! 4. The envelope serializes as `{status, result}` or `{status, message}`
//!
//! ## Modules
//! - `api`: HTTP surface (routes, wire types, response envelope)
//! - `dispatch`: command dispatcher driving the execution lifecycle
//! - `agent`: agent collaborator contract and the runtime-backed client
//! - `config`: environment-driven configuration

pub mod agent;
pub mod api;
pub mod config;
pub mod dispatch;

pub use config::Config;
pub use dispatch::CommandDispatcher;
