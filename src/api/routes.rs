//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::agent::runtime_factory;
use crate::config::Config;
use crate::dispatch::CommandDispatcher;

use super::agents as agents_api;
use super::llm as llm_api;
use super::types::*;

/// Shared application state, constructed once at startup.
pub struct AppState {
    pub config: Config,
    /// Executes commands against freshly constructed agents
    pub dispatcher: CommandDispatcher,
}

/// Build the application router.
///
/// Cross-origin policy is wide open (all origins, methods, headers) - the
/// panel is meant for trusted/internal deployment only.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/api/execute", post(execute_command))
        .route("/api/llm/settings", post(llm_api::update_llm_settings))
        .route("/api/agents", post(agents_api::create_agent))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let dispatcher = CommandDispatcher::new(
        runtime_factory(config.clone()),
        config.command_timeout,
    );
    let state = Arc::new(AppState {
        config: config.clone(),
        dispatcher,
    });

    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for SIGINT/SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "API is running".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Execute a command against a fresh agent instance.
///
/// Validation rejects before the agent factory is ever invoked; the
/// dispatcher converts every downstream failure into an error envelope.
async fn execute_command(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CommandRequest>,
) -> ResponseEnvelope {
    if let Err(e) = req.validate() {
        return ResponseEnvelope::from(e);
    }
    state.dispatcher.execute(&req.command).await
}
