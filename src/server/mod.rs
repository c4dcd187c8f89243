pub mod handlers;
mod types;

pub use types::{AskRequest, AskResponse, ErrorResponse, HealthResponse};

use crate::{
    Result,
    agent::{AgentProxy, BedrockAgentClient},
    config::Config,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    // Build the Bedrock client once; it is shared read-only by every
    // request.
    let client = BedrockAgentClient::connect(&config.agent.region).await;
    let proxy = AgentProxy::new(Some(Arc::new(client)), config.agent.clone());

    let app = router(handlers::AppState {
        proxy: Arc::new(proxy),
    });

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/ask", post(handlers::ask))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
