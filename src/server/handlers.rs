use super::types::{AskRequest, AskResponse, ErrorResponse, HealthResponse};
use crate::{Error, agent::AgentProxy};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

static INDEX_HTML: &str = include_str!("../../static/index.html");

#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<AgentProxy>,
}

/// Serves the embedded chat page at `GET /`.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Liveness probe; does not depend on agent configuration.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Server is healthy",
    })
}

pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Anonymous callers get a fresh session so they never share one
    // upstream conversation context.
    let session_id = request
        .session_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let question = request.question.unwrap_or_default();

    match state.proxy.ask(&question, &session_id).await {
        Ok(answer) => {
            info!("Answered question for session: {}", session_id);
            Ok(Json(AskResponse { answer }))
        }
        Err(e) => {
            error!("Failed to answer question for session {}: {}", session_id, e);
            Err((error_status(&e), Json(ErrorResponse { error: e.to_string() })))
        }
    }
}

fn error_status(error: &Error) -> StatusCode {
    match error {
        Error::Validation(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
