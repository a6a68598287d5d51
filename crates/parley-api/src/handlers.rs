//! Route handler functions.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::Uri;
use axum::response::Html;
use axum::Json;
use chrono::{DateTime, Utc};
use parley_core::Entities;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request / response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub intents: usize,
    pub vocabulary_size: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IntentSummary {
    pub name: String,
    pub patterns: usize,
    pub responses: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IntentsResponse {
    pub intents: Vec<IntentSummary>,
}

/// Body of POST /chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub id: Uuid,
    pub response: String,
    pub intent: Option<String>,
    pub confidence: Option<f64>,
    pub route: String,
    pub entities: Entities,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acknowledgement: Option<String>,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Handler functions
// =============================================================================

/// GET / - the self-contained browser chat page.
pub async fn index() -> Html<&'static str> {
    Html(crate::page::CHAT_HTML)
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let model = state.chat.model();
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        intents: model.taxonomy().len(),
        vocabulary_size: model.vocabulary_size(),
    })
}

/// GET /intents - the taxonomy, without the templates themselves.
pub async fn list_intents(State(state): State<AppState>) -> Json<IntentsResponse> {
    let intents = state
        .chat
        .model()
        .taxonomy()
        .iter()
        .map(|intent| IntentSummary {
            name: intent.name.to_string(),
            patterns: intent.patterns.len(),
            responses: intent.responses.len(),
        })
        .collect();
    Json(IntentsResponse { intents })
}

/// POST /chat
///
/// Any well-formed body gets a 200 with a reply, including empty or
/// over-long messages. Only a body that is not the expected JSON is a 400.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload?;
    let reply = state.chat.reply(&request.message).await;

    let id = Uuid::new_v4();
    info!(
        %id,
        intent = reply.intent.as_deref().unwrap_or("-"),
        route = %reply.route,
        "Chat message answered"
    );

    Ok(Json(ChatResponse {
        id,
        response: reply.text,
        intent: reply.intent,
        confidence: reply.confidence,
        route: reply.route.to_string(),
        entities: reply.entities,
        acknowledgement: reply.acknowledgement,
        created_at: Utc::now(),
    }))
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
