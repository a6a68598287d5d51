//! Integration tests for the Parley HTTP API.
//!
//! Every test builds its own router over stub collaborators, so nothing
//! touches the network.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use parley_api::create_router;
use parley_api::error::ErrorBody;
use parley_api::handlers::{ChatResponse, HealthResponse, IntentsResponse};
use parley_api::state::AppState;
use parley_chat::{ChatService, Dispatcher, LOCATION_PROMPT};
use parley_core::ParleyConfig;
use parley_nlu::{EntityExtractor, TrainedModel};
use parley_services::{HeadlinesQuery, StubKnowledge, StubNews, StubWeather, WeatherFailure};

// =============================================================================
// Helpers
// =============================================================================

/// Create a fresh AppState with the given weather stub.
fn make_state_with(weather: Arc<StubWeather>) -> AppState {
    let config = ParleyConfig::default();
    let model = TrainedModel::initialize(&config.nlu).unwrap();
    let dispatcher = Dispatcher::new(
        weather,
        Arc::new(StubNews::default()),
        Arc::new(StubKnowledge::default()),
        HeadlinesQuery::default(),
    );
    let chat = ChatService::new(
        Arc::new(model),
        Arc::new(EntityExtractor::default()),
        Arc::new(dispatcher),
        &config.chat,
    );
    AppState::new(chat, config)
}

fn make_app() -> axum::Router {
    create_router(make_state_with(Arc::new(StubWeather::default())))
}

fn post_json(uri: &str, json: &str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

/// Read full response body bytes.
async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap()
        .to_vec()
}

async fn chat(app: axum::Router, message: &str) -> ChatResponse {
    let body = serde_json::json!({ "message": message }).to_string();
    let resp = app.oneshot(post_json("/chat", &body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

// =============================================================================
// GET /
// =============================================================================

#[tokio::test]
async fn test_index_serves_chat_page() {
    let resp = make_app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"), "{}", content_type);

    let bytes = body_bytes(resp).await;
    let html = String::from_utf8_lossy(&bytes);
    assert!(html.contains("<title>Parley Chat</title>"));
    assert!(html.contains("fetch('/chat'"));
}

#[tokio::test]
async fn test_rejected_body_has_message_for_chat_page() {
    // The page falls back to `message` when a body is rejected.
    let resp = make_app()
        .oneshot(post_json("/chat", r#"{"text": "hello"}"#))
        .await
        .unwrap();
    assert!(!resp.status().is_success());
    let body: Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert!(body.get("response").is_none());
    assert!(!body["message"].as_str().unwrap().is_empty());
}

// =============================================================================
// GET /health, GET /intents
// =============================================================================

#[tokio::test]
async fn test_health_happy_path() {
    let resp = make_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let health: HealthResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.intents, 7);
    assert!(health.vocabulary_size > 0);
}

#[tokio::test]
async fn test_list_intents() {
    let resp = make_app()
        .oneshot(Request::get("/intents").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let list: IntentsResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    let names: Vec<&str> = list.intents.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(
        names,
        ["greet", "weather", "news", "search", "joke", "bye", "help"]
    );
    assert!(list.intents.iter().all(|i| i.patterns > 0));
}

// =============================================================================
// POST /chat
// =============================================================================

#[tokio::test]
async fn test_chat_greeting() {
    let reply = chat(make_app(), "hello").await;
    assert_eq!(reply.intent.as_deref(), Some("greet"));
    assert_eq!(reply.route, "template");
    assert!(!reply.response.is_empty());
    assert!(reply.acknowledgement.is_none());
}

#[tokio::test]
async fn test_chat_weather_reports_entities() {
    let weather = Arc::new(StubWeather::default());
    let app = create_router(make_state_with(weather.clone()));

    let reply = chat(app, "what's the weather in London").await;
    assert_eq!(reply.intent.as_deref(), Some("weather"));
    assert_eq!(reply.route, "weather");
    assert_eq!(reply.entities.location.as_deref(), Some("london"));
    assert!(reply.acknowledgement.is_some());
    assert_eq!(weather.calls(), 1);
}

#[tokio::test]
async fn test_chat_weather_without_location() {
    let weather = Arc::new(StubWeather::default());
    let app = create_router(make_state_with(weather.clone()));

    let reply = chat(app, "weather in").await;
    assert_eq!(reply.response, LOCATION_PROMPT);
    assert_eq!(reply.route, "prompt");
    assert_eq!(weather.calls(), 0);
}

#[tokio::test]
async fn test_chat_collaborator_failure_is_still_ok() {
    let weather = Arc::new(StubWeather::failing(WeatherFailure::NotFound {
        location: "atlantis".into(),
    }));
    let app = create_router(make_state_with(weather));

    let reply = chat(app, "weather in atlantis").await;
    assert!(reply.response.contains("atlantis"), "{}", reply.response);
}

#[tokio::test]
async fn test_chat_empty_message_is_rejected_politely() {
    let reply = chat(make_app(), "   ").await;
    assert_eq!(reply.response, "Please enter a message.");
    assert_eq!(reply.route, "rejected");
    assert!(reply.intent.is_none());
    assert!(reply.confidence.is_none());
}

#[tokio::test]
async fn test_chat_too_long_message() {
    let long = "a".repeat(2001);
    let reply = chat(make_app(), &long).await;
    assert_eq!(reply.route, "rejected");
    assert!(reply.response.contains("2000"));
}

#[tokio::test]
async fn test_chat_ids_are_unique() {
    let app = make_app();
    let a = chat(app.clone(), "hello").await;
    let b = chat(app, "hello").await;
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn test_chat_invalid_json() {
    let resp = make_app()
        .oneshot(post_json("/chat", "{not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(body.error, "bad_request");
    assert!(body.message.contains("message"));
    assert!(body.details.is_some());
}

#[tokio::test]
async fn test_chat_missing_field() {
    let resp = make_app()
        .oneshot(post_json("/chat", r#"{"text": "hello"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorBody = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(body.error, "unprocessable_entity");
}

#[tokio::test]
async fn test_chat_missing_content_type() {
    let req = Request::post("/chat")
        .body(Body::from(r#"{"message": "hello"}"#))
        .unwrap();
    let resp = make_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_chat_body_limit() {
    let huge = serde_json::json!({ "message": "x".repeat(128 * 1024) }).to_string();
    let resp = make_app().oneshot(post_json("/chat", &huge)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_chat_get_not_allowed() {
    let resp = make_app()
        .oneshot(Request::get("/chat").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// Fallback
// =============================================================================

#[tokio::test]
async fn test_unknown_route() {
    let resp = make_app()
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(body["error"], "not_found");
    assert!(body["message"].as_str().unwrap().contains("/nope"));
}
