use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

use crate::{
    error::RelayError,
    message::{ChatRequest, ChatSuccess, HealthResponse, MockRequest, WebhookPayload},
    services::relay::forward_to_webhook,
    state::SharedState,
};

pub async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        webhook_configured: !state.config.webhook_url.is_empty(),
        target: state.config.webhook_url.clone(),
    })
}

// Help users who GET the chat endpoint in a browser.
pub async fn chat_get_handler() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({
            "success": false,
            "error": "Use POST /api/chat with JSON { message }",
        })),
    )
}

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatSuccess>, RelayError> {
    let message = match payload.message.as_str() {
        Some(m) if !m.is_empty() => m,
        _ => return Err(RelayError::BadRequest("Message is required".to_string())),
    };

    let outbound = WebhookPayload::new(message, payload.chat_id, payload.route);
    let body = forward_to_webhook(&state, &outbound).await?;

    Ok(Json(ChatSuccess::new(body)))
}

// Echo stand-in so the client can be validated without the real webhook.
pub async fn mock_handler(Json(payload): Json<MockRequest>) -> Json<ChatSuccess> {
    let reply = match payload.message.as_deref() {
        Some(m) if !m.is_empty() => format!("You said: {m}"),
        _ => "Hello! Ask me anything.".to_string(),
    };
    Json(ChatSuccess::new(json!({ "text": reply })))
}
