// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize)]
pub struct ChatRequest {
    /// Kept untyped so a missing or non-string message reaches our own
    /// validation instead of being rejected by the JSON extractor.
    #[serde(default)]
    pub message: Value,
    #[serde(default, rename = "chatId")]
    pub chat_id: Option<String>,
    #[serde(default)]
    pub route: Option<String>,
}

/// Outbound body for the webhook. The message is duplicated under several
/// field names because webhook consumers disagree on which one they read.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    pub message: String,
    pub text: String,
    pub prompt: String,
    pub input: String,
}

impl WebhookPayload {
    pub fn new(message: &str, chat_id: Option<String>, route: Option<String>) -> Self {
        Self {
            chat_id,
            route,
            message: message.to_string(),
            text: message.to_string(),
            prompt: message.to_string(),
            input: message.to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSuccess {
    pub success: bool,
    pub webhook_response: Value,
}

impl ChatSuccess {
    pub fn new(webhook_response: Value) -> Self {
        Self {
            success: true,
            webhook_response,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub webhook_configured: bool,
    pub target: String,
}

#[derive(Deserialize)]
pub struct MockRequest {
    #[serde(default)]
    pub message: Option<String>,
}
