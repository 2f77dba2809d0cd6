// src/services/relay.rs
use serde_json::Value;

use crate::error::RelayError;
use crate::message::WebhookPayload;
use crate::state::AppState;

/// Forward a payload to the configured webhook and hand back its body
/// verbatim. One attempt, fixed timeout, no retry. Failures keep every
/// piece of upstream detail we can get at.
pub async fn forward_to_webhook(
    state: &AppState,
    payload: &WebhookPayload,
) -> Result<Value, RelayError> {
    let target = state.config.webhook_url.clone();

    let response = state
        .http
        .post(&target)
        .timeout(state.config.timeout())
        .json(payload)
        .send()
        .await
        .map_err(|err| upstream_error(err, &target))?;

    let status = response.status();
    let body = read_body(response).await;

    if !status.is_success() {
        let message = format!("Request failed with status code {}", status.as_u16());
        tracing::error!(
            status = status.as_u16(),
            error = %message,
            data = ?body,
            "webhook call failed"
        );
        return Err(RelayError::Upstream {
            status: status.as_u16(),
            message,
            data: body,
            target,
        });
    }

    Ok(body.unwrap_or(Value::Null))
}

fn upstream_error(err: reqwest::Error, target: &str) -> RelayError {
    let status = err.status().map(|s| s.as_u16()).unwrap_or(500);
    let message = if err.is_timeout() {
        format!("Request to webhook timed out: {err}")
    } else {
        err.to_string()
    };
    tracing::error!(status, error = %message, "webhook call failed");
    RelayError::Upstream {
        status,
        message,
        data: None,
        target: target.to_string(),
    }
}

// The upstream schema is unknown, so a non-JSON body is carried as a string.
async fn read_body(response: reqwest::Response) -> Option<Value> {
    let text = response.text().await.ok()?;
    if text.is_empty() {
        return None;
    }
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(text)),
    }
}
