// src/store/transport.rs
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayRequest {
    pub chat_id: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
}

/// Transport failure with the parsed failure body, when one came back, so
/// the store can prefer the relay's structured `error` field over the raw
/// client error text.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
    pub body: Option<Value>,
}

#[allow(async_fn_in_trait)]
pub trait ChatTransport {
    async fn send_chat(&self, request: &RelayRequest) -> Result<Value, TransportError>;
}

/// Talks to a running relay over HTTP.
pub struct HttpTransport {
    http: reqwest::Client,
    api_base: String,
}

impl HttpTransport {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
        }
    }
}

impl ChatTransport for HttpTransport {
    async fn send_chat(&self, request: &RelayRequest) -> Result<Value, TransportError> {
        let url = format!("{}/api/chat", self.api_base.trim_end_matches('/'));

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|err| TransportError {
                message: err.to_string(),
                body: None,
            })?;

        let status = response.status();
        let body: Option<Value> = response
            .text()
            .await
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok());

        if !status.is_success() {
            return Err(TransportError {
                message: format!("Request failed with status code {}", status.as_u16()),
                body,
            });
        }

        Ok(body.unwrap_or(Value::Null))
    }
}
