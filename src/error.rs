// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use thiserror::Error;

/// Everything the relay can answer with besides a success payload. Failures
/// never escape as a panic or a bare 500; they always render as the
/// structured JSON shape the client expects.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{0}")]
    BadRequest(String),

    /// The webhook call failed: network error, timeout, or a non-2xx status.
    /// Carries whatever diagnostic detail the upstream gave us.
    #[error("{message}")]
    Upstream {
        status: u16,
        message: String,
        data: Option<Value>,
        target: String,
    },
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            RelayError::BadRequest(error) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "error": error })),
            )
                .into_response(),
            RelayError::Upstream {
                status,
                message,
                data,
                target,
            } => {
                let code =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let body = json!({
                    "success": false,
                    "error": message,
                    "upstreamStatus": status,
                    "upstreamData": data,
                    "target": target,
                });
                (code, Json(body)).into_response()
            }
        }
    }
}
