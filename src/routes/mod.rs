// src/routes/mod.rs
pub mod chat;

use axum::{
    Router,
    routing::{get, post},
};
use self::chat::{chat_get_handler, chat_handler, health_handler, mock_handler};
use tower_http::trace::TraceLayer;

use crate::state::SharedState;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/chat", get(chat_get_handler).post(chat_handler))
        .route("/api/mock", post(mock_handler))
        .layer(TraceLayer::new_for_http())
}
