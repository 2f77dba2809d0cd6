use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower::util::ServiceExt;

use chat_relay::config::Config;
use chat_relay::routes::create_router;
use chat_relay::state::AppState;

fn test_state(webhook_url: &str, timeout_ms: u64) -> Arc<AppState> {
    Arc::new(AppState::new(Config {
        webhook_url: webhook_url.to_string(),
        timeout_ms,
        ..Config::default()
    }))
}

async fn spawn_upstream(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/webhook")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_chat(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let state = test_state("http://example.invalid/webhook", 20_000);
    let app = create_router().with_state(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["webhookConfigured"], true);
    assert_eq!(body["target"], "http://example.invalid/webhook");
}

#[tokio::test]
async fn test_get_chat_is_rejected_with_guidance() {
    let state = test_state("http://example.invalid/webhook", 20_000);
    let app = create_router().with_state(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/chat")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Use POST /api/chat with JSON { message }");
}

#[tokio::test]
async fn test_chat_requires_a_message() {
    let state = test_state("http://example.invalid/webhook", 20_000);
    let app = create_router().with_state(state);

    for body in [r#"{}"#, r#"{"message": 42}"#, r#"{"message": ""}"#] {
        let response = app.clone().oneshot(post_chat(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Message is required");
    }
}

#[tokio::test]
async fn test_mock_endpoint_echoes() {
    let state = test_state("http://example.invalid/webhook", 20_000);
    let app = create_router().with_state(state);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/mock")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"message": "ping"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["webhookResponse"]["text"], "You said: ping");

    // No message still gets a greeting
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/mock")
                .header("content-type", "application/json")
                .body(Body::from(r#"{}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["webhookResponse"]["text"], "Hello! Ask me anything.");
}

#[tokio::test]
async fn test_chat_wraps_upstream_body_verbatim() {
    let upstream = Router::new().route(
        "/webhook",
        post(|| async { Json(json!({ "text": "hi there" })) }),
    );
    let target = spawn_upstream(upstream).await;

    let app = create_router().with_state(test_state(&target, 20_000));
    let response = app
        .oneshot(post_chat(r#"{"message": "hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["webhookResponse"], json!({ "text": "hi there" }));
}

#[tokio::test]
async fn test_chat_sends_message_under_all_aliases() {
    // Upstream echoes the payload it received.
    let upstream = Router::new().route(
        "/webhook",
        post(|Json(payload): Json<Value>| async move { Json(payload) }),
    );
    let target = spawn_upstream(upstream).await;

    let app = create_router().with_state(test_state(&target, 20_000));
    let response = app
        .oneshot(post_chat(
            r#"{"message": "hello", "chatId": "abc", "route": "general"}"#,
        ))
        .await
        .unwrap();

    let body = body_json(response).await;
    let seen = &body["webhookResponse"];
    for field in ["message", "text", "prompt", "input"] {
        assert_eq!(seen[field], "hello", "missing alias {field}");
    }
    assert_eq!(seen["chatId"], "abc");
    assert_eq!(seen["route"], "general");
}

#[tokio::test]
async fn test_chat_passes_upstream_failure_through() {
    let upstream = Router::new().route(
        "/webhook",
        post(|| async { (StatusCode::BAD_GATEWAY, Json(json!({ "error": "boom" }))) }),
    );
    let target = spawn_upstream(upstream).await;

    let app = create_router().with_state(test_state(&target, 20_000));
    let response = app
        .oneshot(post_chat(r#"{"message": "hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["upstreamStatus"], 502);
    assert_eq!(body["upstreamData"]["error"], "boom");
    assert_eq!(body["target"], target);
    assert_eq!(body["error"], "Request failed with status code 502");
}

#[tokio::test]
async fn test_chat_times_out_as_500() {
    let upstream = Router::new().route(
        "/webhook",
        post(|| async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Json(json!({ "text": "too late" }))
        }),
    );
    let target = spawn_upstream(upstream).await;

    let app = create_router().with_state(test_state(&target, 100));
    let response = app
        .oneshot(post_chat(r#"{"message": "hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["upstreamStatus"], 500);
    assert_eq!(body["upstreamData"], Value::Null);
}
