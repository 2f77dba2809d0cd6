use std::sync::Arc;

use tower_http::cors::CorsLayer;

use chat_relay::config::Config;
use chat_relay::routes;
use chat_relay::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let addr = format!("0.0.0.0:{}", config.port);
    let port = config.port;

    let state = Arc::new(AppState::new(config));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("🚀 Relay running at http://localhost:{port}");
    axum::serve(listener, app).await?;

    Ok(())
}
