// src/config.rs
use std::time::Duration;

pub const DEFAULT_WEBHOOK_URL: &str =
    "https://rguktstuff784.app.n8n.cloud/webhook/3c15abd5-cc89-47ee-9563-5ddd20d36259/chat";

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_TIMEOUT_MS: u64 = 20_000;

/// Runtime configuration, read once at startup and passed explicitly.
#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub webhook_url: String,
    pub timeout_ms: u64,
    pub api_base: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let webhook_url = std::env::var("WEBHOOK_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string());

        let timeout_ms = std::env::var("WEBHOOK_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let api_base = std::env::var("API_BASE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| format!("http://localhost:{port}"));

        Self {
            port,
            webhook_url,
            timeout_ms,
            api_base,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            api_base: format!("http://localhost:{DEFAULT_PORT}"),
        }
    }
}
