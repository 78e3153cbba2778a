//! HTTP proxy for the chat and quote APIs.
//!
//! Keeps the chat API key on the machine running studymate; browsers and
//! other clients only talk to these endpoints.
//!
//! | Method | Path        | Response                          |
//! |--------|-------------|-----------------------------------|
//! | POST   | `/chat`     | `{ "reply" }` or 500 `{ "error" }` |
//! | POST   | `/api/chat` | same as `/chat`                   |
//! | GET    | `/api/quote`| `{ "text", "author" }`, always 200 |
//! | GET    | `/health`   | `{ "status": "ok" }`              |

use super::chat::{Chat, ChatError};
use super::quote::{Quote, Quotes};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_info, msg_print};
use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;

pub const GENERIC_CHAT_ERROR: &str = "Something went wrong.";

#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<Chat>,
    pub quotes: Arc<Quotes>,
}

impl AppState {
    /// Builds both clients on one shared `reqwest::Client`.
    pub fn from_config(config: &Config, api_key: Option<String>) -> Result<Self> {
        let chat_config = config.chat_or_default();
        let quote_config = config.quote_or_default();
        let timeout = chat_config.timeout_secs.max(quote_config.timeout_secs);
        let client = reqwest::Client::builder().timeout(Duration::from_secs(timeout)).build()?;

        Ok(Self {
            chat: Arc::new(Chat::with_client(client.clone(), &chat_config, api_key)),
            quotes: Arc::new(Quotes::with_client(client, &quote_config)),
        })
    }
}

#[derive(Deserialize, Debug)]
struct ChatRequest {
    #[serde(default)]
    message: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/api/chat", post(chat))
        .route("/api/quote", get(quote))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serves the proxy until Ctrl+C.
pub async fn start_server(state: AppState, host: &str, port: u16) -> Result<()> {
    let host_addr: IpAddr = host
        .parse()
        .map_err(|e: std::net::AddrParseError| msg_error_anyhow!(Message::InvalidHostAddress(host.to_string(), e.to_string())))?;
    let addr = SocketAddr::from((host_addr, port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    msg_print!(Message::ServerStarting(listener.local_addr()?.to_string()));
    msg_print!(Message::ServerStopHint);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    msg_info!(Message::ServerStopped);
    Ok(())
}

async fn chat(State(state): State<AppState>, Json(request): Json<ChatRequest>) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match state.chat.reply(&request.message).await {
        Ok(reply) => Ok(Json(json!({ "reply": reply }))),
        Err(ChatError::MissingApiKey) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": ChatError::MissingApiKey.to_string() })),
        )),
        Err(e) => {
            tracing::warn!(error = %e, "chat proxy request failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": GENERIC_CHAT_ERROR }))))
        }
    }
}

async fn quote(State(state): State<AppState>) -> Json<Quote> {
    Json(state.quotes.fetch().await)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
