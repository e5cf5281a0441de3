//! Gateway server bootstrap and router wiring.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use civic_assistant::CivicAssistant;
use tokio::net::TcpListener;

use crate::endpoints::{
    CHAT_ALIAS_ENDPOINT, CHAT_ENDPOINT, HEALTH_ENDPOINT, SEARCH_ENDPOINT, WARDS_ENDPOINT,
    WARD_DETAIL_ENDPOINT,
};
use crate::handlers::{
    handle_chat, handle_health, handle_search, handle_ward_detail, handle_wards_list,
};

pub const DEFAULT_BIND: &str = "127.0.0.1:8787";
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct GatewayServerConfig {
    pub bind: String,
    pub max_body_bytes: usize,
}

impl Default for GatewayServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Shared handler state; the assistant owns the directory handle.
pub struct GatewayServerState {
    pub(crate) assistant: CivicAssistant,
    pub(crate) max_body_bytes: usize,
}

impl GatewayServerState {
    pub fn new(assistant: CivicAssistant, max_body_bytes: usize) -> Self {
        Self {
            assistant,
            max_body_bytes,
        }
    }
}

pub async fn run_gateway_server(
    config: GatewayServerConfig,
    assistant: CivicAssistant,
) -> Result<()> {
    let bind_addr = config
        .bind
        .parse::<SocketAddr>()
        .with_context(|| format!("invalid --bind '{}'", config.bind))?;

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind civic gateway on {bind_addr}"))?;
    let local_addr = listener
        .local_addr()
        .context("failed to resolve bound civic gateway address")?;

    tracing::info!(
        addr = %local_addr,
        remote_enabled = assistant.remote_enabled(),
        model = assistant.config().model.as_str(),
        "civic gateway starting"
    );
    println!(
        "civic gateway listening: endpoint={} addr={} remote_enabled={}",
        CHAT_ENDPOINT,
        local_addr,
        assistant.remote_enabled()
    );

    let state = Arc::new(GatewayServerState::new(assistant, config.max_body_bytes));
    let app = build_gateway_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("civic gateway exited unexpectedly")?;

    tracing::info!("civic gateway stopped");
    Ok(())
}

pub fn build_gateway_router(state: Arc<GatewayServerState>) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_body_bytes);
    Router::new()
        .route(CHAT_ENDPOINT, post(handle_chat))
        .route(CHAT_ALIAS_ENDPOINT, post(handle_chat))
        .route(HEALTH_ENDPOINT, get(handle_health))
        .route(WARDS_ENDPOINT, get(handle_wards_list))
        .route(WARD_DETAIL_ENDPOINT, get(handle_ward_detail))
        .route(SEARCH_ENDPOINT, get(handle_search))
        .layer(body_limit)
        .with_state(state)
}
