//! AI Quest · Prompt Mission Backend
//!
//! - Axum HTTP + WebSocket API over per-player game sessions
//! - Rule-based prompt scoring (per-level keyword rubrics + length heuristics)
//! - Ethics scenarios with shuffled choices
//! - Static SPA fallback (./static/index.html)
//!
//! Important env variables:
//!   PORT              : u16 (default 3000)
//!   GAME_CONFIG_PATH  : path to TOML config (scoring constants + optional level/scenario bank)
//!   SESSION_IDLE_TTL_SECS : idle HTTP sessions are evicted after this many seconds (default 1800)
//!   STATIC_DIR        : directory served as the front end (default "./static")
//!   LOG_LEVEL         : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT        : "pretty" (default) or "json"

mod telemetry;
mod domain;
mod error;
mod config;
mod seeds;
mod scoring;
mod shuffle;
mod session;
mod ethics;
mod state;
mod protocol;
mod logic;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::routes::build_router;
use crate::state::{spawn_session_sweeper, AppState};

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Build shared application state (compiled rubrics, content, session store).
  let state = Arc::new(AppState::new());
  let _sweeper = spawn_session_sweeper(state.clone());

  let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "./static".into());

  // Build the HTTP router with routes, CORS and tracing layers.
  let app = build_router(state.clone(), &static_dir);

  // Read port from env or default to 3000.
  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "aiquest_backend", %addr, %static_dir, "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(target: "aiquest_backend", error = %e, "Failed to listen for shutdown signal");
    std::future::pending::<()>().await;
  }
  info!(target: "aiquest_backend", "Shutdown signal received");
}
