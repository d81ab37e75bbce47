//! HTTP liveness endpoint for external health checks. Shares nothing with the pipeline.

use std::net::SocketAddr;

use axum::{http::StatusCode, routing::get, Router};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

pub const ALIVE_BODY: &str = "Bot is alive";

async fn alive() -> (StatusCode, &'static str) {
    (StatusCode::OK, ALIVE_BODY)
}

/// `GET` on any path answers 200 with [`ALIVE_BODY`]; other methods get 405.
pub fn router() -> Router {
    Router::new().fallback_service(get(alive))
}

/// Serves [`router`] on an already bound listener until the task is dropped.
pub async fn serve(listener: TcpListener) -> std::io::Result<()> {
    axum::serve(listener, router()).await
}

/// Binds `addr` and serves in a background task. Bind or serve failures are logged and end the
/// task; the bot keeps running.
pub fn spawn(addr: SocketAddr) -> JoinHandle<()> {
    tokio::spawn(async move {
        let listener = match TcpListener::bind(addr).await {
            Ok(l) => l,
            Err(e) => {
                error!(addr = %addr, error = %e, "Failed to bind liveness endpoint");
                return;
            }
        };
        info!(addr = %addr, "Liveness endpoint listening");
        if let Err(e) = serve(listener).await {
            error!(error = %e, "Liveness endpoint stopped");
        }
    })
}
