//! HTTP interface to the selector.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use deploypick_schema::{AnalyzeProjectRequest, PlatformProfile, Recommendation};
use deploypick_selector::Selector;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{debug, info};

/// Per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    selector: Arc<Selector>,
}

async fn analyze_project(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeProjectRequest>,
) -> Json<Recommendation> {
    debug!("Analyzing {} submitted files", request.files.len());
    Json(state.selector.recommend(&request.files))
}

async fn list_platforms(State(state): State<AppState>) -> Json<Vec<PlatformProfile>> {
    Json(state.selector.catalog().to_vec())
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Requests running past `duration` are answered with 408.
fn timeout_layer(duration: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, duration)
}

/// Build the router.
pub fn create_router(selector: Arc<Selector>) -> Router {
    Router::new()
        .route("/analyze-project", post(analyze_project))
        .route("/platforms", get(list_platforms))
        .route("/health", get(health))
        .layer(timeout_layer(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { selector })
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}

/// Serve until Ctrl-C.
pub async fn serve(selector: Arc<Selector>, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(selector))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
