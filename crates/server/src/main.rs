//! my-awesome-demo web server.
//!
//! Serves the status API and the built single-page frontend.

mod config;
mod routes;

use std::path::Path;

use anyhow::Context;
use axum::{Router, routing::get};
use clap::Parser;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use web_types::APP_NAME;

use config::ServerConfig;
use routes::{api_not_found, health, welcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .init();

    info!(service = APP_NAME, "starting server");

    let addr = config.socket_addr()?;
    if !config.static_dir.join("index.html").is_file() {
        warn!(
            static_dir = %config.static_dir.display(),
            "frontend build not found; only the API will respond"
        );
    }

    let app = build_router(&config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "server listening");

    axum::serve(listener, app).await.context("server failed")?;

    Ok(())
}

/// Per-request span and access line, both at INFO.
fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

/// Build the application router.
///
/// Unknown `/api/*` paths get a JSON 404. Other paths are served from
/// `static_dir`; anything not found there gets `index.html` so the
/// frontend router can pick the view.
fn build_router(static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let spa = ServeDir::new(static_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    let api_routes = Router::new()
        .route("/", get(welcome))
        .fallback(api_not_found);

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health))
        .fallback_service(spa)
        .layer(trace_layer())
        .layer(cors)
}
