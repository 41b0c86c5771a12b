use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use rapport_engine::ReportRenderer;

mod config;
mod error;
mod handlers;
mod models;
mod state;

use config::AppConfig;
use state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let renderer = match ReportRenderer::new() {
        Ok(renderer) => renderer,
        Err(e) => {
            tracing::error!(error = %e, "failed to initialise report renderer");
            std::process::exit(1);
        }
    };

    let state = AppState {
        renderer: Arc::new(renderer),
        config: Arc::new(config),
    };

    let app = Router::new()
        .route("/", get(handlers::hello))
        .route(
            "/generatePDF",
            get(handlers::generate_pdf_from_file).post(handlers::generate_pdf_from_body),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
    tracing::info!("listening on {addr}");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "failed to bind on {addr}");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
