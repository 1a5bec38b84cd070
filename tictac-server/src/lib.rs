//! Tic-tac-toe server - HTTP API for the web UI
//!
//! This crate provides the web backend:
//! - JSON endpoints for CPU move selection and win/tie status
//! - Static file serving for the page and assets
//!
//! Both game endpoints are stateless: each request carries its own
//! board, so no state is shared across requests.

mod error;
mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::services::ServeDir;

pub use error::ApiError;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            static_dir: "static".to_string(),
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig) -> Router {
    let static_service = ServeDir::new(&config.static_dir);

    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Game API
        .route("/cpu_move", post(routes::game::cpu_move))
        .route("/check", post(routes::game::check))
        // Static file serving (must be last)
        .fallback_service(static_service)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let router = create_router(&config);

    tracing::info!("tictac server starting on http://0.0.0.0:{}", config.port);
    tracing::info!("Static files served from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
