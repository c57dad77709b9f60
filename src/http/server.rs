//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all API routes
//! - Wire up middleware (CORS, request timeout, tracing)
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::extract::Request;
use axum::http::{header, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::cache::TtlCache;
use crate::config::AppConfig;
use crate::http::handlers;
use crate::rankings::RankingService;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RankingService>,
    pub responses: TtlCache<serde_json::Value>,
}

/// HTTP server for the rankings API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and service.
    pub fn new(config: &AppConfig, service: Arc<RankingService>) -> Self {
        let state = AppState {
            service,
            responses: TtlCache::new(Duration::from_secs(config.cache.ttl_secs)),
        };

        Self {
            router: Self::build_router(config, state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]);

        Router::new()
            .route("/api/health", get(handlers::health))
            .route("/api/rankings", get(handlers::all_rankings))
            .route("/api/rankings/{spec_id}", get(handlers::spec_ranking))
            .route("/api/trinkets/{spec_id}", get(handlers::spec_trinkets))
            .fallback(handlers::not_found)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(middleware::from_fn(options_ok))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// The assembled router; used by tests to drive requests in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Answer every OPTIONS request with an empty 200. Preflights are handled
/// by the CORS layer before they reach this; this covers bare OPTIONS.
async fn options_ok(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(request).await
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
