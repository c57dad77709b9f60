//! WoW: Midnight Rankings API Server
//!
//! Read-only HTTP API reporting combat-performance and item rankings per
//! character specialization. Live data comes from the Warcraft Logs API
//! when credentials are configured; otherwise every response is generated
//! from a local reference dataset. Either way the response shape is the
//! same — only the `source` field differs.
//!
//! ```text
//! request → response cache (TTL) → ranking service
//!                                      → wcl client (token manager)
//!                                      → fallback generator
//! ```

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use midnight_rankings::config::{load_config, AppConfig};
use midnight_rankings::http::HttpServer;
use midnight_rankings::rankings::RankingService;
use midnight_rankings::wcl::WclClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "midnight_rankings=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "midnight-rankings starting");

    // Optional TOML config file as the first argument; the environment
    // (WCL_CLIENT_ID, WCL_CLIENT_SECRET, PORT) overlays either way.
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => AppConfig::from_env(),
    };

    let remote_configured =
        config.provider.client_id.is_some() && config.provider.client_secret.is_some();
    tracing::info!(
        port = config.server.port,
        cache_ttl_secs = config.cache.ttl_secs,
        warcraft_logs_configured = remote_configured,
        "Configuration loaded"
    );
    if !remote_configured {
        tracing::warn!("Provider credentials absent; serving local fallback data only");
    }

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            midnight_rankings::observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.provider.request_timeout_secs))
        .build()?;
    let service = Arc::new(RankingService::new(WclClient::new(&config.provider, http)));

    let listener = TcpListener::bind(config.listen_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(&config, service);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
