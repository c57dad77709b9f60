//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Provider credentials and the listen port can additionally be overlaid
//! from the environment (`WCL_CLIENT_ID`, `WCL_CLIENT_SECRET`, `PORT`).

use serde::{Deserialize, Serialize};

/// Root configuration for the rankings API.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,

    /// Remote analytics provider settings.
    pub provider: ProviderConfig,

    /// Response memoization settings.
    pub cache: CacheConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Defaults plus environment overlay. Missing credentials are a valid
    /// configuration: the service runs in fallback-only mode.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Overlay environment variables onto whatever was loaded so far.
    pub fn apply_env(&mut self) {
        if let Ok(id) = std::env::var("WCL_CLIENT_ID") {
            if !id.is_empty() {
                self.provider.client_id = Some(id);
            }
        }
        if let Ok(secret) = std::env::var("WCL_CLIENT_SECRET") {
            if !secret.is_empty() {
                self.provider.client_secret = Some(secret);
            }
        }
        if let Ok(port) = std::env::var("PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!(value = %port, "Ignoring unparseable PORT"),
            }
        }
    }

    /// Socket address string the listener binds to.
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind interface (e.g. "0.0.0.0").
    pub bind_address: String,

    /// Listen port; overridable via `PORT`.
    pub port: u16,

    /// Total request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3001,
            request_timeout_secs: 30,
        }
    }
}

/// Remote analytics provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// OAuth2 client id; overridable via `WCL_CLIENT_ID`.
    pub client_id: Option<String>,

    /// OAuth2 client secret; overridable via `WCL_CLIENT_SECRET`.
    pub client_secret: Option<String>,

    /// Client-credentials token endpoint.
    pub token_url: String,

    /// GraphQL query endpoint.
    pub api_url: String,

    /// Timeout for outbound provider requests in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            token_url: "https://www.warcraftlogs.com/oauth/token".to_string(),
            api_url: "https://www.warcraftlogs.com/api/v2/client".to_string(),
            request_timeout_secs: 10,
        }
    }
}

/// Response memoization configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    /// How long a memoized response stays valid, in seconds.
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_secs: 300 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.cache.ttl_secs, 300);
        assert!(config.provider.client_id.is_none());
        assert!(config.provider.client_secret.is_none());
        assert_eq!(config.listen_address(), "0.0.0.0:3001");
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_src = r#"
            [server]
            port = 8080

            [provider]
            client_id = "abc"
            client_secret = "def"

            [cache]
            ttl_secs = 60
        "#;
        let config: AppConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.provider.client_id.as_deref(), Some("abc"));
        assert_eq!(config.cache.ttl_secs, 60);
        // Unset sections keep their defaults.
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert!(config.provider.token_url.contains("warcraftlogs.com"));
    }
}
