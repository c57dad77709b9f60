//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Load configuration from a TOML file, overlay the environment, validate.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: AppConfig = toml::from_str(&content)?;
    config.apply_env();
    validate(&config)?;
    Ok(config)
}

/// Reject settings that would otherwise only fail at first use.
pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let urls = [
        ("provider.token_url", &config.provider.token_url),
        ("provider.api_url", &config.provider.api_url),
    ];
    for (field, value) in urls {
        url::Url::parse(value).map_err(|e| ConfigError::Invalid {
            field,
            reason: e.to_string(),
        })?;
    }

    if config.cache.ttl_secs == 0 {
        return Err(ConfigError::Invalid {
            field: "cache.ttl_secs",
            reason: "must be positive".to_string(),
        });
    }
    if config.provider.request_timeout_secs == 0 {
        return Err(ConfigError::Invalid {
            field: "provider.request_timeout_secs",
            reason: "must be positive".to_string(),
        });
    }

    Ok(())
}
