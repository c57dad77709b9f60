//! OAuth2 client-credentials token management.
//!
//! # Responsibilities
//! - Exchange client id/secret for a bearer token
//! - Cache the token for its stated lifetime, minus a safety margin
//! - Fold every transport and parse fault into a single failure mode

use std::time::{Duration, Instant};

use serde::Deserialize;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::config::ProviderConfig;

/// Subtracted from the provider's stated lifetime. The expiry is only ever
/// shortened, never extended past what the provider reported.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Errors from token acquisition. Callers treat both variants as "no token
/// available" and proceed to fallback data; neither is retried here.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Client id/secret not configured. No network attempt was made.
    #[error("provider credentials not configured")]
    AbsentCredentials,

    /// Token exchange failed: network fault, non-2xx status, or a response
    /// missing the expected fields.
    #[error("token request failed: {0}")]
    Request(String),
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_valid(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// Shape of the provider's token response. Unknown fields are ignored.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

/// Acquires and caches bearer tokens for the provider API.
///
/// The cached token never leaves this type except as an opaque string for
/// the `Authorization` header.
pub struct TokenManager {
    credentials: Option<(String, String)>,
    token_url: String,
    http: reqwest::Client,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenManager {
    pub fn new(config: &ProviderConfig, http: reqwest::Client) -> Self {
        let credentials = match (&config.client_id, &config.client_secret) {
            (Some(id), Some(secret)) => Some((id.clone(), secret.clone())),
            _ => None,
        };
        Self {
            credentials,
            token_url: config.token_url.clone(),
            http,
            cached: Mutex::new(None),
        }
    }

    /// Whether a client id/secret pair is configured at all.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Return a valid bearer token, reusing the cached one when possible.
    ///
    /// The cache lock is held across a refresh, so concurrent callers wait
    /// for one exchange instead of racing to issue their own.
    pub async fn bearer_token(&self) -> Result<String, TokenError> {
        let (client_id, client_secret) = self
            .credentials
            .as_ref()
            .ok_or(TokenError::AbsentCredentials)?;

        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.is_valid() {
                return Ok(token.value.clone());
            }
        }

        let token = self.request_token(client_id, client_secret).await?;
        let value = token.value.clone();
        *cached = Some(token);
        Ok(value)
    }

    /// One client-credentials exchange. A single attempt per refresh; retry
    /// policy belongs to callers, and this system has none.
    async fn request_token(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<CachedToken, TokenError> {
        let response = self
            .http
            .post(&self.token_url)
            .basic_auth(client_id, Some(client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| TokenError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TokenError::Request(format!(
                "token endpoint returned {status}"
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| TokenError::Request(e.to_string()))?;

        metrics::counter!("wcl_token_refresh_total").increment(1);
        tracing::debug!(expires_in = body.expires_in, "Provider token refreshed");

        let lifetime = Duration::from_secs(body.expires_in);
        let expires_at = Instant::now() + lifetime.saturating_sub(EXPIRY_MARGIN);
        Ok(CachedToken {
            value: body.access_token,
            expires_at,
        })
    }
}
