//! Remote ranking queries against the provider's GraphQL API.
//!
//! # Responsibilities
//! - Issue the one fixed ranking query with a bearer token
//! - Map the narrow slice of the response the service needs
//! - Report every failure mode as `Unavailable` data, never an error type
//!   that propagates

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::config::ProviderConfig;
use crate::specs::SpecDescriptor;
use crate::wcl::token::{TokenError, TokenManager};

/// Encounter the fixed query targets. The PTR provider does not publish
/// rankings for it yet, so this path currently resolves to
/// `Unavailable::NoData`; the query machinery stays live for when it does.
const ENCOUNTER_ID: u32 = 3009;

/// Mythic difficulty.
const DIFFICULTY: u32 = 5;

const RANKING_QUERY: &str = r#"
query SpecRankings($encounterId: Int!, $className: String!, $specName: String!, $difficulty: Int!) {
  worldData {
    encounter(id: $encounterId) {
      characterRankings(
        className: $className
        specName: $specName
        difficulty: $difficulty
        metric: dps
        timeframe: Today
      )
    }
  }
}
"#;

/// Why the remote path produced no data. Consumed by the ranking service,
/// which falls back to the local dataset; never surfaced to API callers.
#[derive(Debug, Error)]
pub enum Unavailable {
    #[error("provider credentials not configured")]
    MissingCredentials,

    #[error("token acquisition failed: {0}")]
    Token(String),

    #[error("provider request failed: {0}")]
    Transport(String),

    #[error("provider returned errors: {0}")]
    Provider(String),

    #[error("no rankings published for the target encounter")]
    NoData,
}

/// The slice of a provider ranking the service consumes.
#[derive(Debug, Clone)]
pub struct RemoteRanking {
    pub throughput: u64,
    pub rank: u32,
    pub percentile: u8,
    pub sample_size: u32,
}

// Narrow response mapping: only the fields we read are declared, everything
// else the provider sends is ignored for forward compatibility.

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    data: Option<QueryData>,
    #[serde(default)]
    errors: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct QueryData {
    #[serde(rename = "worldData")]
    world_data: Option<WorldData>,
}

#[derive(Deserialize)]
struct WorldData {
    encounter: Option<Encounter>,
}

#[derive(Deserialize)]
struct Encounter {
    #[serde(rename = "characterRankings")]
    character_rankings: Option<CharacterRankings>,
}

#[derive(Deserialize)]
struct CharacterRankings {
    #[serde(default)]
    rankings: Vec<ProviderRanking>,
    #[serde(default)]
    count: Option<u32>,
}

#[derive(Deserialize)]
struct ProviderRanking {
    amount: f64,
    #[serde(default)]
    rank: Option<u32>,
    #[serde(default)]
    percentile: Option<f64>,
}

/// Client for the provider's query endpoint.
pub struct WclClient {
    tokens: TokenManager,
    api_url: String,
    http: reqwest::Client,
}

impl WclClient {
    pub fn new(config: &ProviderConfig, http: reqwest::Client) -> Self {
        Self {
            tokens: TokenManager::new(config, http.clone()),
            api_url: config.api_url.clone(),
            http,
        }
    }

    /// Whether the remote path is configured at all.
    pub fn has_credentials(&self) -> bool {
        self.tokens.has_credentials()
    }

    /// Fetch live rankings for one specialization.
    ///
    /// Without credentials this returns immediately; no network call is
    /// attempted.
    pub async fn fetch_ranking(
        &self,
        descriptor: &SpecDescriptor,
    ) -> Result<RemoteRanking, Unavailable> {
        let token = match self.tokens.bearer_token().await {
            Ok(token) => token,
            Err(TokenError::AbsentCredentials) => return Err(Unavailable::MissingCredentials),
            Err(TokenError::Request(reason)) => return Err(Unavailable::Token(reason)),
        };

        let body = json!({
            "query": RANKING_QUERY,
            "variables": {
                "encounterId": ENCOUNTER_ID,
                "className": descriptor.class_name,
                "specName": descriptor.spec_name,
                "difficulty": DIFFICULTY,
            },
        });

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| Unavailable::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Unavailable::Transport(format!(
                "provider returned {status}"
            )));
        }

        let parsed: QueryResponse = response
            .json()
            .await
            .map_err(|e| Unavailable::Provider(e.to_string()))?;

        if let Some(errors) = parsed.errors {
            return Err(Unavailable::Provider(errors.to_string()));
        }

        let rankings = parsed
            .data
            .and_then(|d| d.world_data)
            .and_then(|w| w.encounter)
            .and_then(|e| e.character_rankings)
            .ok_or(Unavailable::NoData)?;

        let count = rankings.count.unwrap_or(rankings.rankings.len() as u32);
        let best = rankings
            .rankings
            .into_iter()
            .next()
            .ok_or(Unavailable::NoData)?;

        Ok(RemoteRanking {
            throughput: best.amount.round() as u64,
            rank: best.rank.unwrap_or(1),
            percentile: best.percentile.unwrap_or(50.0).round().clamp(0.0, 100.0) as u8,
            sample_size: count,
        })
    }
}
