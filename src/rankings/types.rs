//! Ranking value types and the caller-facing error taxonomy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse performance grade, S highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "S")]
    S,
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
    /// Spec name missing from the reference dataset.
    #[serde(rename = "?")]
    Unknown,
}

/// Where a ranking result came from. The only signal consumers get about
/// whether live provider data or the local dataset backed a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataSource {
    Remote,
    LocalFallback,
}

/// A single specialization's ranking, as returned to API consumers.
///
/// Derived per cache miss, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResult {
    pub rank: u32,
    pub out_of: u32,
    pub total: u32,
    #[serde(rename = "class")]
    pub class_name: String,
    pub spec: String,
    pub throughput: u64,
    pub average_throughput: u64,
    pub percentile: u8,
    pub tier: Tier,
    pub sample_size: u32,
    pub last_updated: DateTime<Utc>,
    pub source: DataSource,
    pub patch_version: String,
    pub expansion_name: String,
}

/// Errors surfaced to ranking callers. Remote faults never appear here;
/// they convert to fallback data inside the service.
#[derive(Debug, Error)]
pub enum RankingError {
    /// The requested key is outside the specialization universe.
    #[error("unknown specialization: {0}")]
    UnknownSpecialization(String),
}
