//! Resilient ranking orchestration.
//!
//! # Responsibilities
//! - Validate specialization keys against the universe before any I/O
//! - Try the remote provider first, annotate its results
//! - Silently fall back to the local dataset on any `Unavailable`
//!
//! The one guarantee that matters here: this service never fails solely
//! because the remote provider is unreachable or unconfigured.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::rankings::types::{DataSource, RankingError, RankingResult};
use crate::rankings::{fallback, reference, EXPANSION_NAME, PATCH_VERSION};
use crate::specs::{self, SpecDescriptor};
use crate::wcl::{RemoteRanking, WclClient};

/// Orchestrates remote and fallback ranking acquisition.
pub struct RankingService {
    client: WclClient,
}

impl RankingService {
    pub fn new(client: WclClient) -> Self {
        Self { client }
    }

    /// Whether provider credentials are configured (reported by the health
    /// endpoint; says nothing about reachability).
    pub fn remote_configured(&self) -> bool {
        self.client.has_credentials()
    }

    /// Rank one specialization: remote data when available, local otherwise.
    ///
    /// Unknown keys fail before any network I/O.
    pub async fn get_ranking(&self, spec_id: &str) -> Result<RankingResult, RankingError> {
        let descriptor = specs::descriptor(spec_id)
            .ok_or_else(|| RankingError::UnknownSpecialization(spec_id.to_string()))?;

        match self.client.fetch_ranking(descriptor).await {
            Ok(remote) => Ok(annotate(descriptor, remote)),
            Err(reason) => {
                tracing::debug!(
                    spec = spec_id,
                    %reason,
                    "Remote rankings unavailable, using local dataset"
                );
                metrics::counter!("rankings_fallback_total").increment(1);
                Ok(fallback::generate(descriptor))
            }
        }
    }

    /// Rank every specialization in the universe, in canonical key order.
    pub async fn get_all_rankings(&self) -> BTreeMap<String, RankingResult> {
        let mut results = BTreeMap::new();
        for key in specs::all_keys() {
            if let Ok(ranking) = self.get_ranking(key).await {
                results.insert(key.to_string(), ranking);
            }
        }
        results
    }
}

/// Fill in the fields the provider does not report: population totals, the
/// reference tier, and the fixed patch/expansion metadata.
fn annotate(descriptor: &SpecDescriptor, remote: RemoteRanking) -> RankingResult {
    let entry = reference::entry(descriptor.spec_name);
    let total = specs::population();
    RankingResult {
        rank: remote.rank,
        out_of: total,
        total,
        class_name: descriptor.class_name.to_string(),
        spec: descriptor.spec_name.to_string(),
        throughput: remote.throughput,
        average_throughput: (remote.throughput as f64 * 0.75).round() as u64,
        percentile: remote.percentile,
        tier: entry.tier,
        sample_size: remote.sample_size,
        last_updated: Utc::now(),
        source: DataSource::Remote,
        patch_version: PATCH_VERSION.to_string(),
        expansion_name: EXPANSION_NAME.to_string(),
    }
}
