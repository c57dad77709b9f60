//! Fallback ranking generation from the static reference dataset.
//!
//! The sole place randomness enters the system. Jitter is re-drawn on every
//! call so repeated generations vary, but the ±1% bound keeps a value inside
//! its own tier's range.

use chrono::Utc;
use rand::Rng;

use crate::rankings::reference;
use crate::rankings::types::{DataSource, RankingResult};
use crate::rankings::{EXPANSION_NAME, PATCH_VERSION};
use crate::specs::{self, SpecDescriptor};

/// Generate a ranking from the reference dataset.
///
/// Total: unmapped spec names resolve to the documented default entry, so
/// this always produces a structurally valid result.
pub fn generate(descriptor: &SpecDescriptor) -> RankingResult {
    let entry = reference::entry(descriptor.spec_name);
    let mut rng = rand::thread_rng();

    let variance: f64 = rng.gen_range(-0.01..=0.01);
    let throughput = (entry.baseline_throughput as f64 * (1.0 + variance)).round() as u64;
    let average_throughput = (throughput as f64 * 0.75).round() as u64;
    let sample_size = rng.gen_range(8_000..13_000);

    let total = specs::population();
    RankingResult {
        rank: entry.rank,
        out_of: total,
        total,
        class_name: descriptor.class_name.to_string(),
        spec: descriptor.spec_name.to_string(),
        throughput,
        average_throughput,
        percentile: entry.percentile,
        tier: entry.tier,
        sample_size,
        last_updated: Utc::now(),
        source: DataSource::LocalFallback,
        patch_version: PATCH_VERSION.to_string(),
        expansion_name: EXPANSION_NAME.to_string(),
    }
}
