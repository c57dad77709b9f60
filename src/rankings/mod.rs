//! Ranking domain: static reference data, fallback generation, and the
//! resilient orchestration that chooses between remote and local data.

pub mod fallback;
pub mod reference;
pub mod service;
pub mod types;

pub use service::RankingService;
pub use types::{DataSource, RankingError, RankingResult, Tier};

/// Game patch the rankings describe.
pub const PATCH_VERSION: &str = "12.0.1";

/// Expansion the rankings describe.
pub const EXPANSION_NAME: &str = "Midnight";
