//! Static per-specialization reference dataset.
//!
//! Baseline numbers for the current patch, keyed by spec name. Used whenever
//! the remote provider cannot supply live rankings.

use crate::rankings::types::Tier;

/// Baseline performance record for one spec name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub baseline_throughput: u64,
    pub rank: u32,
    pub percentile: u8,
    pub tier: Tier,
}

const fn entry_row(baseline_throughput: u64, rank: u32, percentile: u8, tier: Tier) -> ReferenceEntry {
    ReferenceEntry {
        baseline_throughput,
        rank,
        percentile,
        tier,
    }
}

/// Default for spec names missing from the dataset.
pub const DEFAULT_ENTRY: ReferenceEntry = entry_row(950_000, 15, 50, Tier::Unknown);

static REFERENCE_TABLE: &[(&str, ReferenceEntry)] = &[
    ("Demonology", entry_row(1_250_000, 1, 99, Tier::S)),
    ("Arcane", entry_row(1_230_000, 2, 98, Tier::S)),
    ("Frost", entry_row(1_220_000, 3, 97, Tier::S)),
    ("Augmentation", entry_row(1_180_000, 4, 95, Tier::S)),
    ("Devastation", entry_row(1_150_000, 5, 92, Tier::APlus)),
    ("Affliction", entry_row(1_140_000, 6, 90, Tier::APlus)),
    ("Devourer", entry_row(1_130_000, 7, 88, Tier::APlus)),
    ("Outlaw", entry_row(1_120_000, 8, 86, Tier::APlus)),
    ("Elemental", entry_row(1_110_000, 9, 84, Tier::APlus)),
    ("Survival", entry_row(1_100_000, 10, 82, Tier::APlus)),
    ("Fury", entry_row(1_090_000, 11, 80, Tier::APlus)),
    ("BeastMastery", entry_row(1_070_000, 12, 75, Tier::A)),
    ("Marksmanship", entry_row(1_060_000, 13, 72, Tier::A)),
    ("Feral", entry_row(1_050_000, 14, 70, Tier::A)),
    ("Shadow", entry_row(1_040_000, 15, 68, Tier::A)),
    ("Unholy", entry_row(1_030_000, 16, 65, Tier::A)),
    ("Subtlety", entry_row(1_020_000, 17, 62, Tier::A)),
    ("Enhancement", entry_row(1_010_000, 18, 60, Tier::A)),
    ("Assassination", entry_row(1_000_000, 19, 58, Tier::A)),
    ("Windwalker", entry_row(990_000, 20, 55, Tier::A)),
    ("Balance", entry_row(970_000, 21, 50, Tier::B)),
    ("Destruction", entry_row(960_000, 22, 48, Tier::B)),
    ("Arms", entry_row(950_000, 23, 45, Tier::B)),
    ("Fire", entry_row(940_000, 24, 42, Tier::B)),
    ("Havoc", entry_row(930_000, 25, 40, Tier::B)),
    ("Retribution", entry_row(900_000, 26, 35, Tier::C)),
];

/// Look up the reference entry for a spec name, falling back to the default
/// for unmapped names.
pub fn entry(spec_name: &str) -> ReferenceEntry {
    REFERENCE_TABLE
        .iter()
        .find(|(name, _)| *name == spec_name)
        .map(|(_, e)| *e)
        .unwrap_or(DEFAULT_ENTRY)
}
