//! Static trinket reference list.
//!
//! Pure data; the same list is served for every specialization until
//! per-spec simulations land.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One recommended trinket.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trinket {
    pub name: &'static str,
    pub item_level: u32,
    pub throughput: u64,
    pub source: &'static str,
}

const fn trinket(name: &'static str, throughput: u64, source: &'static str) -> Trinket {
    Trinket {
        name,
        item_level: 678,
        throughput,
        source,
    }
}

/// Response payload for the trinkets endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct TrinketList {
    pub trinkets: Vec<Trinket>,
    pub updated: DateTime<Utc>,
}

/// Current trinket recommendations.
pub fn trinket_list() -> TrinketList {
    TrinketList {
        trinkets: vec![
            trinket("House of Cards", 68_500, "The MOTHERLODE!!"),
            trinket("Mekgines Salty Seabrew", 67_200, "Liberation of Undermine"),
            trinket("Signet of the Priory", 65_800, "Priory of the Sacred Flame"),
            trinket("Eye of Kezan", 64_500, "Liberation of Undermine"),
            trinket("Ara-Kara Sacrifice", 63_200, "Ara-Kara"),
            trinket("Cirral Concoctory", 62_100, "Cinderbrew Meadery"),
            trinket("Mists Sacrifice", 61_500, "Mists of Tirna Scithe"),
            trinket("Ragefeather Reborn", 60_800, "Nokhud Offensive"),
        ],
        updated: Utc::now(),
    }
}
