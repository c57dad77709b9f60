//! The specialization universe.
//!
//! # Responsibilities
//! - Define the fixed table of valid specialization keys
//! - Map each key to its class/spec descriptor
//! - Act as the single validity check for inbound spec identifiers
//!
//! The table is process-wide and read-only; its key set is the universe of
//! valid specialization identifiers for the whole system.

use serde::Serialize;

/// Class and spec names for one playable specialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpecDescriptor {
    /// Playable class name (e.g. "Warlock").
    pub class_name: &'static str,
    /// Specialization name within the class (e.g. "Demonology").
    pub spec_name: &'static str,
}

const fn spec(class_name: &'static str, spec_name: &'static str) -> SpecDescriptor {
    SpecDescriptor {
        class_name,
        spec_name,
    }
}

/// Canonical specialization table, in canonical output order.
///
/// Note that a spec name is not unique on its own ("Frost" exists for both
/// Death Knight and Mage); the key is.
pub static SPEC_TABLE: &[(&str, SpecDescriptor)] = &[
    ("frost_dk", spec("DeathKnight", "Frost")),
    ("unholy", spec("DeathKnight", "Unholy")),
    ("havoc", spec("DemonHunter", "Havoc")),
    ("devourer", spec("DemonHunter", "Devourer")),
    ("balance", spec("Druid", "Balance")),
    ("feral", spec("Druid", "Feral")),
    ("augmentation", spec("Evoker", "Augmentation")),
    ("devastation", spec("Evoker", "Devastation")),
    ("beast_mastery", spec("Hunter", "BeastMastery")),
    ("marksmanship", spec("Hunter", "Marksmanship")),
    ("survival", spec("Hunter", "Survival")),
    ("arcane", spec("Mage", "Arcane")),
    ("fire", spec("Mage", "Fire")),
    ("frost_mage", spec("Mage", "Frost")),
    ("windwalker", spec("Monk", "Windwalker")),
    ("retribution", spec("Paladin", "Retribution")),
    ("shadow", spec("Priest", "Shadow")),
    ("assassination", spec("Rogue", "Assassination")),
    ("outlaw", spec("Rogue", "Outlaw")),
    ("subtlety", spec("Rogue", "Subtlety")),
    ("elemental", spec("Shaman", "Elemental")),
    ("enhancement", spec("Shaman", "Enhancement")),
    ("affliction", spec("Warlock", "Affliction")),
    ("demonology", spec("Warlock", "Demonology")),
    ("destruction", spec("Warlock", "Destruction")),
    ("arms", spec("Warrior", "Arms")),
    ("fury", spec("Warrior", "Fury")),
];

/// Look up the descriptor for a specialization key.
pub fn descriptor(key: &str) -> Option<&'static SpecDescriptor> {
    SPEC_TABLE.iter().find(|(k, _)| *k == key).map(|(_, d)| d)
}

/// All valid specialization keys, in canonical order.
pub fn all_keys() -> impl Iterator<Item = &'static str> {
    SPEC_TABLE.iter().map(|(k, _)| *k)
}

/// Size of the specialization universe.
pub fn population() -> u32 {
    SPEC_TABLE.len() as u32
}
