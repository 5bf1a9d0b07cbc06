//! The immutable rank registry: one hundred slots, constructed once at
//! startup, never mutated for the process lifetime.

use crate::constants::RANK_COUNT;
use crate::domain::RankSlot;

/// Normalizes an identifying string for join purposes: whitespace-trimmed
/// and case-folded to uppercase.
pub fn canonical_key(raw: &str) -> String {
    raw.trim().to_uppercase()
}

#[derive(Debug, Clone)]
pub struct RankRegistry {
    slots: Vec<RankSlot>,
}

impl RankRegistry {
    /// The fixed production seed: ranks 1..=100 keyed by the templated
    /// alternate-name string.
    pub fn seeded() -> Self {
        let slots = (1..=RANK_COUNT)
            .map(|rank| RankSlot {
                rank,
                canonical_key: format!("KINDERGARTEN {rank}"),
            })
            .collect();
        Self { slots }
    }

    /// Builds a registry from explicit slots (tests and alternate seeds).
    pub fn from_slots(slots: Vec<RankSlot>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[RankSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
