use std::collections::HashMap;

use crate::state::CreatureId;

/// Confirmed kills per creature type.
///
/// Counters only ever grow; each confirmed kill increments exactly once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KillRecord {
    counts: HashMap<CreatureId, u32>,
}

impl KillRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, creature: &CreatureId) -> u32 {
        self.counts.get(creature).copied().unwrap_or(0)
    }

    /// Records one kill and returns the new count.
    pub fn record_kill(&mut self, creature: &CreatureId) -> u32 {
        let count = self.counts.entry(creature.clone()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CreatureId, u32)> {
        self.counts.iter().map(|(id, count)| (id, *count))
    }
}
