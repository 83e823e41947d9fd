//! Kill-count milestones and their cumulative bonuses.

use crate::error::ContentError;
use crate::state::CreatureId;

/// Bonuses unlocked once a creature has been killed `kill_count` times.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KillBonusMilestone {
    pub kill_count: u32,
    pub bonus_damage_percent: u32,
    pub damage_reduction_percent: u32,
    pub loot_chance_percent: u32,
}

impl KillBonusMilestone {
    pub const fn at(kill_count: u32) -> Self {
        Self {
            kill_count,
            bonus_damage_percent: 0,
            damage_reduction_percent: 0,
            loot_chance_percent: 0,
        }
    }

    pub const fn bonus_damage(mut self, percent: u32) -> Self {
        self.bonus_damage_percent = percent;
        self
    }

    pub const fn damage_reduction(mut self, percent: u32) -> Self {
        self.damage_reduction_percent = percent;
        self
    }

    pub const fn loot_chance(mut self, percent: u32) -> Self {
        self.loot_chance_percent = percent;
        self
    }
}

/// A milestone paired with whether it has been reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MilestoneProgress<'a> {
    pub milestone: &'a KillBonusMilestone,
    pub achieved: bool,
}

/// Milestones for one creature type, ordered by ascending threshold.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<KillBonusMilestone>", into = "Vec<KillBonusMilestone>"))]
pub struct KillBonusTable {
    milestones: Vec<KillBonusMilestone>,
}

impl KillBonusTable {
    /// Builds a table; input order does not matter.
    pub fn new(mut milestones: Vec<KillBonusMilestone>) -> Self {
        milestones.sort_by_key(|m| m.kill_count);
        Self { milestones }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Like [`new`](Self::new) but rejects two milestones with the same threshold.
    pub fn validated(
        creature: &CreatureId,
        milestones: Vec<KillBonusMilestone>,
    ) -> Result<Self, ContentError> {
        let table = Self::new(milestones);
        if let Some(pair) = table
            .milestones
            .windows(2)
            .find(|pair| pair[0].kill_count == pair[1].kill_count)
        {
            return Err(ContentError::DuplicateMilestone {
                creature: creature.clone(),
                kill_count: pair[0].kill_count,
            });
        }
        Ok(table)
    }

    pub fn milestones(&self) -> &[KillBonusMilestone] {
        &self.milestones
    }

    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty()
    }

    fn achieved(&self, kills: u32) -> impl Iterator<Item = &KillBonusMilestone> {
        self.milestones
            .iter()
            .take_while(move |m| m.kill_count <= kills)
    }

    /// Cumulative outgoing damage bonus in percent.
    pub fn bonus_damage(&self, kills: u32) -> u32 {
        self.achieved(kills)
            .fold(0u32, |acc, m| acc.saturating_add(m.bonus_damage_percent))
    }

    /// Cumulative incoming damage reduction in percent (not clamped here).
    pub fn damage_reduction(&self, kills: u32) -> u32 {
        self.achieved(kills)
            .fold(0u32, |acc, m| acc.saturating_add(m.damage_reduction_percent))
    }

    /// Cumulative loot chance bonus in percent.
    pub fn loot_chance_bonus(&self, kills: u32) -> u32 {
        self.achieved(kills)
            .fold(0u32, |acc, m| acc.saturating_add(m.loot_chance_percent))
    }

    /// Every milestone with its achieved flag, in ascending threshold order.
    pub fn milestones_with_progress(&self, kills: u32) -> Vec<MilestoneProgress<'_>> {
        self.milestones
            .iter()
            .map(|milestone| MilestoneProgress {
                milestone,
                achieved: kills >= milestone.kill_count,
            })
            .collect()
    }
}

impl From<Vec<KillBonusMilestone>> for KillBonusTable {
    fn from(milestones: Vec<KillBonusMilestone>) -> Self {
        Self::new(milestones)
    }
}

impl From<KillBonusTable> for Vec<KillBonusMilestone> {
    fn from(table: KillBonusTable) -> Self {
        table.milestones
    }
}
