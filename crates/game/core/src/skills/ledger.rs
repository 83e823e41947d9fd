//! Per-skill level and experience tracking.
//!
//! # Carry-over policy
//!
//! When experience reaches `max_experience` the skill levels up and the
//! surplus carries into the next level. A single large gain may therefore
//! produce several level-ups. Each level-up grows the threshold according to
//! [`SkillCurve`]. Once a skill reaches `max_level` its experience is reset to
//! zero and further gains are ignored.

use std::collections::HashMap;

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::config::SkillCurve;

/// Trainable skills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum SkillId {
    Melee,
    Ranged,
    Magic,
    Shield,
    Vitality,
    Meditation,
}

/// Level and experience of one skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillEntry {
    pub level: u32,
    pub experience: u32,
    pub max_experience: u32,
}

impl SkillEntry {
    /// A fresh level-1 entry on the given curve.
    pub fn starting(curve: &SkillCurve) -> Self {
        Self {
            level: 1,
            experience: 0,
            max_experience: curve.base_max_experience.max(1),
        }
    }
}

/// Result of [`SkillLedger::gain_experience`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillProgress {
    pub skill: SkillId,
    pub level: u32,
    pub experience: u32,
    pub max_experience: u32,
    pub levels_gained: u32,
    pub leveled_up: bool,
}

impl SkillProgress {
    fn of(skill: SkillId, entry: &SkillEntry, levels_gained: u32) -> Self {
        Self {
            skill,
            level: entry.level,
            experience: entry.experience,
            max_experience: entry.max_experience,
            levels_gained,
            leveled_up: levels_gained > 0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillLedger {
    entries: HashMap<SkillId, SkillEntry>,
}

impl SkillLedger {
    /// Ledger without any trained skill.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Ledger with every skill at level 1.
    pub fn starting(curve: &SkillCurve) -> Self {
        Self {
            entries: SkillId::iter()
                .map(|skill| (skill, SkillEntry::starting(curve)))
                .collect(),
        }
    }

    pub fn entry(&self, skill: SkillId) -> Option<&SkillEntry> {
        self.entries.get(&skill)
    }

    /// Current level, `None` when the skill was never trained.
    pub fn level(&self, skill: SkillId) -> Option<u32> {
        self.entry(skill).map(|entry| entry.level)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SkillId, &SkillEntry)> {
        self.entries.iter().map(|(skill, entry)| (*skill, entry))
    }

    /// Adds experience to a skill, creating a level-1 entry if needed.
    pub fn gain_experience(&mut self, skill: SkillId, amount: u32, curve: &SkillCurve) -> SkillProgress {
        let entry = self
            .entries
            .entry(skill)
            .or_insert_with(|| SkillEntry::starting(curve));

        if amount == 0 || entry.level >= curve.max_level {
            return SkillProgress::of(skill, entry, 0);
        }

        entry.experience = entry.experience.saturating_add(amount);

        let mut levels_gained = 0;
        while entry.experience >= entry.max_experience && entry.level < curve.max_level {
            entry.experience -= entry.max_experience;
            entry.level += 1;
            entry.max_experience = curve.next_max_experience(entry.max_experience);
            levels_gained += 1;
        }

        if entry.level >= curve.max_level {
            entry.experience = 0;
        }

        SkillProgress::of(skill, entry, levels_gained)
    }
}
