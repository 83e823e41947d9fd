//! Stat contributions of trained skills.

use super::{SkillId, SkillLedger};
use crate::env::TablesOracle;
use crate::stats::StatBlock;

/// Stats a skill grants for every level above the first.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillProgression {
    pub skill: SkillId,
    pub name: String,
    pub per_level: StatBlock,
}

impl SkillProgression {
    pub fn new(skill: SkillId, name: impl Into<String>, per_level: StatBlock) -> Self {
        Self {
            skill,
            name: name.into(),
            per_level,
        }
    }

    /// Contribution of this skill at `level`.
    pub fn contribution(&self, level: u32) -> StatBlock {
        let ranks = i32::try_from(level.saturating_sub(1)).unwrap_or(i32::MAX);
        self.per_level.scaled(ranks)
    }
}

/// Sums the contributions of every skill in the ledger.
///
/// A skill without a progression entry in the tables contributes nothing.
pub fn skill_bonuses(ledger: &SkillLedger, tables: &(impl TablesOracle + ?Sized)) -> StatBlock {
    ledger
        .iter()
        .map(|(skill, entry)| match tables.skill(skill) {
            Some(progression) => progression.contribution(entry.level),
            None => {
                tracing::debug!(%skill, "skill has no progression table, contributing nothing");
                StatBlock::ZERO
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SkillCurve;
    use crate::stats::StatKind;
    use crate::test_support::StaticTables;

    #[test]
    fn contribution_scales_with_levels_above_first() {
        let shield = SkillProgression::new(
            SkillId::Shield,
            "Shield",
            StatBlock::ZERO.with(StatKind::Armor, 2),
        );
        assert_eq!(shield.contribution(1).armor, 0);
        assert_eq!(shield.contribution(4).armor, 6);
    }

    #[test]
    fn missing_progression_contributes_zero() {
        let curve = SkillCurve::default();
        let mut ledger = SkillLedger::empty();
        ledger.gain_experience(SkillId::Shield, 100, &curve);
        ledger.gain_experience(SkillId::Meditation, 100, &curve);

        let tables = StaticTables::default().with_skill(SkillProgression::new(
            SkillId::Shield,
            "Shield",
            StatBlock::ZERO.with(StatKind::Armor, 3),
        ));

        let bonuses = skill_bonuses(&ledger, &tables);
        assert_eq!(bonuses, StatBlock::ZERO.with(StatKind::Armor, 3));
    }
}
