//! Stat calculator.
//!
//! Combines the four sources of an entity's stats into one snapshot:
//!
//! ```text
//! total = base + equipment + skills + purchased
//! ```
//!
//! The snapshot is derived on demand and never stored; callers recompute it
//! after any change to equipment, skills or purchases.

use super::{StatBlock, equipment_bonuses};
use crate::env::{ItemOracle, TablesOracle};
use crate::skills::{SkillLedger, skill_bonuses};
use crate::state::EquipmentSet;

/// Per-source breakdown plus the combined total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculatedStats {
    pub base: StatBlock,
    pub equipment: StatBlock,
    pub skills: StatBlock,
    pub purchased: StatBlock,
    pub total: StatBlock,
}

impl CalculatedStats {
    pub fn from_parts(
        base: StatBlock,
        equipment: StatBlock,
        skills: StatBlock,
        purchased: StatBlock,
    ) -> Self {
        Self {
            base,
            equipment,
            skills,
            purchased,
            total: base + equipment + skills + purchased,
        }
    }

    /// Maximum health derived from the total, never below 1.
    pub fn max_health(&self) -> u32 {
        u32::try_from(self.total.health.max(1)).unwrap_or(1)
    }

    pub fn max_mana(&self) -> u32 {
        u32::try_from(self.total.mana.max(0)).unwrap_or(0)
    }
}

/// Computes the stat snapshot of an entity.
pub fn compute_stats(
    base: StatBlock,
    equipment: &EquipmentSet,
    skills: &SkillLedger,
    purchased: StatBlock,
    items: &(impl ItemOracle + ?Sized),
    tables: &(impl TablesOracle + ?Sized),
) -> CalculatedStats {
    CalculatedStats::from_parts(
        base,
        equipment_bonuses(equipment, items),
        skill_bonuses(skills, tables),
        purchased,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SkillCurve;
    use crate::env::ItemTemplate;
    use crate::skills::{SkillId, SkillProgression};
    use crate::state::{EquipmentSlot, InstanceId, ItemInstance};
    use crate::stats::StatKind;
    use crate::test_support::{StaticItems, StaticTables};

    #[test]
    fn total_is_sum_of_sources() {
        let items = StaticItems::new(vec![ItemTemplate::new("mail", "Chain Mail").equippable(
            EquipmentSlot::Armor,
            StatBlock::ZERO.with(StatKind::Armor, 12).with(StatKind::Health, 20),
        )]);
        let tables = StaticTables::default().with_skill(SkillProgression::new(
            SkillId::Vitality,
            "Vitality",
            StatBlock::ZERO.with(StatKind::Health, 5),
        ));

        let equipment = EquipmentSet::builder()
            .armor(ItemInstance::new("mail", InstanceId(1)))
            .build();
        let curve = SkillCurve::default();
        let mut skills = SkillLedger::starting(&curve);
        // level 3
        skills.gain_experience(SkillId::Vitality, 250, &curve);

        let base = StatBlock::ZERO.with(StatKind::Health, 100).with(StatKind::Power, 8);
        let purchased = StatBlock::ZERO.with(StatKind::Power, 2);

        let stats = compute_stats(base, &equipment, &skills, purchased, &items, &tables);

        assert_eq!(stats.equipment.armor, 12);
        assert_eq!(stats.skills.health, 10);
        assert_eq!(stats.total.health, 130);
        assert_eq!(stats.total.power, 10);
        assert_eq!(stats.total.armor, 12);
        assert_eq!(stats.max_health(), 130);
    }

    #[test]
    fn empty_sources_yield_base() {
        let base = StatBlock::ZERO.with(StatKind::Health, 50);
        let stats = compute_stats(
            base,
            &EquipmentSet::empty(),
            &SkillLedger::empty(),
            StatBlock::ZERO,
            &StaticItems::default(),
            &StaticTables::default(),
        );
        assert_eq!(stats.total, base);
    }

    #[test]
    fn max_health_never_drops_below_one() {
        let stats = CalculatedStats::from_parts(
            StatBlock::ZERO.with(StatKind::Health, 10),
            StatBlock::ZERO.with(StatKind::Health, -40),
            StatBlock::ZERO,
            StatBlock::ZERO,
        );
        assert_eq!(stats.total.health, -30);
        assert_eq!(stats.max_health(), 1);
    }
}
