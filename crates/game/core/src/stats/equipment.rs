//! Equipment aggregation.
//!
//! Equipped items contribute their template stats plus any bonus rolled onto
//! the instance. A template missing from the catalog contributes nothing; the
//! item stays equipped and the miss is logged.

use super::StatBlock;
use crate::env::ItemOracle;
use crate::state::{EquipmentSet, ItemInstance};

/// Stats contributed by a single item instance.
pub fn instance_contribution(instance: &ItemInstance, items: &(impl ItemOracle + ?Sized)) -> StatBlock {
    let Some(template) = items.template(&instance.template_id) else {
        tracing::warn!(
            template = %instance.template_id,
            instance = %instance.instance_id,
            "equipped item references an unknown template; contributing nothing"
        );
        return StatBlock::ZERO;
    };

    match instance.bonus_stats() {
        Some(bonus) => template.stats + *bonus,
        None => template.stats,
    }
}

/// Sum of every occupied slot. Never fails.
pub fn equipment_bonuses(set: &EquipmentSet, items: &(impl ItemOracle + ?Sized)) -> StatBlock {
    set.iter()
        .map(|(_, instance)| instance_contribution(instance, items))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ItemTemplate;
    use crate::state::{EquipmentSlot, InstanceId};
    use crate::stats::StatKind;
    use crate::test_support::StaticItems;

    fn catalog() -> StaticItems {
        StaticItems::new(vec![
            ItemTemplate::new("sword", "Sword").equippable(
                EquipmentSlot::Weapon,
                StatBlock::ZERO.with(StatKind::Power, 10),
            ),
            ItemTemplate::new("buckler", "Buckler").equippable(
                EquipmentSlot::Shield,
                StatBlock::ZERO.with(StatKind::Armor, 5),
            ),
        ])
    }

    #[test]
    fn bonus_stats_add_to_template_stats() {
        let sword = ItemInstance::with_bonus(
            "sword",
            InstanceId(1),
            StatBlock::ZERO.with(StatKind::Power, 3).with(StatKind::Health, 7),
        );
        let stats = instance_contribution(&sword, &catalog());
        assert_eq!(stats.power, 13);
        assert_eq!(stats.health, 7);
    }

    #[test]
    fn occupied_slots_are_summed() {
        let set = EquipmentSet::builder()
            .weapon(ItemInstance::new("sword", InstanceId(1)))
            .shield(ItemInstance::new("buckler", InstanceId(2)))
            .build();

        let total = equipment_bonuses(&set, &catalog());
        assert_eq!(total, StatBlock::ZERO.with(StatKind::Power, 10).with(StatKind::Armor, 5));
    }

    #[test]
    fn unknown_template_contributes_zero() {
        let set = EquipmentSet::builder()
            .weapon(ItemInstance::new("lost_blade", InstanceId(1)))
            .shield(ItemInstance::new("buckler", InstanceId(2)))
            .build();

        let total = equipment_bonuses(&set, &catalog());
        assert_eq!(total, StatBlock::ZERO.with(StatKind::Armor, 5));
    }

    #[test]
    fn empty_set_contributes_zero() {
        assert!(equipment_bonuses(&EquipmentSet::empty(), &catalog()).is_zero());
    }
}
