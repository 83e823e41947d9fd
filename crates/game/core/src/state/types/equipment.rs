//! Equipment slots for combat-capable entities.
//!
//! An [`EquipmentSet`] holds at most one [`ItemInstance`] per slot. The set
//! itself knows nothing about stats; the stat calculator resolves each
//! instance against the item catalog.

use strum::{Display, EnumIter, IntoEnumIterator};

use super::ItemInstance;

/// Fixed equipment slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum EquipmentSlot {
    Weapon,
    Shield,
    Trinket,
    Helmet,
    Amulet,
    Armor,
}

impl EquipmentSlot {
    pub const COUNT: usize = 6;

    const fn index(self) -> usize {
        self as usize
    }
}

/// Equipment state for an entity.
///
/// Owned by the central store and referenced by entity id; entities never
/// keep their own copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentSet {
    slots: [Option<ItemInstance>; EquipmentSlot::COUNT],
}

impl EquipmentSet {
    /// Creates empty equipment (all slots vacant).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing equipment.
    pub fn builder() -> EquipmentBuilder {
        EquipmentBuilder::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&ItemInstance> {
        self.slots[slot.index()].as_ref()
    }

    pub fn is_equipped(&self, slot: EquipmentSlot) -> bool {
        self.slots[slot.index()].is_some()
    }

    /// Equips an instance, returning the previously equipped instance if any.
    pub fn equip(&mut self, slot: EquipmentSlot, instance: ItemInstance) -> Option<ItemInstance> {
        self.slots[slot.index()].replace(instance)
    }

    /// Unequips a slot, returning its instance if any was equipped.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<ItemInstance> {
        self.slots[slot.index()].take()
    }

    /// Iterates occupied slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, &ItemInstance)> {
        EquipmentSlot::iter().filter_map(|slot| self.get(slot).map(|item| (slot, item)))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

/// Builder for constructing equipment.
#[derive(Default)]
pub struct EquipmentBuilder {
    set: EquipmentSet,
}

impl EquipmentBuilder {
    pub fn slot(mut self, slot: EquipmentSlot, instance: ItemInstance) -> Self {
        self.set.equip(slot, instance);
        self
    }

    pub fn weapon(self, instance: ItemInstance) -> Self {
        self.slot(EquipmentSlot::Weapon, instance)
    }

    pub fn shield(self, instance: ItemInstance) -> Self {
        self.slot(EquipmentSlot::Shield, instance)
    }

    pub fn armor(self, instance: ItemInstance) -> Self {
        self.slot(EquipmentSlot::Armor, instance)
    }

    /// Builds the equipment.
    pub fn build(self) -> EquipmentSet {
        self.set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::InstanceId;

    fn instance(id: u64, template: &str) -> ItemInstance {
        ItemInstance::new(template, InstanceId(id))
    }

    #[test]
    fn equip_replaces_and_returns_previous() {
        let mut set = EquipmentSet::empty();
        assert!(set.equip(EquipmentSlot::Weapon, instance(1, "rusty_sword")).is_none());

        let previous = set.equip(EquipmentSlot::Weapon, instance(2, "iron_sword"));
        assert_eq!(previous.map(|i| i.instance_id), Some(InstanceId(1)));
        assert_eq!(set.iter().count(), 1);
    }

    #[test]
    fn iter_yields_only_occupied_slots_in_order() {
        let set = EquipmentSet::builder()
            .armor(instance(3, "leather_armor"))
            .weapon(instance(1, "rusty_sword"))
            .build();

        let slots: Vec<_> = set.iter().map(|(slot, _)| slot).collect();
        assert_eq!(slots, vec![EquipmentSlot::Weapon, EquipmentSlot::Armor]);
        assert!(!set.is_equipped(EquipmentSlot::Shield));
    }
}
