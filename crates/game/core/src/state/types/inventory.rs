//! Inventory storage for the player.
//!
//! Capacity is counted in slots. Stackable templates merge into existing
//! stacks (up to the template's `max_stack`) before taking a new slot.

use super::{InstanceId, ItemInstance, TemplateId};
use crate::env::ItemTemplate;
use crate::error::{ErrorSeverity, GameError};

/// Errors raised when an item cannot be stored.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    #[error("inventory is full ({capacity} slots)")]
    Full { capacity: usize },

    #[error("{0} is already in play")]
    DuplicateInstance(InstanceId),

    #[error("unknown item template '{0}'")]
    UnknownTemplate(TemplateId),
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Full { .. } => ErrorSeverity::Recoverable,
            Self::DuplicateInstance(_) => ErrorSeverity::Internal,
            Self::UnknownTemplate(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Full { .. } => "INVENTORY_FULL",
            Self::DuplicateInstance(_) => "INVENTORY_DUPLICATE_INSTANCE",
            Self::UnknownTemplate(_) => "INVENTORY_UNKNOWN_TEMPLATE",
        }
    }
}

/// Where an added item ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stored {
    /// Occupies a new slot under its own instance id.
    NewSlot(InstanceId),
    /// Fully merged into existing stacks; the incoming instance id is retired.
    Merged { into: InstanceId },
}

impl Stored {
    /// Instance that now holds (at least the first part of) the item.
    pub fn instance_id(self) -> InstanceId {
        match self {
            Self::NewSlot(id) => id,
            Self::Merged { into } => into,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    capacity: usize,
    items: Vec<ItemInstance>,
}

impl Inventory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ItemInstance] {
        &self.items
    }

    pub fn get(&self, id: InstanceId) -> Option<&ItemInstance> {
        self.items.iter().find(|item| item.instance_id == id)
    }

    /// Total quantity held for a template across all stacks.
    pub fn count(&self, template: &TemplateId) -> u32 {
        self.items
            .iter()
            .filter(|item| &item.template_id == template)
            .map(|item| u32::from(item.quantity))
            .sum()
    }

    /// Stores an instance.
    ///
    /// `template` is used for stacking; an unresolved template is stored as a
    /// non-stackable item. The inventory is left untouched on error.
    pub fn add(
        &mut self,
        instance: ItemInstance,
        template: Option<&ItemTemplate>,
    ) -> Result<Stored, InventoryError> {
        if self.get(instance.instance_id).is_some() {
            return Err(InventoryError::DuplicateInstance(instance.instance_id));
        }

        let max_stack = template.map_or(1, |t| t.max_stack.max(1));
        if max_stack == 1 {
            if self.items.len() >= self.capacity {
                return Err(InventoryError::Full {
                    capacity: self.capacity,
                });
            }
            let id = instance.instance_id;
            self.items.push(instance);
            return Ok(Stored::NewSlot(id));
        }

        let room: u32 = self
            .items
            .iter()
            .filter(|item| item.template_id == instance.template_id)
            .map(|item| u32::from(max_stack.saturating_sub(item.quantity)))
            .sum();
        let incoming = u32::from(instance.quantity);
        let overflow = incoming.saturating_sub(room);
        if overflow > 0
            && (self.items.len() >= self.capacity || overflow > u32::from(max_stack))
        {
            return Err(InventoryError::Full {
                capacity: self.capacity,
            });
        }

        let mut remaining = instance.quantity;
        let mut first_stack = None;
        for item in self
            .items
            .iter_mut()
            .filter(|item| item.template_id == instance.template_id)
        {
            if remaining == 0 {
                break;
            }
            let take = max_stack.saturating_sub(item.quantity).min(remaining);
            if take > 0 {
                item.quantity += take;
                remaining -= take;
                first_stack.get_or_insert(item.instance_id);
            }
        }

        if remaining == 0 {
            let into = first_stack.unwrap_or(instance.instance_id);
            return Ok(Stored::Merged { into });
        }

        let id = instance.instance_id;
        self.items.push(instance.with_quantity(remaining));
        Ok(Stored::NewSlot(id))
    }

    /// Removes and returns an instance.
    pub fn remove(&mut self, id: InstanceId) -> Option<ItemInstance> {
        let index = self.items.iter().position(|item| item.instance_id == id)?;
        Some(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EquipmentSlot;
    use crate::stats::StatBlock;

    fn potion() -> ItemTemplate {
        ItemTemplate::new("potion", "Potion").stackable(5)
    }

    fn sword() -> ItemTemplate {
        ItemTemplate::new("sword", "Sword").equippable(EquipmentSlot::Weapon, StatBlock::ZERO)
    }

    #[test]
    fn full_inventory_rejects_new_slot() {
        let mut inv = Inventory::with_capacity(1);
        inv.add(ItemInstance::new("sword", InstanceId(1)), Some(&sword()))
            .unwrap();

        let err = inv
            .add(ItemInstance::new("sword", InstanceId(2)), Some(&sword()))
            .unwrap_err();
        assert_eq!(err, InventoryError::Full { capacity: 1 });
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn stackable_items_merge_before_taking_a_slot() {
        let mut inv = Inventory::with_capacity(1);
        let template = potion();
        inv.add(
            ItemInstance::new("potion", InstanceId(1)).with_quantity(3),
            Some(&template),
        )
        .unwrap();

        let stored = inv
            .add(
                ItemInstance::new("potion", InstanceId(2)).with_quantity(2),
                Some(&template),
            )
            .unwrap();
        assert_eq!(stored, Stored::Merged { into: InstanceId(1) });
        assert_eq!(inv.count(&"potion".into()), 5);
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn overflowing_stack_needs_a_free_slot() {
        let mut inv = Inventory::with_capacity(1);
        let template = potion();
        inv.add(
            ItemInstance::new("potion", InstanceId(1)).with_quantity(4),
            Some(&template),
        )
        .unwrap();

        let err = inv
            .add(
                ItemInstance::new("potion", InstanceId(2)).with_quantity(3),
                Some(&template),
            )
            .unwrap_err();
        assert!(matches!(err, InventoryError::Full { .. }));
        assert_eq!(inv.count(&"potion".into()), 4);
    }

    #[test]
    fn duplicate_instance_ids_are_rejected() {
        let mut inv = Inventory::with_capacity(4);
        inv.add(ItemInstance::new("sword", InstanceId(7)), None).unwrap();

        let err = inv
            .add(ItemInstance::new("shield", InstanceId(7)), None)
            .unwrap_err();
        assert_eq!(err, InventoryError::DuplicateInstance(InstanceId(7)));
    }
}
