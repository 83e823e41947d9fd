//! Identifiers and owned-state value types.
//!
//! These are the pieces of state the central store owns on behalf of each
//! entity: equipment sets, the inventory, and item instances. Stat snapshots
//! are never stored here; they are recomputed from these inputs on demand.
pub mod types;

pub use types::{
    CreatureId, EntityId, EquipmentBuilder, EquipmentSet, EquipmentSlot, InstanceId,
    InstanceIdAllocator, Inventory, InventoryError, ItemInstance, Position, QuestId,
    ResourceMeter, Stored, TemplateId, Tick,
};
