pub mod common;
pub mod equipment;
pub mod inventory;
pub mod item;

// Re-export common types
pub use common::{
    CreatureId, EntityId, InstanceId, Position, QuestId, ResourceMeter, TemplateId, Tick,
};

// Re-export equipment types
pub use equipment::{EquipmentBuilder, EquipmentSet, EquipmentSlot};

// Re-export inventory types
pub use inventory::{Inventory, InventoryError, Stored};

// Re-export item types
pub use item::{InstanceIdAllocator, ItemInstance};
