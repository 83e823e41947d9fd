//! Central state store.
//!
//! The store is the single owner of every piece of mutable per-entity state
//! other than capabilities: base and purchased stats, equipment, skill
//! ledgers, regeneration clocks and cooldowns, plus the player's kill record,
//! wallet, inventory and quest progress. The world is its only writer.

mod wallet;

pub use wallet::{Wallet, WalletError};

use std::collections::HashMap;

use game_core::{
    Cooldowns, EntityId, EquipmentSet, InstanceIdAllocator, Inventory, ItemInstance, KillRecord,
    QuestId, QuestProgress, RegenClock, ResourceMeter, SkillLedger, StatBlock, TemplateId, Tick,
};

/// State owned on behalf of one entity.
#[derive(Debug, Clone)]
pub struct EntityRecord {
    pub base: StatBlock,
    pub purchased: StatBlock,
    pub equipment: EquipmentSet,
    pub skills: SkillLedger,
    pub mana: ResourceMeter,
    pub regen: RegenClock,
    pub cooldowns: Cooldowns,
}

impl EntityRecord {
    pub fn new(base: StatBlock, equipment: EquipmentSet, skills: SkillLedger, now: Tick) -> Self {
        Self {
            base,
            purchased: StatBlock::ZERO,
            equipment,
            skills,
            mana: ResourceMeter::default(),
            regen: RegenClock::starting_at(now),
            cooldowns: Cooldowns::new(),
        }
    }
}

#[derive(Debug)]
pub struct GameStore {
    records: HashMap<EntityId, EntityRecord>,
    pub kills: KillRecord,
    pub wallet: Wallet,
    pub inventory: Inventory,
    pub quests: HashMap<QuestId, QuestProgress>,
    instance_ids: InstanceIdAllocator,
}

impl GameStore {
    pub fn new(inventory_capacity: usize) -> Self {
        Self {
            records: HashMap::new(),
            kills: KillRecord::new(),
            wallet: Wallet::default(),
            inventory: Inventory::with_capacity(inventory_capacity),
            quests: HashMap::new(),
            instance_ids: InstanceIdAllocator::new(),
        }
    }

    pub fn insert(&mut self, entity: EntityId, record: EntityRecord) {
        self.records.insert(entity, record);
    }

    pub fn remove(&mut self, entity: EntityId) -> Option<EntityRecord> {
        self.records.remove(&entity)
    }

    pub fn record(&self, entity: EntityId) -> Option<&EntityRecord> {
        self.records.get(&entity)
    }

    pub fn record_mut(&mut self, entity: EntityId) -> Option<&mut EntityRecord> {
        self.records.get_mut(&entity)
    }

    pub fn records_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut EntityRecord)> {
        self.records.iter_mut().map(|(id, record)| (*id, record))
    }

    /// Mints a new item instance with a fresh id.
    pub fn mint(&mut self, template: &TemplateId, quantity: u16) -> ItemInstance {
        ItemInstance::new(template.clone(), self.instance_ids.allocate()).with_quantity(quantity)
    }

    /// Mints an instance carrying rolled bonus stats.
    pub fn mint_with_bonus(&mut self, template: &TemplateId, bonus: StatBlock) -> ItemInstance {
        ItemInstance::with_bonus(template.clone(), self.instance_ids.allocate(), bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minted_instances_have_unique_ids() {
        let mut store = GameStore::new(4);
        let herb = TemplateId::new("herb");
        let a = store.mint(&herb, 1);
        let b = store.mint(&herb, 3);
        assert_ne!(a.instance_id, b.instance_id);
        assert_eq!(b.quantity, 3);
    }
}
