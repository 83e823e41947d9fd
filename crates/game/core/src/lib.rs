//! Deterministic stat and combat rules shared by the runtime and tools.
//!
//! `game-core` turns an entity's equipment, trained skills, purchased upgrades
//! and kill history into one [`CalculatedStats`] snapshot, resolves incoming
//! and outgoing damage, drives the [`Vitals`] lifecycle, and distributes quest
//! rewards. Everything here is synchronous and free of I/O; static content is
//! reached through the oracle traits in [`env`].
pub mod combat;
pub mod config;
pub mod cooldown;
pub mod env;
pub mod error;
pub mod kills;
pub mod lifecycle;
pub mod quest;
pub mod regen;
pub mod skills;
pub mod state;
pub mod stats;

#[cfg(test)]
mod test_support;

pub use combat::{
    DamageKind, resolve_incoming_damage, resolve_outgoing_damage, shield_training_experience,
};
pub use config::{DamageRules, GameConfig, SkillCurve};
pub use cooldown::Cooldowns;
pub use env::{Env, GameEnv, ItemOracle, ItemTemplate, QuestOracle, TablesOracle};
pub use error::{ContentError, ErrorSeverity, GameError};
pub use kills::{KillBonusMilestone, KillBonusTable, KillRecord, MilestoneProgress};
pub use lifecycle::{DamageOutcome, LifeState, RespawnOutcome, Vitals};
pub use quest::{
    CompletionHistory, DroppedItem, ItemGrant, Objective, Quest, QuestProgress, Reward,
    RewardDistributionResult, RewardLine, RewardSink, distribute,
};
pub use regen::{RegenClock, regen_amount};
pub use skills::{SkillEntry, SkillId, SkillLedger, SkillProgress, SkillProgression};
pub use state::{
    CreatureId, EntityId, EquipmentBuilder, EquipmentSet, EquipmentSlot, InstanceId,
    InstanceIdAllocator, Inventory, InventoryError, ItemInstance, Position, QuestId,
    ResourceMeter, Stored, TemplateId, Tick,
};
pub use stats::{CalculatedStats, StatBlock, StatKind, compute_stats};
