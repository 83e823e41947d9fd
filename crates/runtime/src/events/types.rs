//! Outbound event payloads.

use game_core::{
    CalculatedStats, CreatureId, DamageKind, EntityId, Position, QuestId,
    RewardDistributionResult, SkillProgress,
};
use serde::{Deserialize, Serialize};

/// Damage applied to an entity.
///
/// `amount` is the resolved damage of the hit; `dealt` is the part that
/// actually came off the entity's health.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageTaken {
    pub entity: EntityId,
    pub amount: u32,
    pub dealt: u32,
    pub remaining_health: u32,
    pub kind: DamageKind,
}

/// Events related to life and death.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LifecycleEvent {
    Died {
        entity: EntityId,
        creature: Option<CreatureId>,
    },
    Respawned {
        entity: EntityId,
        health: u32,
        position: Position,
    },
    ConstructionFailed {
        entity: EntityId,
        reason: String,
    },
}

/// Events related to character growth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProgressionEvent {
    SkillUpdated {
        entity: EntityId,
        progress: SkillProgress,
    },
    StatsChanged {
        entity: EntityId,
        stats: CalculatedStats,
    },
    CreatureKilled {
        creature: CreatureId,
        kill_count: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestCompleted {
    pub quest: QuestId,
    pub completion_count: u32,
    pub result: RewardDistributionResult,
}
