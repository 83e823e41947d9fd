//! Inbound commands and their outcomes.

use game_core::{
    CalculatedStats, CreatureId, DamageOutcome, EntityId, EquipmentSet, RespawnOutcome, Tick,
};

/// Who changed an equipment set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeSource {
    /// The player rearranged equipment through the UI.
    Player,
    /// A script or system action (loot, quest, debugging).
    System,
}

/// Inbound events consumed by [`super::World::dispatch`].
#[derive(Debug, Clone)]
pub enum Command {
    EquipmentChanged {
        entity: EntityId,
        equipment: EquipmentSet,
        source: ChangeSource,
    },
    Respawn {
        entity: EntityId,
        x: f32,
        y: f32,
    },
    /// A hit against `target` computed elsewhere (AI, projectiles).
    AttackResolved {
        target: EntityId,
        raw_amount: u32,
        is_magic: bool,
        /// Creature type of the attacker, used for the target's kill-bonus reduction.
        attacker: Option<CreatureId>,
    },
    /// The player hits `target`; kill-bonus damage applies.
    PlayerStrike { target: EntityId, raw_amount: u32 },
    Tick { now: Tick },
}

/// Result of applying damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageReport {
    /// The target does not exist (or cannot take damage); nothing happened.
    NoTarget,
    Resolved { amount: u32, outcome: DamageOutcome },
}

impl DamageReport {
    pub fn outcome(&self) -> Option<DamageOutcome> {
        match self {
            Self::NoTarget => None,
            Self::Resolved { outcome, .. } => Some(*outcome),
        }
    }
}

/// Work done by one [`super::World::tick`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub health_restored: u32,
    pub mana_restored: u32,
    pub expired_cooldowns: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    StatsUpdated(CalculatedStats),
    Respawn(RespawnOutcome),
    Damage(DamageReport),
    Ticked(TickReport),
}
