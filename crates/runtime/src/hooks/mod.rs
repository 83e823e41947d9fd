//! Post-damage hook system.
//!
//! After damage is applied, the world builds a [`HookContext`] and asks each
//! registered hook whether it wants to react. Triggered hooks return
//! [`FollowUp`] requests which the world applies through its normal mutation
//! paths, so every side effect still refreshes stats and publishes events.
//!
//! Hooks are sorted by priority (lower values run first).

mod kill_credit;
mod registry;
mod shield_training;

pub use kill_credit::KillCreditHook;
pub use registry::HookRegistry;
pub use shield_training::ShieldTrainingHook;

use game_core::{CreatureId, DamageKind, DamageOutcome, DamageRules, EntityId, SkillId};

use crate::entity::EntityKind;

/// Who caused a hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DamageSource {
    Player,
    Creature(CreatureId),
    /// Traps, scripted damage and attacks with no known attacker.
    Environment,
}

impl DamageSource {
    pub fn is_player(&self) -> bool {
        matches!(self, Self::Player)
    }
}

/// What the world knows about a hit once it has been applied.
#[derive(Debug, Clone, Copy)]
pub struct HookContext<'a> {
    pub target: EntityId,
    pub target_kind: &'a EntityKind,
    pub source: &'a DamageSource,
    pub kind: DamageKind,
    /// Resolved damage before it is capped by the target's remaining health.
    pub final_damage: u32,
    pub outcome: DamageOutcome,
    pub shield_equipped: bool,
    pub rules: &'a DamageRules,
}

/// Side effect requested by a hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUp {
    GainExperience {
        entity: EntityId,
        skill: SkillId,
        amount: u32,
    },
    RecordKill {
        creature: CreatureId,
    },
}

pub trait PostDamageHook: Send + Sync {
    /// Returns a human-readable name for this hook (used in logging and lookup).
    fn name(&self) -> &'static str;

    /// Lower values execute first.
    fn priority(&self) -> i32 {
        0
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool;

    fn follow_ups(&self, ctx: &HookContext<'_>) -> Vec<FollowUp>;
}
