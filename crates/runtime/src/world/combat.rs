//! Damage application and post-damage follow-ups.

use game_core::{
    CreatureId, DamageKind, DamageOutcome, EntityId, EquipmentSlot, TablesOracle,
    resolve_incoming_damage, resolve_outgoing_damage,
};
use tracing::{debug, info, warn};

use super::{DamageReport, World};
use crate::error::Result;
use crate::events::{DamageTaken, Event, LifecycleEvent};
use crate::hooks::{DamageSource, FollowUp, HookContext};

impl World {
    /// Applies a hit computed elsewhere against `target`.
    ///
    /// When the player is hit by a creature, the player's kill-bonus damage
    /// reduction against that creature type applies.
    pub fn apply_attack(
        &mut self,
        target: EntityId,
        raw_amount: u32,
        is_magic: bool,
        attacker: Option<&CreatureId>,
    ) -> Result<DamageReport> {
        if let Some(report) = self.unhittable(target) {
            return Ok(report);
        }

        let stats = self.calculated_stats(target)?;
        let reduction = match attacker {
            Some(creature) if target.is_player() => self
                .oracles
                .tables()
                .kill_bonuses(creature)
                .damage_reduction(self.store.kills.count(creature)),
            _ => 0,
        };
        let kind = DamageKind::from_is_magic(is_magic);
        let amount = resolve_incoming_damage(
            raw_amount,
            &stats.total,
            kind,
            reduction,
            &self.config.game_config.damage,
        );
        debug!(target: "runtime::combat", %target, raw_amount, amount, reduction, ?kind, "incoming damage resolved");

        let source = attacker.map_or(DamageSource::Environment, |creature| {
            DamageSource::Creature(creature.clone())
        });
        self.apply_damage(target, amount, kind, source)
    }

    /// The player hits `target` with a physical strike.
    ///
    /// Kill-bonus damage against the target's creature type is added before
    /// the target's armor applies.
    pub fn player_strike(&mut self, target: EntityId, raw_amount: u32) -> Result<DamageReport> {
        if let Some(report) = self.unhittable(target) {
            return Ok(report);
        }

        let creature = self.entities.get(&target).and_then(|e| e.kind.creature());
        let bonus = creature.map_or(0, |creature| {
            self.oracles
                .tables()
                .kill_bonuses(creature)
                .bonus_damage(self.store.kills.count(creature))
        });
        let outgoing = resolve_outgoing_damage(raw_amount, bonus);
        let stats = self.calculated_stats(target)?;
        let amount = resolve_incoming_damage(
            outgoing,
            &stats.total,
            DamageKind::Physical,
            0,
            &self.config.game_config.damage,
        );

        self.apply_damage(target, amount, DamageKind::Physical, DamageSource::Player)
    }

    /// Short-circuits hits that cannot land, before any stats are computed.
    fn unhittable(&self, target: EntityId) -> Option<DamageReport> {
        let Some(vitals) = self.entities.get(&target).and_then(|e| e.vitals()) else {
            debug!(target: "runtime::combat", %target, "hit against missing entity ignored");
            return Some(DamageReport::NoTarget);
        };
        if vitals.is_alive() {
            return None;
        }
        debug!(target: "runtime::combat", %target, "hit against dead entity ignored");
        Some(DamageReport::Resolved {
            amount: 0,
            outcome: DamageOutcome::AlreadyDead,
        })
    }

    /// Applies already-resolved damage, publishes the results and runs hooks.
    ///
    /// Only damage from [`DamageSource::Player`] credits the player with a kill.
    pub fn apply_damage(
        &mut self,
        target: EntityId,
        amount: u32,
        kind: DamageKind,
        source: DamageSource,
    ) -> Result<DamageReport> {
        let Some(entity) = self.entities.get_mut(&target) else {
            return Ok(DamageReport::NoTarget);
        };
        let Some(vitals) = entity.vitals_mut() else {
            return Ok(DamageReport::NoTarget);
        };

        let outcome = vitals.apply_damage(amount);
        let remaining_health = vitals.health();
        match outcome {
            DamageOutcome::AlreadyDead => {
                debug!(target: "runtime::combat", %target, "damage against dead entity ignored");
                return Ok(DamageReport::Resolved { amount, outcome });
            }
            DamageOutcome::Died { .. } => entity.set_interactive(false),
            DamageOutcome::Applied { .. } => {}
        }
        let target_kind = entity.kind.clone();

        self.publish(Event::DamageTaken(DamageTaken {
            entity: target,
            amount,
            dealt: outcome.dealt(),
            remaining_health,
            kind,
        }));
        if let DamageOutcome::Died { .. } = outcome {
            info!(target: "runtime::combat", %target, "entity died");
            self.publish(Event::Lifecycle(LifecycleEvent::Died {
                entity: target,
                creature: target_kind.creature().cloned(),
            }));
        }

        let shield_equipped = self
            .store
            .record(target)
            .is_some_and(|record| record.equipment.is_equipped(EquipmentSlot::Shield));
        let ctx = HookContext {
            target,
            target_kind: &target_kind,
            source: &source,
            kind,
            final_damage: amount,
            outcome,
            shield_equipped,
            rules: &self.config.game_config.damage,
        };
        let follow_ups = self.hooks.evaluate(&ctx);
        for follow_up in follow_ups {
            self.apply_follow_up(follow_up);
        }

        Ok(DamageReport::Resolved { amount, outcome })
    }

    fn apply_follow_up(&mut self, follow_up: FollowUp) {
        match follow_up {
            FollowUp::GainExperience {
                entity,
                skill,
                amount,
            } => {
                if let Err(err) = self.gain_skill_experience(entity, skill, amount) {
                    warn!(target: "runtime::hooks", %entity, %skill, error = %err, "experience follow-up skipped");
                }
            }
            FollowUp::RecordKill { creature } => {
                self.record_kill(&creature);
            }
        }
    }
}
