//! Trains the shield skill when a shield absorbs physical damage.

use game_core::{DamageKind, SkillId, shield_training_experience};

use super::{FollowUp, HookContext, PostDamageHook};

#[derive(Debug, Default)]
pub struct ShieldTrainingHook;

impl PostDamageHook for ShieldTrainingHook {
    fn name(&self) -> &'static str {
        "shield_training"
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool {
        ctx.kind == DamageKind::Physical && ctx.shield_equipped && !ctx.outcome.is_noop()
    }

    fn follow_ups(&self, ctx: &HookContext<'_>) -> Vec<FollowUp> {
        vec![FollowUp::GainExperience {
            entity: ctx.target,
            skill: SkillId::Shield,
            amount: shield_training_experience(ctx.final_damage, ctx.rules),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;
    use crate::hooks::DamageSource;
    use game_core::{DamageOutcome, DamageRules, EntityId};

    static PLAYER: EntityKind = EntityKind::Player;
    static TRAP: DamageSource = DamageSource::Environment;

    fn ctx<'a>(
        kind: DamageKind,
        shield: bool,
        outcome: DamageOutcome,
        rules: &'a DamageRules,
    ) -> HookContext<'a> {
        HookContext {
            target: EntityId::PLAYER,
            target_kind: &PLAYER,
            source: &TRAP,
            kind,
            final_damage: outcome.dealt(),
            outcome,
            shield_equipped: shield,
            rules,
        }
    }

    #[test]
    fn physical_hit_on_shielded_entity_trains_shield() {
        let rules = DamageRules::default();
        let hit = DamageOutcome::Applied {
            dealt: 16,
            remaining: 4,
        };
        let context = ctx(DamageKind::Physical, true, hit, &rules);

        assert!(ShieldTrainingHook.should_trigger(&context));
        assert_eq!(
            ShieldTrainingHook.follow_ups(&context),
            vec![FollowUp::GainExperience {
                entity: EntityId::PLAYER,
                skill: SkillId::Shield,
                amount: 8,
            }]
        );
    }

    #[test]
    fn magic_unshielded_or_dead_targets_do_not_train() {
        let rules = DamageRules::default();
        let hit = DamageOutcome::Died { dealt: 3 };
        assert!(!ShieldTrainingHook.should_trigger(&ctx(DamageKind::Magic, true, hit, &rules)));
        assert!(!ShieldTrainingHook.should_trigger(&ctx(DamageKind::Physical, false, hit, &rules)));
        assert!(!ShieldTrainingHook.should_trigger(&ctx(
            DamageKind::Physical,
            true,
            DamageOutcome::AlreadyDead,
            &rules
        )));
    }

    #[test]
    fn overkill_trains_from_resolved_damage() {
        let rules = DamageRules::default();
        let context = HookContext {
            final_damage: 160,
            ..ctx(
                DamageKind::Physical,
                true,
                DamageOutcome::Died { dealt: 10 },
                &rules,
            )
        };

        assert_eq!(
            ShieldTrainingHook.follow_ups(&context),
            vec![FollowUp::GainExperience {
                entity: EntityId::PLAYER,
                skill: SkillId::Shield,
                amount: 80,
            }]
        );
    }
}
