//! Credits the player with a kill when the player's damage kills a creature.

use game_core::DamageOutcome;

use super::{FollowUp, HookContext, PostDamageHook};

#[derive(Debug, Default)]
pub struct KillCreditHook;

impl PostDamageHook for KillCreditHook {
    fn name(&self) -> &'static str {
        "kill_credit"
    }

    // Kill records must be updated before any hook reading them.
    fn priority(&self) -> i32 {
        -10
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool {
        ctx.source.is_player()
            && matches!(ctx.outcome, DamageOutcome::Died { .. })
            && ctx.target_kind.creature().is_some()
    }

    fn follow_ups(&self, ctx: &HookContext<'_>) -> Vec<FollowUp> {
        ctx.target_kind
            .creature()
            .map(|creature| FollowUp::RecordKill {
                creature: creature.clone(),
            })
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;
    use crate::hooks::DamageSource;
    use game_core::{DamageKind, DamageRules, EntityId};

    #[test]
    fn only_creature_deaths_are_credited() {
        let rules = DamageRules::default();
        let rat = EntityKind::Creature("rat".into());
        let died = HookContext {
            target: EntityId(3),
            target_kind: &rat,
            source: &DamageSource::Player,
            kind: DamageKind::Physical,
            final_damage: 4,
            outcome: DamageOutcome::Died { dealt: 4 },
            shield_equipped: false,
            rules: &rules,
        };

        assert!(KillCreditHook.should_trigger(&died));
        assert_eq!(
            KillCreditHook.follow_ups(&died),
            vec![FollowUp::RecordKill {
                creature: "rat".into()
            }]
        );

        let survived = HookContext {
            outcome: DamageOutcome::Applied {
                dealt: 1,
                remaining: 2,
            },
            ..died
        };
        assert!(!KillCreditHook.should_trigger(&survived));

        let player_kind = EntityKind::Player;
        let player = HookContext {
            target_kind: &player_kind,
            ..died
        };
        assert!(!KillCreditHook.should_trigger(&player));
    }

    #[test]
    fn deaths_caused_by_others_are_not_credited() {
        let rules = DamageRules::default();
        let rat = EntityKind::Creature("rat".into());
        let wolf = DamageSource::Creature("wolf".into());
        let died = HookContext {
            target: EntityId(3),
            target_kind: &rat,
            source: &wolf,
            kind: DamageKind::Physical,
            final_damage: 50,
            outcome: DamageOutcome::Died { dealt: 5 },
            shield_equipped: false,
            rules: &rules,
        };
        assert!(!KillCreditHook.should_trigger(&died));

        let trap = HookContext {
            source: &DamageSource::Environment,
            ..died
        };
        assert!(!KillCreditHook.should_trigger(&trap));
    }
}
