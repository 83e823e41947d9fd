//! Skill experience and kill records.

use game_core::{CreatureId, EntityId, QuestOracle, SkillId, SkillProgress, TablesOracle};
use tracing::info;

use super::World;
use crate::error::{Result, RuntimeError};
use crate::events::{Event, ProgressionEvent};

impl World {
    /// Adds skill experience; a level-up refreshes the entity's stats.
    pub fn gain_skill_experience(
        &mut self,
        entity: EntityId,
        skill: SkillId,
        amount: u32,
    ) -> Result<SkillProgress> {
        let curve = self.config.game_config.skill_curve;
        let record = self
            .store
            .record_mut(entity)
            .ok_or(RuntimeError::UnknownEntity(entity))?;
        let progress = record.skills.gain_experience(skill, amount, &curve);

        self.publish(Event::Progression(ProgressionEvent::SkillUpdated {
            entity,
            progress,
        }));
        if progress.leveled_up {
            info!(
                target: "runtime::progression",
                %entity,
                %skill,
                level = progress.level,
                "skill leveled up"
            );
            self.refresh_stats(entity)?;
        }
        Ok(progress)
    }

    /// Credits the player with a kill and advances matching quest objectives.
    pub fn record_kill(&mut self, creature: &CreatureId) -> u32 {
        let kill_count = self.store.kills.record_kill(creature);

        for progress in self.store.quests.values_mut() {
            if let Some(quest) = self.oracles.quests().quest(&progress.quest) {
                progress.record_kill(quest, creature);
            }
        }

        let milestone = self
            .oracles
            .tables()
            .kill_bonuses(creature)
            .milestones()
            .iter()
            .any(|m| m.kill_count == kill_count);
        if milestone {
            info!(target: "runtime::progression", %creature, kill_count, "kill milestone reached");
        }

        self.publish(Event::Progression(ProgressionEvent::CreatureKilled {
            creature: creature.clone(),
            kill_count,
        }));
        kill_count
    }
}
