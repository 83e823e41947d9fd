//! Quest acceptance, objective tracking and reward distribution.

use game_core::{
    CompletionHistory, EntityId, InventoryError, ItemOracle, QuestId, QuestOracle,
    QuestProgress, RewardDistributionResult, RewardSink, SkillId, TemplateId, distribute,
};
use tracing::{debug, info, warn};

use super::World;
use crate::error::{Result, RuntimeError};
use crate::events::{Event, QuestCompleted};
use crate::oracle::ItemOracleImpl;
use crate::store::GameStore;

/// Grants rewards straight into the store.
///
/// Experience is queued and applied by the world afterwards so level-ups go
/// through the normal stat refresh.
struct StoreRewardSink<'a> {
    store: &'a mut GameStore,
    items: &'a ItemOracleImpl,
    experience: Vec<(SkillId, u32)>,
}

impl RewardSink for StoreRewardSink<'_> {
    fn give_item(&mut self, template: &TemplateId, quantity: u16) -> std::result::Result<(), InventoryError> {
        let definition = self
            .items
            .template(template)
            .ok_or_else(|| InventoryError::UnknownTemplate(template.clone()))?;
        let instance = self.store.mint(template, quantity);
        self.store.inventory.add(instance, Some(definition))?;
        Ok(())
    }

    fn give_gold(&mut self, amount: u32) {
        self.store.wallet.deposit(amount);
    }

    fn give_quest_points(&mut self, amount: u32) {
        self.store.wallet.add_quest_points(amount);
    }

    fn give_experience(&mut self, skill: SkillId, amount: u32) {
        self.experience.push((skill, amount));
    }
}

impl World {
    /// Starts tracking objectives for a quest. Accepting twice is a no-op.
    pub fn accept_quest(&mut self, quest_id: &QuestId) -> Result<()> {
        let quest = self
            .oracles
            .quests()
            .quest(quest_id)
            .ok_or_else(|| RuntimeError::UnknownQuest(quest_id.clone()))?;
        self.store
            .quests
            .entry(quest_id.clone())
            .or_insert_with(|| QuestProgress::new(quest));
        debug!(target: "runtime::quests", quest = %quest_id, "quest accepted");
        Ok(())
    }

    pub fn quest_progress(&self, quest_id: &QuestId) -> Option<&QuestProgress> {
        self.store.quests.get(quest_id)
    }

    /// Marks `location` as visited for every accepted quest.
    pub fn record_visit(&mut self, location: &str) {
        for progress in self.store.quests.values_mut() {
            if let Some(quest) = self.oracles.quests().quest(&progress.quest) {
                progress.record_visit(quest, location);
            }
        }
    }

    /// Completes an accepted quest whose objectives are met and grants its rewards.
    pub fn complete_quest(&mut self, quest_id: &QuestId) -> Result<RewardDistributionResult> {
        let quest = self
            .oracles
            .quests()
            .quest(quest_id)
            .ok_or_else(|| RuntimeError::UnknownQuest(quest_id.clone()))?;
        let progress = self
            .store
            .quests
            .get(quest_id)
            .ok_or_else(|| RuntimeError::QuestIncomplete(quest_id.clone()))?;
        let inventory = &self.store.inventory;
        if !progress.objectives_met(quest, |template| inventory.count(template)) {
            return Err(RuntimeError::QuestIncomplete(quest_id.clone()));
        }

        self.distribute_quest_reward(quest_id)
    }

    /// Grants the rewards of one completion and records it.
    ///
    /// Objectives are not checked here. A one-shot quest that was already
    /// completed yields an unsuccessful result and nothing is granted.
    pub fn distribute_quest_reward(
        &mut self,
        quest_id: &QuestId,
    ) -> Result<RewardDistributionResult> {
        let oracles = self.oracles.clone();
        let quest = oracles
            .quests()
            .quest(quest_id)
            .ok_or_else(|| RuntimeError::UnknownQuest(quest_id.clone()))?;
        let history = self
            .store
            .quests
            .get(quest_id)
            .map_or_else(|| CompletionHistory::for_quest(quest), |p| p.history);

        let mut sink = StoreRewardSink {
            store: &mut self.store,
            items: oracles.items(),
            experience: Vec::new(),
        };
        let result = distribute(quest, &history, &mut sink);
        let experience = sink.experience;
        if !result.success {
            debug!(target: "runtime::quests", quest = %quest_id, message = %result.message, "reward distribution rejected");
            return Ok(result);
        }

        let now = self.now;
        let progress = self
            .store
            .quests
            .entry(quest_id.clone())
            .or_insert_with(|| QuestProgress::new(quest));
        progress.complete(now);
        let completion_count = progress.history.completion_count;

        for (skill, amount) in experience {
            if let Err(err) = self.gain_skill_experience(EntityId::PLAYER, skill, amount) {
                warn!(target: "runtime::quests", quest = %quest_id, %skill, error = %err, "experience reward skipped");
            }
        }

        info!(
            target: "runtime::quests",
            quest = %quest_id,
            completion_count,
            gold = result.gold_received,
            items = result.items_received.len(),
            dropped = result.items_dropped.len(),
            "quest completed"
        );
        self.publish(Event::QuestCompleted(QuestCompleted {
            quest: quest_id.clone(),
            completion_count,
            result: result.clone(),
        }));
        Ok(result)
    }
}
