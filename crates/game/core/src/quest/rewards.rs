//! Quest reward distribution.
//!
//! Rewards are granted through a [`RewardSink`], which the runtime implements
//! on top of the central store. A failing item grant never aborts the
//! distribution: the item is recorded under `items_dropped` and processing
//! continues with the next line.

use super::{CompletionHistory, Quest, Reward};
use crate::skills::SkillId;
use crate::state::{InventoryError, TemplateId};

/// Receiver of granted rewards.
pub trait RewardSink {
    fn give_item(&mut self, template: &TemplateId, quantity: u16) -> Result<(), InventoryError>;
    fn give_gold(&mut self, amount: u32);
    fn give_quest_points(&mut self, amount: u32);
    fn give_experience(&mut self, skill: SkillId, amount: u32);
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemGrant {
    pub template: TemplateId,
    pub quantity: u16,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DroppedItem {
    pub template: TemplateId,
    pub quantity: u16,
    pub reason: InventoryError,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardDistributionResult {
    pub success: bool,
    pub items_received: Vec<ItemGrant>,
    pub items_dropped: Vec<DroppedItem>,
    pub gold_received: u32,
    pub quest_points_received: u32,
    pub experience_received: u32,
    pub message: String,
}

impl RewardDistributionResult {
    fn rejected(message: String) -> Self {
        Self {
            success: false,
            message,
            ..Self::default()
        }
    }
}

/// Grants every reward line that applies to this completion.
///
/// `history` is the state *before* this completion is recorded.
pub fn distribute(
    quest: &Quest,
    history: &CompletionHistory,
    sink: &mut impl RewardSink,
) -> RewardDistributionResult {
    if !history.can_complete() {
        return RewardDistributionResult::rejected(format!(
            "quest '{}' has already been completed",
            quest.id
        ));
    }

    let mut result = RewardDistributionResult {
        success: true,
        ..RewardDistributionResult::default()
    };

    for line in quest.rewards.iter().filter(|line| line.applies(history)) {
        match &line.reward {
            Reward::Item { template, quantity } => match sink.give_item(template, *quantity) {
                Ok(()) => result.items_received.push(ItemGrant {
                    template: template.clone(),
                    quantity: *quantity,
                }),
                Err(reason) => {
                    tracing::warn!(quest = %quest.id, %template, %reason, "reward item dropped");
                    result.items_dropped.push(DroppedItem {
                        template: template.clone(),
                        quantity: *quantity,
                        reason,
                    });
                }
            },
            Reward::Gold(amount) => {
                sink.give_gold(*amount);
                result.gold_received = result.gold_received.saturating_add(*amount);
            }
            Reward::QuestPoints(amount) => {
                sink.give_quest_points(*amount);
                result.quest_points_received = result.quest_points_received.saturating_add(*amount);
            }
            Reward::Experience { skill, amount } => {
                sink.give_experience(*skill, *amount);
                result.experience_received = result.experience_received.saturating_add(*amount);
            }
        }
    }

    result.message = if result.items_dropped.is_empty() {
        format!("completed '{}'", quest.title)
    } else {
        format!(
            "completed '{}', {} item(s) could not be stored",
            quest.title,
            result.items_dropped.len()
        )
    };
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::{Objective, RewardLine};
    use crate::state::{CreatureId, QuestId};

    #[derive(Default)]
    struct RecordingSink {
        free_slots: usize,
        items: Vec<(TemplateId, u16)>,
        gold: u32,
        quest_points: u32,
        experience: Vec<(SkillId, u32)>,
    }

    impl RewardSink for RecordingSink {
        fn give_item(&mut self, template: &TemplateId, quantity: u16) -> Result<(), InventoryError> {
            if self.free_slots == 0 {
                return Err(InventoryError::Full { capacity: 0 });
            }
            self.free_slots -= 1;
            self.items.push((template.clone(), quantity));
            Ok(())
        }

        fn give_gold(&mut self, amount: u32) {
            self.gold += amount;
        }

        fn give_quest_points(&mut self, amount: u32) {
            self.quest_points += amount;
        }

        fn give_experience(&mut self, skill: SkillId, amount: u32) {
            self.experience.push((skill, amount));
        }
    }

    fn item(name: &str) -> Reward {
        Reward::Item {
            template: TemplateId::new(name),
            quantity: 1,
        }
    }

    fn quest(repeatable: bool) -> Quest {
        Quest {
            id: QuestId::new("rat_problem"),
            title: "Rat Problem".into(),
            objectives: vec![Objective::Kill {
                creature: CreatureId::new("rat"),
                count: 1,
            }],
            rewards: vec![
                RewardLine::first_time(item("i1")),
                RewardLine::repeat_only(item("i2")),
                RewardLine::always(item("i3")),
                RewardLine::always(Reward::Gold(25)),
                RewardLine::first_time(Reward::QuestPoints(3)),
                RewardLine::always(Reward::Experience {
                    skill: SkillId::Melee,
                    amount: 40,
                }),
            ],
            repeatable,
        }
    }

    fn received(result: &RewardDistributionResult) -> Vec<&str> {
        result
            .items_received
            .iter()
            .map(|grant| grant.template.as_str())
            .collect()
    }

    #[test]
    fn first_completion_grants_first_time_and_unflagged_lines() {
        let quest = quest(true);
        let history = CompletionHistory::for_quest(&quest);
        let mut sink = RecordingSink {
            free_slots: 10,
            ..RecordingSink::default()
        };

        let result = distribute(&quest, &history, &mut sink);

        assert!(result.success);
        assert_eq!(received(&result), vec!["i1", "i3"]);
        assert_eq!(result.gold_received, 25);
        assert_eq!(result.quest_points_received, 3);
        assert_eq!(result.experience_received, 40);
        assert_eq!(sink.gold, 25);
        assert_eq!(sink.experience, vec![(SkillId::Melee, 40)]);
    }

    #[test]
    fn repeat_completion_grants_repeatable_and_unflagged_lines() {
        let quest = quest(true);
        let mut history = CompletionHistory::for_quest(&quest);
        history.record_completion(crate::state::Tick(1));
        let mut sink = RecordingSink {
            free_slots: 10,
            ..RecordingSink::default()
        };

        let result = distribute(&quest, &history, &mut sink);

        assert!(result.success);
        assert_eq!(received(&result), vec!["i2", "i3"]);
        assert_eq!(result.quest_points_received, 0);
    }

    #[test]
    fn items_that_do_not_fit_are_dropped_and_processing_continues() {
        let quest = quest(true);
        let history = CompletionHistory::for_quest(&quest);
        let mut sink = RecordingSink {
            free_slots: 1,
            ..RecordingSink::default()
        };

        let result = distribute(&quest, &history, &mut sink);

        assert!(result.success);
        assert_eq!(received(&result), vec!["i1"]);
        assert_eq!(result.items_dropped.len(), 1);
        assert_eq!(result.items_dropped[0].template.as_str(), "i3");
        assert_eq!(result.gold_received, 25);
    }

    #[test]
    fn completed_one_shot_quest_yields_nothing() {
        let quest = quest(false);
        let mut history = CompletionHistory::for_quest(&quest);
        history.record_completion(crate::state::Tick(1));
        let mut sink = RecordingSink {
            free_slots: 10,
            ..RecordingSink::default()
        };

        let result = distribute(&quest, &history, &mut sink);

        assert!(!result.success);
        assert!(result.items_received.is_empty());
        assert_eq!(sink.gold, 0);
    }
}
