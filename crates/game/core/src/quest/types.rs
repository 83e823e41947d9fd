use std::collections::HashSet;

use crate::error::ContentError;
use crate::skills::SkillId;
use crate::state::{CreatureId, QuestId, TemplateId, Tick};

/// Something the player has to accomplish.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Objective {
    Kill { creature: CreatureId, count: u32 },
    Collect { template: TemplateId, count: u32 },
    Visit { location: String },
}

impl Objective {
    /// Counter value at which the objective is satisfied.
    pub fn target(&self) -> u32 {
        match self {
            Self::Kill { count, .. } | Self::Collect { count, .. } => *count,
            Self::Visit { .. } => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reward {
    Item { template: TemplateId, quantity: u16 },
    Gold(u32),
    QuestPoints(u32),
    Experience { skill: SkillId, amount: u32 },
}

/// One reward with its gating flags.
///
/// A line with neither flag is granted on every completion.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardLine {
    pub reward: Reward,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_first_time_only: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_repeatable_reward: bool,
}

impl RewardLine {
    pub fn always(reward: Reward) -> Self {
        Self {
            reward,
            is_first_time_only: false,
            is_repeatable_reward: false,
        }
    }

    pub fn first_time(reward: Reward) -> Self {
        Self {
            is_first_time_only: true,
            ..Self::always(reward)
        }
    }

    pub fn repeat_only(reward: Reward) -> Self {
        Self {
            is_repeatable_reward: true,
            ..Self::always(reward)
        }
    }

    /// Whether this line is granted given prior completions.
    pub fn applies(&self, history: &CompletionHistory) -> bool {
        match (self.is_first_time_only, self.is_repeatable_reward) {
            (true, _) => history.completion_count == 0,
            (false, true) => history.completion_count >= 1 && history.is_repeatable,
            (false, false) => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quest {
    pub id: QuestId,
    pub title: String,
    pub objectives: Vec<Objective>,
    pub rewards: Vec<RewardLine>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub repeatable: bool,
}

impl Quest {
    /// Rejects quests that could never be distributed consistently.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.objectives.is_empty() {
            return Err(ContentError::EmptyObjectives(self.id.clone()));
        }
        if let Some(line) = self
            .rewards
            .iter()
            .position(|line| line.is_first_time_only && line.is_repeatable_reward)
        {
            return Err(ContentError::ConflictingRewardFlags {
                quest: self.id.clone(),
                line,
            });
        }
        Ok(())
    }

    /// Validates a batch of quests and checks that ids are unique.
    pub fn validate_all<'a>(quests: impl IntoIterator<Item = &'a Quest>) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for quest in quests {
            quest.validate()?;
            if !seen.insert(&quest.id) {
                return Err(ContentError::DuplicateQuest(quest.id.clone()));
            }
        }
        Ok(())
    }
}

/// How often, and when, a quest has been completed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompletionHistory {
    pub completion_count: u32,
    pub first_completed_at: Option<Tick>,
    pub last_completed_at: Option<Tick>,
    pub is_repeatable: bool,
}

impl CompletionHistory {
    pub fn for_quest(quest: &Quest) -> Self {
        Self {
            is_repeatable: quest.repeatable,
            ..Self::default()
        }
    }

    pub fn record_completion(&mut self, now: Tick) {
        self.completion_count = self.completion_count.saturating_add(1);
        self.first_completed_at.get_or_insert(now);
        self.last_completed_at = Some(now);
    }

    /// A quest may be completed again if it never was, or if it repeats.
    pub fn can_complete(&self) -> bool {
        self.completion_count == 0 || self.is_repeatable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quest(rewards: Vec<RewardLine>) -> Quest {
        Quest {
            id: QuestId::new("rat_problem"),
            title: "Rat Problem".into(),
            objectives: vec![Objective::Kill {
                creature: CreatureId::new("rat"),
                count: 3,
            }],
            rewards,
            repeatable: true,
        }
    }

    #[test]
    fn conflicting_flags_are_rejected() {
        let mut line = RewardLine::first_time(Reward::Gold(5));
        line.is_repeatable_reward = true;
        let quest = quest(vec![RewardLine::always(Reward::Gold(1)), line]);

        assert_eq!(
            quest.validate(),
            Err(ContentError::ConflictingRewardFlags {
                quest: QuestId::new("rat_problem"),
                line: 1,
            })
        );
    }

    #[test]
    fn quest_without_objectives_is_rejected() {
        let mut quest = quest(vec![]);
        quest.objectives.clear();
        assert_eq!(
            quest.validate(),
            Err(ContentError::EmptyObjectives(QuestId::new("rat_problem")))
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let a = quest(vec![]);
        let b = quest(vec![]);
        assert_eq!(
            Quest::validate_all([&a, &b]),
            Err(ContentError::DuplicateQuest(QuestId::new("rat_problem")))
        );
    }

    #[test]
    fn reward_line_gating() {
        let first = CompletionHistory {
            is_repeatable: true,
            ..CompletionHistory::default()
        };
        let mut repeat = first;
        repeat.record_completion(Tick(10));

        let once = RewardLine::first_time(Reward::Gold(1));
        let again = RewardLine::repeat_only(Reward::Gold(1));
        let always = RewardLine::always(Reward::Gold(1));

        assert!(once.applies(&first) && !once.applies(&repeat));
        assert!(!again.applies(&first) && again.applies(&repeat));
        assert!(always.applies(&first) && always.applies(&repeat));
    }

    #[test]
    fn history_keeps_first_completion_tick() {
        let mut history = CompletionHistory::default();
        history.record_completion(Tick(3));
        history.record_completion(Tick(9));

        assert_eq!(history.completion_count, 2);
        assert_eq!(history.first_completed_at, Some(Tick(3)));
        assert_eq!(history.last_completed_at, Some(Tick(9)));
    }
}
