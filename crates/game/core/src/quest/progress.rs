//! Objective counters for an accepted quest.

use super::{CompletionHistory, Objective, Quest};
use crate::state::{CreatureId, QuestId, TemplateId};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestProgress {
    pub quest: QuestId,
    /// One counter per objective, in declaration order.
    pub counters: Vec<u32>,
    pub completed: bool,
    pub history: CompletionHistory,
}

impl QuestProgress {
    pub fn new(quest: &Quest) -> Self {
        Self {
            quest: quest.id.clone(),
            counters: vec![0; quest.objectives.len()],
            completed: false,
            history: CompletionHistory::for_quest(quest),
        }
    }

    /// Advances every kill objective targeting `creature`. Returns true if any moved.
    pub fn record_kill(&mut self, quest: &Quest, creature: &CreatureId) -> bool {
        self.advance(quest, |objective| {
            matches!(objective, Objective::Kill { creature: target, .. } if target == creature)
        })
    }

    pub fn record_visit(&mut self, quest: &Quest, location: &str) -> bool {
        self.advance(quest, |objective| {
            matches!(objective, Objective::Visit { location: target } if target == location)
        })
    }

    fn advance(&mut self, quest: &Quest, matches: impl Fn(&Objective) -> bool) -> bool {
        if self.completed {
            return false;
        }
        let mut moved = false;
        for (objective, counter) in quest.objectives.iter().zip(self.counters.iter_mut()) {
            if matches(objective) && *counter < objective.target() {
                *counter += 1;
                moved = true;
            }
        }
        moved
    }

    /// Whether every objective is satisfied.
    ///
    /// Collect objectives are checked against `held`, which returns how many
    /// of a template the player currently carries.
    pub fn objectives_met(&self, quest: &Quest, held: impl Fn(&TemplateId) -> u32) -> bool {
        quest
            .objectives
            .iter()
            .zip(&self.counters)
            .all(|(objective, &counter)| match objective {
                Objective::Collect { template, count } => held(template) >= *count,
                other => counter >= other.target(),
            })
    }

    /// Marks the quest complete and updates its history.
    ///
    /// Repeatable quests reset their counters so they can be run again.
    pub fn complete(&mut self, now: crate::state::Tick) {
        self.history.record_completion(now);
        if self.history.is_repeatable {
            self.counters.iter_mut().for_each(|c| *c = 0);
            self.completed = false;
        } else {
            self.completed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Tick;

    fn hunt() -> Quest {
        Quest {
            id: QuestId::new("hunt"),
            title: "Hunt".into(),
            objectives: vec![
                Objective::Kill {
                    creature: CreatureId::new("rat"),
                    count: 2,
                },
                Objective::Collect {
                    template: TemplateId::new("rat_tail"),
                    count: 1,
                },
                Objective::Visit {
                    location: "cellar".into(),
                },
            ],
            rewards: vec![],
            repeatable: true,
        }
    }

    #[test]
    fn objectives_advance_and_cap_at_target() {
        let quest = hunt();
        let rat = CreatureId::new("rat");
        let mut progress = QuestProgress::new(&quest);

        assert!(progress.record_kill(&quest, &rat));
        assert!(progress.record_kill(&quest, &rat));
        assert!(!progress.record_kill(&quest, &rat));
        assert!(!progress.record_kill(&quest, &CreatureId::new("bat")));
        assert_eq!(progress.counters, vec![2, 0, 0]);

        assert!(progress.record_visit(&quest, "cellar"));
        assert!(!progress.objectives_met(&quest, |_| 0));
        assert!(progress.objectives_met(&quest, |_| 1));
    }

    #[test]
    fn repeatable_quest_resets_counters_on_completion() {
        let quest = hunt();
        let mut progress = QuestProgress::new(&quest);
        progress.record_kill(&quest, &CreatureId::new("rat"));

        progress.complete(Tick(5));

        assert!(!progress.completed);
        assert_eq!(progress.counters, vec![0, 0, 0]);
        assert_eq!(progress.history.completion_count, 1);
    }

    #[test]
    fn one_shot_quest_stays_completed() {
        let mut quest = hunt();
        quest.repeatable = false;
        let mut progress = QuestProgress::new(&quest);

        progress.complete(Tick(1));

        assert!(progress.completed);
        assert!(!progress.history.can_complete());
        assert!(!progress.record_visit(&quest, "cellar"));
    }
}
