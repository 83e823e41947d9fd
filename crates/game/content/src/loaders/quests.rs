//! Quest catalog loader.

use std::path::Path;

use game_core::Quest;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestCatalog {
    pub quests: Vec<Quest>,
}

pub struct QuestLoader;

impl QuestLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Quest>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse quests and run [`Quest::validate_all`] over them.
    pub fn parse(content: &str) -> LoadResult<Vec<Quest>> {
        let catalog: QuestCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse quest catalog RON: {}", e))?;
        Quest::validate_all(&catalog.quests)?;
        Ok(catalog.quests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{ContentError, Objective, Reward};

    #[test]
    fn parses_objectives_and_reward_flags() {
        let quests = QuestLoader::parse(
            r#"(quests: [(
                id: "rat_problem",
                title: "Rat Problem",
                repeatable: true,
                objectives: [Kill(creature: "rat", count: 3), Visit(location: "cellar")],
                rewards: [
                    (reward: Gold(25), is_first_time_only: true),
                    (reward: Item(template: "cheese", quantity: 1), is_repeatable_reward: true),
                    (reward: Experience(skill: melee, amount: 40)),
                ],
            )])"#,
        )
        .unwrap();

        let quest = &quests[0];
        assert!(quest.repeatable);
        assert_eq!(quest.objectives[1], Objective::Visit { location: "cellar".into() });
        assert_eq!(quest.rewards[0].reward, Reward::Gold(25));
        assert!(quest.rewards[0].is_first_time_only);
        assert!(quest.rewards[1].is_repeatable_reward);
        assert!(!quest.rewards[2].is_first_time_only && !quest.rewards[2].is_repeatable_reward);
    }

    #[test]
    fn conflicting_reward_flags_fail_to_load() {
        let err = QuestLoader::parse(
            r#"(quests: [(
                id: "broken",
                title: "Broken",
                objectives: [Visit(location: "town")],
                rewards: [(reward: Gold(1), is_first_time_only: true, is_repeatable_reward: true)],
            )])"#,
        )
        .unwrap_err();

        assert_eq!(
            err.downcast_ref::<ContentError>(),
            Some(&ContentError::ConflictingRewardFlags {
                quest: "broken".into(),
                line: 0
            })
        );
    }
}
