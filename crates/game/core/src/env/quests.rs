use crate::quest::Quest;
use crate::state::QuestId;

/// Read-only access to the validated quest catalog.
pub trait QuestOracle: Send + Sync {
    fn quest(&self, id: &QuestId) -> Option<&Quest>;

    fn all_quests(&self) -> Vec<&Quest>;
}
