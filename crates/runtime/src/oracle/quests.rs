use std::collections::HashMap;

use game_core::{Quest, QuestId, QuestOracle};

/// QuestOracle over an already validated quest catalog
#[derive(Debug, Default)]
pub struct QuestOracleImpl {
    quests: HashMap<QuestId, Quest>,
}

impl QuestOracleImpl {
    pub fn new(quests: impl IntoIterator<Item = Quest>) -> Self {
        Self {
            quests: quests.into_iter().map(|q| (q.id.clone(), q)).collect(),
        }
    }
}

impl QuestOracle for QuestOracleImpl {
    fn quest(&self, id: &QuestId) -> Option<&Quest> {
        self.quests.get(id)
    }

    fn all_quests(&self) -> Vec<&Quest> {
        self.quests.values().collect()
    }
}
