//! Runtime wrappers around static game content.
//!
//! These implementations expose `game-core` oracle traits and bundle them into
//! an [`OracleManager`] so the world can build [`game_core::Env`] views on
//! demand. Tables are built once from loaded content, shared behind `Arc`, and
//! never mutated afterwards; dynamic state lives in [`crate::store`].
mod items;
mod quests;
mod tables;

use std::sync::Arc;

use game_content::ContentSet;
use game_core::{Env, GameEnv};

pub use items::ItemOracleImpl;
pub use quests::QuestOracleImpl;
pub use tables::TablesOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone, Debug, Default)]
pub struct OracleManager {
    pub(crate) items: Arc<ItemOracleImpl>,
    pub(crate) tables: Arc<TablesOracleImpl>,
    pub(crate) quests: Arc<QuestOracleImpl>,
}

impl OracleManager {
    pub fn new(
        items: Arc<ItemOracleImpl>,
        tables: Arc<TablesOracleImpl>,
        quests: Arc<QuestOracleImpl>,
    ) -> Self {
        Self {
            items,
            tables,
            quests,
        }
    }

    /// Builds every oracle from a loaded content set.
    pub fn from_content(content: &ContentSet) -> Self {
        Self::new(
            Arc::new(ItemOracleImpl::from_templates(content.items.iter().cloned())),
            Arc::new(TablesOracleImpl::new(
                content.skills.iter().cloned(),
                content.kill_bonuses.clone(),
            )),
            Arc::new(QuestOracleImpl::new(content.quests.iter().cloned())),
        )
    }

    /// Converts oracle manager into GameEnv for game-core
    pub fn as_game_env(&self) -> GameEnv<'_> {
        Env::new(
            self.items.as_ref(),
            self.tables.as_ref(),
            self.quests.as_ref(),
        )
        .into_game_env()
    }

    pub fn items(&self) -> &ItemOracleImpl {
        &self.items
    }

    pub fn tables(&self) -> &TablesOracleImpl {
        &self.tables
    }

    pub fn quests(&self) -> &QuestOracleImpl {
        &self.quests
    }
}
