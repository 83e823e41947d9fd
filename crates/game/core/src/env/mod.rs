//! Traits describing read-only content.
//!
//! Oracles expose item templates, balance tables, and quests. The [`Env`]
//! aggregate bundles them so stat computation can reach everything it needs
//! without coupling to concrete implementations.
mod items;
mod quests;
mod tables;

pub use items::{ItemOracle, ItemTemplate};
pub use quests::QuestOracle;
pub use tables::TablesOracle;

/// Aggregates the read-only oracles.
pub struct Env<'a, I, T, Q>
where
    I: ItemOracle + ?Sized,
    T: TablesOracle + ?Sized,
    Q: QuestOracle + ?Sized,
{
    items: &'a I,
    tables: &'a T,
    quests: &'a Q,
}

impl<I, T, Q> Clone for Env<'_, I, T, Q>
where
    I: ItemOracle + ?Sized,
    T: TablesOracle + ?Sized,
    Q: QuestOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, T, Q> Copy for Env<'_, I, T, Q>
where
    I: ItemOracle + ?Sized,
    T: TablesOracle + ?Sized,
    Q: QuestOracle + ?Sized,
{
}

pub type GameEnv<'a> = Env<'a, dyn ItemOracle + 'a, dyn TablesOracle + 'a, dyn QuestOracle + 'a>;

impl<'a, I, T, Q> Env<'a, I, T, Q>
where
    I: ItemOracle + ?Sized,
    T: TablesOracle + ?Sized,
    Q: QuestOracle + ?Sized,
{
    pub fn new(items: &'a I, tables: &'a T, quests: &'a Q) -> Self {
        Self {
            items,
            tables,
            quests,
        }
    }

    pub fn items(&self) -> &'a I {
        self.items
    }

    pub fn tables(&self) -> &'a T {
        self.tables
    }

    pub fn quests(&self) -> &'a Q {
        self.quests
    }
}

impl<'a, I, T, Q> Env<'a, I, T, Q>
where
    I: ItemOracle + 'a,
    T: TablesOracle + 'a,
    Q: QuestOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv`.
    pub fn into_game_env(self) -> GameEnv<'a> {
        Env::new(
            self.items as &'a dyn ItemOracle,
            self.tables as &'a dyn TablesOracle,
            self.quests as &'a dyn QuestOracle,
        )
    }
}
