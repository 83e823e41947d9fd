//! Content loaders for reading game data from files.
//!
//! Each loader exposes `load(path)` for files and `parse(text)` for in-memory
//! content. [`ContentFactory`] loads a whole data directory at once.

pub mod config;
pub mod factory;
pub mod item;
pub mod kill_bonuses;
pub mod quests;
pub mod skills;

pub use config::ConfigLoader;
pub use factory::{ContentFactory, ContentSet};
pub use item::ItemLoader;
pub use kill_bonuses::KillBonusLoader;
pub use quests::QuestLoader;
pub use skills::SkillLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
