//! Data-driven content definitions and loaders.
//!
//! This crate turns RON/TOML data files into validated, immutable tables:
//! - Item catalogs (RON)
//! - Skill progression tables (RON)
//! - Kill bonus milestones, per creature type with a default table (RON)
//! - Quests with objectives and gated rewards (RON)
//! - Game configuration (TOML)
//!
//! Content is consumed by runtime oracles and never appears in game state.
//! Invalid content (conflicting reward flags, duplicate ids, repeated
//! milestone thresholds) is rejected at load time.

mod tables;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use tables::KillBonusTables;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, ContentSet, ItemLoader, KillBonusLoader, QuestLoader,
    SkillLoader,
};
