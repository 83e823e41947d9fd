//! Kill bonus engine.
//!
//! Killing a creature type repeatedly unlocks milestone bonuses against that
//! type. Bonuses are summed from the static [`KillBonusTable`] and the
//! per-player [`KillRecord`] on every query; nothing is cached.

mod record;
mod table;

pub use record::KillRecord;
pub use table::{KillBonusMilestone, KillBonusTable, MilestoneProgress};
