use crate::kills::KillBonusTable;
use crate::skills::{SkillId, SkillProgression};
use crate::state::CreatureId;

/// Oracle providing balance tables.
///
/// Covers skill progressions and kill milestones. Entity data (items, quests)
/// lives in the dedicated oracles.
pub trait TablesOracle: Send + Sync {
    fn skill(&self, skill: SkillId) -> Option<&SkillProgression>;

    /// Milestones for a creature type, falling back to the default table.
    fn kill_bonuses(&self, creature: &CreatureId) -> &KillBonusTable;
}
