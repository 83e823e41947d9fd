//! [`game_core::TablesOracle`] over loaded skill and kill-bonus tables.
use std::collections::HashMap;

use game_content::KillBonusTables;
use game_core::{CreatureId, KillBonusTable, SkillId, SkillProgression, TablesOracle};

#[derive(Debug, Default)]
pub struct TablesOracleImpl {
    skills: HashMap<SkillId, SkillProgression>,
    kill_bonuses: KillBonusTables,
}

impl TablesOracleImpl {
    pub fn new(
        skills: impl IntoIterator<Item = SkillProgression>,
        kill_bonuses: KillBonusTables,
    ) -> Self {
        Self {
            skills: skills.into_iter().map(|s| (s.skill, s)).collect(),
            kill_bonuses,
        }
    }
}

impl TablesOracle for TablesOracleImpl {
    fn skill(&self, skill: SkillId) -> Option<&SkillProgression> {
        self.skills.get(&skill)
    }

    fn kill_bonuses(&self, creature: &CreatureId) -> &KillBonusTable {
        self.kill_bonuses.for_creature(creature)
    }
}
