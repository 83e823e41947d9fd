//! In-memory oracles for unit tests.

use std::collections::HashMap;

use crate::env::{ItemOracle, ItemTemplate, TablesOracle};
use crate::kills::KillBonusTable;
use crate::skills::{SkillId, SkillProgression};
use crate::state::{CreatureId, TemplateId};

#[derive(Default)]
pub struct StaticItems {
    templates: HashMap<TemplateId, ItemTemplate>,
}

impl StaticItems {
    pub fn new(templates: Vec<ItemTemplate>) -> Self {
        Self {
            templates: templates.into_iter().map(|t| (t.id.clone(), t)).collect(),
        }
    }
}

impl ItemOracle for StaticItems {
    fn template(&self, id: &TemplateId) -> Option<&ItemTemplate> {
        self.templates.get(id)
    }

    fn all_templates(&self) -> Vec<&ItemTemplate> {
        self.templates.values().collect()
    }
}

#[derive(Default)]
pub struct StaticTables {
    skills: HashMap<SkillId, SkillProgression>,
    kills: KillBonusTable,
}

impl StaticTables {
    pub fn with_skill(mut self, progression: SkillProgression) -> Self {
        self.skills.insert(progression.skill, progression);
        self
    }
}

impl TablesOracle for StaticTables {
    fn skill(&self, skill: SkillId) -> Option<&SkillProgression> {
        self.skills.get(&skill)
    }

    fn kill_bonuses(&self, _creature: &CreatureId) -> &KillBonusTable {
        &self.kills
    }
}
