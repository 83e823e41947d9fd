//! Skill progression table loader.

use std::collections::HashSet;
use std::path::Path;

use game_core::SkillProgression;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCatalog {
    pub skills: Vec<SkillProgression>,
}

pub struct SkillLoader;

impl SkillLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<SkillProgression>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<SkillProgression>> {
        let catalog: SkillCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill table RON: {}", e))?;

        let mut seen = HashSet::new();
        if let Some(dup) = catalog.skills.iter().find(|s| !seen.insert(s.skill)) {
            anyhow::bail!("Skill '{}' has more than one progression entry", dup.skill);
        }

        Ok(catalog.skills)
    }
}
