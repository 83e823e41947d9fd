//! Content factory for loading a whole data directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use game_core::{GameConfig, ItemTemplate, Quest, SkillProgression};

use crate::KillBonusTables;
use crate::loaders::{
    ConfigLoader, ItemLoader, KillBonusLoader, LoadResult, QuestLoader, SkillLoader,
};

/// Everything loaded from a data directory.
#[derive(Clone, Debug)]
pub struct ContentSet {
    pub config: GameConfig,
    pub items: Vec<ItemTemplate>,
    pub skills: Vec<SkillProgression>,
    pub kill_bonuses: KillBonusTables,
    pub quests: Vec<Quest>,
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// ├── skills.ron
/// ├── kill_bonuses.ron
/// └── quests.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Loads and validates every content file.
    pub fn load_dir(data_dir: impl Into<PathBuf>) -> LoadResult<ContentSet> {
        Self::new(data_dir).load_all()
    }

    pub fn load_all(&self) -> LoadResult<ContentSet> {
        let set = ContentSet {
            config: self.load_config()?,
            items: self.load_items()?,
            skills: self.load_skills()?,
            kill_bonuses: self.load_kill_bonuses()?,
            quests: self.load_quests()?,
        };
        tracing::info!(
            dir = %self.data_dir.display(),
            items = set.items.len(),
            skills = set.skills.len(),
            creatures = set.kill_bonuses.creatures.len(),
            quests = set.quests.len(),
            "content loaded"
        );
        Ok(set)
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemTemplate>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load skill progressions from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<Vec<SkillProgression>> {
        SkillLoader::load(&self.data_dir.join("skills.ron"))
    }

    /// Load kill milestones from `kill_bonuses.ron`.
    pub fn load_kill_bonuses(&self) -> LoadResult<KillBonusTables> {
        let path = self.data_dir.join("kill_bonuses.ron");
        KillBonusLoader::load(&path).with_context(|| format!("in {}", path.display()))
    }

    /// Load quests from `quests.ron`.
    pub fn load_quests(&self) -> LoadResult<Vec<Quest>> {
        let path = self.data_dir.join("quests.ron");
        QuestLoader::load(&path).with_context(|| format!("in {}", path.display()))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write_dir(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    const VALID: &[(&str, &str)] = &[
        ("config.toml", "inventory_capacity = 12\n"),
        (
            "items.ron",
            r#"(items: [(id: "buckler", name: "Buckler", slot: Some(shield), stats: (armor: 4))])"#,
        ),
        ("skills.ron", r#"(skills: [(skill: shield, name: "Shield", per_level: (armor: 1))])"#),
        ("kill_bonuses.ron", r#"(creatures: {"rat": [(kill_count: 1, bonus_damage_percent: 5)]})"#),
        (
            "quests.ron",
            r#"(quests: [(id: "q", title: "Q", objectives: [Visit(location: "town")], rewards: [])])"#,
        ),
    ];

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn load_dir_reads_every_file() {
        let dir = write_dir(VALID);
        let content = ContentFactory::load_dir(dir.path()).unwrap();

        assert_eq!(content.config.inventory_capacity, 12);
        assert_eq!(content.items.len(), 1);
        assert_eq!(content.skills.len(), 1);
        assert_eq!(content.kill_bonuses.for_creature(&"rat".into()).bonus_damage(1), 5);
        assert_eq!(content.quests.len(), 1);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = write_dir(&VALID[..2]);
        let err = ContentFactory::load_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("skills.ron"));
    }
}
