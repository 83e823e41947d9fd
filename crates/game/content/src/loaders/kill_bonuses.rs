//! Kill milestone loader.

use std::collections::HashMap;
use std::path::Path;

use game_core::{CreatureId, KillBonusMilestone, KillBonusTable};
use serde::{Deserialize, Serialize};

use crate::KillBonusTables;
use crate::loaders::{LoadResult, read_file};

/// Milestones as written in `kill_bonuses.ron`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KillBonusCatalog {
    pub default: Vec<KillBonusMilestone>,
    pub creatures: HashMap<CreatureId, Vec<KillBonusMilestone>>,
}

pub struct KillBonusLoader;

impl KillBonusLoader {
    pub fn load(path: &Path) -> LoadResult<KillBonusTables> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate milestone tables. Thresholds may appear in any order
    /// but must be unique per creature.
    pub fn parse(content: &str) -> LoadResult<KillBonusTables> {
        let catalog: KillBonusCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse kill bonus RON: {}", e))?;

        let default = KillBonusTable::validated(&CreatureId::new("default"), catalog.default)?;
        let mut tables = KillBonusTables::new(default);
        for (creature, milestones) in catalog.creatures {
            let table = KillBonusTable::validated(&creature, milestones)?;
            tables.creatures.insert(creature, table);
        }
        Ok(tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_creature_tables_are_sorted() {
        let tables = KillBonusLoader::parse(
            r#"(
                default: [(kill_count: 100, loot_chance_percent: 1)],
                creatures: {
                    "rat": [
                        (kill_count: 1000, bonus_damage_percent: 2, damage_reduction_percent: 2),
                        (kill_count: 1, bonus_damage_percent: 2000),
                        (kill_count: 500, damage_reduction_percent: 1),
                    ],
                },
            )"#,
        )
        .unwrap();

        let rat = tables.for_creature(&"rat".into());
        let thresholds: Vec<u32> = rat.milestones().iter().map(|m| m.kill_count).collect();
        assert_eq!(thresholds, vec![1, 500, 1000]);
        assert_eq!(rat.damage_reduction(1250), 3);
        assert_eq!(tables.for_creature(&"slime".into()).loot_chance_bonus(100), 1);
    }

    #[test]
    fn repeated_threshold_is_rejected() {
        let err = KillBonusLoader::parse(
            r#"(creatures: {"bat": [(kill_count: 5), (kill_count: 5, bonus_damage_percent: 1)]})"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("bat"));
    }
}
