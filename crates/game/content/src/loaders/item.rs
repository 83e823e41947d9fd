//! Item catalog loader.

use std::collections::HashSet;
use std::path::Path;

use game_core::ItemTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemTemplate>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an item catalog, rejecting duplicate template ids.
    pub fn parse(content: &str) -> LoadResult<Vec<ItemTemplate>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        if let Some(dup) = catalog.items.iter().find(|item| !seen.insert(&item.id)) {
            anyhow::bail!("Item template '{}' is declared more than once", dup.id);
        }

        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::EquipmentSlot;

    #[test]
    fn parses_equippable_and_stackable_items() {
        let items = ItemLoader::parse(
            r#"(items: [
                (id: "iron_sword", name: "Iron Sword", slot: Some(weapon), stats: (power: 6)),
                (id: "herb", name: "Herb", max_stack: 20),
            ])"#,
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].slot, Some(EquipmentSlot::Weapon));
        assert_eq!(items[0].stats.power, 6);
        assert_eq!(items[0].max_stack, 1);
        assert_eq!(items[1].slot, None);
        assert_eq!(items[1].max_stack, 20);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = ItemLoader::parse(
            r#"(items: [(id: "herb", name: "Herb"), (id: "herb", name: "Herb again")])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("herb"));
    }
}
