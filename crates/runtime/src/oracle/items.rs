//! [`game_core::ItemOracle`] backed by an in-memory map.
use game_core::{ItemOracle, ItemTemplate, TemplateId};
use std::collections::HashMap;

/// ItemOracle implementation with static item templates
#[derive(Debug, Default)]
pub struct ItemOracleImpl {
    templates: HashMap<TemplateId, ItemTemplate>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_templates(templates: impl IntoIterator<Item = ItemTemplate>) -> Self {
        let mut oracle = Self::new();
        for template in templates {
            oracle.add_template(template);
        }
        oracle
    }

    /// Add an item template, replacing any template with the same id
    pub fn add_template(&mut self, template: ItemTemplate) {
        self.templates.insert(template.id.clone(), template);
    }
}

impl ItemOracle for ItemOracleImpl {
    fn template(&self, id: &TemplateId) -> Option<&ItemTemplate> {
        self.templates.get(id)
    }

    fn all_templates(&self) -> Vec<&ItemTemplate> {
        self.templates.values().collect()
    }
}
