use std::collections::HashMap;

use game_core::{CreatureId, KillBonusTable};

/// Kill milestones for every creature type.
///
/// Creatures without a dedicated table share the default one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KillBonusTables {
    pub default: KillBonusTable,
    pub creatures: HashMap<CreatureId, KillBonusTable>,
}

impl KillBonusTables {
    pub fn new(default: KillBonusTable) -> Self {
        Self {
            default,
            creatures: HashMap::new(),
        }
    }

    pub fn with_creature(mut self, creature: impl Into<CreatureId>, table: KillBonusTable) -> Self {
        self.creatures.insert(creature.into(), table);
        self
    }

    pub fn for_creature(&self, creature: &CreatureId) -> &KillBonusTable {
        self.creatures.get(creature).unwrap_or(&self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::KillBonusMilestone;

    #[test]
    fn unknown_creature_falls_back_to_default() {
        let tables = KillBonusTables::new(KillBonusTable::new(vec![
            KillBonusMilestone::at(10).bonus_damage(1),
        ]))
        .with_creature("rat", KillBonusTable::new(vec![
            KillBonusMilestone::at(1).bonus_damage(2000),
        ]));

        assert_eq!(tables.for_creature(&"rat".into()).bonus_damage(1), 2000);
        assert_eq!(tables.for_creature(&"bat".into()).bonus_damage(10), 1);
    }
}
