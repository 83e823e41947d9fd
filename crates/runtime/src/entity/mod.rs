//! Entities and their capabilities.
//!
//! An entity is an id, a kind, and a bag of named capabilities. Equipment,
//! skills and other owned state live in the central store and are looked up
//! by id; entities never carry copies.

mod capabilities;
mod capability;

pub use capabilities::{Collision, Health, InputControl, Movement};
pub use capability::{Capability, CapabilityRegistry, NamedCapability};

use game_core::{CreatureId, EntityId, EquipmentSet, Position, SkillLedger, StatBlock, Vitals};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Creature(CreatureId),
}

impl EntityKind {
    pub fn creature(&self) -> Option<&CreatureId> {
        match self {
            Self::Player => None,
            Self::Creature(id) => Some(id),
        }
    }
}

/// Everything needed to construct an entity.
#[derive(Debug, Clone)]
pub struct EntitySpec {
    pub kind: EntityKind,
    pub base_stats: StatBlock,
    pub position: Position,
    pub equipment: EquipmentSet,
    /// `None` starts every skill at level 1.
    pub skills: Option<SkillLedger>,
}

impl EntitySpec {
    pub fn player(base_stats: StatBlock) -> Self {
        Self::new(EntityKind::Player, base_stats)
    }

    pub fn creature(creature: impl Into<CreatureId>, base_stats: StatBlock) -> Self {
        Self::new(EntityKind::Creature(creature.into()), base_stats)
    }

    fn new(kind: EntityKind, base_stats: StatBlock) -> Self {
        Self {
            kind,
            base_stats,
            position: Position::ORIGIN,
            equipment: EquipmentSet::empty(),
            skills: None,
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn equipped(mut self, equipment: EquipmentSet) -> Self {
        self.equipment = equipment;
        self
    }

    pub fn with_skills(mut self, skills: SkillLedger) -> Self {
        self.skills = Some(skills);
        self
    }
}

#[derive(Debug)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub capabilities: CapabilityRegistry,
    /// Set when construction failed and only a minimal entity was registered.
    pub degraded: bool,
}

impl Entity {
    /// A fully constructed entity.
    pub fn assemble(id: EntityId, kind: EntityKind, max_health: u32, position: Position, speed: i32) -> Self {
        let capabilities = CapabilityRegistry::new()
            .with(Health::new(max_health))
            .with(Movement { position, speed })
            .with(InputControl { enabled: true })
            .with(Collision { enabled: true });
        Self {
            id,
            kind,
            capabilities,
            degraded: false,
        }
    }

    /// Minimal entity registered after a construction failure: health only,
    /// with input and collision disabled.
    pub fn degraded(id: EntityId, kind: EntityKind) -> Self {
        let capabilities = CapabilityRegistry::new()
            .with(Health::new(1))
            .with(InputControl { enabled: false })
            .with(Collision { enabled: false });
        Self {
            id,
            kind,
            capabilities,
            degraded: true,
        }
    }

    pub fn vitals(&self) -> Option<&Vitals> {
        self.capabilities.get::<Health>().map(|h| &h.vitals)
    }

    pub fn vitals_mut(&mut self) -> Option<&mut Vitals> {
        self.capabilities.get_mut::<Health>().map(|h| &mut h.vitals)
    }

    pub fn position(&self) -> Option<Position> {
        self.capabilities.get::<Movement>().map(|m| m.position)
    }

    pub fn input_enabled(&self) -> bool {
        self.capabilities
            .get::<InputControl>()
            .is_some_and(|c| c.enabled)
    }

    pub fn collision_enabled(&self) -> bool {
        self.capabilities.get::<Collision>().is_some_and(|c| c.enabled)
    }

    /// Enables or disables input and collision together.
    pub fn set_interactive(&mut self, enabled: bool) {
        if let Some(input) = self.capabilities.get_mut::<InputControl>() {
            input.enabled = enabled;
        }
        if let Some(collision) = self.capabilities.get_mut::<Collision>() {
            collision.enabled = enabled;
        }
    }

    /// Moves the entity, adding a movement capability if it had none.
    pub fn place(&mut self, position: Position) {
        match self.capabilities.get_mut::<Movement>() {
            Some(movement) => movement.position = position,
            None => {
                self.capabilities.insert(Movement { position, speed: 0 });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degraded_entity_has_health_only_and_is_inert() {
        let entity = Entity::degraded(EntityId(5), EntityKind::Creature("rat".into()));

        assert!(entity.degraded);
        assert_eq!(entity.vitals().map(Vitals::max_health), Some(1));
        assert!(entity.position().is_none());
        assert!(!entity.input_enabled());
        assert!(!entity.collision_enabled());
    }

    #[test]
    fn set_interactive_toggles_input_and_collision() {
        let mut entity = Entity::assemble(EntityId(1), EntityKind::Player, 10, Position::ORIGIN, 3);
        entity.set_interactive(false);
        assert!(!entity.input_enabled() && !entity.collision_enabled());
        entity.set_interactive(true);
        assert!(entity.input_enabled() && entity.collision_enabled());
    }
}
