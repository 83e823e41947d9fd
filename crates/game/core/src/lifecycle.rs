//! Entity lifecycle state machine.
//!
//! ```text
//! Alive --(health reaches 0)--> Dead --respawn--> Respawning --> Alive
//! ```
//!
//! `Respawning` is transient: [`Vitals::respawn`] passes through it and lands
//! in `Alive` within the same call. At rest, `Dead` holds exactly when
//! `health == 0`. Invalid transitions are reported through the outcome enums
//! and leave the vitals untouched.

use strum::Display;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum LifeState {
    #[default]
    Alive,
    Dead,
    Respawning,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageOutcome {
    /// Damage was applied and the entity survived.
    Applied { dealt: u32, remaining: u32 },
    /// This hit killed the entity.
    Died { dealt: u32 },
    /// The entity was not alive; nothing changed.
    AlreadyDead,
}

impl DamageOutcome {
    pub fn dealt(&self) -> u32 {
        match self {
            Self::Applied { dealt, .. } | Self::Died { dealt } => *dealt,
            Self::AlreadyDead => 0,
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Self::AlreadyDead)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RespawnOutcome {
    Respawned { health: u32 },
    /// Respawn requested for an entity that is not dead.
    NotDead,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vitals {
    health: u32,
    max_health: u32,
    state: LifeState,
}

impl Vitals {
    /// Full-health vitals. `max_health` is raised to at least 1.
    pub fn new(max_health: u32) -> Self {
        let max_health = max_health.max(1);
        Self {
            health: max_health,
            max_health,
            state: LifeState::Alive,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn state(&self) -> LifeState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state == LifeState::Alive
    }

    pub fn is_dead(&self) -> bool {
        self.state == LifeState::Dead
    }

    pub fn apply_damage(&mut self, amount: u32) -> DamageOutcome {
        if !self.is_alive() {
            return DamageOutcome::AlreadyDead;
        }

        let dealt = amount.min(self.health);
        self.health -= dealt;
        if self.health == 0 {
            self.state = LifeState::Dead;
            tracing::debug!(dealt, "vitals transitioned to dead");
            DamageOutcome::Died { dealt }
        } else {
            DamageOutcome::Applied {
                dealt,
                remaining: self.health,
            }
        }
    }

    /// Brings a dead entity back at full health.
    pub fn respawn(&mut self, max_health: u32) -> RespawnOutcome {
        if !self.is_dead() {
            return RespawnOutcome::NotDead;
        }

        self.state = LifeState::Respawning;
        self.max_health = max_health.max(1);
        self.health = self.max_health;
        self.state = LifeState::Alive;
        tracing::debug!(health = self.health, "vitals respawned");
        RespawnOutcome::Respawned {
            health: self.health,
        }
    }

    /// Restores health while alive. Returns the amount restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.is_alive() {
            return 0;
        }
        let restored = amount.min(self.max_health - self.health);
        self.health += restored;
        restored
    }

    /// Updates the maximum after a stat change, clamping current health.
    ///
    /// A living entity keeps at least 1 health; a dead one stays at 0.
    pub fn set_max_health(&mut self, max_health: u32) {
        self.max_health = max_health.max(1);
        if self.is_alive() {
            self.health = self.health.clamp(1, self.max_health);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lethal_damage_kills_and_further_damage_is_noop() {
        let mut vitals = Vitals::new(20);
        vitals.apply_damage(15);
        assert_eq!(vitals.health(), 5);

        assert_eq!(vitals.apply_damage(5), DamageOutcome::Died { dealt: 5 });
        assert_eq!(vitals.health(), 0);
        assert_eq!(vitals.state(), LifeState::Dead);

        assert_eq!(vitals.apply_damage(5), DamageOutcome::AlreadyDead);
        assert_eq!(vitals.health(), 0);
        assert_eq!(vitals.state(), LifeState::Dead);
    }

    #[test]
    fn overkill_is_clamped() {
        let mut vitals = Vitals::new(10);
        assert_eq!(vitals.apply_damage(999), DamageOutcome::Died { dealt: 10 });
    }

    #[test]
    fn zero_damage_keeps_entity_alive() {
        let mut vitals = Vitals::new(10);
        assert_eq!(
            vitals.apply_damage(0),
            DamageOutcome::Applied {
                dealt: 0,
                remaining: 10
            }
        );
    }

    #[test]
    fn respawn_restores_full_health() {
        let mut vitals = Vitals::new(10);
        vitals.apply_damage(10);

        assert_eq!(vitals.respawn(40), RespawnOutcome::Respawned { health: 40 });
        assert!(vitals.is_alive());
        assert_eq!(vitals.health(), vitals.max_health());
    }

    #[test]
    fn respawning_a_living_entity_is_rejected() {
        let mut vitals = Vitals::new(10);
        vitals.apply_damage(3);
        assert_eq!(vitals.respawn(10), RespawnOutcome::NotDead);
        assert_eq!(vitals.health(), 7);
    }

    #[test]
    fn heal_only_applies_while_alive() {
        let mut vitals = Vitals::new(10);
        vitals.apply_damage(4);
        assert_eq!(vitals.heal(10), 4);

        vitals.apply_damage(10);
        assert_eq!(vitals.heal(5), 0);
        assert_eq!(vitals.health(), 0);
    }

    #[test]
    fn lowering_max_health_clamps_current() {
        let mut vitals = Vitals::new(50);
        vitals.set_max_health(30);
        assert_eq!(vitals.health(), 30);

        vitals.apply_damage(30);
        vitals.set_max_health(80);
        assert_eq!(vitals.health(), 0);
        assert!(vitals.is_dead());
    }
}
