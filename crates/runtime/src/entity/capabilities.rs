//! Built-in capabilities.

use game_core::{Position, Vitals};

use super::NamedCapability;

/// Hit points and lifecycle state.
#[derive(Debug, Clone, PartialEq)]
pub struct Health {
    pub vitals: Vitals,
}

impl Health {
    pub fn new(max_health: u32) -> Self {
        Self {
            vitals: Vitals::new(max_health),
        }
    }
}

impl NamedCapability for Health {
    const NAME: &'static str = "health";
}

#[derive(Debug, Clone, PartialEq)]
pub struct Movement {
    pub position: Position,
    pub speed: i32,
}

impl NamedCapability for Movement {
    const NAME: &'static str = "movement";
}

/// Whether the entity accepts player or AI input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputControl {
    pub enabled: bool,
}

impl NamedCapability for InputControl {
    const NAME: &'static str = "input_control";
}

/// Whether the entity takes part in collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision {
    pub enabled: bool,
}

impl NamedCapability for Collision {
    const NAME: &'static str = "collision";
}
