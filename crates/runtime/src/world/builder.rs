//! World configuration and builder.

use game_content::ContentSet;
use game_core::GameConfig;

use super::World;
use crate::error::{Result, RuntimeError};
use crate::events::EventBus;
use crate::hooks::HookRegistry;
use crate::oracle::OracleManager;

/// Runtime configuration shared by the world and its event bus.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 100,
        }
    }
}

/// Builder for [`World`] with flexible configuration.
#[derive(Debug, Default)]
pub struct WorldBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    hooks: Option<HookRegistry>,
    bus: Option<EventBus>,
}

impl WorldBuilder {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the game rules, keeping other runtime settings
    pub fn game_config(mut self, game_config: GameConfig) -> Self {
        self.config.game_config = game_config;
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Build oracles and game rules from a loaded content set
    pub fn content(mut self, content: &ContentSet) -> Self {
        self.oracles = Some(OracleManager::from_content(content));
        self.config.game_config = content.config.clone();
        self
    }

    /// Set custom post-damage hooks.
    ///
    /// If not provided, the default hooks (KillCredit, ShieldTraining) are used.
    pub fn hooks(mut self, hooks: HookRegistry) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// Share an existing event bus instead of creating one
    pub fn event_bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn build(self) -> Result<World> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        let bus = self
            .bus
            .unwrap_or_else(|| EventBus::with_capacity(self.config.event_buffer_size));
        let hooks = self.hooks.unwrap_or_default();

        tracing::debug!(hooks = ?hooks, "world built");
        Ok(World::from_parts(self.config, oracles, hooks, bus))
    }
}
