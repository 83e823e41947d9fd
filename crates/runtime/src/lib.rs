//! Runtime orchestration for stat aggregation and combat resolution.
//!
//! This crate wires static content (through oracles), the central state
//! store, entities and their capabilities, post-damage hooks and the event
//! bus into one [`World`]. Consumers build a world, spawn entities, feed it
//! [`Command`]s and subscribe to the topics they care about.
//!
//! Modules are organized by responsibility:
//! - [`world`] hosts the orchestrator and builder
//! - [`entity`] defines entities and their capabilities
//! - [`store`] owns all mutable per-entity and player state
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`hooks`] provides post-damage hook system for follow-up effects
//! - [`oracle`] adapts loaded content to the `game-core` oracle traits
pub mod entity;
pub mod error;
pub mod events;
pub mod hooks;
pub mod oracle;
pub mod store;
pub mod world;

pub use entity::{
    Capability, CapabilityRegistry, Collision, Entity, EntityKind, EntitySpec, Health,
    InputControl, Movement, NamedCapability,
};
pub use error::{PurchaseError, Result, RuntimeError, SpawnError};
pub use events::{
    DamageTaken, Event, EventBus, LifecycleEvent, ProgressionEvent, QuestCompleted, Topic,
};
pub use hooks::{
    DamageSource, FollowUp, HookContext, HookRegistry, KillCreditHook, PostDamageHook,
    ShieldTrainingHook,
};
pub use oracle::{ItemOracleImpl, OracleManager, QuestOracleImpl, TablesOracleImpl};
pub use store::{EntityRecord, GameStore, Wallet, WalletError};
pub use world::{
    ChangeSource, Command, CommandOutcome, DamageReport, RuntimeConfig, TickReport, World,
    WorldBuilder,
};
