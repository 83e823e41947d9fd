//! Unified error types surfaced by the world API.
//!
//! Only genuine rejections reach callers as `Err`. Resolution misses degrade
//! to zero contributions, invalid lifecycle transitions come back as outcome
//! values, and reward items that do not fit are reported in the distribution
//! result.
use game_core::{
    EntityId, EquipmentSlot, ErrorSeverity, GameError, InstanceId, InventoryError, QuestId,
    TemplateId,
};
use thiserror::Error;

use crate::store::WalletError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Reasons an entity could not be fully constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error("a player entity already exists")]
    PlayerExists,

    #[error("base health must be positive, got {health}")]
    NonPositiveHealth { health: i32 },

    #[error("'{template}' cannot be equipped in the {slot} slot")]
    SlotMismatch {
        slot: EquipmentSlot,
        template: TemplateId,
    },
}

impl GameError for SpawnError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PlayerExists => "SPAWN_PLAYER_EXISTS",
            Self::NonPositiveHealth { .. } => "SPAWN_NON_POSITIVE_HEALTH",
            Self::SlotMismatch { .. } => "SPAWN_SLOT_MISMATCH",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("an upgrade must buy at least one point")]
    NoPoints,

    #[error(transparent)]
    InsufficientGold(#[from] WalletError),
}

impl GameError for PurchaseError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoPoints => ErrorSeverity::Validation,
            Self::InsufficientGold(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoPoints => "PURCHASE_NO_POINTS",
            Self::InsufficientGold(_) => "PURCHASE_INSUFFICIENT_GOLD",
        }
    }
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("oracle manager is required to build a world")]
    MissingOracles,

    #[error("entity {0} does not exist")]
    UnknownEntity(EntityId),

    #[error("quest '{0}' does not exist")]
    UnknownQuest(QuestId),

    #[error("quest '{0}' objectives are not met")]
    QuestIncomplete(QuestId),

    #[error("{0} is not in the inventory")]
    ItemNotHeld(InstanceId),

    #[error("'{0}' cannot be equipped")]
    NotEquippable(TemplateId),

    #[error("failed to spawn entity")]
    Spawn(#[from] SpawnError),

    #[error("upgrade purchase failed")]
    Purchase(#[from] PurchaseError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}
