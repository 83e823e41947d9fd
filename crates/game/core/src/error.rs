//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g. `InventoryError`) live next to the types they
//! validate. This module holds the shared severity classification and the
//! content validation errors raised when static tables are built.
//!
//! # Error taxonomy
//!
//! - **Resolution errors** (unknown item template, skill missing from the
//!   table) are not errors at all at this layer: they degrade to a zero
//!   contribution and are logged where they are detected.
//! - **Invalid state transitions** (damaging a dead entity, respawning a
//!   living one) are reported through outcome enums, never through `Err`.
//! - **Partial reward failures** are captured per item in the distribution
//!   result.
//! - **Content errors** reject malformed tables before they are shared.

use crate::state::{CreatureId, QuestId};

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry later or with a different choice.
    ///
    /// Examples: inventory full, not enough gold
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: conflicting reward flags, unknown quest id
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: duplicate item instance id
    Internal,

    /// Fatal error - the simulation cannot continue safely.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Return a stable, upper-case `error_code` per variant
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while validating static content tables.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentError {
    /// A reward line is flagged both first-time-only and repeatable-only.
    #[error("quest '{quest}' reward line {line} is both first-time-only and repeatable-only")]
    ConflictingRewardFlags { quest: QuestId, line: usize },

    /// Two quests share an id.
    #[error("quest '{0}' is declared more than once")]
    DuplicateQuest(QuestId),

    /// A quest without objectives can never be completed meaningfully.
    #[error("quest '{0}' declares no objectives")]
    EmptyObjectives(QuestId),

    /// A milestone table with the same threshold declared twice.
    #[error("kill milestones for '{creature}' repeat threshold {kill_count}")]
    DuplicateMilestone {
        creature: CreatureId,
        kill_count: u32,
    },
}

impl GameError for ContentError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ConflictingRewardFlags { .. } => "CONTENT_CONFLICTING_REWARD_FLAGS",
            Self::DuplicateQuest(_) => "CONTENT_DUPLICATE_QUEST",
            Self::EmptyObjectives(_) => "CONTENT_EMPTY_OBJECTIVES",
            Self::DuplicateMilestone { .. } => "CONTENT_DUPLICATE_MILESTONE",
        }
    }
}
