//! Quests, objective progress, and reward distribution.

mod progress;
mod rewards;
mod types;

pub use progress::QuestProgress;
pub use rewards::{DroppedItem, ItemGrant, RewardDistributionResult, RewardSink, distribute};
pub use types::{CompletionHistory, Objective, Quest, Reward, RewardLine};
