//! Topic-based event bus for runtime events.
//!
//! The world publishes every observable change here; `game-core` itself emits
//! nothing. Consumers subscribe only to the topics they need.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{DamageTaken, LifecycleEvent, ProgressionEvent, QuestCompleted};
