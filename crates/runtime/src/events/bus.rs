//! Topic-based event bus implementation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use tokio::sync::broadcast;

use super::types::{DamageTaken, LifecycleEvent, ProgressionEvent, QuestCompleted};
use game_core::EntityId;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, EnumIter)]
pub enum Topic {
    /// Damage applied to entities
    Combat,
    /// Deaths, respawns, construction failures
    Lifecycle,
    /// Skills, stats, kill records
    Progression,
    /// Quest completions and rewards
    Quest,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    DamageTaken(DamageTaken),
    Lifecycle(LifecycleEvent),
    Progression(ProgressionEvent),
    QuestCompleted(QuestCompleted),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::DamageTaken(_) => Topic::Combat,
            Event::Lifecycle(_) => Topic::Lifecycle,
            Event::Progression(_) => Topic::Progression,
            Event::QuestCompleted(_) => Topic::Quest,
        }
    }

    /// Dotted event name as seen by UI and tooling subscribers.
    pub fn name(&self) -> &'static str {
        match self {
            Event::DamageTaken(e) if e.entity.is_player() => "playerCharacter.damage.taken",
            Event::DamageTaken(_) => "entity.damage.taken",
            Event::Lifecycle(LifecycleEvent::Died { entity, .. }) if entity.is_player() => {
                "player.died"
            }
            Event::Lifecycle(LifecycleEvent::Died { .. }) => "entity.died",
            Event::Lifecycle(LifecycleEvent::Respawned { entity, .. }) if entity.is_player() => {
                "player.respawned"
            }
            Event::Lifecycle(LifecycleEvent::Respawned { .. }) => "entity.respawned",
            Event::Lifecycle(LifecycleEvent::ConstructionFailed { .. }) => {
                "entity.construction_failed"
            }
            Event::Progression(ProgressionEvent::SkillUpdated { .. }) => "skill.updated",
            Event::Progression(ProgressionEvent::StatsChanged { .. }) => "stats.changed",
            Event::Progression(ProgressionEvent::CreatureKilled { .. }) => "creature.killed",
            Event::QuestCompleted(_) => "quest.completed",
        }
    }

    /// Entity the event is about, if any.
    pub fn entity(&self) -> Option<EntityId> {
        match self {
            Event::DamageTaken(e) => Some(e.entity),
            Event::Lifecycle(
                LifecycleEvent::Died { entity, .. }
                | LifecycleEvent::Respawned { entity, .. }
                | LifecycleEvent::ConstructionFailed { entity, .. },
            ) => Some(*entity),
            Event::Progression(
                ProgressionEvent::SkillUpdated { entity, .. }
                | ProgressionEvent::StatsChanged { entity, .. },
            ) => Some(*entity),
            Event::Progression(ProgressionEvent::CreatureKilled { .. }) => None,
            Event::QuestCompleted(_) => Some(EntityId::PLAYER),
        }
    }
}

#[derive(Debug)]
struct Channels {
    combat: broadcast::Sender<Event>,
    lifecycle: broadcast::Sender<Event>,
    progression: broadcast::Sender<Event>,
    quest: broadcast::Sender<Event>,
}

impl Channels {
    fn get(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Combat => &self.combat,
            Topic::Lifecycle => &self.lifecycle,
            Topic::Progression => &self.progression,
            Topic::Quest => &self.quest,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing never blocks: receivers drain with
/// `try_recv` (or `recv().await` on an async host).
#[derive(Debug, Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                combat: broadcast::channel(capacity).0,
                lifecycle: broadcast::channel(capacity).0,
                progression: broadcast::channel(capacity).0,
                quest: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        tracing::trace!(name = event.name(), ?topic, "publishing event");
        if self.channels.get(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels.get(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> Vec<(Topic, broadcast::Receiver<Event>)> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }

    /// Subscribe to every topic
    pub fn subscribe_all(&self) -> Vec<(Topic, broadcast::Receiver<Event>)> {
        Topic::iter()
            .map(|topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{CreatureId, DamageKind, SkillId, SkillProgress};

    fn damage(entity: EntityId) -> Event {
        Event::DamageTaken(DamageTaken {
            entity,
            amount: 3,
            dealt: 3,
            remaining_health: 7,
            kind: DamageKind::Physical,
        })
    }

    #[test]
    fn events_are_routed_by_topic() {
        let bus = EventBus::with_capacity(8);
        let mut combat = bus.subscribe(Topic::Combat);
        let mut quests = bus.subscribe(Topic::Quest);

        bus.publish(damage(EntityId::PLAYER));

        assert_eq!(combat.try_recv().unwrap(), damage(EntityId::PLAYER));
        assert!(quests.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        EventBus::new().publish(damage(EntityId(3)));
    }

    #[test]
    fn names_distinguish_player_from_other_entities() {
        assert_eq!(damage(EntityId::PLAYER).name(), "playerCharacter.damage.taken");
        assert_eq!(damage(EntityId(4)).name(), "entity.damage.taken");

        let died = |entity| {
            Event::Lifecycle(LifecycleEvent::Died {
                entity,
                creature: Some(CreatureId::new("rat")),
            })
        };
        assert_eq!(died(EntityId::PLAYER).name(), "player.died");
        assert_eq!(died(EntityId(9)).name(), "entity.died");
    }

    #[test]
    fn skill_updates_carry_the_level_up_flag_on_the_wire() {
        let event = Event::Progression(ProgressionEvent::SkillUpdated {
            entity: EntityId::PLAYER,
            progress: SkillProgress {
                skill: SkillId::Shield,
                level: 2,
                experience: 15,
                max_experience: 150,
                levels_gained: 1,
                leveled_up: true,
            },
        });

        let encoded = ron::to_string(&event).unwrap();
        assert!(encoded.contains("leveled_up"));

        let decoded: Event = ron::from_str(&encoded).unwrap();
        assert_eq!(decoded, event);
        assert_eq!(decoded.name(), "skill.updated");
    }
}
