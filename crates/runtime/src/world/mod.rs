//! The world: single writer over entities, the store and the event bus.
//!
//! Every mutation of per-entity state goes through [`World`]. After each
//! change the affected stats are recomputed, vitals and mana maxima are
//! synced, and the matching events are published. Callers drive it either
//! with typed methods or by feeding [`Command`] values into
//! [`World::dispatch`].

mod builder;
mod combat;
mod command;
mod progression;
mod quests;

pub use builder::{RuntimeConfig, WorldBuilder};
pub use command::{ChangeSource, Command, CommandOutcome, DamageReport, TickReport};

use std::collections::BTreeMap;

use game_core::{
    CalculatedStats, CreatureId, EntityId, EquipmentSet, EquipmentSlot, InstanceId,
    InventoryError, Inventory, ItemOracle, MilestoneProgress, Position, RegenClock,
    ResourceMeter, RespawnOutcome, SkillLedger, StatBlock, StatKind, TablesOracle, TemplateId,
    Tick, compute_stats, regen_amount,
};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::entity::{Entity, EntityKind, EntitySpec, Movement};
use crate::error::{PurchaseError, Result, RuntimeError, SpawnError};
use crate::events::{Event, EventBus, LifecycleEvent, ProgressionEvent, Topic};
use crate::hooks::HookRegistry;
use crate::oracle::OracleManager;
use crate::store::{EntityRecord, GameStore, Wallet};

pub struct World {
    config: RuntimeConfig,
    oracles: OracleManager,
    hooks: HookRegistry,
    bus: EventBus,
    store: GameStore,
    entities: BTreeMap<EntityId, Entity>,
    next_entity: u32,
    now: Tick,
}

impl World {
    pub fn builder() -> WorldBuilder {
        WorldBuilder::new()
    }

    fn from_parts(
        config: RuntimeConfig,
        oracles: OracleManager,
        hooks: HookRegistry,
        bus: EventBus,
    ) -> Self {
        let store = GameStore::new(config.game_config.inventory_capacity);
        Self {
            config,
            oracles,
            hooks,
            bus,
            store,
            entities: BTreeMap::new(),
            next_entity: EntityId::PLAYER.0 + 1,
            now: Tick::ZERO,
        }
    }

    // ===== accessors =====

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    pub fn now(&self) -> Tick {
        self.now
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn store(&self) -> &GameStore {
        &self.store
    }

    pub fn wallet(&self) -> Wallet {
        self.store.wallet
    }

    pub fn inventory(&self) -> &Inventory {
        &self.store.inventory
    }

    // ===== queries =====

    /// Recomputes the stat snapshot of an entity from the store.
    pub fn calculated_stats(&self, entity: EntityId) -> Result<CalculatedStats> {
        let record = self
            .store
            .record(entity)
            .ok_or(RuntimeError::UnknownEntity(entity))?;
        let env = self.oracles.as_game_env();
        Ok(compute_stats(
            record.base,
            &record.equipment,
            &record.skills,
            record.purchased,
            env.items(),
            env.tables(),
        ))
    }

    pub fn kill_count(&self, creature: &CreatureId) -> u32 {
        self.store.kills.count(creature)
    }

    /// Every milestone of the creature's table with its achieved flag.
    pub fn milestones_with_progress(&self, creature: &CreatureId) -> Vec<MilestoneProgress<'_>> {
        self.oracles
            .tables()
            .kill_bonuses(creature)
            .milestones_with_progress(self.kill_count(creature))
    }

    /// Extra outgoing damage against the creature, in percent.
    pub fn bonus_damage(&self, creature: &CreatureId) -> u32 {
        self.oracles
            .tables()
            .kill_bonuses(creature)
            .bonus_damage(self.kill_count(creature))
    }

    /// Reduction of damage taken from the creature, in percent.
    pub fn damage_reduction(&self, creature: &CreatureId) -> u32 {
        self.oracles
            .tables()
            .kill_bonuses(creature)
            .damage_reduction(self.kill_count(creature))
    }

    /// Loot chance against the creature: base chance plus milestone bonuses.
    pub fn loot_chance(&self, creature: &CreatureId) -> u32 {
        let bonus = self
            .oracles
            .tables()
            .kill_bonuses(creature)
            .loot_chance_bonus(self.kill_count(creature));
        self.config
            .game_config
            .base_loot_chance_percent
            .saturating_add(bonus)
            .min(100)
    }

    // ===== entity construction =====

    /// Constructs an entity from `spec`.
    ///
    /// Invalid specs do not fail the call: a degraded entity with health only
    /// (input and collision disabled) is registered instead and a
    /// construction-failed event is published. Only a second player is
    /// rejected outright.
    pub fn spawn(&mut self, spec: EntitySpec) -> Result<EntityId> {
        let id = match spec.kind {
            EntityKind::Player if self.entities.contains_key(&EntityId::PLAYER) => {
                return Err(SpawnError::PlayerExists.into());
            }
            EntityKind::Player => EntityId::PLAYER,
            EntityKind::Creature(_) => self.allocate_id(),
        };

        match self.check_spec(&spec) {
            Ok(()) => self.assemble(id, spec)?,
            Err(reason) => self.register_degraded(id, spec.kind, reason),
        }
        Ok(id)
    }

    /// Removes an entity and everything the store owns for it.
    pub fn despawn(&mut self, entity: EntityId) -> Result<()> {
        self.entities
            .remove(&entity)
            .ok_or(RuntimeError::UnknownEntity(entity))?;
        self.store.remove(entity);
        debug!(target: "runtime::world", %entity, "entity despawned");
        Ok(())
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity);
        self.next_entity = self.next_entity.saturating_add(1);
        id
    }

    fn check_spec(&self, spec: &EntitySpec) -> std::result::Result<(), SpawnError> {
        if spec.base_stats.health <= 0 {
            return Err(SpawnError::NonPositiveHealth {
                health: spec.base_stats.health,
            });
        }
        for (slot, instance) in spec.equipment.iter() {
            // Unknown templates are tolerated here and contribute nothing.
            let Some(template) = self.oracles.items().template(&instance.template_id) else {
                continue;
            };
            if template.slot != Some(slot) {
                return Err(SpawnError::SlotMismatch {
                    slot,
                    template: instance.template_id.clone(),
                });
            }
        }
        Ok(())
    }

    fn assemble(&mut self, id: EntityId, spec: EntitySpec) -> Result<()> {
        let EntitySpec {
            kind,
            base_stats,
            position,
            equipment,
            skills,
        } = spec;
        let skills =
            skills.unwrap_or_else(|| SkillLedger::starting(&self.config.game_config.skill_curve));

        self.store
            .insert(id, EntityRecord::new(base_stats, equipment, skills, self.now));
        let stats = self.calculated_stats(id)?;
        if let Some(record) = self.store.record_mut(id) {
            record.mana = ResourceMeter::full(stats.max_mana());
        }

        self.entities.insert(
            id,
            Entity::assemble(id, kind, stats.max_health(), position, stats.total.move_speed),
        );
        info!(
            target: "runtime::world",
            entity = %id,
            max_health = stats.max_health(),
            "entity spawned"
        );
        Ok(())
    }

    fn register_degraded(&mut self, id: EntityId, kind: EntityKind, reason: SpawnError) {
        warn!(target: "runtime::world", entity = %id, %reason, "entity construction failed, registering degraded entity");
        self.store.insert(
            id,
            EntityRecord::new(
                StatBlock::ZERO,
                EquipmentSet::empty(),
                SkillLedger::empty(),
                self.now,
            ),
        );
        self.entities.insert(id, Entity::degraded(id, kind));
        self.publish(Event::Lifecycle(LifecycleEvent::ConstructionFailed {
            entity: id,
            reason: reason.to_string(),
        }));
    }

    // ===== equipment and upgrades =====

    /// Replaces an entity's whole equipment set.
    pub fn set_equipment(
        &mut self,
        entity: EntityId,
        equipment: EquipmentSet,
        source: ChangeSource,
    ) -> Result<CalculatedStats> {
        let record = self
            .store
            .record_mut(entity)
            .ok_or(RuntimeError::UnknownEntity(entity))?;
        record.equipment = equipment;
        debug!(target: "runtime::world", %entity, ?source, "equipment changed");
        self.refresh_stats(entity)
    }

    /// Moves an inventory item into its slot; a displaced item goes back to the inventory.
    pub fn equip_from_inventory(
        &mut self,
        entity: EntityId,
        instance: InstanceId,
    ) -> Result<CalculatedStats> {
        let held = self
            .store
            .inventory
            .get(instance)
            .ok_or(RuntimeError::ItemNotHeld(instance))?;
        let slot = self
            .oracles
            .items()
            .template(&held.template_id)
            .and_then(|template| template.slot)
            .ok_or_else(|| RuntimeError::NotEquippable(held.template_id.clone()))?;
        if self.store.record(entity).is_none() {
            return Err(RuntimeError::UnknownEntity(entity));
        }

        let item = self
            .store
            .inventory
            .remove(instance)
            .ok_or(RuntimeError::ItemNotHeld(instance))?;
        let record = self
            .store
            .record_mut(entity)
            .ok_or(RuntimeError::UnknownEntity(entity))?;
        if let Some(previous) = record.equipment.equip(slot, item) {
            let template = self.oracles.items().template(&previous.template_id);
            self.store.inventory.add(previous, template)?;
        }
        self.refresh_stats(entity)
    }

    /// Moves the item in `slot` back to the inventory. An empty slot is a no-op.
    pub fn unequip_to_inventory(
        &mut self,
        entity: EntityId,
        slot: EquipmentSlot,
    ) -> Result<CalculatedStats> {
        let record = self
            .store
            .record_mut(entity)
            .ok_or(RuntimeError::UnknownEntity(entity))?;
        let Some(item) = record.equipment.unequip(slot) else {
            return self.calculated_stats(entity);
        };

        let template = self.oracles.items().template(&item.template_id);
        if let Err(err) = self.store.inventory.add(item.clone(), template) {
            if let Some(record) = self.store.record_mut(entity) {
                record.equipment.equip(slot, item);
            }
            return Err(err.into());
        }
        self.refresh_stats(entity)
    }

    /// Buys `points` of a stat with gold from the player's wallet.
    pub fn purchase_upgrade(
        &mut self,
        entity: EntityId,
        stat: StatKind,
        points: u32,
    ) -> Result<CalculatedStats> {
        if points == 0 {
            return Err(PurchaseError::NoPoints.into());
        }
        if self.store.record(entity).is_none() {
            return Err(RuntimeError::UnknownEntity(entity));
        }

        let cost = points.saturating_mul(self.config.game_config.upgrade_price_per_point);
        self.store
            .wallet
            .spend(cost)
            .map_err(PurchaseError::from)?;

        let record = self
            .store
            .record_mut(entity)
            .ok_or(RuntimeError::UnknownEntity(entity))?;
        let value = record.purchased.get_mut(stat);
        *value = value.saturating_add(i32::try_from(points).unwrap_or(i32::MAX));
        info!(target: "runtime::world", %entity, %stat, points, cost, "upgrade purchased");

        self.refresh_stats(entity)
    }

    /// Mints an item into the player's inventory.
    pub fn give_item(&mut self, template: &TemplateId, quantity: u16) -> Result<InstanceId> {
        let definition = self
            .oracles
            .items()
            .template(template)
            .ok_or_else(|| InventoryError::UnknownTemplate(template.clone()))?;
        let instance = self.store.mint(template, quantity);
        let stored = self.store.inventory.add(instance, Some(definition))?;
        Ok(stored.instance_id())
    }

    pub fn give_gold(&mut self, amount: u32) {
        self.store.wallet.deposit(amount);
    }

    // ===== lifecycle =====

    /// Brings a dead entity back at full health at `position`.
    pub fn respawn(&mut self, entity: EntityId, position: Position) -> Result<RespawnOutcome> {
        let stats = self.calculated_stats(entity)?;
        let target = self
            .entities
            .get_mut(&entity)
            .ok_or(RuntimeError::UnknownEntity(entity))?;
        let degraded = target.degraded;
        let Some(vitals) = target.vitals_mut() else {
            return Ok(RespawnOutcome::NotDead);
        };

        let outcome = vitals.respawn(stats.max_health());
        let RespawnOutcome::Respawned { health } = outcome else {
            debug!(target: "runtime::world", %entity, "respawn ignored, entity is not dead");
            return Ok(outcome);
        };

        target.place(position);
        target.set_interactive(!degraded);
        if let Some(record) = self.store.record_mut(entity) {
            record.mana = ResourceMeter::full(stats.max_mana());
            record.regen = RegenClock::starting_at(self.now);
        }

        info!(target: "runtime::world", %entity, health, "entity respawned");
        self.publish(Event::Lifecycle(LifecycleEvent::Respawned {
            entity,
            health,
            position,
        }));
        Ok(outcome)
    }

    // ===== time =====

    /// Advances the clock: regenerates living entities and expires cooldowns.
    ///
    /// Missed regeneration intervals are coalesced into one pulse batch.
    /// A tick earlier than the current time is ignored.
    pub fn tick(&mut self, now: Tick) -> TickReport {
        if now < self.now {
            debug!(target: "runtime::world", %now, current = %self.now, "ignoring stale tick");
            return TickReport::default();
        }
        self.now = now;

        let interval = self.config.game_config.regen_interval_ticks;
        let mut report = TickReport::default();
        let ids: Vec<EntityId> = self.entities.keys().copied().collect();
        for id in ids {
            let Ok(stats) = self.calculated_stats(id) else {
                continue;
            };
            let Some(record) = self.store.record_mut(id) else {
                continue;
            };
            report.expired_cooldowns += record.cooldowns.expire(now).len();

            let pulses = record.regen.due_pulses(now, interval);
            if pulses == 0 {
                continue;
            }
            let Some(vitals) = self.entities.get_mut(&id).and_then(Entity::vitals_mut) else {
                continue;
            };
            if !vitals.is_alive() {
                continue;
            }
            report.health_restored = report
                .health_restored
                .saturating_add(vitals.heal(regen_amount(stats.total.health_regen, pulses)));
            report.mana_restored = report
                .mana_restored
                .saturating_add(record.mana.restore(regen_amount(stats.total.mana_regen, pulses)));
        }
        report
    }

    pub fn start_cooldown(&mut self, entity: EntityId, key: &str, duration: u64) -> Result<()> {
        let now = self.now;
        let record = self
            .store
            .record_mut(entity)
            .ok_or(RuntimeError::UnknownEntity(entity))?;
        record.cooldowns.start(key, now, duration);
        Ok(())
    }

    /// Whether `key` is off cooldown. Unknown entities are never ready.
    pub fn cooldown_ready(&self, entity: EntityId, key: &str) -> bool {
        self.store
            .record(entity)
            .is_some_and(|record| record.cooldowns.is_ready(key, self.now))
    }

    // ===== commands =====

    pub fn dispatch(&mut self, command: Command) -> Result<CommandOutcome> {
        match command {
            Command::EquipmentChanged {
                entity,
                equipment,
                source,
            } => self
                .set_equipment(entity, equipment, source)
                .map(CommandOutcome::StatsUpdated),
            Command::Respawn { entity, x, y } => self
                .respawn(entity, Position::new(x, y))
                .map(CommandOutcome::Respawn),
            Command::AttackResolved {
                target,
                raw_amount,
                is_magic,
                attacker,
            } => self
                .apply_attack(target, raw_amount, is_magic, attacker.as_ref())
                .map(CommandOutcome::Damage),
            Command::PlayerStrike { target, raw_amount } => self
                .player_strike(target, raw_amount)
                .map(CommandOutcome::Damage),
            Command::Tick { now } => Ok(CommandOutcome::Ticked(self.tick(now))),
        }
    }

    // ===== internals =====

    /// Recomputes stats, syncs maxima into vitals, mana and movement, and
    /// publishes the new snapshot.
    fn refresh_stats(&mut self, entity: EntityId) -> Result<CalculatedStats> {
        let stats = self.calculated_stats(entity)?;
        if let Some(target) = self.entities.get_mut(&entity) {
            if let Some(vitals) = target.vitals_mut() {
                vitals.set_max_health(stats.max_health());
            }
            if let Some(movement) = target.capabilities.get_mut::<Movement>() {
                movement.speed = stats.total.move_speed;
            }
        }
        if let Some(record) = self.store.record_mut(entity) {
            record.mana.set_maximum(stats.max_mana());
        }
        self.publish(Event::Progression(ProgressionEvent::StatsChanged {
            entity,
            stats,
        }));
        Ok(stats)
    }

    fn publish(&self, event: Event) {
        debug!(target: "runtime::events", event = event.name(), "publish");
        self.bus.publish(event);
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("now", &self.now)
            .field("entities", &self.entities.len())
            .field("hooks", &self.hooks)
            .finish()
    }
}
