//! Scripted rat-cellar encounter.

use anyhow::Result;
use game_core::{CreatureId, EntityId, Position, QuestId, StatBlock, Tick};
use runtime::{Command, EntitySpec, Event, Topic, World};
use tokio::sync::broadcast;

const RAT_PACK: usize = 3;
const MAX_SWINGS: usize = 20;

pub fn run(mut world: World) -> Result<()> {
    let mut subscriptions = world.event_bus().subscribe_all();

    let player = world.spawn(
        EntitySpec::player(StatBlock {
            health: 60,
            power: 5,
            health_regen: 1,
            ..StatBlock::ZERO
        })
        .at(Position::new(0.0, 0.0)),
    )?;
    for template in ["rusty_sword", "wooden_shield"] {
        let item = world.give_item(&template.into(), 1)?;
        world.equip_from_inventory(player, item)?;
    }

    let quest = QuestId::new("rat_problem");
    world.accept_quest(&quest)?;

    let rat = CreatureId::new("rat");
    for n in 0..RAT_PACK {
        let offset = n as f32 * 2.0;
        let target = world.spawn(
            EntitySpec::creature(rat.clone(), StatBlock {
                health: 12,
                armor: 2,
                ..StatBlock::ZERO
            })
            .at(Position::new(offset, 4.0)),
        )?;

        world.dispatch(Command::AttackResolved {
            target: player,
            raw_amount: 8,
            is_magic: false,
            attacker: Some(rat.clone()),
        })?;
        for _ in 0..MAX_SWINGS {
            world.dispatch(Command::PlayerStrike {
                target,
                raw_amount: 6,
            })?;
            let alive = world
                .entity(target)
                .and_then(|e| e.vitals())
                .is_some_and(|v| v.is_alive());
            if !alive {
                break;
            }
        }
        world.despawn(target)?;
    }

    world.dispatch(Command::Tick { now: Tick(240) })?;
    let rewards = world.complete_quest(&quest)?;
    println!("quest '{quest}': {}", rewards.message);

    print_events(&mut subscriptions);
    print_summary(&world, player, &rat)?;
    Ok(())
}

fn print_events(subscriptions: &mut [(Topic, broadcast::Receiver<Event>)]) {
    for (topic, rx) in subscriptions.iter_mut() {
        while let Ok(event) = rx.try_recv() {
            println!("[{topic:?}] {}", event.name());
        }
    }
}

fn print_summary(world: &World, player: EntityId, rat: &CreatureId) -> Result<()> {
    let stats = world.calculated_stats(player)?;
    let health = world
        .entity(player)
        .and_then(|e| e.vitals())
        .map_or(0, |v| v.health());

    println!("player health {health}/{}", stats.max_health());
    println!(
        "rats killed {} (bonus damage {}%, loot chance {}%)",
        world.kill_count(rat),
        world.bonus_damage(rat),
        world.loot_chance(rat)
    );
    println!(
        "gold {} / quest points {}",
        world.wallet().gold,
        world.wallet().quest_points
    );
    Ok(())
}
