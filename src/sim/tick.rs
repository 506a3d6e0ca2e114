//! Fixed-step simulation tick
//!
//! One call advances the world by exactly one period, in a fixed order:
//! intent, horizontal pre-check, scenery, jumper, fireball. Anything the
//! caller should react to comes back as events.

use serde::{Deserialize, Serialize};

use super::geom::Heading;
use super::state::{GamePhase, World};

/// What the player asked for this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    StayStill,
    Jump,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// None keeps the previous movement
    pub intent: Option<Intent>,
}

impl TickInput {
    pub fn new(intent: Intent) -> Self {
        Self {
            intent: Some(intent),
        }
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The fireball struck the jumper at this panel position
    Hit { x: i32, y: i32 },
    /// Hit limit reached; `score` is whole seconds survived
    GameOver { score: u64 },
}

/// Advance the world by one tick
pub fn tick(world: &mut World, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if world.phase == GamePhase::GameOver {
        return events;
    }
    world.time_ticks += 1;

    if let Some(intent) = input.intent {
        apply_intent(world, intent);
    }

    // Blocked: nothing scrolls this tick, the jumper included
    if world.jumper.will_collide_horizontally(&world.grid) {
        log::debug!("Blocked at world x {}", world.jumper.world_pos().x);
        set_heading(world, Heading::Still);
    }

    world.ribbons.update();
    world.scroller.update(&world.grid);
    world.jumper.update(&world.grid);

    if let Some(hit) = world
        .fireball
        .update(world.jumper.screen_rect(), &mut world.rng)
    {
        world.hits += 1;
        log::info!("Hit {} at ({}, {})", world.hits, hit.x, hit.y);
        events.push(GameEvent::Hit { x: hit.x, y: hit.y });

        if world.max_hits > 0 && world.hits >= world.max_hits {
            world.phase = GamePhase::GameOver;
            let score = world.score();
            log::info!("Game over after {} ticks, score {}", world.time_ticks, score);
            events.push(GameEvent::GameOver { score });
        }
    }

    events
}

fn apply_intent(world: &mut World, intent: Intent) {
    match intent {
        Intent::MoveLeft => set_heading(world, Heading::Left),
        Intent::MoveRight => set_heading(world, Heading::Right),
        Intent::StayStill => set_heading(world, Heading::Still),
        Intent::Jump => world.jumper.jump(),
    }
}

/// Point the jumper one way and the scenery the other
fn set_heading(world: &mut World, heading: Heading) {
    world.jumper.set_heading(heading);
    world.scroller.set_heading(heading.opposite());
    world.ribbons.set_heading(heading.opposite());
}
