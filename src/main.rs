//! Jumping Jack headless driver
//!
//! Builds a demo level, plays a scripted run at the fixed tick rate (without
//! sleeping) and logs what happens. Pass a settings JSON path to override
//! the defaults. Set `RUST_LOG=debug` to watch the state machines.

use jumping_jack::renderer::{DrawList, draw_world};
use jumping_jack::sim::{GameEvent, Intent, TickInput, World, tick};
use jumping_jack::{ConfigError, ImageTable, Settings};

const DEMO_MAP: &str = "\
// demo level: 16 columns of 50px bricks
s bricks.gif 6

     22
   3    44   1
 11     55  555
0000000000000000
";

/// Tick at which each intent is issued
const SCRIPT: &[(u64, Intent)] = &[
    (10, Intent::MoveRight),
    (40, Intent::Jump),
    (90, Intent::MoveLeft),
    (120, Intent::Jump),
    (200, Intent::StayStill),
    (230, Intent::MoveRight),
    (260, Intent::Jump),
    (400, Intent::MoveLeft),
    (700, Intent::StayStill),
];

const DEMO_TICKS: u64 = 3000;

fn demo_images() -> ImageTable {
    ImageTable::new()
        .with("bricks", 50, 50)
        .with("mountains", 1200, 360)
        .with("houses", 900, 360)
        .with("trees", 700, 360)
        .with("runningRight", 36, 52)
        .with("fireball", 20, 20)
}

fn run(settings_path: Option<&str>) -> Result<(), ConfigError> {
    let settings = match settings_path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let mut world = World::new(DEMO_MAP, &demo_images(), &settings)?;
    let mut frame = DrawList::new();

    let mut script = SCRIPT.iter().peekable();
    for t in 0..DEMO_TICKS {
        let mut input = TickInput::default();
        if let Some((_, intent)) = script.next_if(|(at, _)| *at == t) {
            log::info!("t={} intent {:?}", t, intent);
            input.intent = Some(*intent);
        }

        for event in tick(&mut world, &input) {
            match event {
                GameEvent::Hit { x, y } => log::info!("t={} hit at ({}, {})", t, x, y),
                GameEvent::GameOver { score } => log::info!("t={} game over, score {}", t, score),
            }
        }

        frame.clear();
        draw_world(&world, &mut frame);
        log::trace!("t={} frame has {} draw commands", t, frame.len());

        if world.is_over() {
            break;
        }
    }

    log::info!(
        "Finished: {} ticks, {} hits, score {}, jumper world x {}",
        world.time_ticks,
        world.hits,
        world.score(),
        world.jumper.world_pos().x
    );
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Jumping Jack (headless) starting...");

    let path = std::env::args().nth(1);
    if let Err(e) = run(path.as_deref()) {
        log::error!("Failed to start: {}", e);
        std::process::exit(1);
    }
}
