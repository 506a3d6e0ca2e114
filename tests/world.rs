//! Whole-level runs through the public API

use jumping_jack::renderer::{DrawCommand, DrawList, draw_world};
use jumping_jack::sim::{Intent, TickInput, VerticalMode, World, tick};
use jumping_jack::{ConfigError, ImageTable, Settings};

/// 6x3 map: floor everywhere, one wall brick in column 3
const LEVEL: &str = "\
// test level
s bricks.png 2
      
   1  
000000
";

fn images() -> ImageTable {
    ImageTable::new()
        .with("bricks", 32, 32)
        .with("runningRight", 16, 24)
        .with("fireball", 8, 8)
        .with("hills", 256, 128)
}

fn settings() -> Settings {
    Settings::from_json(
        r#"{
            "panel_width": 128,
            "panel_height": 128,
            "ribbons": [{ "image": "hills", "move_factor": 0.5 }],
            "max_hits": 0
        }"#,
    )
    .unwrap()
}

fn step(world: &mut World, intent: Option<Intent>) {
    tick(world, &TickInput { intent });
}

#[test]
fn test_jump_onto_wall() {
    let mut world = World::new(LEVEL, &images(), &settings()).unwrap();
    assert_eq!(world.jumper.world_pos().y, 72);

    step(&mut world, Some(Intent::MoveRight));
    step(&mut world, None);
    step(&mut world, None);
    // Third step is blocked by the wall
    assert_eq!(world.jumper.world_pos().x, 80);

    step(&mut world, Some(Intent::Jump));
    step(&mut world, Some(Intent::MoveRight));
    assert_eq!(world.jumper.world_pos().x, 80, "still below the wall top");

    step(&mut world, Some(Intent::MoveRight));
    assert_eq!(world.jumper.world_pos().x, 88);
    step(&mut world, Some(Intent::StayStill));

    for _ in 0..40 {
        step(&mut world, None);
    }
    assert_eq!(world.jumper.vertical(), VerticalMode::NotJumping);
    assert_eq!(world.jumper.world_pos().y, 64 - 24);
    assert_eq!(world.jumper.world_pos().x, 88);
}

#[test]
fn test_long_run_stays_consistent() {
    let mut world = World::new(LEVEL, &images(), &settings()).unwrap();
    let intents = [
        Intent::MoveLeft,
        Intent::Jump,
        Intent::MoveRight,
        Intent::Jump,
        Intent::StayStill,
        Intent::MoveLeft,
    ];
    let mut frame = DrawList::new();
    for t in 0..3000usize {
        let intent = (t % 23 == 0).then(|| intents[(t / 23) % intents.len()]);
        step(&mut world, intent);

        let width = world.grid.width();
        assert!(world.scroller.offset() > -width && world.scroller.offset() < width);
        assert!(world.jumper.world_pos().y + world.jumper.size().y <= 96);

        frame.clear();
        draw_world(&world, &mut frame);
        // The jumper is the first sprite and never leaves its screen x
        let actor = frame
            .commands
            .iter()
            .find(|c| matches!(c, DrawCommand::Sprite { .. }));
        assert!(matches!(actor, Some(DrawCommand::Sprite { x: 64, .. })));
    }
    assert!(!world.is_over());
}

#[test]
fn test_bad_levels_are_config_errors() {
    let settings = settings();
    assert!(matches!(
        World::new("s bricks.png 2\n0x0000\n", &images(), &settings),
        Err(ConfigError::BadBrickChar { ch: 'x', .. })
    ));
    assert!(matches!(
        World::new("s bricks.png 1\n000\n", &images(), &settings),
        Err(ConfigError::MapTooNarrow { .. })
    ));
    assert!(matches!(
        World::new("s bricks.png 2\n 1    \n00 000\n", &images(), &settings),
        Err(ConfigError::FloorGap { column: 2 })
    ));
    assert!(matches!(
        World::new("000000\n", &images(), &settings),
        Err(ConfigError::MissingStrip { line: 1 })
    ));
}
