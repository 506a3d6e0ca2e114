//! World state: every simulated piece of one level, composed
//!
//! The world owns the brick grid (read-only after load) and everything that
//! moves over it. It holds its own seeded RNG so a run replays exactly from
//! `Settings::seed`.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bricks::BrickGrid;
use super::fireball::Fireball;
use super::jumper::Jumper;
use super::ribbon::RibbonStack;
use super::scroller::BrickScroller;
use crate::assets::ImageProvider;
use crate::error::ConfigError;
use crate::settings::Settings;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    /// Hit limit reached; ticks no longer advance anything
    GameOver,
}

#[derive(Debug, Clone)]
pub struct World {
    /// Brick map, never mutated after load
    pub grid: BrickGrid,
    pub scroller: BrickScroller,
    /// Background ribbons, back to front
    pub ribbons: RibbonStack,
    pub jumper: Jumper,
    pub fireball: Fireball,
    /// RNG for fireball launches
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Hits taken so far
    pub hits: u32,
    /// 0 = unlimited
    pub max_hits: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub tick_period_ms: u32,
}

impl World {
    /// Build a level from brick map text, images and settings
    pub fn new(
        map_text: &str,
        images: &dyn ImageProvider,
        settings: &Settings,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;

        let grid = BrickGrid::load(map_text, images, settings)?;
        let ribbons = RibbonStack::from_settings(
            &settings.ribbons,
            images,
            settings.panel_width,
            grid.move_size(),
        )?;

        let actor_size = sprite_size(images, &settings.actor_image, settings.fallback_sprite_size);
        let jumper = Jumper::spawn(
            &grid,
            settings.panel_width / 2,
            actor_size,
            settings.max_up_steps,
        );

        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let fireball_size = sprite_size(
            images,
            &settings.fireball.image,
            settings.fallback_sprite_size,
        );
        let panel = IVec2::new(settings.panel_width, settings.panel_height);
        let fireball = Fireball::new(&settings.fireball, fireball_size, panel, &mut rng);

        log::info!(
            "World ready: {} ribbons, map {}x{}px, jumper {}x{} at x {}, seed {:#x}",
            ribbons.len(),
            grid.width(),
            grid.height(),
            actor_size.x,
            actor_size.y,
            jumper.world_pos().x,
            settings.seed
        );

        Ok(Self {
            grid,
            scroller: BrickScroller::new(),
            ribbons,
            jumper,
            fireball,
            rng,
            phase: GamePhase::Playing,
            hits: 0,
            max_hits: settings.max_hits,
            time_ticks: 0,
            tick_period_ms: settings.tick_period_ms,
        })
    }

    /// Whole seconds survived so far
    pub fn score(&self) -> u64 {
        self.time_ticks * self.tick_period_ms as u64 / 1000
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

/// Size of a named sprite, or a square fallback when the image is unknown
fn sprite_size(images: &dyn ImageProvider, name: &str, fallback: u32) -> IVec2 {
    match images.image_size(name) {
        Some(size) if size.x > 0 && size.y > 0 => size.as_ivec2(),
        _ => {
            log::warn!("No size for sprite {:?}, using {}px square", name, fallback);
            IVec2::splat(fallback as i32)
        }
    }
}
