//! Jumping Jack - a side-scrolling platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (wraparound scrolling, brick collision, jump physics)
//! - `renderer`: Back-to-front draw command emission
//! - `assets`: Image size lookup used to size tiles and ribbons
//! - `settings`: Data-driven tunables

pub mod assets;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::{ImageProvider, ImageTable};
pub use error::ConfigError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default panel (viewport) dimensions in pixels
    pub const PANEL_WIDTH: i32 = 500;
    pub const PANEL_HEIGHT: i32 = 360;

    /// Fixed simulation period (30 Hz)
    pub const TICK_PERIOD_MS: u32 = 1000 / 30;

    /// Maximum number of brick row lines in a map
    pub const MAX_BRICK_ROWS: usize = 15;
    /// Fraction of a brick width the map moves per tick
    pub const BRICK_MOVE_FACTOR: f32 = 0.25;

    /// Number of rising steps in a full jump
    pub const MAX_UP_STEPS: u32 = 8;
    /// Horizontal probe height as a fraction of the actor height (4/5)
    pub const PROBE_HEIGHT_NUM: i32 = 4;
    pub const PROBE_HEIGHT_DEN: i32 = 5;

    /// Fireball step (negative = moving left) and per-spawn jitter
    pub const FIREBALL_STEP: i32 = -10;
    pub const FIREBALL_JITTER: i32 = 2;

    /// Hits the actor can take before the run ends
    pub const MAX_HITS: u32 = 20;

    /// Sprite size used when an image is unknown to the provider
    pub const FALLBACK_SPRITE_SIZE: u32 = 12;
}
