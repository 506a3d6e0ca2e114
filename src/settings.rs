//! Game settings
//!
//! Every tunable of the core lives here. Settings are plain JSON so a level
//! can be rebalanced without a rebuild.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// One background ribbon, listed back to front
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RibbonSettings {
    /// Image name (provider key)
    pub image: String,
    /// Fraction of the brick move size this ribbon scrolls per tick
    pub move_factor: f32,
}

impl RibbonSettings {
    pub fn new(image: &str, move_factor: f32) -> Self {
        Self {
            image: image.to_string(),
            move_factor,
        }
    }
}

/// Fireball tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireballSettings {
    /// Image name (provider key)
    pub image: String,
    /// Base horizontal step per tick (negative = moving left)
    pub base_step: i32,
    /// Each spawn adds a random offset in [-jitter, jitter]
    pub jitter: i32,
}

impl Default for FireballSettings {
    fn default() -> Self {
        Self {
            image: "fireball".to_string(),
            base_step: FIREBALL_STEP,
            jitter: FIREBALL_JITTER,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Panel ===
    pub panel_width: i32,
    pub panel_height: i32,
    /// Simulation period in milliseconds
    pub tick_period_ms: u32,

    // === Scrolling ===
    /// Fraction of a brick width the bricks move per tick
    pub brick_move_factor: f32,
    /// Background ribbons, furthest back first
    pub ribbons: Vec<RibbonSettings>,

    // === Actor ===
    /// Image whose size gives the actor's bounding box
    pub actor_image: String,
    /// Rising steps in a full jump
    pub max_up_steps: u32,
    /// Square size used for a sprite whose image is unknown
    pub fallback_sprite_size: u32,

    // === Fireball ===
    pub fireball: FireballSettings,

    // === Rules ===
    /// Hits allowed before game over (0 = never ends)
    pub max_hits: u32,
    /// RNG seed for fireball spawns
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            panel_width: PANEL_WIDTH,
            panel_height: PANEL_HEIGHT,
            tick_period_ms: TICK_PERIOD_MS,

            brick_move_factor: BRICK_MOVE_FACTOR,
            ribbons: vec![
                RibbonSettings::new("mountains", 0.1),
                RibbonSettings::new("houses", 0.5),
                RibbonSettings::new("trees", 1.0),
            ],

            actor_image: "runningRight".to_string(),
            max_up_steps: MAX_UP_STEPS,
            fallback_sprite_size: FALLBACK_SPRITE_SIZE,

            fireball: FireballSettings::default(),

            max_hits: MAX_HITS,
            seed: 0x5eed,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path);
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Cross-field checks serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.panel_width <= 0 || self.panel_height <= 0 {
            return Err(ConfigError::InvalidSettings(format!(
                "panel must be non-empty, got {}x{}",
                self.panel_width, self.panel_height
            )));
        }
        if self.brick_move_factor.is_nan() || self.brick_move_factor <= 0.0 {
            return Err(ConfigError::InvalidSettings(
                "brick_move_factor must be positive".to_string(),
            ));
        }
        if let Some(r) = self.ribbons.iter().find(|r| r.move_factor < 0.0) {
            return Err(ConfigError::InvalidSettings(format!(
                "ribbon {:?} has a negative move factor",
                r.image
            )));
        }
        if self.max_up_steps == 0 {
            return Err(ConfigError::InvalidSettings(
                "max_up_steps must be at least 1".to_string(),
            ));
        }
        if self.fallback_sprite_size == 0 {
            return Err(ConfigError::InvalidSettings(
                "fallback_sprite_size must be at least 1".to_string(),
            ));
        }
        // Jitter must never stop or reverse the fireball
        if self.fireball.jitter < 0 || self.fireball.base_step.abs() <= self.fireball.jitter {
            return Err(ConfigError::InvalidSettings(format!(
                "fireball jitter {} must be non-negative and below |base_step| {}",
                self.fireball.jitter, self.fireball.base_step
            )));
        }
        Ok(())
    }
}
