//! Wraparound background ribbons and the parallax stack that drives them
//!
//! A ribbon is an image at least as wide as the panel. The actor never moves
//! horizontally on screen; instead every ribbon scrolls the opposite way.
//! Ribbons further back scroll by a smaller step, which gives the depth.

use serde::{Deserialize, Serialize};

use super::geom::Heading;
use super::wrap::{self, DrawSpan};
use crate::assets::{ImageProvider, require_size};
use crate::error::ConfigError;
use crate::settings::RibbonSettings;

/// One image-backed scrolling band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ribbon {
    pub name: String,
    width: i32,
    step: i32,
    /// Screen x of the image head, in (-width, width)
    offset: i32,
    heading: Heading,
}

impl Ribbon {
    pub fn new(name: &str, width: i32, panel_width: i32, step: i32) -> Result<Self, ConfigError> {
        if width < panel_width {
            return Err(ConfigError::RibbonTooNarrow {
                name: name.to_string(),
                width,
                panel_width,
            });
        }
        Ok(Self {
            name: name.to_string(),
            width,
            step,
            offset: 0,
            heading: Heading::Still,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    /// Advance the head by one step in the current heading
    pub fn update(&mut self) {
        self.offset = wrap::advance(self.offset, self.heading.sign() * self.step, self.width);
    }

    /// Spans that fill a panel of `panel_width`
    pub fn spans(&self, panel_width: i32) -> Vec<DrawSpan> {
        wrap::spans(self.offset, panel_width, self.width)
    }
}

/// Ribbons ordered back to front, all driven by the same command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RibbonStack {
    ribbons: Vec<Ribbon>,
}

impl RibbonStack {
    pub fn new(ribbons: Vec<Ribbon>) -> Self {
        Self { ribbons }
    }

    /// Build the stack from settings; each step is `move_factor * base_step`
    pub fn from_settings(
        layers: &[RibbonSettings],
        images: &dyn ImageProvider,
        panel_width: i32,
        base_step: i32,
    ) -> Result<Self, ConfigError> {
        let mut ribbons = Vec::with_capacity(layers.len());
        for layer in layers {
            let size = require_size(images, &layer.image)?;
            let step = (layer.move_factor * base_step as f32) as i32;
            if step == 0 && layer.move_factor > 0.0 {
                log::warn!(
                    "Ribbon {:?} step rounds to zero (factor {}), it will not scroll",
                    layer.image,
                    layer.move_factor
                );
            }
            ribbons.push(Ribbon::new(&layer.image, size.x as i32, panel_width, step)?);
        }
        Ok(Self { ribbons })
    }

    pub fn set_heading(&mut self, heading: Heading) {
        for ribbon in &mut self.ribbons {
            ribbon.set_heading(heading);
        }
    }

    pub fn update(&mut self) {
        for ribbon in &mut self.ribbons {
            ribbon.update();
        }
    }

    /// Ribbons in draw order (furthest back first)
    pub fn iter(&self) -> impl Iterator<Item = &Ribbon> {
        self.ribbons.iter()
    }

    pub fn len(&self) -> usize {
        self.ribbons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ribbons.is_empty()
    }
}
