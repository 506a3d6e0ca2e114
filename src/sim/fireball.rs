//! The fireball: a projectile that crosses the panel trying to hit the jumper
//!
//! It lives in panel coordinates and ignores the scrolling scenery. It is
//! never destroyed; leaving the panel or hitting the jumper sends it back to
//! its launch edge with a fresh height and speed.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geom::{Body, Rect};
use crate::settings::FireballSettings;

/// Where a fireball struck the jumper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fireball {
    /// Sprite image name
    image: String,
    body: Body,
    /// Horizontal step for the current flight
    step: i32,
    base_step: i32,
    jitter: i32,
    panel: IVec2,
    respawns: u32,
}

impl Fireball {
    /// Create a fireball already placed at its launch edge
    pub fn new<R: Rng + ?Sized>(
        settings: &FireballSettings,
        size: IVec2,
        panel: IVec2,
        rng: &mut R,
    ) -> Self {
        let mut fireball = Self {
            image: settings.image.clone(),
            body: Body::new(IVec2::ZERO, size),
            step: settings.base_step,
            base_step: settings.base_step,
            jitter: settings.jitter,
            panel,
            respawns: 0,
        };
        fireball.launch(rng);
        fireball
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn pos(&self) -> IVec2 {
        self.body.pos
    }

    pub fn size(&self) -> IVec2 {
        self.body.size
    }

    pub fn rect(&self) -> Rect {
        self.body.rect()
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    /// Times the fireball has been sent back to its launch edge
    pub fn respawns(&self) -> u32 {
        self.respawns
    }

    /// Move one step, then test against the jumper's box
    pub fn update<R: Rng + ?Sized>(&mut self, target: Rect, rng: &mut R) -> Option<Hit> {
        self.body.pos.x += self.step;

        // Only the middle third of the jumper counts
        let hit_box = target.shrink_x(target.w / 6);
        if hit_box.intersects(&self.body.rect()) {
            let hit = Hit {
                x: self.body.pos.x,
                y: self.body.pos.y + self.body.size.y / 2,
            };
            self.respawn(rng);
            return Some(hit);
        }

        if self.has_left_panel() {
            self.respawn(rng);
        }
        None
    }

    /// Fully past the trailing edge and still heading away
    fn has_left_panel(&self) -> bool {
        if self.step < 0 {
            self.body.pos.x + self.body.size.x <= 0
        } else {
            self.body.pos.x >= self.panel.x
        }
    }

    fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.respawns += 1;
        self.launch(rng);
        log::debug!(
            "Fireball respawned at ({}, {}) with step {}",
            self.body.pos.x,
            self.body.pos.y,
            self.step
        );
    }

    /// Pick a height in the lower half of the panel and a jittered speed
    fn launch<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let panel_h = self.panel.y;
        let mut y = panel_h / 2 + rng.random_range(0..panel_h) / 2;
        if y + self.body.size.y > panel_h {
            y -= self.body.size.y;
        }
        self.step = self.base_step + rng.random_range(-self.jitter..=self.jitter);
        let x = if self.base_step < 0 {
            self.panel.x
        } else {
            -self.body.size.x
        };
        self.body.pos = IVec2::new(x, y);
    }
}
