//! Draw commands and the sinks that receive them

use serde::{Deserialize, Serialize};

/// One blit, in panel coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Copy `width` columns of a ribbon image starting at `image_x`
    Ribbon {
        layer: usize,
        image: String,
        screen_x: i32,
        image_x: i32,
        width: i32,
    },
    /// One tile of the brick strip
    Brick {
        screen_x: i32,
        screen_y: i32,
        image_id: u8,
    },
    /// A whole named sprite with its top-left corner at (x, y)
    Sprite { image: String, x: i32, y: i32 },
}

/// Receiver of a frame's draw commands, in back-to-front order
pub trait RenderSink {
    fn draw(&mut self, command: DrawCommand);
}

/// Sink that just records commands
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl RenderSink for DrawList {
    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}
