//! Scrolling of the brick map
//!
//! The bricks move exactly like a ribbon whose image is the whole map, but
//! they are drawn a tile column at a time instead of as one wide blit.

use serde::{Deserialize, Serialize};

use super::bricks::BrickGrid;
use super::geom::Heading;
use super::wrap::{self, DrawSpan};

/// One map column placed on screen; every brick in it is drawn at `screen_x`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPlacement {
    pub screen_x: i32,
    pub col: usize,
}

/// A brick ready to blit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickSprite {
    pub screen_x: i32,
    pub screen_y: i32,
    pub image_id: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrickScroller {
    /// Screen x of the map's column 0, in (-width, width)
    offset: i32,
    heading: Heading,
}

impl BrickScroller {
    pub fn new() -> Self {
        Self::default()
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

    pub fn update(&mut self, grid: &BrickGrid) {
        self.offset = wrap::advance(
            self.offset,
            self.heading.sign() * grid.move_size(),
            grid.width(),
        );
    }

    /// Columns needed to fill the panel, left to right
    ///
    /// Within each wrap span the first column may start left of the span
    /// (a partly visible tile); the last one ends exactly on the span edge
    /// or beyond the panel.
    pub fn columns(&self, grid: &BrickGrid) -> Vec<ColumnPlacement> {
        let tile = grid.tile_width();
        let mut placed = Vec::new();
        for span in wrap::spans(self.offset, grid.panel_width(), grid.width()) {
            place_span(&span, tile, &mut placed);
        }
        placed
    }

    /// Every visible brick, in column order
    pub fn bricks(&self, grid: &BrickGrid) -> Vec<BrickSprite> {
        self.columns(grid)
            .into_iter()
            .flat_map(|c| {
                grid.column(c.col).iter().map(move |b| BrickSprite {
                    screen_x: c.screen_x,
                    screen_y: b.top,
                    image_id: b.image_id,
                })
            })
            .collect()
    }
}

fn place_span(span: &DrawSpan, tile: i32, placed: &mut Vec<ColumnPlacement>) {
    let mut col = (span.image_x / tile) as usize;
    let mut x = span.screen_x - span.image_x % tile;
    while x < span.screen_end() {
        placed.push(ColumnPlacement { screen_x: x, col });
        x += tile;
        col += 1;
    }
}
