//! Brick map loading and collision queries
//!
//! A brick map is a small text file:
//!
//! ```text
//! // comment lines start with two slashes
//! s bricks.gif 6
//!       1111
//!  22      33
//! 0000000000000
//! ```
//!
//! The `s` line names the image strip holding the tiles and how many tiles
//! it has. Every following line is a row of bricks: a digit selects a tile,
//! a space is empty. The last row is the floor and must be complete.
//!
//! World coordinates: x is unbounded and wraps modulo the map width, y is
//! shared with the panel. The map's bottom row sits on the bottom edge of
//! the panel, so row `r` spans `[panel_h - (rows - r) * tile_h, ... + tile_h)`.

use glam::UVec2;
use serde::{Deserialize, Serialize};

use crate::assets::{ImageProvider, require_size};
use crate::consts::MAX_BRICK_ROWS;
use crate::error::ConfigError;
use crate::settings::Settings;

/// A brick's map position and tile, as read from the map text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickCell {
    pub col: usize,
    pub row: usize,
    pub image_id: u8,
}

/// Parsed map text, before any image sizes are known
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrickMapSource {
    /// Strip file name, e.g. `bricks.gif`
    pub strip: String,
    /// Number of tiles in the strip
    pub tile_count: u8,
    pub cells: Vec<BrickCell>,
}

impl BrickMapSource {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut strip: Option<(String, u8)> = None;
        let mut cells = Vec::new();
        let mut row = 0usize;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim_end_matches('\r');
            if line.is_empty() || line.starts_with("//") {
                continue;
            }

            if line.starts_with(['s', 'S']) {
                strip = Some(parse_strip_header(line, line_no)?);
                continue;
            }

            let Some((_, count)) = &strip else {
                return Err(ConfigError::MissingStrip { line: line_no });
            };
            if row >= MAX_BRICK_ROWS {
                return Err(ConfigError::TooManyRows {
                    max: MAX_BRICK_ROWS,
                });
            }

            for (col, ch) in line.chars().enumerate() {
                if ch == ' ' {
                    continue;
                }
                let Some(digit) = ch.to_digit(10) else {
                    return Err(ConfigError::BadBrickChar {
                        line: line_no,
                        column: col,
                        ch,
                    });
                };
                let id = digit as u8;
                if id >= *count {
                    return Err(ConfigError::ImageOutOfRange {
                        line: line_no,
                        column: col,
                        id,
                        count: *count,
                    });
                }
                cells.push(BrickCell {
                    col,
                    row,
                    image_id: id,
                });
            }
            row += 1;
        }

        let Some((strip, tile_count)) = strip else {
            return Err(ConfigError::EmptyMap);
        };
        if cells.is_empty() {
            return Err(ConfigError::EmptyMap);
        }

        Ok(Self {
            strip,
            tile_count,
            cells,
        })
    }

    /// Strip name without its extension; the image provider's key for one tile
    pub fn strip_prefix(&self) -> &str {
        match self.strip.rfind('.') {
            Some(pos) => &self.strip[..pos],
            None => &self.strip,
        }
    }
}

/// `s <file> <count>`
fn parse_strip_header(line: &str, line_no: usize) -> Result<(String, u8), ConfigError> {
    let bad = || ConfigError::BadStripHeader {
        line: line_no,
        text: line.to_string(),
    };
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 || !tokens[0].eq_ignore_ascii_case("s") {
        return Err(bad());
    }
    let count: u8 = tokens[2].parse().map_err(|_| bad())?;
    if count == 0 || count > 10 {
        return Err(bad());
    }
    Ok((tokens[1].to_string(), count))
}

/// A placed brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    pub col: usize,
    pub row: usize,
    pub image_id: u8,
    /// World/screen y of the brick's top edge
    pub top: i32,
}

/// Map indices of a world point; `row` is negative above the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapCoord {
    pub col: usize,
    pub row: i32,
}

/// The immutable brick map, indexed by column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    strip: String,
    panel_width: i32,
    panel_height: i32,
    tile_width: i32,
    tile_height: i32,
    num_cols: usize,
    num_rows: usize,
    /// Pixel extent of the whole map
    width: i32,
    height: i32,
    /// Horizontal scroll step shared by bricks, ribbons and the actor
    move_size: i32,
    /// `columns[c]` holds every brick in map column `c`, unordered
    columns: Vec<Vec<Brick>>,
}

impl BrickGrid {
    /// Parse map text and size it with the strip's tile image
    pub fn load(
        text: &str,
        images: &dyn ImageProvider,
        settings: &Settings,
    ) -> Result<Self, ConfigError> {
        let source = BrickMapSource::parse(text)?;
        let tile = require_size(images, source.strip_prefix())?;
        let grid = Self::new(
            &source,
            tile,
            settings.panel_width,
            settings.panel_height,
            settings.brick_move_factor,
        )?;
        log::info!(
            "Loaded brick map {}: {}x{} tiles of {}x{}px, move size {}",
            grid.strip,
            grid.num_cols,
            grid.num_rows,
            grid.tile_width,
            grid.tile_height,
            grid.move_size
        );
        Ok(grid)
    }

    pub fn new(
        source: &BrickMapSource,
        tile: UVec2,
        panel_width: i32,
        panel_height: i32,
        move_factor: f32,
    ) -> Result<Self, ConfigError> {
        if tile.x == 0 || tile.y == 0 {
            return Err(ConfigError::ZeroSizedImage(source.strip.clone()));
        }
        if source.cells.is_empty() {
            return Err(ConfigError::EmptyMap);
        }
        let tile_width = tile.x as i32;
        let tile_height = tile.y as i32;

        let num_cols = source.cells.iter().map(|c| c.col).max().unwrap_or(0) + 1;
        let num_rows = source.cells.iter().map(|c| c.row).max().unwrap_or(0) + 1;
        let width = tile_width * num_cols as i32;
        let height = tile_height * num_rows as i32;

        if width <= panel_width {
            return Err(ConfigError::MapTooNarrow {
                map_width: width,
                panel_width,
            });
        }

        let mut has_floor = vec![false; num_cols];
        for cell in source.cells.iter().filter(|c| c.row == num_rows - 1) {
            has_floor[cell.col] = true;
        }
        if let Some(column) = has_floor.iter().position(|f| !f) {
            return Err(ConfigError::FloorGap { column });
        }

        let mut columns = vec![Vec::new(); num_cols];
        for cell in &source.cells {
            columns[cell.col].push(Brick {
                col: cell.col,
                row: cell.row,
                image_id: cell.image_id,
                top: panel_height - (num_rows - cell.row) as i32 * tile_height,
            });
        }

        let mut move_size = (tile_width as f32 * move_factor) as i32;
        if move_size == 0 {
            log::warn!("Brick move size rounds to 0, using 1");
            move_size = 1;
        }

        Ok(Self {
            strip: source.strip.clone(),
            panel_width,
            panel_height,
            tile_width,
            tile_height,
            num_cols,
            num_rows,
            width,
            height,
            move_size,
            columns,
        })
    }

    pub fn strip(&self) -> &str {
        &self.strip
    }

    pub fn panel_width(&self) -> i32 {
        self.panel_width
    }

    pub fn panel_height(&self) -> i32 {
        self.panel_height
    }

    pub fn tile_width(&self) -> i32 {
        self.tile_width
    }

    pub fn tile_height(&self) -> i32 {
        self.tile_height
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn move_size(&self) -> i32 {
        self.move_size
    }

    /// World y of the map's top edge
    #[inline]
    pub fn top(&self) -> i32 {
        self.panel_height - self.height
    }

    /// World y of the top edge of `row` (rows above the map are negative)
    #[inline]
    pub fn row_top(&self, row: i32) -> i32 {
        self.top() + row * self.tile_height
    }

    pub fn column(&self, col: usize) -> &[Brick] {
        &self.columns[col]
    }

    pub fn bricks(&self) -> impl Iterator<Item = &Brick> {
        self.columns.iter().flatten()
    }

    /// Map column under a world x, after wrapping
    #[inline]
    pub fn column_at(&self, world_x: i32) -> usize {
        let col = (world_x.rem_euclid(self.width) / self.tile_width) as usize;
        assert!(col < self.num_cols, "column {} out of range", col);
        col
    }

    pub fn world_to_cell(&self, world_x: i32, world_y: i32) -> MapCoord {
        MapCoord {
            col: self.column_at(world_x),
            row: (world_y - self.top()).div_euclid(self.tile_height),
        }
    }

    pub fn is_inside_brick(&self, world_x: i32, world_y: i32) -> bool {
        let cell = self.world_to_cell(world_x, world_y);
        self.columns[cell.col]
            .iter()
            .any(|b| b.row as i32 == cell.row)
    }

    /// Largest upward move, at most `step`, that a sprite whose top edge is at
    /// `top_y` can make without entering a brick in the column under `world_x`.
    /// A reduced result leaves the sprite flush against a brick's underside.
    ///
    /// If the top edge is already inside a brick the result is negative: the
    /// downward move that puts the sprite flush under that brick.
    pub fn check_rising_step(&self, world_x: i32, top_y: i32, step: i32) -> i32 {
        let col = self.column_at(world_x);
        self.columns[col]
            .iter()
            .filter(|b| b.top <= top_y && b.top + self.tile_height > top_y - step)
            .map(|b| top_y - (b.top + self.tile_height))
            .fold(step, i32::min)
    }

    /// Largest downward move, at most `step`, that a sprite whose bottom edge
    /// is at `base_y` can make without entering a brick in the column under
    /// `world_x`. A reduced result lands the sprite flush on a brick's top.
    ///
    /// If the bottom row of the sprite is already inside a brick the result is
    /// negative: the upward move that stands the sprite on that brick.
    pub fn check_falling_step(&self, world_x: i32, base_y: i32, step: i32) -> i32 {
        let col = self.column_at(world_x);
        self.columns[col]
            .iter()
            .filter(|b| b.top < base_y + step && b.top + self.tile_height >= base_y)
            .map(|b| b.top - base_y)
            .fold(step, i32::min)
    }

    /// Top edge of the highest brick in the column under `world_x`
    pub fn find_floor_height(&self, world_x: i32) -> i32 {
        let col = self.column_at(world_x);
        self.columns[col]
            .iter()
            .map(|b| b.top)
            .min()
            .unwrap_or(self.panel_height)
    }
}
