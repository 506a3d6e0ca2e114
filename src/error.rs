//! Configuration errors
//!
//! Everything here is detected once while a world is being built. None of
//! it is recoverable: the caller reports it and does not start the game.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("brick row {line} appears before the `s <file> <count>` strip header")]
    MissingStrip { line: usize },
    #[error("malformed strip header on line {line}: {text:?}")]
    BadStripHeader { line: usize, text: String },
    #[error("brick map has more than {max} rows")]
    TooManyRows { max: usize },
    #[error("line {line}, column {column}: {ch:?} is not a brick digit")]
    BadBrickChar { line: usize, column: usize, ch: char },
    #[error("line {line}, column {column}: image id {id} is outside strip of {count}")]
    ImageOutOfRange {
        line: usize,
        column: usize,
        id: u8,
        count: u8,
    },
    #[error("brick map contains no bricks")]
    EmptyMap,
    #[error("image {0:?} is not known to the image provider")]
    MissingImage(String),
    #[error("image {0:?} has a zero-sized dimension")]
    ZeroSizedImage(String),
    #[error("brick map is {map_width}px wide, narrower than the {panel_width}px panel")]
    MapTooNarrow { map_width: i32, panel_width: i32 },
    #[error("gap in the brick map floor row at column {column}")]
    FloorGap { column: usize },
    #[error("ribbon {name:?} is {width}px wide, narrower than the {panel_width}px panel")]
    RibbonTooNarrow {
        name: String,
        width: i32,
        panel_width: i32,
    },
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    #[error("settings JSON error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
