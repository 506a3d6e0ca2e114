//! Rendering module
//!
//! The core never touches pixels. Each frame it emits an ordered list of
//! draw commands into a `RenderSink`; whatever owns the window turns them
//! into blits.

pub mod command;
pub mod scene;

pub use command::{DrawCommand, DrawList, RenderSink};
pub use scene::draw_world;
