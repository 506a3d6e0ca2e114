//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Integer pixel coordinates
//! - No rendering or platform dependencies

pub mod bricks;
pub mod fireball;
pub mod geom;
pub mod jumper;
pub mod ribbon;
pub mod scroller;
pub mod state;
pub mod tick;
pub mod wrap;

pub use bricks::{Brick, BrickGrid, BrickMapSource, MapCoord};
pub use fireball::{Fireball, Hit};
pub use geom::{Body, Facing, Heading, Rect};
pub use jumper::{Jumper, Pose, VerticalMode};
pub use ribbon::{Ribbon, RibbonStack};
pub use scroller::{BrickScroller, BrickSprite, ColumnPlacement};
pub use state::{GamePhase, World};
pub use tick::{GameEvent, Intent, TickInput, tick};
pub use wrap::DrawSpan;
