//! Wraparound head-offset arithmetic shared by every scrolling layer
//!
//! A layer of width `W` is drawn with its head (image x = 0) at screen x =
//! `offset`. The offset lives in the open interval (-W, W): it is reduced
//! modulo W after every move but keeps its sign, so `o` and `o - W` are two
//! names for the same on-screen picture.
//!
//! Five disjoint cases cover every offset when filling a viewport of width
//! `V <= W`:
//!
//! | case                 | spans drawn                           |
//! |----------------------|---------------------------------------|
//! | `o == 0`             | head only                             |
//! | `0 < o < V`          | tail at 0, head at `o`                |
//! | `o >= V`             | tail only                             |
//! | `V - W <= o < 0`     | body only                             |
//! | `o < V - W`          | tail at 0, head at `W + o`            |

use serde::{Deserialize, Serialize};

/// One contiguous blit: `width` pixels of the layer starting at `image_x`,
/// drawn at `screen_x`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSpan {
    pub screen_x: i32,
    pub image_x: i32,
    pub width: i32,
}

impl DrawSpan {
    #[inline]
    pub fn new(screen_x: i32, image_x: i32, width: i32) -> Self {
        Self {
            screen_x,
            image_x,
            width,
        }
    }

    #[inline]
    pub fn screen_end(&self) -> i32 {
        self.screen_x + self.width
    }

    #[inline]
    pub fn image_end(&self) -> i32 {
        self.image_x + self.width
    }
}

/// Move a head offset by `delta`, wrapping modulo `width` but keeping the sign
#[inline]
pub fn advance(offset: i32, delta: i32, width: i32) -> i32 {
    debug_assert!(width > 0, "layer width must be positive");
    (offset + delta) % width
}

/// Map an offset onto its canonical position in [0, width)
#[inline]
pub fn normalize(offset: i32, width: i32) -> i32 {
    offset.rem_euclid(width)
}

/// Draw spans (at most two) that exactly fill `[0, viewport)` for a layer
/// of `width >= viewport` whose head sits at `offset`
pub fn spans(offset: i32, viewport: i32, width: i32) -> Vec<DrawSpan> {
    assert!(
        width >= viewport,
        "layer width {} narrower than viewport {}",
        width,
        viewport
    );
    assert!(
        offset > -width && offset < width,
        "head offset {} outside (-{}, {})",
        offset,
        width,
        width
    );

    if offset == 0 {
        vec![DrawSpan::new(0, 0, viewport)]
    } else if offset > 0 && offset < viewport {
        vec![
            DrawSpan::new(0, width - offset, offset),
            DrawSpan::new(offset, 0, viewport - offset),
        ]
    } else if offset >= viewport {
        vec![DrawSpan::new(0, width - offset, viewport)]
    } else if offset >= viewport - width {
        vec![DrawSpan::new(0, -offset, viewport)]
    } else {
        let tail = width + offset;
        vec![
            DrawSpan::new(0, -offset, tail),
            DrawSpan::new(tail, 0, viewport - tail),
        ]
    }
}
