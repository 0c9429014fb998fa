//! Pipe obstacles scrolling toward the bird.
//!
//! A pipe is a vertical pair of columns with a gap between them. The gap
//! center is sampled once at creation; after that the pipe only scrolls left
//! at constant speed.

use serde::{Deserialize, Serialize};

use super::bird::{BIRD_RADIUS, BIRD_X, Bird};
use super::params::Params;

/// Horizontal extent of a pipe.
pub const PIPE_WIDTH: f32 = 50.0;

/// Minimum distance between a gap center and the play area edges.
pub const GAP_MARGIN: f32 = 100.0;

/// A pipe pair with a gap the bird must fly through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipe {
    /// Horizontal position of the leading edge.
    pub x: f32,
    /// Vertical center of the gap.
    pub gap_y: f32,
}

impl Pipe {
    /// Creates a pipe at `x` with the given gap center.
    pub fn new(x: f32, gap_y: f32) -> Self {
        Self { x, gap_y }
    }

    /// Top edge of the gap.
    pub fn gap_top(&self, params: &Params) -> f32 {
        self.gap_y - params.pipe_gap / 2.0
    }

    /// Bottom edge of the gap.
    pub fn gap_bottom(&self, params: &Params) -> f32 {
        self.gap_y + params.pipe_gap / 2.0
    }

    /// Scrolls the pipe one step to the left.
    pub fn advance(&mut self, params: &Params) {
        self.x += params.pipe_speed;
    }

    /// Axis-aligned collision test against the bird.
    ///
    /// True exactly when the horizontal extents overlap and any part of the
    /// bird's vertical extent sticks out of the gap. No leniency at the gap
    /// edges.
    pub fn collides(&self, bird: &Bird, params: &Params) -> bool {
        let bird_left = BIRD_X - BIRD_RADIUS;
        let bird_right = BIRD_X + BIRD_RADIUS;

        if bird_right > self.x && bird_left < self.x + PIPE_WIDTH {
            let bird_top = bird.y - BIRD_RADIUS;
            let bird_bottom = bird.y + BIRD_RADIUS;

            return bird_top < self.gap_top(params) || bird_bottom > self.gap_bottom(params);
        }

        false
    }

    /// True once the bird's fixed x position is past the trailing edge.
    pub fn passed_by(&self) -> bool {
        BIRD_X > self.x + PIPE_WIDTH
    }
}
