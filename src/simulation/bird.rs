//! The bird avatar and its vertical physics.
//!
//! The bird only ever moves vertically; the world scrolls past it. Flapping
//! sets the velocity to a fixed upward impulse and gravity pulls it back down
//! one step at a time.

use serde::{Deserialize, Serialize};

use super::params::Params;

/// Horizontal position of the bird. Fixed for the whole episode.
pub const BIRD_X: f32 = 50.0;

/// Collision radius of the bird.
pub const BIRD_RADIUS: f32 = 20.0;

/// The player avatar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    /// Vertical position.
    pub y: f32,
    /// Vertical velocity (positive = downward).
    pub vel: f32,
    /// False once the bird has died.
    pub alive: bool,
    /// Pipes passed so far.
    pub score: u32,
}

impl Bird {
    /// Spawns a bird at rest in the vertical center of the play area.
    pub fn spawn(params: &Params) -> Self {
        Self {
            y: params.height / 2.0,
            vel: 0.0,
            alive: true,
            score: 0,
        }
    }

    /// Sets the velocity to the flap impulse.
    pub fn flap(&mut self, params: &Params) {
        self.vel = params.flap_impulse;
    }

    /// Advances the vertical physics by one step.
    ///
    /// Applies gravity, clamps the velocity to `±max_velocity` and integrates
    /// the position. Leaving `[0, height]` (edges included) kills the bird,
    /// as does reaching the score cap.
    pub fn integrate(&mut self, params: &Params) {
        self.vel += params.gravity;
        self.vel = self.vel.clamp(-params.max_velocity, params.max_velocity);
        self.y += self.vel;

        if self.y <= 0.0 || self.y >= params.height {
            self.alive = false;
        }

        if self.score >= params.score_cap {
            self.alive = false;
        }
    }
}
