//! The environment: entity collection, stepping, termination, state encoding.
//!
//! The world advances one discrete step at a time and polls collisions once
//! per step. Pipes scroll left at constant speed, new ones spawn at the right
//! edge once the furthest pipe has scrolled far enough in, and the front pipe
//! is retired the moment the bird passes its trailing edge, scoring one
//! point. Passing is the only way a pipe leaves the sequence; there is no
//! off-screen cull.

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::bird::{BIRD_X, Bird};
use super::params::Params;
use super::pipe::{GAP_MARGIN, Pipe};

/// Number of entries in the observation vector.
pub const STATE_LEN: usize = 8;

/// Offset right of the play area where the first pipe of an episode spawns.
const FIRST_PIPE_OFFSET: f32 = 100.0;

/// The simulation environment, hosting one episode at a time.
///
/// Invariant: `pipes` is non-empty and ordered by ascending horizontal
/// position, nearest un-passed pipe first.
#[derive(Debug, Clone)]
pub struct World {
    /// The player avatar.
    pub bird: Bird,
    /// Pipes ordered by horizontal position.
    pub pipes: Vec<Pipe>,
    /// Steps taken since the last reset.
    pub frame: u64,
    /// Fitness accumulated by the episode runner.
    pub fitness: f64,
    rng: StdRng,
}

impl World {
    /// Creates a world with an entropy-seeded random source and resets it.
    pub fn new(params: &Params) -> Self {
        Self::with_rng(params, StdRng::from_os_rng())
    }

    /// Creates a world whose gap placement is reproducible from `seed`.
    pub fn with_seed(params: &Params, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    fn with_rng(params: &Params, rng: StdRng) -> Self {
        let mut world = Self {
            bird: Bird::spawn(params),
            pipes: Vec::new(),
            frame: 0,
            fitness: 0.0,
            rng,
        };
        world.reset(params);
        world
    }

    /// Starts a fresh episode and returns the initial observation.
    pub fn reset(&mut self, params: &Params) -> Array1<f32> {
        self.bird = Bird::spawn(params);
        let gap_y = self.sample_gap(params);
        self.pipes = vec![Pipe::new(params.width + FIRST_PIPE_OFFSET, gap_y)];
        self.frame = 0;
        self.fitness = 0.0;

        self.observe(params)
    }

    /// Advances the simulation by one step and reports termination.
    ///
    /// Stepping a dead world is a no-op that reports termination again;
    /// callers must [`reset`](Self::reset) before stepping further.
    pub fn step(&mut self, params: &Params, flap: bool) -> (Array1<f32>, bool) {
        if !self.bird.alive {
            return (self.observe(params), true);
        }

        if flap {
            self.bird.flap(params);
        }
        self.bird.integrate(params);

        // every pipe advances this step, even after a hit
        for pipe in &mut self.pipes {
            pipe.advance(params);
            if pipe.collides(&self.bird, params) {
                self.bird.alive = false;
            }
        }

        let spawn_edge = params.width - params.pipe_distance;
        if self.pipes.last().is_none_or(|pipe| pipe.x < spawn_edge) {
            let gap_y = self.sample_gap(params);
            self.pipes.push(Pipe::new(params.width, gap_y));
        }

        // pass-based retirement: the point and the removal happen together,
        // so a pipe can never score twice
        if self.pipes.first().is_some_and(Pipe::passed_by) {
            self.bird.score += 1;
            self.pipes.remove(0);
        }

        self.frame += 1;

        (self.observe(params), !self.bird.alive)
    }

    /// Encodes the observable state as a fixed-length normalized vector.
    ///
    /// Layout: bird height and velocity ratios, then distance, gap-top and
    /// gap-bottom ratios for the two nearest pipes. With a single pipe in
    /// play the second triple repeats the first, so the vector always has
    /// [`STATE_LEN`] entries.
    pub fn observe(&self, params: &Params) -> Array1<f32> {
        let pipe1 = &self.pipes[0];
        let pipe2 = self.pipes.get(1).unwrap_or(pipe1);

        Array1::from_vec(vec![
            self.bird.y / params.height,
            self.bird.vel / params.max_velocity,
            (pipe1.x - BIRD_X) / params.width,
            pipe1.gap_top(params) / params.height,
            pipe1.gap_bottom(params) / params.height,
            (pipe2.x - BIRD_X) / params.width,
            pipe2.gap_top(params) / params.height,
            pipe2.gap_bottom(params) / params.height,
        ])
    }

    /// True while the bird is alive.
    pub fn alive(&self) -> bool {
        self.bird.alive
    }

    fn sample_gap(&mut self, params: &Params) -> f32 {
        self.rng
            .random_range(GAP_MARGIN..=params.height - GAP_MARGIN)
    }
}
