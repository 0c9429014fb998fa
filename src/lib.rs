//! # Aviary - Obstacle-Course Fitness Environment
//!
//! A deterministic side-scrolling obstacle-avoidance simulation used as a fitness
//! environment for evolving neural-network controllers. A bird with 1-D vertical
//! physics must thread the gaps of pipes scrolling in from the right; a controller
//! decides each step whether to flap.
//!
//! ## Features
//!
//! - Discrete fixed-step physics (gravity, flap impulse, velocity clamp)
//! - Polled axis-aligned collision detection against pipe gaps
//! - Fixed-length normalized state encoding for network inputs
//! - Episode runner reducing one controller rollout to a scalar fitness
//! - Generation evaluation, serially or on a rayon pool with serial fallback
//! - Injectable random sources for reproducible gap placement
//! - Save/load of simulation parameters
//!
//! The evolutionary optimizer itself (genomes, species, mutation, crossover)
//! lives outside this crate: anything implementing [`evaluation::policy::Policy`]
//! can be evaluated, and the bundled [`evaluation::mlp::Mlp`] is a working
//! reference controller type for it to evolve.
//!
//! ## Core Modules
//!
//! - [`simulation::bird`] - The avatar and its vertical physics
//! - [`simulation::pipe`] - Scrolling pipe obstacles
//! - [`simulation::world`] - Environment stepping, scoring, and state encoding
//! - [`evaluation::episode`] - Single-episode rollouts
//! - [`evaluation::harness`] - Population evaluation with parallel execution

/// Core simulation logic and data structures.
pub mod simulation {
    /// The bird avatar and its vertical physics.
    pub mod bird;
    /// Simulation and evaluation parameters.
    pub mod params;
    /// Pipe obstacles scrolling toward the bird.
    pub mod pipe;
    /// The environment: entity collection, stepping, termination, state encoding.
    pub mod world;
}

/// Fitness evaluation of controller populations.
pub mod evaluation {
    /// Episode runner driving one controller through one life of the world.
    pub mod episode;
    /// Generation evaluation with parallel execution and serial fallback.
    pub mod harness;
    /// Reference feed-forward network controller.
    pub mod mlp;
    /// The controller capability and the action-derivation boundary.
    pub mod policy;
}
