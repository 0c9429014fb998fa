//! Episode runner: one world, one controller, one life.

use crate::simulation::params::Params;
use crate::simulation::world::World;

use super::policy::{Policy, PolicyError, derive_action};

/// Drives one environment through a full episode under one controller.
///
/// Fitness grows by `step_reward` for every step taken, so it is a
/// non-decreasing function of survival time. Pipes passed are not rewarded
/// directly, but surviving longer requires passing them.
#[derive(Debug, Clone)]
pub struct Episode {
    world: World,
}

impl Episode {
    /// Creates a runner with its own entropy-seeded world.
    pub fn new(params: &Params) -> Self {
        Self {
            world: World::new(params),
        }
    }

    /// Creates a runner whose world places gaps reproducibly from `seed`.
    pub fn with_seed(params: &Params, seed: u64) -> Self {
        Self {
            world: World::with_seed(params, seed),
        }
    }

    /// Runs the controller from reset to termination and returns its fitness.
    ///
    /// `step_budget` bounds the episode from outside; `None` leaves the
    /// score cap as the only stop for controllers that never die. Malformed
    /// controller output aborts the episode with an error.
    pub fn run<P: Policy + ?Sized>(
        &mut self,
        policy: &P,
        params: &Params,
        step_budget: Option<u64>,
    ) -> Result<f64, PolicyError> {
        let mut observation = self.world.reset(params);

        loop {
            if step_budget.is_some_and(|budget| self.world.frame >= budget) {
                break;
            }

            let output = policy.activate(&observation);
            let flap = derive_action(&output)?;

            let (next_observation, terminated) = self.world.step(params, flap);
            observation = next_observation;
            self.world.fitness += params.step_reward;

            if terminated {
                break;
            }
        }

        Ok(self.world.fitness)
    }

    /// Read access to the underlying world (score, frame counter).
    pub fn world(&self) -> &World {
        &self.world
    }
}
