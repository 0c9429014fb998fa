//! Generation evaluation: population in, index-aligned fitness out.
//!
//! Every controller is rolled through an independent episode with its own
//! world, so nothing mutable crosses task boundaries. Rayon's indexed
//! parallel iterator preserves input order when collecting, which yields the
//! index-alignment guarantee directly. When the thread pool cannot be
//! brought up, the whole generation is redone serially; there is no partial
//! merge with the failed attempt and no per-task retry.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::simulation::params::Params;

use super::episode::Episode;
use super::policy::{Policy, PolicyError};

/// How a generation's scores were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecMode {
    /// Rayon pool, one task per controller.
    Parallel,
    /// Serial, as configured.
    Serial,
    /// Serial, after the parallel backend failed to start.
    SerialFallback,
}

/// Scores for one generation, tagged with how they were computed.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// One fitness per controller, aligned with the input population.
    pub scores: Vec<f64>,
    /// Execution mode that actually produced the scores.
    pub mode: ExecMode,
}

/// Evaluates controller populations against the simulation.
#[derive(Debug, Clone)]
pub struct Evaluator {
    params: Params,
}

impl Evaluator {
    /// Creates an evaluator for the given parameters.
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    /// Parameters used for every episode.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Maps a population to one fitness per controller, index-aligned with
    /// the input regardless of execution order.
    ///
    /// Only malformed-output errors propagate; a parallel backend that fails
    /// to start is handled internally by rerunning the generation serially.
    pub fn evaluate<P>(&self, population: &[P]) -> Result<Vec<f64>, PolicyError>
    where
        P: Policy + Sync,
    {
        let outcome = self.evaluate_generation(population)?;
        debug!(
            mode = ?outcome.mode,
            population = population.len(),
            "generation evaluated"
        );

        Ok(outcome.scores)
    }

    /// Like [`evaluate`](Self::evaluate), but keeps the execution mode tag.
    pub fn evaluate_generation<P>(
        &self,
        population: &[P],
    ) -> Result<GenerationOutcome, PolicyError>
    where
        P: Policy + Sync,
    {
        if !self.params.parallel {
            return Ok(GenerationOutcome {
                scores: self.evaluate_serial(population)?,
                mode: ExecMode::Serial,
            });
        }

        // The pool is the batch-level failure point: a pool that fails to
        // start downgrades the whole generation to serial, and nothing from
        // the failed attempt is kept.
        match rayon::ThreadPoolBuilder::new().build() {
            Ok(pool) => {
                let scores = pool.install(|| {
                    population
                        .par_iter()
                        .map(|policy| self.run_one(policy))
                        .collect::<Result<Vec<_>, _>>()
                })?;

                Ok(GenerationOutcome {
                    scores,
                    mode: ExecMode::Parallel,
                })
            }
            Err(err) => {
                warn!(
                    error = %err,
                    "parallel backend unavailable, rerunning generation serially"
                );

                Ok(GenerationOutcome {
                    scores: self.evaluate_serial(population)?,
                    mode: ExecMode::SerialFallback,
                })
            }
        }
    }

    fn evaluate_serial<P: Policy>(&self, population: &[P]) -> Result<Vec<f64>, PolicyError> {
        population
            .iter()
            .map(|policy| self.run_one(policy))
            .collect()
    }

    fn run_one<P: Policy + ?Sized>(&self, policy: &P) -> Result<f64, PolicyError> {
        Episode::new(&self.params).run(policy, &self.params, None)
    }
}
