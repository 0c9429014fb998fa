//! The controller capability and the action-derivation boundary.
//!
//! A policy is anything that maps a fixed-length observation vector to a
//! numeric output vector. Only index 0 of the output is consulted: a
//! positive value means flap. Malformed outputs fail fast here instead of
//! being silently coerced into an action.

use ndarray::Array1;
use thiserror::Error;

/// Errors raised when a controller's output cannot drive the simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolicyError {
    /// The controller returned an output vector with no entries.
    #[error("policy returned an empty output vector")]
    EmptyOutput,
    /// The action gate value is NaN or infinite.
    #[error("policy output gate is not finite: {0}")]
    NonFiniteOutput(f32),
}

/// A controller mapping observation vectors to action-deciding outputs.
///
/// Implemented by the bundled [`Mlp`](super::mlp::Mlp); external optimizers
/// implement it for whatever network type they evolve. The output must have
/// at least one entry, which is checked by [`derive_action`] rather than
/// here, so implementations stay infallible.
pub trait Policy {
    /// Evaluates the controller on one observation.
    fn activate(&self, inputs: &Array1<f32>) -> Array1<f32>;
}

/// Derives the binary flap action from a controller output.
pub fn derive_action(output: &Array1<f32>) -> Result<bool, PolicyError> {
    let Some(&gate) = output.first() else {
        return Err(PolicyError::EmptyOutput);
    };

    if !gate.is_finite() {
        return Err(PolicyError::NonFiniteOutput(gate));
    }

    Ok(gate > 0.0)
}
