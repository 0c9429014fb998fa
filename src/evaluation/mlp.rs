//! Reference feed-forward network controller.
//!
//! A small multi-layer perceptron with tanh activation that implements
//! [`Policy`]. Weight evolution belongs to the external optimizer; this type
//! owns initialization, the forward pass, and serde serialization so a
//! trained controller can be persisted for later replay.

use ndarray::{Array1, Array2};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use serde::{Deserialize, Serialize};

use super::policy::Policy;

/// A single dense layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    /// Weight matrix (`output_size` × `input_size`).
    pub weights: Array2<f32>,
    /// Bias vector (`output_size`).
    pub biases: Array1<f32>,
}

impl Layer {
    /// Creates a layer with uniform random weights and biases in `±scale`.
    pub fn new_random(input_size: usize, output_size: usize, scale: f32) -> Self {
        Self {
            weights: Array2::random((output_size, input_size), Uniform::new(-scale, scale)),
            biases: Array1::random(output_size, Uniform::new(-scale, scale)),
        }
    }

    /// Performs a forward pass with tanh activation.
    #[inline]
    pub fn forward(&self, inputs: &Array1<f32>) -> Array1<f32> {
        let mut output = self.weights.dot(inputs);
        output += &self.biases;
        output.mapv_inplace(f32::tanh);
        output
    }
}

/// Feed-forward controller: ordered dense layers from input to output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mlp {
    /// Ordered layers from input to output.
    pub layers: Vec<Layer>,
}

impl Mlp {
    /// Creates a network with the given layer widths and random weights.
    ///
    /// `layer_sizes` lists the width of every layer including input and
    /// output, so it must have at least two entries.
    pub fn new_random(layer_sizes: &[usize], scale: f32) -> Self {
        let layers = (0..layer_sizes.len() - 1)
            .map(|i| Layer::new_random(layer_sizes[i], layer_sizes[i + 1], scale))
            .collect();

        Self { layers }
    }
}

impl Policy for Mlp {
    fn activate(&self, inputs: &Array1<f32>) -> Array1<f32> {
        let mut output = inputs.clone();
        for layer in &self.layers {
            output = layer.forward(&output);
        }
        output
    }
}
