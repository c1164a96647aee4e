//! Network traits for learned seats.
//!
//! A network maps an encoded observation to one score per action code.
//! Training and parameter storage live outside the engine; the engine only
//! needs a forward pass.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, ACTION_COUNT};

/// Encoded observation as a flat feature vector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Feature values.
    pub features: Vec<f32>,
}

impl EncodedState {
    /// Create an encoded state.
    pub fn new(features: Vec<f32>) -> Self {
        Self { features }
    }

    /// A zero vector of the given length.
    pub fn zeros(len: usize) -> Self {
        Self {
            features: vec![0.0; len],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Feature at an index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.features.get(index).copied()
    }
}

/// A policy network: one output score per action code.
pub trait PolicyNetwork: Send + Sync {
    /// Score each of the [`ACTION_COUNT`] action codes. Higher is preferred.
    fn predict(&self, encoded: &EncodedState) -> Vec<f32>;

    /// Batch prediction for multiple states.
    fn predict_batch(&self, encoded: &[EncodedState]) -> Vec<Vec<f32>> {
        encoded.iter().map(|e| self.predict(e)).collect()
    }
}

/// A single dense layer: `outputs = weights * features + bias`.
///
/// Weights are stored row-major, one row of `inputs` weights per action
/// code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearNetwork {
    inputs: usize,
    weights: Vec<f32>,
    bias: Vec<f32>,
}

impl LinearNetwork {
    /// All-zero network for `inputs` features.
    pub fn zeros(inputs: usize) -> Self {
        Self {
            inputs,
            weights: vec![0.0; inputs * ACTION_COUNT],
            bias: vec![0.0; ACTION_COUNT],
        }
    }

    /// Network with weights and biases drawn uniformly from `[-1, 1)`.
    pub fn random(inputs: usize, rng: &mut GameRng) -> Self {
        let mut sample = || rng.gen_unit() * 2.0 - 1.0;
        let weights = (0..inputs * ACTION_COUNT).map(|_| sample()).collect();
        let bias = (0..ACTION_COUNT).map(|_| sample()).collect();
        Self {
            inputs,
            weights,
            bias,
        }
    }

    /// Build from explicit parameters.
    pub fn from_parts(inputs: usize, weights: Vec<f32>, bias: Vec<f32>) -> Self {
        assert_eq!(weights.len(), inputs * ACTION_COUNT, "weights must be inputs x actions");
        assert_eq!(bias.len(), ACTION_COUNT, "one bias per action");
        Self {
            inputs,
            weights,
            bias,
        }
    }

    /// Number of input features.
    #[must_use]
    pub fn inputs(&self) -> usize {
        self.inputs
    }
}

impl PolicyNetwork for LinearNetwork {
    fn predict(&self, encoded: &EncodedState) -> Vec<f32> {
        self.bias
            .iter()
            .zip(self.weights.chunks(self.inputs.max(1)))
            .map(|(b, row)| {
                b + row
                    .iter()
                    .zip(&encoded.features)
                    .map(|(w, x)| w * x)
                    .sum::<f32>()
            })
            .collect()
    }
}
