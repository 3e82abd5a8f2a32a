use log::warn;
use rand::Rng;

use crate::error::ScalarGradError;
use crate::nn::init::uniform_vec;
use crate::nn::module::Module;
use crate::nn::non_linearity::NonLinearity;
use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;

/// A single unit: `activation(sum_i(x[i] * w[i]) + b)`.
///
/// Weights are drawn uniformly from `[-1, 1]`, the bias starts at zero.
#[derive(Debug)]
pub struct Neuron<T: ScalarValue> {
    weights: Vec<Scalar<T>>,
    bias: Scalar<T>,
    non_linearity: NonLinearity,
}

impl<T: ScalarValue> Neuron<T> {
    /// Creates a neuron with `nin` weights, initialized from the thread RNG.
    pub fn new(nin: usize, non_linearity: NonLinearity) -> Self {
        Self::with_rng(nin, non_linearity, &mut rand::thread_rng())
    }

    /// Creates a neuron with `nin` weights drawn from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(nin: usize, non_linearity: NonLinearity, rng: &mut R) -> Self {
        let weights = uniform_vec(rng, nin, -1.0, 1.0);
        Neuron {
            weights,
            bias: Scalar::zero(),
            non_linearity,
        }
    }

    /// Builds a neuron around existing leaves.
    pub fn from_parameters(weights: Vec<Scalar<T>>, bias: Scalar<T>, non_linearity: NonLinearity) -> Self {
        Neuron {
            weights,
            bias,
            non_linearity,
        }
    }

    /// Number of inputs this neuron expects.
    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Scalar<T>] {
        &self.weights
    }

    pub fn bias(&self) -> &Scalar<T> {
        &self.bias
    }

    pub fn non_linearity(&self) -> NonLinearity {
        self.non_linearity
    }

    pub fn set_non_linearity(&mut self, non_linearity: NonLinearity) {
        self.non_linearity = non_linearity;
    }

    /// Forward pass. When `inputs` and the weights differ in length only the
    /// common prefix contributes; the mismatch is logged at `warn` level.
    pub fn apply(&self, inputs: &[Scalar<T>]) -> Scalar<T> {
        if inputs.len() != self.weights.len() {
            warn!(
                "Neuron::apply: {} input(s) for {} weight(s), truncating to {}",
                inputs.len(),
                self.weights.len(),
                inputs.len().min(self.weights.len())
            );
        }
        let mut sum = Scalar::zero();
        for (x, w) in inputs.iter().zip(self.weights.iter()) {
            sum = &sum + &(x * w);
        }
        let pre_activation = &sum + &self.bias;
        self.non_linearity.activate(&pre_activation)
    }

    /// Forward pass that rejects inputs whose length differs from the number
    /// of weights.
    pub fn try_apply(&self, inputs: &[Scalar<T>]) -> Result<Scalar<T>, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        Ok(self.apply(inputs))
    }
}

impl<T: ScalarValue> Module<T> for Neuron<T> {
    type Output = Scalar<T>;

    fn apply(&self, inputs: &[Scalar<T>]) -> Scalar<T> {
        Neuron::apply(self, inputs)
    }

    fn parameters(&self) -> Vec<Scalar<T>> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
