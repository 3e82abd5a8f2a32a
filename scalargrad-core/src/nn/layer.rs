use log::debug;
use rand::Rng;

use crate::error::ScalarGradError;
use crate::nn::module::Module;
use crate::nn::neuron::Neuron;
use crate::nn::non_linearity::NonLinearity;
use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;

/// An ordered set of neurons fed by the same inputs.
#[derive(Debug)]
pub struct Layer<T: ScalarValue> {
    neurons: Vec<Neuron<T>>,
}

impl<T: ScalarValue> Layer<T> {
    /// Creates `nout` neurons with `nin` inputs each, using the thread RNG.
    pub fn new(nin: usize, nout: usize, non_linearity: NonLinearity) -> Self {
        Self::with_rng(nin, nout, non_linearity, &mut rand::thread_rng())
    }

    /// Creates `nout` neurons with `nin` inputs each, drawing weights from `rng`
    /// neuron after neuron.
    pub fn with_rng<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        non_linearity: NonLinearity,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..nout)
            .map(|_| Neuron::with_rng(nin, non_linearity, &mut *rng))
            .collect();
        debug!("Layer: {} -> {} ({})", nin, nout, non_linearity);
        Layer { neurons }
    }

    pub fn from_neurons(neurons: Vec<Neuron<T>>) -> Self {
        Layer { neurons }
    }

    pub fn neurons(&self) -> &[Neuron<T>] {
        &self.neurons
    }

    /// Number of outputs (neurons).
    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    /// Reconfigures the activation of every neuron.
    pub fn set_non_linearity(&mut self, non_linearity: NonLinearity) {
        for neuron in &mut self.neurons {
            neuron.set_non_linearity(non_linearity);
        }
    }

    /// Applies every neuron to `inputs`, in order.
    pub fn apply(&self, inputs: &[Scalar<T>]) -> Vec<Scalar<T>> {
        self.neurons.iter().map(|n| n.apply(inputs)).collect()
    }

    /// Strict variant of [`apply`](Self::apply): fails on the first neuron
    /// whose input count does not match.
    pub fn try_apply(&self, inputs: &[Scalar<T>]) -> Result<Vec<Scalar<T>>, ScalarGradError> {
        self.neurons.iter().map(|n| n.try_apply(inputs)).collect()
    }
}

impl<T: ScalarValue> Module<T> for Layer<T> {
    type Output = Vec<Scalar<T>>;

    fn apply(&self, inputs: &[Scalar<T>]) -> Vec<Scalar<T>> {
        Layer::apply(self, inputs)
    }

    fn parameters(&self) -> Vec<Scalar<T>> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
