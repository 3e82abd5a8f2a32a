use log::debug;
use rand::Rng;

use crate::error::ScalarGradError;
use crate::nn::layer::Layer;
use crate::nn::module::Module;
use crate::nn::non_linearity::NonLinearity;
use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;

/// Multi-layer perceptron.
///
/// Layer `i` maps `sizes[i]` inputs to `sizes[i + 1]` outputs where
/// `sizes = [nin, widths...]`. Hidden layers use `tanh`; the output layer is
/// linear.
#[derive(Debug)]
pub struct Mlp<T: ScalarValue> {
    layers: Vec<Layer<T>>,
}

impl<T: ScalarValue> Mlp<T> {
    /// Builds the network using the thread RNG.
    ///
    /// # Errors
    /// - `EmptyArchitecture` when `widths` is empty.
    /// - `ZeroWidth` when one of the widths is zero.
    pub fn new(nin: usize, widths: &[usize]) -> Result<Self, ScalarGradError> {
        Self::with_rng(nin, widths, &mut rand::thread_rng())
    }

    /// Builds the network drawing every weight from `rng`, layer after layer.
    pub fn with_rng<R: Rng + ?Sized>(
        nin: usize,
        widths: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if widths.is_empty() {
            return Err(ScalarGradError::EmptyArchitecture);
        }
        if let Some(layer) = widths.iter().position(|&w| w == 0) {
            return Err(ScalarGradError::ZeroWidth { layer });
        }

        let last = widths.len() - 1;
        let mut layers = Vec::with_capacity(widths.len());
        let mut fan_in = nin;
        for (i, &width) in widths.iter().enumerate() {
            let non_linearity = if i < last {
                NonLinearity::Tanh
            } else {
                NonLinearity::Identity
            };
            layers.push(Layer::with_rng(fan_in, width, non_linearity, &mut *rng));
            fan_in = width;
        }

        let mlp = Mlp { layers };
        debug!(
            "Mlp: {} input(s), widths {:?}, {} parameter(s)",
            nin,
            widths,
            mlp.parameters().len()
        );
        Ok(mlp)
    }

    pub fn from_layers(layers: Vec<Layer<T>>) -> Self {
        Mlp { layers }
    }

    pub fn layers(&self) -> &[Layer<T>] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut [Layer<T>] {
        &mut self.layers
    }

    /// Threads `inputs` through every layer and returns the last layer's
    /// outputs.
    pub fn apply(&self, inputs: &[Scalar<T>]) -> Vec<Scalar<T>> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.apply(&current);
        }
        current
    }

    /// Strict variant of [`apply`](Self::apply).
    pub fn try_apply(&self, inputs: &[Scalar<T>]) -> Result<Vec<Scalar<T>>, ScalarGradError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.try_apply(&current)?;
        }
        Ok(current)
    }
}

impl<T: ScalarValue> Module<T> for Mlp<T> {
    type Output = Vec<Scalar<T>>;

    fn apply(&self, inputs: &[Scalar<T>]) -> Vec<Scalar<T>> {
        Mlp::apply(self, inputs)
    }

    fn parameters(&self) -> Vec<Scalar<T>> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
