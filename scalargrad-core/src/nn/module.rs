use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;

/// The base trait for every neural building block (neuron, layer, network).
///
/// A module owns leaf nodes (its parameters) and builds a fresh expression
/// graph each time it is applied to inputs.
pub trait Module<T: ScalarValue>: std::fmt::Debug {
    /// What a forward pass produces: a single node for a neuron, one node per
    /// neuron for layers and networks.
    type Output;

    /// Performs a forward pass over `inputs`.
    fn apply(&self, inputs: &[Scalar<T>]) -> Self::Output;

    /// Returns handles to all learnable parameters, neuron-major then
    /// layer-major: for every neuron its weights in order followed by its bias.
    ///
    /// The handles share storage with the module, so `set_value` on them
    /// updates the module in place.
    fn parameters(&self) -> Vec<Scalar<T>>;

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}
