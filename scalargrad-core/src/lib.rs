//! Scalar reverse-mode automatic differentiation.
//!
//! Every value is a node in a dynamically built DAG. Operations in [`ops`]
//! create new nodes that remember their parents and how to push gradient
//! back to them; [`Scalar::backward`] walks the graph in reverse topological
//! order. The [`nn`] module builds neurons, layers and a multi-layer
//! perceptron on top of the engine.

// Core engine
pub mod autograd;
pub mod ops;
pub mod scalar;
pub mod scalar_data;

// Consumers of the engine
pub mod nn;
pub mod utils;

pub mod error;
pub use error::ScalarGradError;

// Re-export the node type so it is reachable as `scalargrad_core::Scalar`
pub use scalar::Scalar;
pub use ops::traits::ScalarValue;
// Re-export traits required by public functions/structs
pub use num_traits;
