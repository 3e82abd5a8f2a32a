// src/nn/mod.rs
// Neurons, layers and the multi-layer perceptron built on the scalar engine.

pub mod init;
pub mod layer;
pub mod losses;
pub mod mlp;
pub mod module; // Trait Module
pub mod neuron;
pub mod non_linearity;

// Re-export common items
pub use layer::Layer;
pub use losses::sum_squared_error;
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::Neuron;
pub use non_linearity::NonLinearity;
