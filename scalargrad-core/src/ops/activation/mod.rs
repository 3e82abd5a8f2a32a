// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linearities applied by neurons:
//! - [`tanh_op`]: hyperbolic tangent.
//! - [`relu_op`]: rectified linear unit.

pub mod relu;
pub mod tanh;

pub use relu::relu_op;
pub use tanh::tanh_op;
