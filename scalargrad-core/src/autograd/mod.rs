//! # Autograd
//!
//! Reverse-mode differentiation over the scalar graph:
//! - [`BackwardOp`]: the backward rule recorded on every interior node.
//! - [`graph`]: identity-keyed topological ordering of a subgraph.
//! - [`grad_check`]: finite-difference verification of analytic gradients.
//!
//! The executor itself is [`Scalar::backward`](crate::Scalar::backward).

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
