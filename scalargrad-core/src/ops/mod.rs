//! # Scalar Operations Module (`ops`)
//!
//! Every operation that extends the computation graph lives here, grouped by
//! family.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has a function (`add_op`, `relu_op`,
//!   ...) that computes the forward value and returns a *new* node recording
//!   its parents and its [`BackwardOp`](crate::autograd::BackwardOp). Operands
//!   are never mutated and the graph is not traversed, so building a node is
//!   O(1).
//! - **`_backward` Functions:** next to each primitive forward function sits
//!   the gradient rule the backward executor dispatches to. Composite
//!   operations (`neg`, `sub`, `div`) are expressed through primitives and
//!   inherit their rules.
//! - **Traits (`ops::traits`):** the [`ScalarValue`](traits::ScalarValue)
//!   bound on the numeric payload.
//!
//! Domain errors are not validated: `ln` of a non-positive value, a zero base
//! with a negative exponent and the like produce NaN/infinity, which then flow
//! through later operations unchanged.
//!
//! The same operations are reachable as `std::ops` operators on
//! [`Scalar`](crate::Scalar) and as the methods `pow`, `tanh`, `relu`, `log`.

pub mod traits;

pub mod activation; // tanh, relu
pub mod arithmetic; // add, mul, neg, sub, div, pow
pub mod math_elem; // ln

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::ln_op;
