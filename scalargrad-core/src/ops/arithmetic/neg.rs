use crate::ops::arithmetic::mul::mul_op;
use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;

/// Negates a node: `a * (-1)`.
///
/// Built as a multiplication with a fresh `-1` leaf, so the result is a `*`
/// node and the gradient rule is the product rule.
pub fn neg_op<T: ScalarValue>(a: &Scalar<T>) -> Scalar<T> {
    mul_op(a, &Scalar::new(-T::one()))
}

// --- Tests ---
#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
