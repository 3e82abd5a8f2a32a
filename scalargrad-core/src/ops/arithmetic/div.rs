use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::pow_op;
use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;

/// Divides two nodes: `a * b^(-1)`.
///
/// A zero divisor yields infinity/NaN for floats. For integer
/// representations the reciprocal is narrowed to `T` first, so it truncates
/// to `0` unless `|b| == 1`.
pub fn div_op<T: ScalarValue>(a: &Scalar<T>, b: &Scalar<T>) -> Scalar<T> {
    mul_op(a, &pow_op(b, -1.0))
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
