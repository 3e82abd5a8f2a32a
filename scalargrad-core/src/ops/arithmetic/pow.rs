use crate::autograd::BackwardOp;
use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;

/// Raises a node to a constant power: `a ^ exponent`.
///
/// The exponent is a plain `f64`, not a graph node; no gradient flows to it.
/// The power is evaluated in `f64` and narrowed back to `T`. Singular inputs
/// (zero base with a negative exponent, negative base with a fractional
/// exponent) yield infinity/NaN without complaint.
pub fn pow_op<T: ScalarValue>(a: &Scalar<T>, exponent: f64) -> Scalar<T> {
    let value = T::from_real(a.value().to_real().powf(exponent));
    Scalar::from_op(value, vec![a.clone()], BackwardOp::Pow { exponent })
}

/// a.grad += p * a^(p-1) * out.grad
///
/// The local derivative is narrowed to `T` before the multiplication.
pub(crate) fn pow_backward<T: ScalarValue>(exponent: f64, out_grad: T, parents: &[Scalar<T>]) {
    let a = &parents[0];
    let local = exponent * a.value().to_real().powf(exponent - 1.0);
    a.acc_grad(T::from_real(local).wrapped_mul(out_grad));
}

impl<T: ScalarValue> Scalar<T> {
    /// See [`pow_op`].
    pub fn pow(&self, exponent: f64) -> Scalar<T> {
        pow_op(self, exponent)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
