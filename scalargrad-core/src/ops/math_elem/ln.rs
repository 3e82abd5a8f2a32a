use crate::autograd::BackwardOp;
use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;

// --- ln_op Implementation ---

/// Computes the natural logarithm (base \( e \)) of a node.
///
/// Non-positive inputs follow `f64::ln`: `ln(0)` is negative infinity and
/// negative inputs give NaN. For integer element types these are then narrowed
/// by `T::from_real`.
pub fn ln_op<T: ScalarValue>(a: &Scalar<T>) -> Scalar<T> {
    let value = T::from_real(a.value().to_real().ln());
    Scalar::from_op(value, vec![a.clone()], BackwardOp::Log)
}

/// Gradient of \( z = \ln(a) \):
/// \\[ \frac{dL}{da} = \frac{dL}{dz} \cdot \frac{1}{a} \\]
pub(crate) fn ln_backward<T: ScalarValue>(out_grad: T, parents: &[Scalar<T>]) {
    let a = &parents[0];
    let local = 1.0 / a.value().to_real();
    a.acc_grad(T::from_real(local).wrapped_mul(out_grad));
}

impl<T: ScalarValue> Scalar<T> {
    /// Natural logarithm. See [`ln_op`].
    pub fn log(&self) -> Scalar<T> {
        ln_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
