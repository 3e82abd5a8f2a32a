use crate::autograd::BackwardOp;
use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;

/// Applies the Rectified Linear Unit: `max(0, a)`.
///
/// A NaN input compares false against zero and therefore maps to `0`.
pub fn relu_op<T: ScalarValue>(a: &Scalar<T>) -> Scalar<T> {
    let input = a.value();
    let value = if input > T::zero() { input } else { T::zero() };
    Scalar::from_op(value, vec![a.clone()], BackwardOp::Relu)
}

/// Active branch (`out.value > 0`): a.grad += out.grad.
///
/// Inactive branch: the parent's gradient is *set* to zero, not incremented.
/// Whatever the parent had already accumulated from other consumers when this
/// rule runs is discarded.
pub(crate) fn relu_backward<T: ScalarValue>(out_value: T, out_grad: T, parents: &[Scalar<T>]) {
    let a = &parents[0];
    if out_value > T::zero() {
        a.acc_grad(out_grad);
    } else {
        a.set_grad(T::zero());
    }
}

impl<T: ScalarValue> Scalar<T> {
    /// See [`relu_op`].
    pub fn relu(&self) -> Scalar<T> {
        relu_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
