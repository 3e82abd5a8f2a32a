use crate::autograd::BackwardOp;
use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;

/// Applies the hyperbolic tangent: `tanh(a)`.
pub fn tanh_op<T: ScalarValue>(a: &Scalar<T>) -> Scalar<T> {
    let value = T::from_real(a.value().to_real().tanh());
    Scalar::from_op(value, vec![a.clone()], BackwardOp::Tanh)
}

/// a.grad += (1 - tanh(a)^2) * out.grad
///
/// `tanh(a)` is recomputed in `f64` from the parent's value rather than read
/// from the (possibly narrowed) output value.
pub(crate) fn tanh_backward<T: ScalarValue>(out_grad: T, parents: &[Scalar<T>]) {
    let a = &parents[0];
    let t = a.value().to_real().tanh();
    a.acc_grad(T::from_real(1.0 - t * t).wrapped_mul(out_grad));
}

impl<T: ScalarValue> Scalar<T> {
    /// See [`tanh_op`].
    pub fn tanh(&self) -> Scalar<T> {
        tanh_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
