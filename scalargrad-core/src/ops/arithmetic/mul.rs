use crate::autograd::BackwardOp;
use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;

/// Multiplies two nodes: `a * b`.
pub fn mul_op<T: ScalarValue>(a: &Scalar<T>, b: &Scalar<T>) -> Scalar<T> {
    let value = a.value().wrapped_mul(b.value());
    Scalar::from_op(value, vec![a.clone(), b.clone()], BackwardOp::Mul)
}

/// Product rule: each operand receives the other operand's value times the
/// output gradient.
pub(crate) fn mul_backward<T: ScalarValue>(out_grad: T, parents: &[Scalar<T>]) {
    let (a, b) = (&parents[0], &parents[1]);
    let (a_value, b_value) = (a.value(), b.value());
    a.acc_grad(b_value.wrapped_mul(out_grad));
    b.acc_grad(a_value.wrapped_mul(out_grad));
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
