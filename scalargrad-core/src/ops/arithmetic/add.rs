use crate::autograd::BackwardOp;
use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;

/// Adds two nodes: `a + b`.
///
/// The result records `[a, b]` as parents. Both partial derivatives are `1`,
/// so backward adds the output gradient unchanged to each operand.
pub fn add_op<T: ScalarValue>(a: &Scalar<T>, b: &Scalar<T>) -> Scalar<T> {
    let value = a.value().wrapped_add(b.value());
    Scalar::from_op(value, vec![a.clone(), b.clone()], BackwardOp::Add)
}

/// a.grad += out.grad; b.grad += out.grad
pub(crate) fn add_backward<T: ScalarValue>(out_grad: T, parents: &[Scalar<T>]) {
    parents[0].acc_grad(out_grad);
    parents[1].acc_grad(out_grad);
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
