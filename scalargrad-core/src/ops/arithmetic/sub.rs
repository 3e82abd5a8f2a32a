use crate::ops::arithmetic::add::add_op;
use crate::ops::arithmetic::neg::neg_op;
use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;

/// Subtracts two nodes: `a + (-b)`.
pub fn sub_op<T: ScalarValue>(a: &Scalar<T>, b: &Scalar<T>) -> Scalar<T> {
    add_op(a, &neg_op(b))
}

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
