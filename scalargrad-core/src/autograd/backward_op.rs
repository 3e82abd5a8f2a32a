use crate::ops::activation::relu::relu_backward;
use crate::ops::activation::tanh::tanh_backward;
use crate::ops::arithmetic::add::add_backward;
use crate::ops::arithmetic::mul::mul_backward;
use crate::ops::arithmetic::pow::pow_backward;
use crate::ops::math_elem::ln::ln_backward;
use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;

/// The backward rule attached to a node created by an operation.
///
/// Each variant carries only what its local derivative needs beyond the
/// node's own value, gradient and parents (the exponent for `Pow`). Composite
/// operations (`neg`, `sub`, `div`) have no variant of their own: they are
/// built from `Add`, `Mul` and `Pow` nodes and inherit their rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp {
    /// `a + b`
    Add,
    /// `a * b`
    Mul,
    /// `a ^ exponent`, the exponent being a plain number outside the graph.
    Pow { exponent: f64 },
    /// `tanh(a)`
    Tanh,
    /// `max(0, a)`
    Relu,
    /// `ln(a)`
    Log,
}

impl BackwardOp {
    /// Number of parents a node produced by this operation has.
    pub fn arity(&self) -> usize {
        match self {
            BackwardOp::Add | BackwardOp::Mul => 2,
            BackwardOp::Pow { .. } | BackwardOp::Tanh | BackwardOp::Relu | BackwardOp::Log => 1,
        }
    }

    /// Operator label shown in diagnostics.
    pub fn label(&self) -> String {
        match self {
            BackwardOp::Add => "+".to_string(),
            BackwardOp::Mul => "*".to_string(),
            BackwardOp::Pow { exponent } => format!("**{:.4}", exponent),
            BackwardOp::Tanh => "tanh".to_string(),
            BackwardOp::Relu => "relu".to_string(),
            BackwardOp::Log => "log".to_string(),
        }
    }

    /// Pushes the output gradient onto `parents`.
    ///
    /// `out_value` and `out_grad` are the value and the (fully accumulated)
    /// gradient of the node this rule belongs to. Every rule adds into the
    /// parents' gradients, except `Relu` on its inactive branch which resets
    /// the parent's gradient to zero.
    pub(crate) fn backward<T: ScalarValue>(&self, out_value: T, out_grad: T, parents: &[Scalar<T>]) {
        match *self {
            BackwardOp::Add => add_backward(out_grad, parents),
            BackwardOp::Mul => mul_backward(out_grad, parents),
            BackwardOp::Pow { exponent } => pow_backward(exponent, out_grad, parents),
            BackwardOp::Tanh => tanh_backward(out_grad, parents),
            BackwardOp::Relu => relu_backward(out_value, out_grad, parents),
            BackwardOp::Log => ln_backward(out_grad, parents),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity() {
        assert_eq!(BackwardOp::Add.arity(), 2);
        assert_eq!(BackwardOp::Mul.arity(), 2);
        assert_eq!(BackwardOp::Pow { exponent: 3.0 }.arity(), 1);
        assert_eq!(BackwardOp::Tanh.arity(), 1);
        assert_eq!(BackwardOp::Relu.arity(), 1);
        assert_eq!(BackwardOp::Log.arity(), 1);
    }

    #[test]
    fn test_labels() {
        assert_eq!(BackwardOp::Add.label(), "+");
        assert_eq!(BackwardOp::Mul.label(), "*");
        assert_eq!(BackwardOp::Pow { exponent: -1.0 }.label(), "**-1.0000");
        assert_eq!(BackwardOp::Pow { exponent: 0.5 }.label(), "**0.5000");
    }

    #[test]
    fn test_dispatch_accumulates() {
        let a = Scalar::new(2.0f64);
        let b = Scalar::new(5.0f64);
        a.set_grad(1.0);
        BackwardOp::Mul.backward(10.0, 3.0, &[a.clone(), b.clone()]);
        assert_eq!(a.grad(), 1.0 + 5.0 * 3.0);
        assert_eq!(b.grad(), 2.0 * 3.0);
    }
}
