// src/scalar_data.rs
use std::rc::Rc;

use crate::autograd::BackwardOp;
use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;

/// Internal storage of one graph node.
///
/// Wrapped in `Rc<RefCell<ScalarData>>` by [`Scalar`] so that a node can be
/// shared by every downstream consumer while its gradient stays mutable.
#[derive(Debug)]
pub struct ScalarData<T: ScalarValue> {
    /// Forward value.
    pub(crate) value: T,
    /// d(root)/d(self), accumulated across consumers during a backward pass.
    pub(crate) grad: T,
    /// Nodes this one was computed from, in operand order.
    pub(crate) parents: Vec<Scalar<T>>,
    /// How to push `grad` onto the parents. `None` for leaves.
    pub(crate) grad_fn: Option<BackwardOp>,
    /// Free-form name used by the diagnostic dump.
    pub(crate) label: String,
}

impl<T: ScalarValue> ScalarData<T> {
    /// Creates a leaf node with zero gradient.
    pub fn new(value: T) -> Self {
        ScalarData {
            value,
            grad: T::zero(),
            parents: Vec::new(),
            grad_fn: None,
            label: String::new(),
        }
    }

    /// Creates an interior node produced by `grad_fn` from `parents`.
    pub(crate) fn from_op(value: T, parents: Vec<Scalar<T>>, grad_fn: BackwardOp) -> Self {
        debug_assert_eq!(
            parents.len(),
            grad_fn.arity(),
            "{:?} expects {} parent(s)",
            grad_fn,
            grad_fn.arity()
        );
        ScalarData {
            value,
            grad: T::zero(),
            parents,
            grad_fn: Some(grad_fn),
            label: String::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.parents.is_empty()
    }
}

// Long chains (e.g. a running sum over thousands of terms) would otherwise be
// released by one nested drop per node. Unlink uniquely owned ancestors into
// a worklist instead.
impl<T: ScalarValue> Drop for ScalarData<T> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.parents);
        while let Some(parent) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(parent.data) {
                let mut orphan = cell.into_inner();
                pending.append(&mut orphan.parents);
            }
        }
    }
}
