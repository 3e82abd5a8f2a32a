// src/scalar/mod.rs

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::ops::traits::ScalarValue;
use crate::scalar_data::ScalarData;

mod autograd_methods;
mod debug;
mod traits;

/// A node of the computation graph holding a single number.
///
/// `Scalar` uses `Rc<RefCell<ScalarData>>` internally:
/// 1.  **Shared ownership:** a node reused in several sub-expressions is
///     referenced by every consumer; cloning a `Scalar` clones the handle,
///     not the node.
/// 2.  **Interior mutability:** the gradient (and, for parameter updates, the
///     value) can be written through a shared handle.
///
/// Identity is the allocation, not the number: two nodes holding equal values
/// are still distinct graph nodes (see [`Scalar::ptr_eq`]).
///
/// The handle is neither `Send` nor `Sync`; a graph belongs to one thread.
pub struct Scalar<T: ScalarValue> {
    pub(crate) data: Rc<RefCell<ScalarData<T>>>,
}

impl<T: ScalarValue> Scalar<T> {
    /// Creates a new leaf node with zero gradient.
    pub fn new(value: T) -> Self {
        Scalar {
            data: Rc::new(RefCell::new(ScalarData::new(value))),
        }
    }

    /// Leaf holding the additive identity.
    pub fn zero() -> Self {
        Self::new(T::zero())
    }

    /// Leaf holding the multiplicative identity.
    pub fn one() -> Self {
        Self::new(T::one())
    }

    /// Wires a freshly computed value into the graph.
    pub(crate) fn from_op(value: T, parents: Vec<Scalar<T>>, grad_fn: BackwardOp) -> Self {
        Scalar {
            data: Rc::new(RefCell::new(ScalarData::from_op(value, parents, grad_fn))),
        }
    }

    /// Borrows the node data immutably.
    ///
    /// Panics if the node is currently mutably borrowed, which only happens
    /// on re-entrant access from inside a gradient update.
    pub(crate) fn read_data(&self) -> Ref<'_, ScalarData<T>> {
        self.data.borrow()
    }

    /// Borrows the node data mutably.
    pub(crate) fn write_data(&self) -> RefMut<'_, ScalarData<T>> {
        self.data.borrow_mut()
    }

    /// Stable identity of the node, used as the visited-set key.
    pub(crate) fn node_id(&self) -> NodeId<T> {
        Rc::as_ptr(&self.data)
    }

    /// Forward value of the node.
    pub fn value(&self) -> T {
        self.read_data().value
    }

    /// Overwrites the forward value.
    ///
    /// Meant for parameter updates on leaves between training steps. Nodes
    /// already derived from this one keep the value they were computed with.
    pub fn set_value(&self, value: T) {
        self.write_data().value = value;
    }

    /// Handles to the parents, in operand order.
    pub fn parents(&self) -> Vec<Scalar<T>> {
        self.read_data().parents.clone()
    }

    /// The backward rule of this node, `None` for leaves.
    pub fn grad_fn(&self) -> Option<BackwardOp> {
        self.read_data().grad_fn
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Operator label ("+", "*", "**2.0000", ...), empty for leaves.
    pub fn op_label(&self) -> String {
        self.read_data()
            .grad_fn
            .map(|op| op.label())
            .unwrap_or_default()
    }

    /// Name given with [`set_label`](Self::set_label), empty by default.
    pub fn label(&self) -> String {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = label.into();
    }

    /// Builder-style [`set_label`](Self::set_label).
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    /// Returns `true` if both handles point at the same graph node.
    pub fn ptr_eq(&self, other: &Scalar<T>) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_leaf() {
        let a = Scalar::new(3.5f64);
        assert_eq!(a.value(), 3.5);
        assert_eq!(a.grad(), 0.0);
        assert!(a.is_leaf());
        assert!(a.grad_fn().is_none());
        assert!(a.parents().is_empty());
        assert_eq!(a.op_label(), "");
    }

    #[test]
    fn test_clone_shares_node() {
        let a = Scalar::new(1i32);
        let alias = a.clone();
        alias.set_grad(7);
        assert_eq!(a.grad(), 7);
        assert!(a.ptr_eq(&alias));
    }

    #[test]
    fn test_equal_values_are_distinct_nodes() {
        let a = Scalar::new(2.0f32);
        let b = Scalar::new(2.0f32);
        assert!(!a.ptr_eq(&b));
        assert_ne!(a.node_id(), b.node_id());
    }

    #[test]
    fn test_labels() {
        let a = Scalar::new(1.0f64).with_label("a");
        assert_eq!(a.label(), "a");
        a.set_label("renamed");
        assert_eq!(a.label(), "renamed");
    }

    #[test]
    fn test_set_value() {
        let w = Scalar::new(0.5f64);
        w.set_value(0.25);
        assert_eq!(w.value(), 0.25);
    }
}
