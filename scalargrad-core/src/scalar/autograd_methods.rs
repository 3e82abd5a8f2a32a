use log::{debug, trace};

use crate::autograd::graph::topological_sort;
use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;

impl<T: ScalarValue> Scalar<T> {
    /// Returns the gradient accumulated so far.
    pub fn grad(&self) -> T {
        self.read_data().grad
    }

    /// Overwrites the gradient.
    pub fn set_grad(&self, grad: T) {
        self.write_data().grad = grad;
    }

    /// Resets the gradient to zero. Backward passes never do this on their own.
    pub fn zero_grad(&self) {
        self.set_grad(T::zero());
    }

    /// Adds `grad_to_add` to the gradient. Integer gradients wrap on overflow.
    pub fn acc_grad(&self, grad_to_add: T) {
        let mut data = self.write_data();
        data.grad = data.grad.wrapped_add(grad_to_add);
    }

    /// Performs the backward pass starting from this node.
    ///
    /// Computes d(self)/d(n) for every node `n` reachable through the parent
    /// relation and adds it into `n`'s gradient:
    /// 1. Builds a post-order of the reachable subgraph (parents before
    ///    consumers) with an explicit stack.
    /// 2. Seeds this node's gradient with `1`.
    /// 3. Runs each node's backward rule exactly once, consumers first, so a
    ///    node shared by several consumers has finished accumulating before it
    ///    propagates further.
    ///
    /// Gradients of the other nodes are *accumulated*: call
    /// [`zero_grad`](Self::zero_grad) (or `Module::zero_grad`) between
    /// independent passes.
    pub fn backward(&self) {
        let sorted_nodes = topological_sort(self);
        trace!("backward: {} node(s) reachable from root", sorted_nodes.len());

        self.set_grad(T::one());

        let mut rules_run = 0usize;
        for node in sorted_nodes.iter().rev() {
            let data = node.read_data();
            if let Some(op) = data.grad_fn {
                // Parents are distinct allocations from `node`, so borrowing
                // them mutably while `data` is held is sound.
                op.backward(data.value, data.grad, &data.parents);
                rules_run += 1;
            }
        }
        debug!(
            "backward: ran {} rule(s) over {} node(s)",
            rules_run,
            sorted_nodes.len()
        );
    }
}
