use std::cell::RefCell;
use std::collections::HashSet;

use log::trace;

use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;
use crate::scalar_data::ScalarData;

/// Identity of a graph node: the address of its shared cell.
///
/// Two nodes holding equal values are different nodes; keying on the pointer
/// keeps them apart. Valid as long as a handle to the node is alive, which the
/// traversal guarantees by holding clones of every visited node.
pub type NodeId<T> = *const RefCell<ScalarData<T>>;

/// Orders the subgraph reachable from `root` so that every node comes after
/// all of its parents (post-order, producers first, `root` last).
///
/// Iterates with an explicit stack: the depth of the graph does not grow the
/// call stack. Parents are explored in operand order, which gives the same
/// ordering as the textbook recursive formulation.
pub fn topological_sort<T: ScalarValue>(root: &Scalar<T>) -> Vec<Scalar<T>> {
    let mut visited: HashSet<NodeId<T>> = HashSet::new();
    let mut sorted = Vec::new();
    // (node, parents already scheduled)
    let mut stack: Vec<(Scalar<T>, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let parents = node.parents();
        stack.push((node, true));
        for parent in parents.into_iter().rev() {
            if !visited.contains(&parent.node_id()) {
                stack.push((parent, false));
            }
        }
    }

    trace!("topological_sort: {} node(s)", sorted.len());
    sorted
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
