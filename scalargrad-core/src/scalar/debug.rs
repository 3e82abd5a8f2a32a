// src/scalar/debug.rs
use std::collections::HashSet;
use std::fmt;

use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;
use crate::scalar_data::ScalarData;

// Manual implementation: printing parents recursively would walk the whole graph.
impl<T: ScalarValue> fmt::Debug for Scalar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.try_borrow() {
            Ok(guard) => write!(
                f,
                "Scalar(value={:?}, grad={:?}, op={:?}, label={:?}, parents={})",
                guard.value,
                guard.grad,
                guard.grad_fn.map(|op| op.label()).unwrap_or_default(),
                guard.label,
                guard.parents.len()
            ),
            Err(_) => write!(f, "Scalar(<mutably borrowed>)"),
        }
    }
}

fn describe<T: ScalarValue>(data: &ScalarData<T>) -> String {
    format!("{} [v:{} g:{}]", data.label, data.value, data.grad)
}

impl<T: ScalarValue> Scalar<T> {
    /// Renders how this node was computed, one line per interior node.
    ///
    /// Binary nodes render as `label [v:.. g:..]: left [v:.. g:..] op right [v:.. g:..]`,
    /// unary nodes as `label [v:.. g:..]: op operand [v:.. g:..]`. Nodes are
    /// listed depth-first from `self`, parents in operand order; a node shared
    /// by several consumers is listed once.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let mut seen = HashSet::new();
        let mut stack = vec![self.clone()];

        while let Some(node) = stack.pop() {
            if !seen.insert(node.node_id()) {
                continue;
            }
            let data = node.read_data();
            if let Some(op) = data.grad_fn {
                let parents: Vec<_> = data.parents.iter().map(|p| p.read_data()).collect();
                let line = match parents.as_slice() {
                    [lhs, rhs] => format!(
                        "{}: {} {} {}\n",
                        describe(&*data),
                        describe(&**lhs),
                        op.label(),
                        describe(&**rhs)
                    ),
                    [operand] => format!(
                        "{}: {} {}\n",
                        describe(&*data),
                        op.label(),
                        describe(&**operand)
                    ),
                    // Arity is fixed per op; nothing else is ever built.
                    _ => String::new(),
                };
                out.push_str(&line);
            }
            stack.extend(data.parents.iter().rev().cloned());
        }
        out
    }

    /// Prints [`dump`](Self::dump) to stdout.
    pub fn print(&self) {
        print!("{}", self.dump());
    }
}
