#![allow(dead_code)]

use scalargrad_core::Scalar;

/// Installs `env_logger` once per test binary. Honors `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates f64 leaves carrying the given labels.
pub fn labeled(values: &[(f64, &str)]) -> Vec<Scalar<f64>> {
    values
        .iter()
        .map(|&(v, label)| Scalar::new(v).with_label(label))
        .collect()
}

/// Current value of every node.
pub fn values<T: scalargrad_core::ScalarValue>(nodes: &[Scalar<T>]) -> Vec<T> {
    nodes.iter().map(|n| n.value()).collect()
}

/// Current gradient of every node.
pub fn grads<T: scalargrad_core::ScalarValue>(nodes: &[Scalar<T>]) -> Vec<T> {
    nodes.iter().map(|n| n.grad()).collect()
}
