use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;

/// Checks that a node's value is within `tolerance` of `expected_value`.
/// Comparison happens in `f64`. Panics on mismatch.
pub fn check_scalar_near<T: ScalarValue>(actual: &Scalar<T>, expected_value: f64, tolerance: f64) {
    let value = actual.value().to_real();
    let diff = (value - expected_value).abs();
    if !(diff <= tolerance) {
        panic!(
            "Value mismatch for {:?}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, value, expected_value, diff, tolerance
        );
    }
}

/// Checks that a node's gradient is within `tolerance` of `expected_grad`.
pub fn check_grad_near<T: ScalarValue>(actual: &Scalar<T>, expected_grad: f64, tolerance: f64) {
    let grad = actual.grad().to_real();
    let diff = (grad - expected_grad).abs();
    if !(diff <= tolerance) {
        panic!(
            "Gradient mismatch for {:?}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, grad, expected_grad, diff, tolerance
        );
    }
}

/// Helper to create f64 leaves for testing.
pub fn leaves(values: &[f64]) -> Vec<Scalar<f64>> {
    values.iter().map(|&v| Scalar::new(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_scalar_near_accepts() {
        let s = Scalar::new(1.0f32);
        s.set_grad(0.5);
        check_scalar_near(&s, 1.0 + 1e-7, 1e-6);
        check_grad_near(&s, 0.5, 0.0);
    }

    #[test]
    #[should_panic(expected = "Value mismatch")]
    fn test_check_scalar_near_rejects() {
        check_scalar_near(&Scalar::new(1.0f64), 1.1, 1e-3);
    }

    #[test]
    #[should_panic(expected = "Gradient mismatch")]
    fn test_check_grad_near_rejects_nan() {
        let s = Scalar::new(0.0f64);
        s.set_grad(f64::NAN);
        check_grad_near(&s, 0.0, 1.0);
    }

    #[test]
    fn test_leaves() {
        let xs = leaves(&[1.0, 2.0]);
        assert_eq!(xs.len(), 2);
        assert!(xs.iter().all(|x| x.is_leaf()));
    }
}
