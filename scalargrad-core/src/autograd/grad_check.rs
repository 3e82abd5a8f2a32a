use log::debug;
use thiserror::Error;

use crate::scalar::Scalar;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+eps): {loss_plus:?}, f(x-eps): {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

/// Checks the gradients produced by [`Scalar::backward`] against central
/// finite differences.
///
/// `func` builds an expression from one fresh leaf per entry of `inputs`.
/// For every input, `(f(x + eps) - f(x - eps)) / (2 * eps)` is compared with
/// the analytic gradient; the check fails when both the absolute difference
/// and the difference relative to the analytic gradient exceed `tolerance`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Scalar<f64>]) -> Scalar<f64>,
{
    let leaves: Vec<Scalar<f64>> = inputs.iter().map(|&v| Scalar::new(v)).collect();
    let output = func(&leaves);
    output.backward();

    let evaluate = |index: usize, delta: f64| -> f64 {
        let perturbed: Vec<Scalar<f64>> = inputs
            .iter()
            .enumerate()
            .map(|(i, &v)| Scalar::new(if i == index { v + delta } else { v }))
            .collect();
        func(&perturbed).value()
    };

    for (i, leaf) in leaves.iter().enumerate() {
        let loss_plus = evaluate(i, epsilon);
        let loss_minus = evaluate(i, -epsilon);
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        let analytical_grad = leaf.grad();

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        debug!(
            "check_grad: input {} analytical={} numerical={} diff={}",
            i, analytical_grad, numerical_grad, difference
        );
        if difference > tolerance && difference / (analytical_grad.abs() + epsilon) > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}
