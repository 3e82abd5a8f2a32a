use log::warn;

use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;

/// Sum of squared errors: `sum_i (predictions[i] - targets[i])^2`.
///
/// The loss is an ordinary graph node; calling `backward` on it reaches every
/// parameter that produced `predictions`. Extra entries on the longer side are
/// ignored with a `warn` log. Empty inputs yield a zero leaf.
pub fn sum_squared_error<T: ScalarValue>(targets: &[Scalar<T>], predictions: &[Scalar<T>]) -> Scalar<T> {
    if targets.len() != predictions.len() {
        warn!(
            "sum_squared_error: {} target(s) for {} prediction(s), truncating",
            targets.len(),
            predictions.len()
        );
    }
    let mut loss = Scalar::zero();
    for (target, prediction) in targets.iter().zip(predictions.iter()) {
        loss = &loss + &(prediction - target).pow(2.0);
    }
    loss
}

#[cfg(test)]
#[path = "sse_test.rs"]
mod tests;
