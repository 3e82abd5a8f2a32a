use rand::Rng;

use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;

/// Creates a leaf whose value is drawn uniformly from `[low, high]`.
///
/// The draw happens in `f64` and is narrowed with `T::from_real`, so integer
/// element types only ever see the truncated draw. Bounds given in the wrong
/// order are swapped.
pub fn uniform<T, R>(rng: &mut R, low: f64, high: f64) -> Scalar<T>
where
    T: ScalarValue,
    R: Rng + ?Sized,
{
    let (low, high) = if low <= high { (low, high) } else { (high, low) };
    Scalar::new(T::from_real(rng.gen_range(low..=high)))
}

/// Creates `n` independent [`uniform`] leaves.
pub fn uniform_vec<T, R>(rng: &mut R, n: usize, low: f64, high: f64) -> Vec<Scalar<T>>
where
    T: ScalarValue,
    R: Rng + ?Sized,
{
    (0..n).map(|_| uniform(&mut *rng, low, high)).collect()
}
