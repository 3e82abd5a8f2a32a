use num_traits::{NumAssignOps, NumOps, Signed, WrappingAdd, WrappingMul};
use std::fmt::{Debug, Display};

/// A trait representing the numeric types that can back a [`Scalar`](crate::Scalar).
///
/// Signed integers (`i8`, `i16`, `i32`, `i64`) and both float precisions are
/// supported. A graph is homogeneous: every node of one graph shares the same
/// `T`, which the type system enforces.
///
/// Graph arithmetic goes through [`wrapped_add`](ScalarValue::wrapped_add)
/// and [`wrapped_mul`](ScalarValue::wrapped_mul): plain IEEE arithmetic for
/// floats, two's-complement wrapping for integers. Transcendental
/// functions (`pow`, `tanh`, `ln`) are evaluated in `f64` through
/// [`to_real`](ScalarValue::to_real) and converted back with
/// [`from_real`](ScalarValue::from_real).
pub trait ScalarValue:
    Signed // Num + Neg, gives zero(), one() and the signed literal -1
    + NumAssignOps
    + NumOps
    + PartialOrd
    + Debug
    + Display
    + Copy
    + 'static
{
    /// Widens the value to `f64`.
    fn to_real(self) -> f64;

    /// Narrows an `f64` back to `Self`.
    ///
    /// Uses Rust's `as` semantics: floats round to nearest, integers
    /// truncate toward zero and saturate at their bounds, NaN becomes `0`.
    fn from_real(value: f64) -> Self;

    /// `self + rhs`, wrapping around at the bounds of integer types.
    fn wrapped_add(self, rhs: Self) -> Self;

    /// `self * rhs`, wrapping around at the bounds of integer types.
    fn wrapped_mul(self, rhs: Self) -> Self;
}

macro_rules! impl_scalar_value_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl ScalarValue for $t {
                #[inline]
                fn to_real(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_real(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn wrapped_add(self, rhs: Self) -> Self {
                    WrappingAdd::wrapping_add(&self, &rhs)
                }

                #[inline]
                fn wrapped_mul(self, rhs: Self) -> Self {
                    WrappingMul::wrapping_mul(&self, &rhs)
                }
            }
        )*
    };
}

macro_rules! impl_scalar_value_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl ScalarValue for $t {
                #[inline]
                fn to_real(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_real(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn wrapped_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn wrapped_mul(self, rhs: Self) -> Self {
                    self * rhs
                }
            }
        )*
    };
}

impl_scalar_value_int!(i8, i16, i32, i64);
impl_scalar_value_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip<T: ScalarValue>(value: f64) -> f64 {
        T::from_real(value).to_real()
    }

    #[test]
    fn test_float_impls() {
        assert_eq!(round_trip::<f64>(0.25), 0.25);
        assert_eq!(round_trip::<f32>(0.5), 0.5);
    }

    #[test]
    fn test_integer_narrowing_truncates_toward_zero() {
        assert_eq!(i8::from_real(-0.7), 0);
        assert_eq!(i16::from_real(2.9), 2);
        assert_eq!(i64::from_real(-3.5), -3);
    }

    #[test]
    fn test_integer_narrowing_saturates() {
        assert_eq!(i8::from_real(1000.0), i8::MAX);
        assert_eq!(i8::from_real(f64::NEG_INFINITY), i8::MIN);
        assert_eq!(i32::from_real(f64::NAN), 0);
    }

    #[test]
    fn test_integer_arithmetic_wraps() {
        assert_eq!(100i8.wrapped_add(100), -56);
        assert_eq!(i8::MIN.wrapped_mul(-1), i8::MIN);
        assert_eq!(i64::MAX.wrapped_add(1), i64::MIN);
    }

    #[test]
    fn test_float_arithmetic_is_plain() {
        assert_eq!(0.5f64.wrapped_add(0.25), 0.75);
        assert_eq!(f32::MAX.wrapped_mul(2.0), f32::INFINITY);
    }
}
