// src/scalar/traits.rs

use std::ops::{Add, Div, Mul, Neg, Sub};
use std::rc::Rc;

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;

impl<T: ScalarValue> Clone for Scalar<T> {
    /// Shallow clone: the new handle points at the same graph node.
    fn clone(&self) -> Self {
        Scalar {
            data: Rc::clone(&self.data),
        }
    }
}

// `a + b`, `&a + &b` and the mixed forms all build a new node through the
// matching `*_op` function.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<T: ScalarValue> $trait<&Scalar<T>> for &Scalar<T> {
            type Output = Scalar<T>;

            fn $method(self, rhs: &Scalar<T>) -> Scalar<T> {
                $op_fn(self, rhs)
            }
        }

        impl<T: ScalarValue> $trait<Scalar<T>> for Scalar<T> {
            type Output = Scalar<T>;

            fn $method(self, rhs: Scalar<T>) -> Scalar<T> {
                $op_fn(&self, &rhs)
            }
        }

        impl<T: ScalarValue> $trait<&Scalar<T>> for Scalar<T> {
            type Output = Scalar<T>;

            fn $method(self, rhs: &Scalar<T>) -> Scalar<T> {
                $op_fn(&self, rhs)
            }
        }

        impl<T: ScalarValue> $trait<Scalar<T>> for &Scalar<T> {
            type Output = Scalar<T>;

            fn $method(self, rhs: Scalar<T>) -> Scalar<T> {
                $op_fn(self, &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl<T: ScalarValue> Neg for &Scalar<T> {
    type Output = Scalar<T>;

    fn neg(self) -> Scalar<T> {
        neg_op(self)
    }
}

impl<T: ScalarValue> Neg for Scalar<T> {
    type Output = Scalar<T>;

    fn neg(self) -> Scalar<T> {
        neg_op(&self)
    }
}
