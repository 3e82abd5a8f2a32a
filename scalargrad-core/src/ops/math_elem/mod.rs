// src/ops/math_elem/mod.rs

//! Element-wise math functions.

pub mod ln;

pub use ln::ln_op;
