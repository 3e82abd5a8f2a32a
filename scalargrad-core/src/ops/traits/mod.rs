pub mod numeric;

pub use numeric::ScalarValue;
