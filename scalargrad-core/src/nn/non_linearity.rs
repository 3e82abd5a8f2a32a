use std::fmt;
use std::str::FromStr;

use crate::error::ScalarGradError;
use crate::ops::traits::ScalarValue;
use crate::scalar::Scalar;

/// Activation applied by a neuron after its weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NonLinearity {
    Tanh,
    Relu,
    /// Pass-through: the weighted sum is the output.
    #[default]
    Identity,
}

impl NonLinearity {
    /// Applies the activation to `x`. `Identity` returns a handle to `x`
    /// itself, adding no node to the graph.
    pub fn activate<T: ScalarValue>(&self, x: &Scalar<T>) -> Scalar<T> {
        match self {
            NonLinearity::Tanh => x.tanh(),
            NonLinearity::Relu => x.relu(),
            NonLinearity::Identity => x.clone(),
        }
    }
}

impl FromStr for NonLinearity {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tanh" => Ok(NonLinearity::Tanh),
            "relu" => Ok(NonLinearity::Relu),
            "" | "none" | "linear" | "identity" => Ok(NonLinearity::Identity),
            _ => Err(ScalarGradError::UnknownNonLinearity(s.to_string())),
        }
    }
}

impl fmt::Display for NonLinearity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NonLinearity::Tanh => "tanh",
            NonLinearity::Relu => "relu",
            NonLinearity::Identity => "identity",
        };
        f.write_str(name)
    }
}
