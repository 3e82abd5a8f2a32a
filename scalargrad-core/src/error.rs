use thiserror::Error;

/// Error type for the configuration boundary of scalargrad.
///
/// Graph operations themselves never fail: numeric domain violations
/// propagate as NaN/infinity. Errors only come from building or strictly
/// applying neural modules.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Unknown non-linearity '{0}': expected one of tanh, relu, identity")]
    UnknownNonLinearity(String),

    #[error("Cannot build an MLP without any layer")]
    EmptyArchitecture,

    #[error("Layer {layer} was requested with zero neurons")]
    ZeroWidth { layer: usize },

    #[error("Input size mismatch: expected {expected} inputs, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },
}
