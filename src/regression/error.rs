use strum_macros::Display;
use thiserror::Error;

/// Which side of the sample pair a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Variable {
    X,
    Y,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegressionError {
    #[error("type mismatch for {argument}: expected {expected}, found {found}")]
    TypeMismatch {
        argument: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("length mismatch: x has {x_len} values but y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("insufficient data: need at least {needed} paired samples, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("variance of {variable} is zero; correlation is undefined")]
    DegenerateVariance { variable: Variable },
}
