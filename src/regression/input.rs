use crate::regression::RegressionError;
use serde::Serialize;
use serde_json::Value;

/// Argument of [`LinearRegression::predict`](crate::regression::LinearRegression::predict):
/// one value, or a batch evaluated element-wise.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictInput {
    Scalar(f64),
    Batch(Vec<f64>),
}

/// Result of a prediction, shaped like the input that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PredictOutput {
    Scalar(f64),
    Batch(Vec<f64>),
}

impl PredictOutput {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            PredictOutput::Scalar(v) => Some(*v),
            PredictOutput::Batch(_) => None,
        }
    }

    pub fn as_batch(&self) -> Option<&[f64]> {
        match self {
            PredictOutput::Scalar(_) => None,
            PredictOutput::Batch(v) => Some(v),
        }
    }
}

impl From<f64> for PredictInput {
    fn from(v: f64) -> Self {
        PredictInput::Scalar(v)
    }
}

impl From<Vec<f64>> for PredictInput {
    fn from(v: Vec<f64>) -> Self {
        PredictInput::Batch(v)
    }
}

impl From<&[f64]> for PredictInput {
    fn from(v: &[f64]) -> Self {
        PredictInput::Batch(v.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for PredictInput {
    fn from(v: [f64; N]) -> Self {
        PredictInput::Batch(v.to_vec())
    }
}

impl TryFrom<&Value> for PredictInput {
    type Error = RegressionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(_) => Ok(PredictInput::Scalar(number(value, "x_new")?)),
            Value::Array(_) => Ok(PredictInput::Batch(numeric_sequence(value, "x_new")?)),
            other => Err(RegressionError::TypeMismatch {
                argument: "x_new",
                expected: "a number or a numeric sequence",
                found: describe(other).to_string(),
            }),
        }
    }
}

/// Reads a JSON array whose every element is a number.
pub(crate) fn numeric_sequence(
    value: &Value,
    argument: &'static str,
) -> Result<Vec<f64>, RegressionError> {
    let Some(items) = value.as_array() else {
        return Err(RegressionError::TypeMismatch {
            argument,
            expected: "a numeric sequence",
            found: describe(value).to_string(),
        });
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_f64().ok_or_else(|| RegressionError::TypeMismatch {
                argument,
                expected: "a numeric sequence",
                found: format!("{} at index {i}", describe(item)),
            })
        })
        .collect()
}

fn number(value: &Value, argument: &'static str) -> Result<f64, RegressionError> {
    value.as_f64().ok_or_else(|| RegressionError::TypeMismatch {
        argument,
        expected: "a number",
        found: describe(value).to_string(),
    })
}

/// Rejects NaN and infinities: they are floats but not real numbers.
pub(crate) fn ensure_finite(values: &[f64], argument: &'static str) -> Result<(), RegressionError> {
    match values.iter().position(|v| !v.is_finite()) {
        None => Ok(()),
        Some(i) => Err(RegressionError::TypeMismatch {
            argument,
            expected: "finite real numbers",
            found: format!("{} at index {i}", values[i]),
        }),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
