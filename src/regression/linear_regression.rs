use crate::regression::input::{ensure_finite, numeric_sequence};
use crate::regression::{PredictInput, PredictOutput, Predictor, RegressionError, Variable};
use crate::utils::math::{
    max_abs, mean, population_covariance, population_std, population_variance,
};
use serde_json::Value;

const MIN_SAMPLES: usize = 2;

/// Simple (one regressor) least-squares line fitted from paired samples.
///
/// All statistics use the population (divide-by-N) convention and are derived
/// once, at construction, in the order correlation, slope, intercept. A value
/// of this type is always fully fitted: construction either succeeds with all
/// three statistics finite or returns an error.
///
/// ```
/// use linfit::regression::{LinearRegression, Predictor};
///
/// let model = LinearRegression::new(vec![0.0, 1.0, 2.0, 3.0], vec![1.0, 3.0, 5.0, 7.0]).unwrap();
/// assert!((model.slope() - 2.0).abs() < 1e-12);
/// assert!((model.predict_one(4.0) - 9.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression {
    x: Vec<f64>,
    y: Vec<f64>,
    correlation: f64,
    slope: f64,
    intercept: f64,
}

impl LinearRegression {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, RegressionError> {
        validate(&x, &y)?;
        ensure_spread(&x, &y)?;

        let xs = Scaled::new(&x);
        let ys = Scaled::new(&y);

        let correlation = correlation(&xs, &ys)?;
        let slope = slope(correlation, &xs, &ys)?;
        let intercept = intercept(slope, &xs, &ys)?;

        Ok(Self {
            x,
            y,
            correlation,
            slope,
            intercept,
        })
    }

    /// Fits from untyped values, e.g. parsed JSON. Each side must be an array
    /// of numbers, otherwise [`RegressionError::TypeMismatch`].
    pub fn from_values(x: &Value, y: &Value) -> Result<Self, RegressionError> {
        let x = numeric_sequence(x, "x")?;
        let y = numeric_sequence(y, "y")?;
        Self::new(x, y)
    }

    #[inline]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Pearson correlation coefficient `r`.
    #[inline]
    pub fn correlation(&self) -> f64 {
        self.correlation
    }

    #[inline]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    #[inline]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Coefficient of determination; equals `r²` for a single regressor.
    #[inline]
    pub fn r_squared(&self) -> f64 {
        self.correlation * self.correlation
    }

    /// Number of paired samples the model was fitted on.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Never true for a fitted model.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Element-wise prediction shaped like `input`.
    pub fn predict<I: Into<PredictInput>>(&self, input: I) -> PredictOutput {
        match input.into() {
            PredictInput::Scalar(v) => PredictOutput::Scalar(self.predict_one(v)),
            PredictInput::Batch(v) => PredictOutput::Batch(self.predict_many(&v)),
        }
    }

    /// Like [`predict`](Self::predict) for an untyped value: a number or an
    /// array of numbers.
    pub fn predict_value(&self, input: &Value) -> Result<PredictOutput, RegressionError> {
        let input = PredictInput::try_from(input)?;
        Ok(self.predict(input))
    }
}

impl Predictor for LinearRegression {
    #[inline]
    fn predict_one(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Type, length and count checks; nothing is computed until all pass.
fn validate(x: &[f64], y: &[f64]) -> Result<(), RegressionError> {
    ensure_finite(x, "x")?;
    ensure_finite(y, "y")?;

    if x.len() != y.len() {
        return Err(RegressionError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.len() < MIN_SAMPLES {
        return Err(RegressionError::InsufficientData {
            needed: MIN_SAMPLES,
            got: x.len(),
        });
    }
    Ok(())
}

/// Identical values can still give a tiny non-zero variance through rounding
/// of the mean, so constancy is checked on the values themselves.
fn ensure_spread(x: &[f64], y: &[f64]) -> Result<(), RegressionError> {
    if is_constant(x) {
        return Err(RegressionError::DegenerateVariance {
            variable: Variable::X,
        });
    }
    if is_constant(y) {
        return Err(RegressionError::DegenerateVariance {
            variable: Variable::Y,
        });
    }
    Ok(())
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

/// Samples divided by their largest magnitude, so every value lies in
/// `[-1, 1]` and the moment sums cannot overflow. `scale` restores the
/// original units.
struct Scaled {
    values: Vec<f64>,
    scale: f64,
}

impl Scaled {
    fn new(values: &[f64]) -> Self {
        let scale = max_abs(values);
        if scale == 0.0 {
            return Self {
                values: values.to_vec(),
                scale: 1.0,
            };
        }
        Self {
            values: values.iter().map(|v| v / scale).collect(),
            scale,
        }
    }

    fn mean(&self) -> f64 {
        mean(&self.values) * self.scale
    }
}

/// Scale-invariant, so computed on the scaled samples directly.
fn correlation(x: &Scaled, y: &Scaled) -> Result<f64, RegressionError> {
    let var_x = population_variance(&x.values);
    let var_y = population_variance(&y.values);

    if var_x == 0.0 {
        return Err(RegressionError::DegenerateVariance {
            variable: Variable::X,
        });
    }
    if var_y == 0.0 {
        return Err(RegressionError::DegenerateVariance {
            variable: Variable::Y,
        });
    }

    // Both variances can be positive while their product underflows.
    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 {
        let variable = if var_x <= var_y { Variable::X } else { Variable::Y };
        return Err(RegressionError::DegenerateVariance { variable });
    }

    Ok(population_covariance(&x.values, &y.values) / denominator)
}

/// A slope or intercept outside the `f64` range means the spread of x is too
/// narrow relative to y for the line to be represented.
fn slope(correlation: f64, x: &Scaled, y: &Scaled) -> Result<f64, RegressionError> {
    let spread_y = population_std(&y.values) * y.scale;
    let spread_x = population_std(&x.values) * x.scale;
    finite(correlation * spread_y / spread_x)
}

fn intercept(slope: f64, x: &Scaled, y: &Scaled) -> Result<f64, RegressionError> {
    finite(y.mean() - slope * x.mean())
}

fn finite(value: f64) -> Result<f64, RegressionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RegressionError::DegenerateVariance {
            variable: Variable::X,
        })
    }
}
