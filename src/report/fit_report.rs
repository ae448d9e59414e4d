use crate::regression::{LinearRegression, Predictor};
use crate::report::FittedLine;
use crate::utils::math::min_max;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// Everything a run produces: the data, the fitted statistics, one prediction
/// and the sampled line for plotting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitReport {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub correlation: f64,
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub x_new: f64,
    pub prediction: f64,
    pub line: FittedLine,
}

impl FitReport {
    /// Builds the report for `model`, predicting at `x_new` and sampling the
    /// line at `line_points` points over the observed x range.
    pub fn new(model: &LinearRegression, x_new: f64, line_points: usize) -> Self {
        let line = match min_max(model.x()) {
            Some((lo, hi)) => FittedLine::sample(model, lo, hi, line_points),
            None => FittedLine::default(),
        };

        Self {
            x: model.x().to_vec(),
            y: model.y().to_vec(),
            correlation: model.correlation(),
            slope: model.slope(),
            intercept: model.intercept(),
            r_squared: model.r_squared(),
            x_new,
            prediction: model.predict_one(x_new),
            line,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Display for FitReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "X values: {:?}", self.x)?;
        writeln!(f, "Y values: {:?}", self.y)?;
        writeln!(f, "Correlation coefficient: {:.4}", self.correlation)?;
        writeln!(f, "Slope: {:.4}", self.slope)?;
        writeln!(f, "Intercept: {:.4}", self.intercept)?;
        write!(f, "Prediction for x = {}: {:.4}", self.x_new, self.prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> FitReport {
        let m = LinearRegression::new(vec![0.0, 1.0, 2.0, 3.0], vec![1.0, 3.0, 5.0, 7.0]).unwrap();
        FitReport::new(&m, 4.0, 10)
    }

    #[test]
    fn carries_statistics_and_prediction() {
        let r = report();
        assert!((r.slope - 2.0).abs() < 1e-9);
        assert!((r.prediction - 9.0).abs() < 1e-9);
        assert_eq!(r.line.len(), 10);
        assert_eq!(r.line.points()[0].x, 0.0);
        assert_eq!(r.line.points()[9].x, 3.0);
    }

    #[test]
    fn text_uses_four_decimals() {
        let text = report().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "X values: [0.0, 1.0, 2.0, 3.0]");
        assert_eq!(lines[2], "Correlation coefficient: 1.0000");
        assert_eq!(lines[3], "Slope: 2.0000");
        assert_eq!(lines[4], "Intercept: 1.0000");
        assert_eq!(lines[5], "Prediction for x = 4: 9.0000");
    }

    #[test]
    fn json_contains_line_as_array() {
        let v: serde_json::Value = serde_json::from_str(&report().to_json().unwrap()).unwrap();
        assert_eq!(v["line"].as_array().map(Vec::len), Some(10));
        assert_eq!(v["x_new"], serde_json::json!(4.0));
    }
}
