/// A fitted model mapping one input value to one output value.
///
/// Implementations must be pure: the same input always yields the same output.
pub trait Predictor {
    /// Predicts the output for a single input.
    fn predict_one(&self, x: f64) -> f64;

    /// Element-wise [`predict_one`](Self::predict_one) over `xs`.
    fn predict_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.predict_one(x)).collect()
    }
}
