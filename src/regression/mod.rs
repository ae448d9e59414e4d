mod error;
mod input;
mod linear_regression;
mod predictor;

pub use error::{RegressionError, Variable};
pub use input::{PredictInput, PredictOutput};
pub use linear_regression::LinearRegression;
pub use predictor::Predictor;
