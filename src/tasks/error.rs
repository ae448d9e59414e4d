use crate::dataset::DatasetError;
use crate::regression::RegressionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("invalid task setting: {0}")]
    InvalidSetting(String),

    #[error("cannot read dataset: {0}")]
    Dataset(#[from] DatasetError),

    #[error("cannot fit model: {0}")]
    Regression(#[from] RegressionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
