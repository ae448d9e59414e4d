mod delimited;
mod error;

pub use delimited::{DEFAULT_DELIMITER, DelimitedReader, PairedSamples};
pub use error::DatasetError;
