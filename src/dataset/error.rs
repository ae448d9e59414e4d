use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("dataset {} has no records", .path.display())]
    Empty { path: PathBuf },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}
