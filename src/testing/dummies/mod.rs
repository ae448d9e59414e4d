pub mod datasets;

pub use datasets::{noisy_line, write_dataset};
