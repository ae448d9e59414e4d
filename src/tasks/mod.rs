mod error;
mod export_line_task;
mod fit_task;
mod task;

pub use error::TaskError;
pub use export_line_task::ExportLineTask;
pub use fit_task::FitTask;
pub use task::{Task, TaskOutput};
