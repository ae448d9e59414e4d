use crate::report::{FitReport, LineFormat};
use crate::tasks::TaskError;
use std::path::PathBuf;

/// What a finished task hands back to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskOutput {
    Report(FitReport),
    LineExported {
        report: FitReport,
        path: PathBuf,
        format: LineFormat,
    },
}

impl TaskOutput {
    pub fn report(&self) -> &FitReport {
        match self {
            TaskOutput::Report(r) => r,
            TaskOutput::LineExported { report, .. } => report,
        }
    }
}

/// A runnable unit of work built from a user's choices.
pub trait Task {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn run(&self) -> Result<TaskOutput, TaskError>;
}
