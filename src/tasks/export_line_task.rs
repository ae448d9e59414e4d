use crate::report::LineFormat;
use crate::tasks::{FitTask, Task, TaskError, TaskOutput};
use log::info;
use std::path::PathBuf;

/// Fits like [`FitTask`] and writes the sampled line to a file whose
/// extension selects the format.
#[derive(Debug, Clone)]
pub struct ExportLineTask {
    fit: FitTask,
    output: PathBuf,
    format: LineFormat,
}

impl ExportLineTask {
    pub fn new(fit: FitTask, output: PathBuf) -> Result<Self, TaskError> {
        let format = LineFormat::from_path(&output).ok_or_else(|| {
            TaskError::InvalidSetting(format!(
                "output {} must end in .csv, .tsv or .json",
                output.display()
            ))
        })?;
        Ok(Self {
            fit,
            output,
            format,
        })
    }

    pub fn format(&self) -> LineFormat {
        self.format
    }
}

impl Task for ExportLineTask {
    fn name(&self) -> &'static str {
        "export-line"
    }

    fn run(&self) -> Result<TaskOutput, TaskError> {
        let report = self.fit.report()?;
        report.line.export(&self.output, self.format)?;
        info!(
            "wrote {} line points to {} ({})",
            report.line.len(),
            self.output.display(),
            self.format
        );

        Ok(TaskOutput::LineExported {
            report,
            path: self.output.clone(),
            format: self.format,
        })
    }
}
