use crate::dataset::DelimitedReader;
use crate::tasks::{ExportLineTask, FitTask, Task};
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::{ExportLineParameters, FitParameters, TaskChoice};

/// Characters that cannot separate fields: they are stripped or quote fields.
const RESERVED_DELIMITERS: [char; 4] = ['"', '\'', '\n', '\r'];

impl TryFrom<FitParameters> for FitTask {
    type Error = BuildError;

    fn try_from(p: FitParameters) -> Result<Self, Self::Error> {
        if RESERVED_DELIMITERS.contains(&p.delimiter) {
            return Err(BuildError::InvalidParameter(format!(
                "{:?} cannot be used as a delimiter",
                p.delimiter
            )));
        }
        let line_points = usize::try_from(p.line_points).map_err(|_| {
            BuildError::InvalidParameter(format!("line_points {} is too large", p.line_points))
        })?;

        Ok(FitTask::new(
            p.path,
            DelimitedReader::new(p.delimiter),
            p.x_new,
            line_points,
        )?)
    }
}

impl TryFrom<ExportLineParameters> for ExportLineTask {
    type Error = BuildError;

    fn try_from(p: ExportLineParameters) -> Result<Self, Self::Error> {
        let fit = FitTask::try_from(p.fit_parameters())?;
        Ok(ExportLineTask::new(fit, p.output)?)
    }
}

pub fn build_task(choice: TaskChoice) -> Result<Box<dyn Task>, BuildError> {
    match choice {
        TaskChoice::FitAndPredict(p) => {
            let t = FitTask::try_from(p)?;
            Ok(Box::new(t))
        }
        TaskChoice::ExportLine(p) => {
            let t = ExportLineTask::try_from(p)?;
            Ok(Box::new(t))
        }
    }
}
