use crate::dataset::DelimitedReader;
use crate::regression::LinearRegression;
use crate::report::FitReport;
use crate::tasks::{Task, TaskError, TaskOutput};
use log::{debug, error, info};
use std::path::{Path, PathBuf};

/// Reads a dataset, fits the line and predicts one new value.
#[derive(Debug, Clone)]
pub struct FitTask {
    dataset: PathBuf,
    reader: DelimitedReader,
    x_new: f64,
    line_points: usize,
}

impl FitTask {
    pub fn new(
        dataset: PathBuf,
        reader: DelimitedReader,
        x_new: f64,
        line_points: usize,
    ) -> Result<Self, TaskError> {
        if !x_new.is_finite() {
            return Err(TaskError::InvalidSetting(format!(
                "x_new must be a finite number, got {x_new}"
            )));
        }
        if line_points < 2 {
            return Err(TaskError::InvalidSetting(
                "line_points must be >= 2".to_string(),
            ));
        }

        Ok(Self {
            dataset,
            reader,
            x_new,
            line_points,
        })
    }

    pub fn dataset(&self) -> &Path {
        &self.dataset
    }

    pub fn x_new(&self) -> f64 {
        self.x_new
    }

    pub fn line_points(&self) -> usize {
        self.line_points
    }

    /// Loads the dataset and fits it.
    pub fn fit(&self) -> Result<LinearRegression, TaskError> {
        info!("reading dataset {}", self.dataset.display());
        let samples = self.reader.read_path(&self.dataset).inspect_err(|e| {
            error!("failed to read {}: {e}", self.dataset.display());
        })?;
        info!("read {} paired samples", samples.len());

        let (x, y) = samples.into_columns();
        let model = LinearRegression::new(x, y).inspect_err(|e| error!("fit failed: {e}"))?;
        debug!(
            "r = {}, slope = {}, intercept = {}",
            model.correlation(),
            model.slope(),
            model.intercept()
        );
        info!("model fitted");
        Ok(model)
    }

    pub(crate) fn report(&self) -> Result<FitReport, TaskError> {
        let model = self.fit()?;
        let report = FitReport::new(&model, self.x_new, self.line_points);
        info!("prediction for x = {}: {}", report.x_new, report.prediction);
        Ok(report)
    }
}

impl Task for FitTask {
    fn name(&self) -> &'static str {
        "fit"
    }

    fn run(&self) -> Result<TaskOutput, TaskError> {
        Ok(TaskOutput::Report(self.report()?))
    }
}
