use crate::dataset::DEFAULT_DELIMITER;
use crate::report::DEFAULT_LINE_POINTS;
use crate::ui::types::choices::UIChoice;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::path::PathBuf;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

fn default_line_points() -> u64 {
    DEFAULT_LINE_POINTS as u64
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FitParameters {
    #[schemars(
        with = "String",
        title = "Dataset Path",
        description = "Two columns (x and y) per line, separated by the delimiter, no header",
        extend("x-file" = true, "x-must-exist" = true)
    )]
    pub path: PathBuf,

    #[serde(default = "default_delimiter")]
    #[schemars(
        title = "Delimiter",
        description = "Single character separating x from y",
        length(min = 1, max = 1)
    )]
    pub delimiter: char,

    #[schemars(
        title = "Independent Variable",
        description = "Value of x to predict y for"
    )]
    pub x_new: f64,

    #[serde(default = "default_line_points")]
    #[schemars(
        title = "Line Points",
        description = "Samples of the fitted line over the observed x range",
        range(min = 2)
    )]
    pub line_points: u64,
}

impl Default for FitParameters {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            delimiter: default_delimiter(),
            x_new: 0.0,
            line_points: default_line_points(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExportLineParameters {
    #[schemars(
        with = "String",
        title = "Dataset Path",
        description = "Two columns (x and y) per line, separated by the delimiter, no header",
        extend("x-file" = true, "x-must-exist" = true)
    )]
    pub path: PathBuf,

    #[serde(default = "default_delimiter")]
    #[schemars(
        title = "Delimiter",
        description = "Single character separating x from y",
        length(min = 1, max = 1)
    )]
    pub delimiter: char,

    #[schemars(
        title = "Independent Variable",
        description = "Value of x to predict y for"
    )]
    pub x_new: f64,

    #[serde(default = "default_line_points")]
    #[schemars(
        title = "Line Points",
        description = "Samples of the fitted line over the observed x range",
        range(min = 2)
    )]
    pub line_points: u64,

    #[schemars(
        with = "String",
        title = "Output Path",
        description = "Where to write the fitted line; the extension picks the format",
        extend(
            "x-file" = true,
            "x-must-exist" = false,
            "x-extensions" = ["csv", "tsv", "json"]
        )
    )]
    pub output: PathBuf,
}

impl ExportLineParameters {
    pub fn fit_parameters(&self) -> FitParameters {
        FitParameters {
            path: self.path.clone(),
            delimiter: self.delimiter,
            x_new: self.x_new,
            line_points: self.line_points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(TaskKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum TaskChoice {
    #[strum_discriminants(strum(
        message = "Fit and Predict",
        detailed_message = "Fit a line to a dataset and predict y for a new x."
    ))]
    FitAndPredict(FitParameters),

    #[strum_discriminants(strum(
        message = "Export Fitted Line",
        detailed_message = "Fit, predict and write the sampled line to CSV, TSV or JSON."
    ))]
    ExportLine(ExportLineParameters),
}

impl TaskChoice {
    pub fn fit_parameters(&self) -> FitParameters {
        match self {
            TaskChoice::FitAndPredict(p) => p.clone(),
            TaskChoice::ExportLine(p) => p.fit_parameters(),
        }
    }
}

impl UIChoice for TaskChoice {
    type Kind = TaskKind;

    fn schema() -> Schema {
        schema_for!(TaskChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a task:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        let fit = json!({
            "path": "",
            "delimiter": DEFAULT_DELIMITER.to_string(),
            "x_new": 0.0,
            "line_points": DEFAULT_LINE_POINTS,
        });
        match kind {
            TaskKind::FitAndPredict => fit,
            TaskKind::ExportLine => {
                let mut params = fit;
                params["output"] = json!("line.csv");
                params
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn serialises_as_tagged_params() {
        let choice = TaskChoice::FitAndPredict(FitParameters {
            path: "data.csv".into(),
            x_new: 4.0,
            ..FitParameters::default()
        });
        let v = serde_json::to_value(&choice).unwrap();
        assert_eq!(v["type"], "fit-and-predict");
        assert_eq!(v["params"]["delimiter"], ";");
        assert_eq!(v["params"]["line_points"], 100);

        let back: TaskChoice = serde_json::from_value(v).unwrap();
        assert_eq!(back, choice);
    }

    #[test]
    fn export_params_fill_defaults() {
        let v = json!({
            "type": "export-line",
            "params": { "path": "d.csv", "x_new": 1.5, "output": "out.json" }
        });
        let choice: TaskChoice = serde_json::from_value(v).unwrap();
        match &choice {
            TaskChoice::ExportLine(p) => {
                assert_eq!(p.output, PathBuf::from("out.json"));
                assert_eq!(p.delimiter, ';');
                assert_eq!(p.line_points, 100);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(choice.fit_parameters().x_new, 1.5);
    }

    #[test]
    fn defaults_build_each_kind() {
        for kind in TaskKind::iter() {
            let mut params = TaskChoice::default_params(kind);
            params["path"] = json!("d.csv");
            let choice = TaskChoice::from_parts(kind, params).unwrap();
            assert_eq!(choice.fit_parameters().path, PathBuf::from("d.csv"));
        }
    }

    #[test]
    fn kind_keys_are_kebab_case() {
        let keys: Vec<&'static str> = TaskKind::iter().map(Into::into).collect();
        assert_eq!(keys, ["fit-and-predict", "export-line"]);
    }
}
