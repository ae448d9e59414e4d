use anyhow::{Context, Result, anyhow};
use serde_json::{Map, Value};
use std::path::Path;
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{FieldKind, FieldSpec, FileConstraint, UIChoice, specs_for_kind};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

fn kind_labels<K>() -> Vec<(K, String)>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let text = match k.get_detailed_message() {
                Some(desc) if !desc.is_empty() => format!("{label}  {DIM_ITALIC}{desc}{RESET}"),
                _ => label.to_string(),
            };
            (k, text)
        })
        .collect()
}

/// Asks for a variant of `C`, then for each of its schema fields.
pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D) -> Result<C> {
    let (kinds, labels): (Vec<C::Kind>, Vec<String>) = kind_labels::<C::Kind>().into_iter().unzip();

    let idx = driver.ask_select(C::prompt_label(), C::prompt_help(), &labels)?;
    let kind = *kinds
        .get(idx)
        .ok_or_else(|| anyhow!("selection {idx} out of range"))?;

    let key: &'static str = kind.into();
    let specs = specs_for_kind(&C::schema(), key)?;
    let defaults = C::default_params(kind);

    let mut params = Map::new();
    for s in &specs {
        let init = s.default.clone().or_else(|| defaults.get(&s.name).cloned());
        params.insert(s.name.clone(), prompt_field(driver, s, init)?);
    }

    C::from_parts(kind, Value::Object(params)).with_context(|| format!("invalid parameters for {key}"))
}

fn prompt_field<D: PromptDriver>(driver: &D, s: &FieldSpec, init: Option<Value>) -> Result<Value> {
    let help = s.description.as_deref().unwrap_or("");

    Ok(match s.kind {
        FieldKind::String => {
            let def = init
                .as_ref()
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let answered = match &s.file {
                Some(file) => prompt_until_ok(driver, &s.title, help, &def, |a| {
                    validate_path_str(a, file)
                })?
                .trim()
                .to_string(),
                None => prompt_until_ok(driver, &s.title, help, &def, |a| {
                    validate_length(a, s.min_length, s.max_length)
                })?,
            };
            Value::String(answered)
        }
        FieldKind::Integer => {
            let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
            Value::from(driver.ask_u64(
                &s.title,
                help,
                def,
                s.min.map(|x| x as u64),
                s.max.map(|x| x as u64),
            )?)
        }
        FieldKind::Number => {
            let def = init.and_then(|v| v.as_f64()).unwrap_or(0.0);
            Value::from(driver.ask_f64(&s.title, help, def, s.min, s.max)?)
        }
    })
}

fn validate_path_str(input: &str, constraint: &FileConstraint) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Path cannot be empty".into());
    }
    let p = Path::new(trimmed);

    if constraint.must_exist && !p.exists() {
        return Err(format!("Path does not exist: {}", p.display()));
    }
    if p.exists() && !p.is_file() {
        return Err("Expected a file path, not a directory".into());
    }
    if !constraint.extensions.is_empty() {
        match p.extension().and_then(|e| e.to_str()) {
            Some(ext) if constraint.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)) => {}
            _ => {
                return Err(format!(
                    "Expected a .{} file",
                    constraint.extensions.join(" / .")
                ));
            }
        }
    }
    Ok(())
}

/// Checks `minLength`/`maxLength` in characters, not bytes.
fn validate_length(input: &str, min: Option<u64>, max: Option<u64>) -> Result<(), String> {
    let len = input.chars().count() as u64;
    match (min, max) {
        (Some(lo), Some(hi)) if lo == hi && len != lo => {
            Err(format!("Expected exactly {lo} character(s)"))
        }
        (Some(lo), _) if len < lo => Err(format!("Expected at least {lo} character(s)")),
        (_, Some(hi)) if len > hi => Err(format!("Expected at most {hi} character(s)")),
        _ => Ok(()),
    }
}

fn prompt_until_ok<D, F>(driver: &D, title: &str, help: &str, default: &str, validate: F) -> Result<String>
where
    D: PromptDriver,
    F: Fn(&str) -> Result<(), String>,
{
    loop {
        let answer = driver.ask_string(title, help, default)?;
        match validate(&answer) {
            Ok(()) => return Ok(answer),
            Err(msg) => {
                eprintln!("✗ {}", msg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::write_dataset;
    use crate::testing::stubs::ScriptedDriver;
    use crate::ui::types::choices::TaskChoice;

    fn csv_only(must_exist: bool) -> FileConstraint {
        FileConstraint {
            must_exist,
            extensions: vec!["csv".into()],
        }
    }

    #[test]
    fn path_validation() {
        let (_dir, path) = write_dataset("1;2\n");
        let path = path.to_string_lossy().into_owned();

        assert!(validate_path_str(&path, &csv_only(true)).is_ok());
        assert!(validate_path_str("  ", &csv_only(false)).is_err());
        assert!(validate_path_str("missing.csv", &csv_only(true)).is_err());
        assert!(validate_path_str("new.csv", &csv_only(false)).is_ok());
        assert!(validate_path_str("new.CSV", &csv_only(false)).is_ok());
        assert_eq!(
            validate_path_str("new.png", &csv_only(false)).unwrap_err(),
            "Expected a .csv file"
        );
    }

    #[test]
    fn directories_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let constraint = FileConstraint::default();
        let err = validate_path_str(&dir.path().to_string_lossy(), &constraint).unwrap_err();
        assert!(err.contains("directory"));
    }

    #[test]
    fn fit_wizard_builds_choice() {
        let (_dir, path) = write_dataset("0;1\n1;3\n");
        let path_str = path.to_string_lossy().into_owned();
        let driver = ScriptedDriver::new(["Fit and Predict", path_str.as_str(), "", "4.5", ""]);

        let choice: TaskChoice = prompt_choice(&driver).unwrap();
        match choice {
            TaskChoice::FitAndPredict(p) => {
                assert_eq!(p.path, path);
                assert_eq!(p.delimiter, ';');
                assert_eq!(p.x_new, 4.5);
                assert_eq!(p.line_points, 100);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(driver.remaining(), 0);
        assert_eq!(
            driver.asked(),
            [
                "Choose a task:",
                "Dataset Path",
                "Delimiter",
                "Independent Variable",
                "Line Points"
            ]
        );
    }

    #[test]
    fn reprompts_until_path_is_valid() {
        let (_dir, path) = write_dataset("0;1\n1;3\n");
        let path_str = path.to_string_lossy().into_owned();
        let driver = ScriptedDriver::new([
            "Fit and Predict",
            "does-not-exist.csv",
            "",
            path_str.as_str(),
            ",",
            "1",
            "10",
        ]);

        let choice: TaskChoice = prompt_choice(&driver).unwrap();
        let p = choice.fit_parameters();
        assert_eq!(p.path, path);
        assert_eq!(p.delimiter, ',');
        assert_eq!(p.line_points, 10);
    }

    #[test]
    fn export_wizard_asks_for_output() {
        let (dir, path) = write_dataset("0;1\n1;3\n");
        let path_str = path.to_string_lossy().into_owned();
        let out = dir.path().join("line.json");
        let out_str = out.to_string_lossy().into_owned();
        let driver =
            ScriptedDriver::new(["Export", path_str.as_str(), "", "2", "", "line.svg", out_str.as_str()]);

        let choice: TaskChoice = prompt_choice(&driver).unwrap();
        match choice {
            TaskChoice::ExportLine(p) => assert_eq!(p.output, out),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn length_validation_counts_characters() {
        assert!(validate_length(";", Some(1), Some(1)).is_ok());
        assert!(validate_length("é", Some(1), Some(1)).is_ok());
        assert_eq!(
            validate_length(";;", Some(1), Some(1)).unwrap_err(),
            "Expected exactly 1 character(s)"
        );
        assert!(validate_length("", Some(1), None).is_err());
        assert!(validate_length("abc", None, Some(2)).is_err());
        assert!(validate_length("anything", None, None).is_ok());
    }

    #[test]
    fn reprompts_until_delimiter_is_one_character() {
        let (_dir, path) = write_dataset("0;1\n1;3\n");
        let path_str = path.to_string_lossy().into_owned();
        let driver =
            ScriptedDriver::new(["Fit and Predict", path_str.as_str(), ";;", "\t", "1", ""]);

        let choice: TaskChoice = prompt_choice(&driver).unwrap();
        assert_eq!(choice.fit_parameters().delimiter, '\t');
        assert_eq!(driver.remaining(), 0);
        assert_eq!(
            driver.asked(),
            [
                "Choose a task:",
                "Dataset Path",
                "Delimiter",
                "Delimiter",
                "Independent Variable",
                "Line Points"
            ]
        );
    }

    #[test]
    fn dataset_path_accepts_any_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.dat");
        std::fs::write(&path, "0;1\n1;3\n").unwrap();
        let path_str = path.to_string_lossy().into_owned();
        let driver = ScriptedDriver::new(["Fit and Predict", path_str.as_str(), "", "1", ""]);

        let choice: TaskChoice = prompt_choice(&driver).unwrap();
        assert_eq!(choice.fit_parameters().path, path);
    }
}
