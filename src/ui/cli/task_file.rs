use crate::ui::types::choices::TaskChoice;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads a task previously saved with [`save_task`] (or written by hand).
pub fn load_task<P: AsRef<Path>>(path: P) -> Result<TaskChoice> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read task file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid task file {}", path.display()))
}

pub fn save_task<P: AsRef<Path>>(choice: &TaskChoice, path: P) -> Result<()> {
    let path = path.as_ref();
    let text = serde_json::to_string_pretty(choice)?;
    fs::write(path, text).with_context(|| format!("cannot write task file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::FitParameters;

    #[test]
    fn saved_task_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("task.json");
        let choice = TaskChoice::FitAndPredict(FitParameters {
            path: "data.csv".into(),
            x_new: -2.5,
            ..FitParameters::default()
        });

        save_task(&choice, &path).unwrap();
        assert_eq!(load_task(&path).unwrap(), choice);
    }

    #[test]
    fn hand_written_task_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("task.json");
        fs::write(
            &path,
            r#"{"type": "fit-and-predict", "params": {"path": "d.txt", "x_new": 3}}"#,
        )
        .unwrap();

        let p = load_task(&path).unwrap().fit_parameters();
        assert_eq!(p.delimiter, ';');
        assert_eq!(p.x_new, 3.0);
    }

    #[test]
    fn errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("task.json");
        fs::write(&path, "{}").unwrap();
        let err = load_task(&path).unwrap_err();
        assert!(format!("{err}").contains("task.json"));

        assert!(load_task(dir.path().join("missing.json")).is_err());
    }
}
