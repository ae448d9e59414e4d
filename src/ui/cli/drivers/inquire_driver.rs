use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Context, Result};
use inquire::validator::Validation;
use inquire::{CustomType, Select, Text};
use std::fmt::Display;

pub struct InquireDriver;

/// Builds the "out of range" message for an optional `[min, max]`, or `None`
/// when `x` is inside it.
fn range_violation<T: PartialOrd + Display>(x: &T, min: Option<T>, max: Option<T>) -> Option<String> {
    match (min, max) {
        (Some(lo), Some(hi)) if *x < lo || *x > hi => Some(format!("Must be between {lo} and {hi}")),
        (Some(lo), None) if *x < lo => Some(format!("Must be ≥ {lo}")),
        (None, Some(hi)) if *x > hi => Some(format!("Must be ≤ {hi}")),
        _ => None,
    }
}

impl PromptDriver for InquireDriver {
    fn ask_select(&self, title: &str, help: Option<&str>, options: &[String]) -> Result<usize> {
        let mut select = Select::new(title, options.to_vec());
        if let Some(help) = help {
            select = select.with_help_message(help);
        }
        let raw = select.raw_prompt()?;
        Ok(raw.index)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        CustomType::<u64>::new(title)
            .with_default(default)
            .with_help_message(help)
            .with_validator(move |x: &u64| {
                Ok(match range_violation(x, min, max) {
                    Some(msg) => Validation::Invalid(msg.into()),
                    None => Validation::Valid,
                })
            })
            .prompt()
            .with_context(|| format!("reading {title}"))
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        CustomType::<f64>::new(title)
            .with_default(default)
            .with_help_message(help)
            .with_validator(move |x: &f64| {
                Ok(match range_violation(x, min, max) {
                    Some(msg) => Validation::Invalid(msg.into()),
                    None => Validation::Valid,
                })
            })
            .prompt()
            .with_context(|| format!("reading {title}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_messages() {
        assert_eq!(range_violation(&5u64, Some(1), Some(10)), None);
        assert_eq!(
            range_violation(&0u64, Some(1), Some(10)).as_deref(),
            Some("Must be between 1 and 10")
        );
        assert_eq!(
            range_violation(&1u64, Some(2), None).as_deref(),
            Some("Must be ≥ 2")
        );
        assert_eq!(
            range_violation(&2.5f64, None, Some(2.0)).as_deref(),
            Some("Must be ≤ 2")
        );
        assert_eq!(range_violation(&2.5f64, None, None), None);
    }
}
