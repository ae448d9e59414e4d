use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Context, Result, anyhow, bail};
use std::cell::RefCell;
use std::collections::VecDeque;

/// [`PromptDriver`] that replays canned answers in order.
///
/// An empty answer accepts the prompt's default. Selections are answered by
/// option text. Every prompt title is recorded for later assertions.
#[derive(Default)]
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<String>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedDriver {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, title: &str) -> Result<String> {
        self.asked.borrow_mut().push(title.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted answer left for '{title}'"))
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_select(&self, title: &str, _help: Option<&str>, options: &[String]) -> Result<usize> {
        let answer = self.next(title)?;
        options
            .iter()
            .position(|o| o.starts_with(&answer))
            .ok_or_else(|| anyhow!("'{answer}' matches no option of '{title}'"))
    }

    fn ask_string(&self, title: &str, _help: &str, default: &str) -> Result<String> {
        let answer = self.next(title)?;
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer
        })
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        let answer = self.next(title)?;
        let v = if answer.is_empty() {
            default
        } else {
            answer.parse().with_context(|| format!("bad u64 for {title}"))?
        };
        if min.is_some_and(|lo| v < lo) || max.is_some_and(|hi| v > hi) {
            bail!("{v} out of range for {title}");
        }
        Ok(v)
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        let answer = self.next(title)?;
        let v = if answer.is_empty() {
            default
        } else {
            answer.parse().with_context(|| format!("bad f64 for {title}"))?
        };
        if min.is_some_and(|lo| v < lo) || max.is_some_and(|hi| v > hi) {
            bail!("{v} out of range for {title}");
        }
        Ok(v)
    }
}
