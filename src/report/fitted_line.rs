use crate::regression::Predictor;
use crate::utils::math::linspace;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Error, ErrorKind, Write};
use std::path::Path;
use strum_macros::{Display, EnumString};

pub const DEFAULT_LINE_POINTS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LineFormat {
    Csv,
    Tsv,
    Json,
}

impl LineFormat {
    /// Format implied by the file extension, e.g. `line.tsv`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|e| e.parse().ok())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
}

/// Evenly spaced samples of a fitted model, ready to be drawn by a plotting
/// tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FittedLine {
    points: Vec<LinePoint>,
}

impl FittedLine {
    /// Samples `predictor` at `n` points over `[start, end]`.
    pub fn sample<P: Predictor + ?Sized>(predictor: &P, start: f64, end: f64, n: usize) -> Self {
        let xs = linspace(start, end, n);
        let ys = predictor.predict_many(&xs);
        let points = xs
            .into_iter()
            .zip(ys)
            .map(|(x, y)| LinePoint { x, y })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[LinePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Writes the line to `path`, picking the format from its extension.
    pub fn export_to<P: AsRef<Path>>(&self, path: P) -> Result<LineFormat, Error> {
        let path = path.as_ref();
        let fmt = LineFormat::from_path(path).ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidInput,
                format!(
                    "cannot infer line format from {} (expected .csv, .tsv or .json)",
                    path.display()
                ),
            )
        })?;
        self.export(path, fmt)?;
        Ok(fmt)
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: LineFormat) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        self.write(&mut w, fmt)?;
        w.flush()
    }

    pub fn write<W: Write>(&self, w: &mut W, fmt: LineFormat) -> Result<(), Error> {
        match fmt {
            LineFormat::Csv => self.write_with_delimiter(w, ','),
            LineFormat::Tsv => self.write_with_delimiter(w, '\t'),
            LineFormat::Json => {
                serde_json::to_writer_pretty(&mut *w, self)?;
                writeln!(w)
            }
        }
    }

    fn write_with_delimiter<W: Write>(&self, w: &mut W, delimiter: char) -> Result<(), Error> {
        writeln!(w, "x{delimiter}y")?;
        for p in &self.points {
            writeln!(w, "{:.12}{delimiter}{:.12}", p.x, p.y)?;
        }
        Ok(())
    }
}
