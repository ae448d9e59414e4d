use crate::dataset::DatasetError;
use crate::utils::file_parsing::{split_delimited_preserving_quotes, strip_surrounding_quotes};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const DEFAULT_DELIMITER: char = ';';

/// Two parallel columns read from a dataset, `x[i]` paired with `y[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairedSamples {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl PairedSamples {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn into_columns(self) -> (Vec<f64>, Vec<f64>) {
        (self.x, self.y)
    }
}

/// Reader for headerless two-column text files, one `x<delimiter>y` record
/// per line.
///
/// Blank lines are skipped. Fields are trimmed and may be wrapped in single or
/// double quotes. Any other irregularity (wrong number of fields, a field that
/// is not a number) fails the whole read with the 1-based line number.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedReader {
    delimiter: char,
}

impl Default for DelimitedReader {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl DelimitedReader {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<PairedSamples, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        self.read(BufReader::new(file), path)
    }

    /// Reads records from `reader`; `origin` only names the source in errors.
    pub fn read<R: BufRead>(&self, reader: R, origin: &Path) -> Result<PairedSamples, DatasetError> {
        let mut samples = PairedSamples::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let (x, y) = self.parse_record(trimmed, idx + 1)?;
            samples.x.push(x);
            samples.y.push(y);
        }

        if samples.is_empty() {
            return Err(DatasetError::Empty {
                path: origin.to_path_buf(),
            });
        }
        Ok(samples)
    }

    fn parse_record(&self, line: &str, line_no: usize) -> Result<(f64, f64), DatasetError> {
        let fields = split_delimited_preserving_quotes(line, self.delimiter);
        if fields.len() != 2 {
            return Err(DatasetError::Parse {
                line: line_no,
                reason: format!(
                    "expected 2 fields separated by '{}', found {}",
                    self.delimiter,
                    fields.len()
                ),
            });
        }

        let x = parse_field(&fields[0], "x", line_no)?;
        let y = parse_field(&fields[1], "y", line_no)?;
        Ok((x, y))
    }
}

fn parse_field(raw: &str, column: &str, line_no: usize) -> Result<f64, DatasetError> {
    let value = strip_surrounding_quotes(raw).trim();
    value.parse::<f64>().map_err(|e| DatasetError::Parse {
        line: line_no,
        reason: format!("column {column}: '{value}' is not a number ({e})"),
    })
}
