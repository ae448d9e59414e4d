use anyhow::{Context, Result};
use chrono::Local;
use env_logger::{Builder, Env, Target};
use log::Record;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Installs the global logger.
///
/// Filtering follows `RUST_LOG` (default `info`). Records go to stderr and,
/// when `log_file` is given, are appended to that file as well.
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        writeln!(buf, "{}", format_record(record, &timestamp))
    });

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(Tee { file })));
    }

    builder.try_init().context("logger already initialised")?;
    Ok(())
}

fn format_record(record: &Record<'_>, timestamp: &str) -> String {
    format!(
        "{timestamp} - {} - {} - {}",
        record.level(),
        record.target(),
        record.args()
    )
}

/// Duplicates everything written to it onto stderr.
struct Tee {
    file: File,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;
    use std::fs;

    #[test]
    fn record_layout() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("model fitted"))
                .level(Level::Info)
                .target("linfit::tasks")
                .build(),
            "2024-01-01 00:00:00.000",
        );
        assert_eq!(
            line,
            "2024-01-01 00:00:00.000 - INFO - linfit::tasks - model fitted"
        );
    }

    #[test]
    fn tee_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .unwrap();
        let mut tee = Tee { file };
        tee.write_all(b"hello\n").unwrap();
        tee.flush().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }
}
