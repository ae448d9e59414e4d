use anyhow::Result;
use clap::Parser;
use linfit::tasks::TaskOutput;
use linfit::ui::cli::drivers::InquireDriver;
use linfit::ui::cli::task_file::{load_task, save_task};
use linfit::ui::cli::wizard::prompt_choice;
use linfit::ui::types::build::build_task;
use linfit::ui::types::choices::TaskChoice;
use linfit::utils::logging::init_logging;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

/// Fit a line to a two-column dataset and predict new values.
#[derive(Debug, Parser)]
#[command(name = "linfit", version, about)]
struct Cli {
    /// Run the task stored in this JSON file instead of prompting.
    #[arg(long, value_name = "FILE")]
    task: Option<PathBuf>,

    /// Save the chosen task as JSON so it can be replayed with --task.
    #[arg(long, value_name = "FILE")]
    save_task: Option<PathBuf>,

    /// Also append log records to this file.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print the fit report as JSON.
    #[arg(long)]
    json: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let choice = match &cli.task {
        Some(path) => {
            info!("loading task from {}", path.display());
            load_task(path)?
        }
        None => prompt_choice::<TaskChoice, _>(&InquireDriver)?,
    };

    if let Some(path) = &cli.save_task {
        save_task(&choice, path)?;
        info!("task saved to {}", path.display());
    }

    let task = build_task(choice)?;
    info!("running task {}", task.name());
    let output = task.run()?;

    if cli.json {
        println!("{}", output.report().to_json()?);
    } else {
        println!("{}", output.report());
    }
    if let TaskOutput::LineExported { path, format, .. } = &output {
        println!("Fitted line written to {} ({format})", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_file.as_deref()) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
