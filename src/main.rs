use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use paintboard::app;

/// Line-oriented painting interpreter. Reads single-letter board commands
/// from the given files, or from stdin when none are given.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Command files to execute in order.
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match app::run(&cli.files) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("paintboard: {err}");
            ExitCode::FAILURE
        }
    }
}
