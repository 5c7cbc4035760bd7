mod agents;
mod aggregate;
mod config;
mod envs;
mod errors;
mod harness;
mod report;
mod rng;
mod runner;
mod utils;

use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::ExperimentConfig;
use crate::errors::HarnessError;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = env::args().skip(1);
    let config_path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => {
            error!("Usage: bandit-bench <config-file> [output-file]");
            return ExitCode::FAILURE;
        }
    };
    let output_path = args.next().map(PathBuf::from);

    match run(&config_path, output_path.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: &Path, output_path: Option<&Path>) -> Result<(), HarnessError> {
    let config = ExperimentConfig::from_file(config_path)?;
    info!(
        envs = config.envs.len(),
        agents = config.agents.len(),
        seed = config.seed,
        "Loaded experiment config"
    );

    let report = harness::run(&config)?;

    match output_path {
        Some(path) => {
            report.write_to_file(path)?;
            info!(path = %path.display(), "Wrote averaged curves");
        }
        None => report.write_json(io::stdout().lock())?,
    }

    Ok(())
}
