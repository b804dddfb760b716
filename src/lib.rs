//! Fetalseg - fetal brain mask generation CLI.
//!
//! Wraps an external `DynUNet` inference routine: resolves the YAML
//! configuration and checkpoint, runs inference for each input volume and
//! moves each mask to the name the caller asked for.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod inference;
pub mod output;
pub mod pipeline;

use clap::Parser;
use cli::Cli;
use inference::CommandSegmenter;
use pipeline::{BatchOptions, segment_all};
use tracing::info;

pub use error::{Error, Result};

/// Main entry point for fetalseg CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    // Reject mismatched name lists before touching the config or the model
    let jobs = cli.jobs()?;

    let root = config::install_root(cli.install_root.as_deref())?;
    let (config_path, config) = config::load_config(cli.config_file.as_deref(), &root)?;
    info!("Config file: {}", config_path.display());
    config::validate_config(&config)?;
    info!("Checkpoint: {}", config.inference.model_to_load.display());

    let segmenter = CommandSegmenter::from_config(&config)?;

    let options = BatchOptions {
        fail_fast: cli.fail_fast,
        progress: !cli.quiet && !cli.no_progress,
    };
    segment_all(&jobs, &config, &segmenter, options)?.into_result()?;

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}
