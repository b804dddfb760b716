//! External process segmenter.

use crate::config::{Config, validate_checkpoint, write_config};
use crate::constants::runner_args;
use crate::error::{Error, Result};
use crate::inference::Segmenter;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Runs the configured inference command once per input.
///
/// The command receives `--input_data <image> --config_info <snapshot>`, where
/// the snapshot is the per-input configuration written to a temporary YAML
/// file that lives for the duration of the call.
#[derive(Debug, Clone)]
pub struct CommandSegmenter {
    program: String,
    args: Vec<String>,
}

impl CommandSegmenter {
    /// Build a segmenter for an explicit command line.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build a segmenter from `inference.runner`.
    ///
    /// Fails when no runner is configured or the checkpoint is missing.
    pub fn from_config(config: &Config) -> Result<Self> {
        let (program, args) = config
            .inference
            .runner
            .split_first()
            .ok_or(Error::RunnerNotConfigured)?;

        validate_checkpoint(config)?;

        Ok(Self::new(program.clone(), args.to_vec()))
    }

    /// Program that will be executed.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Segmenter for CommandSegmenter {
    fn segment(&self, input: &Path, config: &Config) -> Result<()> {
        let mut snapshot = tempfile::Builder::new()
            .prefix("fetalseg-")
            .suffix(".yml")
            .tempfile()?;
        write_config(config, snapshot.as_file_mut())?;
        snapshot.as_file_mut().flush()?;

        debug!(
            "Running {} {:?} on {}",
            self.program,
            self.args,
            input.display()
        );

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(runner_args::INPUT_DATA)
            .arg(input)
            .arg(runner_args::CONFIG_INFO)
            .arg(snapshot.path())
            .status()
            .map_err(|e| Error::RunnerSpawn {
                program: self.program.clone(),
                source: e,
            })?;

        if !status.success() {
            return Err(Error::Inference {
                path: input.to_path_buf(),
                reason: format!("{} exited with {status}", self.program),
            });
        }

        Ok(())
    }
}
