//! CLI argument definitions.

use crate::constants::INSTALL_ROOT_ENV;
use crate::error::{Error, Result};
use crate::pipeline::SegmentationJob;
use clap::Parser;
use std::path::PathBuf;

/// Run fetal brain segmentation using a pre-trained `DynUNet` model.
#[derive(Debug, Parser)]
#[command(name = "fetalseg")]
#[command(author, version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input filenames to be automatically segmented.
    #[arg(long = "input_names", value_name = "INPUT_NAMES", num_args = 1.., required = true)]
    pub input_names: Vec<PathBuf>,

    /// Output filenames where to store the segmentation masks.
    #[arg(
        long = "segment_output_names",
        value_name = "SEGMENT_OUTPUT_NAMES",
        num_args = 1..,
        required = true
    )]
    pub segment_output_names: Vec<PathBuf>,

    /// Config file containing network information for inference.
    #[arg(long = "config_file", value_name = "CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Installation directory holding the bundled config and checkpoint.
    #[arg(long, env = INSTALL_ROOT_ENV)]
    pub install_root: Option<PathBuf>,

    /// Stop on the first file that fails.
    #[arg(long)]
    pub fail_fast: bool,

    /// Suppress progress output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Pair each input with its requested output, positionally.
    pub fn jobs(&self) -> Result<Vec<SegmentationJob>> {
        pair_names(&self.input_names, &self.segment_output_names)
    }
}

/// Zip input and output names, rejecting lists of different length.
pub fn pair_names(inputs: &[PathBuf], outputs: &[PathBuf]) -> Result<Vec<SegmentationJob>> {
    if inputs.len() != outputs.len() {
        return Err(Error::NameCountMismatch {
            inputs: inputs.len(),
            outputs: outputs.len(),
        });
    }

    Ok(inputs
        .iter()
        .zip(outputs)
        .map(|(input, output)| SegmentationJob::new(input.clone(), output.clone()))
        .collect())
}
