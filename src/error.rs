//! Error types for fetalseg.

use std::path::PathBuf;

/// Result type alias for fetalseg operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for fetalseg.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Installation root could not be determined.
    #[error("could not determine installation directory for this platform (set --install-root)")]
    InstallRootNotFound,

    /// Configuration file does not exist.
    #[error("expected config file '{path}' not found")]
    ConfigNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_yaml::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Model checkpoint does not exist.
    #[error("model checkpoint does not exist: {path}")]
    CheckpointNotFound {
        /// Path to the missing checkpoint.
        path: PathBuf,
    },

    /// Input and output name lists differ in length.
    #[error("the numbers of input and output filenames do not match ({inputs} inputs, {outputs} outputs)")]
    NameCountMismatch {
        /// Number of input names.
        inputs: usize,
        /// Number of output names.
        outputs: usize,
    },

    /// Input file name is not a NIfTI volume.
    #[error("unsupported input file '{path}' (expected .nii or .nii.gz)")]
    UnsupportedInputName {
        /// Path to the input file.
        path: PathBuf,
    },

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreateFailed {
        /// Path to the output directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// No inference runner is configured.
    #[error("no inference runner configured (set inference.runner in the config file)")]
    RunnerNotConfigured,

    /// Failed to start the inference runner.
    #[error("failed to start inference runner '{program}'")]
    RunnerSpawn {
        /// Program that failed to start.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Inference failed.
    #[error("inference failed for '{path}': {reason}")]
    Inference {
        /// Input image.
        path: PathBuf,
        /// Description of the inference failure.
        reason: String,
    },

    /// Expected network output is missing after inference.
    #[error(
        "network output file '{path}' not found, check if the segmentation pipeline has failed"
    )]
    SegmentationOutputNotFound {
        /// Expected output path.
        path: PathBuf,
    },

    /// Failed to move the network output to the requested name.
    #[error("failed to move '{from}' to '{to}'")]
    OutputMove {
        /// Source path.
        from: PathBuf,
        /// Destination path.
        to: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// One or more files failed in a batch run.
    #[error("{failed} of {total} file(s) failed to segment")]
    BatchFailed {
        /// Number of failed files.
        failed: usize,
        /// Total number of files.
        total: usize,
    },
}
