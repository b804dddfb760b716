//! Configuration type definitions.

use crate::constants::{DEFAULT_MODEL_SENTINEL, SEG_POSTFIX};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Inference configuration as read from YAML.
///
/// Only the keys this tool reads or writes are typed; every other key is kept
/// in `extra` so the inference routine receives the file unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Inference settings.
    pub inference: InferenceConfig,

    /// Output settings, filled in per input file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputConfig>,

    /// Remaining top-level sections.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Inference settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Checkpoint path, or `"default"` for the bundled checkpoint.
    pub model_to_load: PathBuf,

    /// External inference command (program followed by fixed arguments).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub runner: Vec<String>,

    /// Remaining inference keys.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Output settings consumed by the inference routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Suffix appended to the input stem.
    pub out_postfix: String,

    /// Directory the routine writes into.
    pub out_dir: PathBuf,
}

impl InferenceConfig {
    /// Whether `model_to_load` selects the bundled checkpoint.
    pub fn uses_default_model(&self) -> bool {
        self.model_to_load == Path::new(DEFAULT_MODEL_SENTINEL)
    }
}

impl Config {
    /// Derive the configuration for one input whose results go to `out_dir`.
    ///
    /// The base configuration is left untouched.
    #[must_use]
    pub fn for_output(&self, out_dir: &Path) -> Self {
        Self {
            output: Some(OutputConfig {
                out_postfix: SEG_POSTFIX.to_string(),
                out_dir: out_dir.to_path_buf(),
            }),
            ..self.clone()
        }
    }

    /// Postfix the inference routine will use.
    pub fn out_postfix(&self) -> &str {
        self.output
            .as_ref()
            .map_or(SEG_POSTFIX, |out| out.out_postfix.as_str())
    }
}
