//! Configuration loading and management.

mod file;
mod paths;
mod types;
mod validate;

pub use file::{
    load_config, load_config_file, resolve_checkpoint, resolve_config_path, write_config,
};
pub use paths::{default_checkpoint_path, default_config_path, install_root};
pub use types::{Config, InferenceConfig, OutputConfig};
pub use validate::{validate_checkpoint, validate_config};
