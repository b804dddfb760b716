//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the configuration before any input is processed.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.inference.model_to_load.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            message: "inference.model_to_load must not be empty".to_string(),
        });
    }

    if config.inference.runner.first().is_some_and(String::is_empty) {
        return Err(Error::ConfigValidation {
            message: "inference.runner program must not be empty".to_string(),
        });
    }

    Ok(())
}

/// Check that the resolved checkpoint exists on disk.
pub fn validate_checkpoint(config: &Config) -> Result<()> {
    let path = &config.inference.model_to_load;
    if !path.is_file() {
        return Err(Error::CheckpointNotFound { path: path.clone() });
    }
    Ok(())
}
