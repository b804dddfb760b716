//! Installation-relative resource paths.

use crate::constants::{APP_NAME, bundled};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolve the installation root holding the bundled config and checkpoint.
///
/// An explicit root wins. Otherwise the platform data directory is used:
///
/// - Linux: `~/.local/share/fetalseg/`
/// - macOS: `~/Library/Application Support/fetalseg/`
/// - Windows: `%APPDATA%\fetalseg\data\`
pub fn install_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root.to_path_buf());
    }

    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(Error::InstallRootNotFound)
}

/// Path of the bundled inference configuration.
pub fn default_config_path(root: &Path) -> PathBuf {
    root.join(bundled::CONFIG_DIR).join(bundled::CONFIG_FILE)
}

/// Path of the bundled model checkpoint.
pub fn default_checkpoint_path(root: &Path) -> PathBuf {
    root.join(bundled::MODELS_DIR).join(bundled::CHECKPOINT_FILE)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_root_wins() {
        let root = install_root(Some(Path::new("/opt/fetalseg"))).unwrap();
        assert_eq!(root, PathBuf::from("/opt/fetalseg"));
    }

    #[test]
    fn test_platform_root_mentions_app() {
        if let Ok(root) = install_root(None) {
            assert!(root.to_string_lossy().contains("fetalseg"));
        }
    }

    #[test]
    fn test_default_config_path() {
        let path = default_config_path(Path::new("/opt/fetalseg"));
        assert_eq!(
            path,
            PathBuf::from("/opt/fetalseg/config/monai_dynUnet_inference_config.yml")
        );
    }

    #[test]
    fn test_default_checkpoint_path() {
        let path = default_checkpoint_path(Path::new("/opt/fetalseg"));
        assert_eq!(
            path,
            PathBuf::from("/opt/fetalseg/models/checkpoint_dynUnet_DiceXent.pt")
        );
    }
}
