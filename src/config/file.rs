//! Configuration file resolution and loading.

use crate::config::{Config, default_checkpoint_path, default_config_path};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Pick the config file to load and check that it exists.
///
/// Falls back to the bundled config under `root` when no path is given.
pub fn resolve_config_path(explicit: Option<&Path>, root: &Path) -> Result<PathBuf> {
    let path = explicit.map_or_else(|| default_config_path(root), Path::to_path_buf);

    if !path.is_file() {
        return Err(Error::ConfigNotFound { path });
    }

    Ok(path)
}

/// Load a YAML configuration file.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_yaml::from_str(&contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Replace the `"default"` checkpoint sentinel with the bundled checkpoint.
#[must_use]
pub fn resolve_checkpoint(mut config: Config, root: &Path) -> Config {
    if config.inference.uses_default_model() {
        config.inference.model_to_load = default_checkpoint_path(root);
        debug!(
            "Using bundled checkpoint: {}",
            config.inference.model_to_load.display()
        );
    }
    config
}

/// Resolve, load and finish the configuration in one step.
pub fn load_config(explicit: Option<&Path>, root: &Path) -> Result<(PathBuf, Config)> {
    let path = resolve_config_path(explicit, root)?;
    let config = resolve_checkpoint(load_config_file(&path)?, root);
    Ok((path, config))
}

/// Write a configuration snapshot as YAML.
pub fn write_config(config: &Config, writer: impl std::io::Write) -> Result<()> {
    serde_yaml::to_writer(writer, config).map_err(|e| Error::ConfigSerialize { source: e })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn install_with_config(contents: &str) -> TempDir {
        let root = TempDir::new().unwrap();
        let path = default_config_path(root.path());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, contents).unwrap();
        root
    }

    #[test]
    fn test_explicit_missing_path_is_not_found() {
        let root = install_with_config("inference:\n  model_to_load: default\n");
        let missing = root.path().join("nope.yml");

        let result = resolve_config_path(Some(&missing), root.path());
        assert!(matches!(result, Err(Error::ConfigNotFound { path }) if path == missing));
    }

    #[test]
    fn test_missing_default_is_not_found() {
        let root = TempDir::new().unwrap();
        let result = resolve_config_path(None, root.path());
        assert!(matches!(result, Err(Error::ConfigNotFound { .. })));
    }

    #[test]
    fn test_default_path_used_when_none_given() {
        let root = install_with_config("inference:\n  model_to_load: default\n");
        let path = resolve_config_path(None, root.path()).unwrap();
        assert_eq!(path, default_config_path(root.path()));
    }

    #[test]
    fn test_default_sentinel_resolves_to_bundled_checkpoint() {
        let root = install_with_config("inference:\n  model_to_load: default\n");
        let (_, config) = load_config(None, root.path()).unwrap();
        assert_eq!(
            config.inference.model_to_load,
            default_checkpoint_path(root.path())
        );
    }

    #[test]
    fn test_explicit_checkpoint_is_kept() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "inference:\n  model_to_load: /models/custom.pt").unwrap();

        let root = TempDir::new().unwrap();
        let (path, config) = load_config(Some(file.path()), root.path()).unwrap();
        assert_eq!(path, file.path());
        assert_eq!(
            config.inference.model_to_load,
            PathBuf::from("/models/custom.pt")
        );
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "inference: [unclosed").unwrap();

        let result = load_config_file(file.path());
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_missing_inference_section_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "output:\n  out_dir: /tmp").unwrap();

        let result = load_config_file(file.path());
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_write_config_includes_output() {
        let root = install_with_config("inference:\n  model_to_load: default\n");
        let (_, config) = load_config(None, root.path()).unwrap();
        let derived = config.for_output(Path::new("/results"));

        let mut buf = Vec::new();
        write_config(&derived, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("out_postfix: seg"));
        assert!(text.contains("out_dir: /results"));
    }
}
