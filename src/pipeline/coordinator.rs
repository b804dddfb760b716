//! Per-file job description and output directory handling.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// One input volume and the mask path requested for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentationJob {
    /// Input volume.
    pub input: PathBuf,
    /// Requested mask path.
    pub output: PathBuf,
}

impl SegmentationJob {
    /// Create a job.
    pub const fn new(input: PathBuf, output: PathBuf) -> Self {
        Self { input, output }
    }
}

/// Directory that will hold `output`.
///
/// A bare file name resolves to `cwd`.
pub fn output_dir_for(output: &Path, cwd: &Path) -> PathBuf {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => cwd.to_path_buf(),
    }
}

/// Resolve and create the output directory for `output`.
pub fn prepare_output_dir(output: &Path) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    let dir = output_dir_for(output, &cwd);

    std::fs::create_dir_all(&dir).map_err(|e| Error::OutputDirCreateFailed {
        path: dir.clone(),
        source: e,
    })?;

    Ok(dir)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_dir_from_parent() {
        let dir = output_dir_for(Path::new("out/case1_mask.nii.gz"), Path::new("/work"));
        assert_eq!(dir, PathBuf::from("out"));
    }

    #[test]
    fn test_output_dir_absolute() {
        let dir = output_dir_for(Path::new("/data/masks/m.nii"), Path::new("/work"));
        assert_eq!(dir, PathBuf::from("/data/masks"));
    }

    #[test]
    fn test_bare_name_uses_cwd() {
        let dir = output_dir_for(Path::new("mask.nii.gz"), Path::new("/work"));
        assert_eq!(dir, PathBuf::from("/work"));
    }

    #[test]
    fn test_prepare_creates_nested_dirs() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("a/b/c/mask.nii.gz");

        let dir = prepare_output_dir(&output).unwrap();
        assert_eq!(dir, tmp.path().join("a/b/c"));
        assert!(dir.is_dir());

        // Second call on an existing directory is fine
        assert!(prepare_output_dir(&output).is_ok());
    }

    #[test]
    fn test_prepare_fails_when_parent_is_file() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();

        let result = prepare_output_dir(&blocker.join("mask.nii.gz"));
        assert!(matches!(result, Err(Error::OutputDirCreateFailed { .. })));
    }
}
