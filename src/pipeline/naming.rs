//! File naming shared with the inference routine.

use crate::constants::nifti;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Base name of a NIfTI volume split from its extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NiftiName {
    stem: String,
    compressed: bool,
}

impl NiftiName {
    /// Split the file name of `path` into stem and NIfTI extension.
    ///
    /// Matching is case-insensitive; anything other than `.nii` or `.nii.gz`
    /// is rejected.
    pub fn parse(path: &Path) -> Result<Self> {
        let unsupported = || Error::UnsupportedInputName {
            path: path.to_path_buf(),
        };

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(unsupported)?;

        let (stem, compressed) =
            if let Some(stem) = strip_suffix_ignore_case(name, nifti::COMPRESSED) {
                (stem, true)
            } else if let Some(stem) = strip_suffix_ignore_case(name, nifti::UNCOMPRESSED) {
                (stem, false)
            } else {
                return Err(unsupported());
            };

        if stem.is_empty() {
            return Err(unsupported());
        }

        Ok(Self {
            stem: stem.to_string(),
            compressed,
        })
    }

    /// File name without its NIfTI extension.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Whether the volume is gzip-compressed.
    pub const fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Extension the inference routine writes for this volume.
    pub const fn extension(&self) -> &'static str {
        if self.compressed {
            nifti::COMPRESSED
        } else {
            nifti::UNCOMPRESSED
        }
    }

    /// File name with `_<postfix>` inserted before the extension.
    pub fn with_postfix(&self, postfix: &str) -> String {
        format!("{}_{postfix}{}", self.stem, self.extension())
    }

    /// Directory the inference routine creates for this volume.
    pub fn intermediate_dir(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(&self.stem)
    }

    /// Full path of the mask the inference routine writes.
    pub fn expected_output(&self, out_dir: &Path, postfix: &str) -> PathBuf {
        self.intermediate_dir(out_dir).join(self.with_postfix(postfix))
    }
}

fn strip_suffix_ignore_case<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    let split = name.len().checked_sub(suffix.len())?;
    if !name.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = name.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_compressed_name() {
        let name = NiftiName::parse(Path::new("data/case1.nii.gz")).unwrap();
        assert_eq!(name.stem(), "case1");
        assert!(name.is_compressed());
        assert_eq!(name.with_postfix("seg"), "case1_seg.nii.gz");
    }

    #[test]
    fn test_uncompressed_name_keeps_nii() {
        let name = NiftiName::parse(Path::new("case2.nii")).unwrap();
        assert!(!name.is_compressed());
        assert_eq!(name.with_postfix("seg"), "case2_seg.nii");
    }

    #[test]
    fn test_expected_output_layout() {
        let name = NiftiName::parse(Path::new("/scans/case1.nii.gz")).unwrap();
        assert_eq!(
            name.expected_output(Path::new("out"), "seg"),
            PathBuf::from("out/case1/case1_seg.nii.gz")
        );
        assert_eq!(
            name.intermediate_dir(Path::new("out")),
            PathBuf::from("out/case1")
        );
    }

    #[test]
    fn test_uppercase_extension() {
        let name = NiftiName::parse(Path::new("SCAN.NII.GZ")).unwrap();
        assert_eq!(name.stem(), "SCAN");
        assert_eq!(name.extension(), ".nii.gz");
    }

    #[test]
    fn test_dots_in_stem() {
        let name = NiftiName::parse(Path::new("sub-01.run-2.nii.gz")).unwrap();
        assert_eq!(name.stem(), "sub-01.run-2");
    }

    #[test]
    fn test_unicode_stem() {
        let name = NiftiName::parse(Path::new("äiti_aivot.nii")).unwrap();
        assert_eq!(name.with_postfix("seg"), "äiti_aivot_seg.nii");
    }

    #[test]
    fn test_rejects_other_extensions() {
        for bad in ["case.mha", "case.gz", "case", ".nii", "case.nii.gz.bak"] {
            assert!(
                matches!(
                    NiftiName::parse(Path::new(bad)),
                    Err(Error::UnsupportedInputName { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }
}
