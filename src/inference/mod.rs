//! Inference invocation.
//!
//! The segmentation network runs outside this crate. [`Segmenter`] is the
//! seam: the pipeline only knows that a segmenter writes a mask for an input
//! somewhere under the configured output directory.

mod runner;

pub use runner::CommandSegmenter;

use crate::config::Config;
use crate::error::Result;
use std::path::Path;

/// Something that can segment a single input volume.
///
/// Implementations write `<out_dir>/<stem>/<stem>_<postfix><ext>` using the
/// `output` section of `config`.
pub trait Segmenter {
    /// Segment `input` with the given configuration snapshot.
    fn segment(&self, input: &Path, config: &Config) -> Result<()>;
}

