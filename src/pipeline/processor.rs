//! Single file segmentation pipeline.

use crate::config::Config;
use crate::error::Result;
use crate::inference::Segmenter;
use crate::pipeline::{NiftiName, SegmentationJob, finalize_output, prepare_output_dir};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Segment one input and place the mask at the requested path.
///
/// Steps: validate the input name, prepare the output directory, run the
/// segmenter with a derived configuration, then move its output into place.
/// Errors from the segmenter are returned as-is.
pub fn process_job<S: Segmenter>(
    job: &SegmentationJob,
    base: &Config,
    segmenter: &S,
) -> Result<PathBuf> {
    let start_time = Instant::now();

    info!("Processing: {}", job.input.display());

    let name = NiftiName::parse(&job.input)?;
    let out_dir = prepare_output_dir(&job.output)?;
    let config = base.for_output(&out_dir);

    debug!("Output directory: {}", out_dir.display());
    segmenter.segment(&job.input, &config)?;

    let expected = name.expected_output(&out_dir, config.out_postfix());
    finalize_output(&expected, &name.intermediate_dir(&out_dir), &job.output)?;

    info!(
        "Wrote {} in {:.2}s",
        job.output.display(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(job.output.clone())
}
