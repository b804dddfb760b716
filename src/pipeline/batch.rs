//! Sequential processing of many jobs.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::inference::Segmenter;
use crate::output::progress;
use crate::pipeline::{SegmentationJob, process_job};
use std::path::PathBuf;
use tracing::{error, info, warn};

/// How a batch reacts to per-file failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Stop at the first failing file and return its error.
    pub fail_fast: bool,
    /// Show a file progress bar.
    pub progress: bool,
}

/// A job that failed, with the reason.
#[derive(Debug)]
pub struct FailedJob {
    /// The job that failed.
    pub job: SegmentationJob,
    /// Why it failed.
    pub error: Error,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Masks written, in input order.
    pub written: Vec<PathBuf>,
    /// Jobs that failed, in input order.
    pub failed: Vec<FailedJob>,
}

impl BatchSummary {
    /// Number of jobs attempted.
    pub fn total(&self) -> usize {
        self.written.len() + self.failed.len()
    }

    /// Convert into an error if any job failed.
    pub fn into_result(self) -> Result<Self> {
        if self.failed.is_empty() {
            Ok(self)
        } else {
            Err(Error::BatchFailed {
                failed: self.failed.len(),
                total: self.total(),
            })
        }
    }
}

/// Run every job in order against one base configuration.
///
/// Without `fail_fast` every job is attempted and failures are collected in
/// the summary. With it, the first error is returned unchanged.
pub fn segment_all<S: Segmenter>(
    jobs: &[SegmentationJob],
    base: &Config,
    segmenter: &S,
    options: BatchOptions,
) -> Result<BatchSummary> {
    let file_progress = progress::create_file_progress(jobs.len(), options.progress);
    let mut summary = BatchSummary::default();

    for job in jobs {
        match process_job(job, base, segmenter) {
            Ok(written) => summary.written.push(written),
            Err(e) => {
                error!("Failed to segment {}: {}", job.input.display(), e);
                if options.fail_fast {
                    progress::finish_progress(file_progress, "Failed");
                    return Err(e);
                }
                summary.failed.push(FailedJob {
                    job: job.clone(),
                    error: e,
                });
            }
        }
        progress::inc_progress(file_progress.as_ref());
    }

    progress::finish_progress(file_progress, "Complete");

    info!(
        "Complete: {} written, {} failed",
        summary.written.len(),
        summary.failed.len()
    );
    if !summary.failed.is_empty() {
        warn!("{} file(s) had errors", summary.failed.len());
    }

    Ok(summary)
}
