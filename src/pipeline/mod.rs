//! Processing pipeline components.

mod batch;
mod coordinator;
mod finalize;
mod naming;
mod processor;

pub use batch::{BatchOptions, BatchSummary, FailedJob, segment_all};
pub use coordinator::{SegmentationJob, output_dir_for, prepare_output_dir};
pub use finalize::finalize_output;
pub use naming::NiftiName;
pub use processor::process_job;
