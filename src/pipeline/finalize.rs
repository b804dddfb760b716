//! Moving the network output to the requested mask path.

use crate::error::{Error, Result};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Move the inference output at `expected` to `requested`.
///
/// Afterwards `intermediate_dir` is removed if it is empty. A directory that
/// still holds other files is left in place with a warning.
pub fn finalize_output(expected: &Path, intermediate_dir: &Path, requested: &Path) -> Result<()> {
    if !expected.is_file() {
        return Err(Error::SegmentationOutputNotFound {
            path: expected.to_path_buf(),
        });
    }

    move_file(expected, requested)?;
    debug!("Moved {} -> {}", expected.display(), requested.display());

    if requested.exists()
        && let Err(e) = std::fs::remove_dir(intermediate_dir)
    {
        warn!(
            "Could not remove intermediate directory {}: {e}",
            intermediate_dir.display()
        );
    }

    Ok(())
}

/// Rename, falling back to copy and delete across filesystems.
fn move_file(from: &Path, to: &Path) -> Result<()> {
    let move_err = |e: std::io::Error| Error::OutputMove {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: e,
    };

    match std::fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::CrossesDevices => {
            std::fs::copy(from, to).map_err(move_err)?;
            std::fs::remove_file(from).map_err(move_err)
        }
        Err(e) => Err(move_err(e)),
    }
}
