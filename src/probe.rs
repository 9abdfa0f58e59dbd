//! Destination existence probing.
//!
//! The probe runs before any file is opened, so an existing destination is
//! never truncated until the caller has obtained consent to overwrite it.

use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Whether the destination path is currently occupied.
///
/// This is the explicit tri-state result of probing (the third state, a
/// probe failure, is carried by [`Error::Probe`]). Access-denied probes fold
/// into [`DestinationState::Exists`]: if we cannot tell, we assume the path
/// is occupied rather than risk a silent overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationState {
    /// The path refers to an existing entry (or we were denied the check)
    Exists,
    /// The path does not refer to any existing entry
    Absent,
}

/// Probe whether the destination path exists, without opening it.
///
/// Uses `symlink_metadata` so a dangling symlink still counts as
/// [`DestinationState::Exists`]: the name is occupied either way.
///
/// # Errors
///
/// Returns [`Error::Probe`] if the check fails for any reason other than
/// absence or an access restriction.
pub fn probe_destination(path: &Path) -> Result<DestinationState> {
    let state = match fs::symlink_metadata(path) {
        Ok(_) => DestinationState::Exists,
        Err(e) if e.kind() == io::ErrorKind::NotFound => DestinationState::Absent,
        // No permission to check: it still may exist
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => DestinationState::Exists,
        Err(source) => {
            return Err(Error::Probe {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), ?state, "probed destination");

    Ok(state)
}
