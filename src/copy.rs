//! Core copy operations.
//!
//! [`copy_file`] opens the source and destination and streams bytes between
//! them through [`copy_contents`], a fixed-buffer loop that survives partial
//! writes. The destination is created with mode 0644 if absent and truncated
//! if present; callers are expected to have resolved overwrite consent
//! before getting here.

use crate::error::{Error, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

/// Size of the transfer buffer used by [`copy_contents`].
pub const CHUNK_SIZE: usize = 4096;

/// Copy the byte contents of `src` to `dst`.
///
/// The source is opened read-only and never modified. The destination is
/// opened for writing, created with mode 0644 if absent, and truncated if
/// present. Both handles are released on every return path.
///
/// Returns the number of bytes copied.
///
/// # Errors
///
/// Returns [`Error::OpenSource`] or [`Error::OpenDestination`] if either
/// file cannot be opened, and the transfer errors of [`copy_contents`]
/// once the loop is running.
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    let mut src_file = File::open(src).map_err(|source| Error::OpenSource {
        path: src.to_path_buf(),
        source,
    })?;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    let mut dst_file = options.open(dst).map_err(|source| Error::OpenDestination {
        path: dst.to_path_buf(),
        source,
    })?;

    let bytes = copy_contents(&mut src_file, &mut dst_file)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        src = %src.display(),
        dst = %dst.display(),
        bytes,
        "copy complete"
    );

    Ok(bytes)
}

/// Stream bytes from `reader` to `writer` through a [`CHUNK_SIZE`] buffer.
///
/// Each chunk is written by an inner loop that reissues the unwritten tail
/// after a partial write. Invariant: bytes written for the current chunk
/// never exceed bytes read for it, and the outer loop only advances once
/// the two are equal. `ErrorKind::Interrupted` is retried on both sides,
/// as `std::io::copy` does.
///
/// Returns the total number of bytes transferred.
///
/// # Errors
///
/// Returns [`Error::Read`] if the source fails mid-copy, [`Error::Write`]
/// if the destination fails, and [`Error::WriteZero`] if a write of a
/// non-empty chunk reports zero bytes written.
pub fn copy_contents<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> Result<u64> {
    let mut buffer = [0u8; CHUNK_SIZE];
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => return Err(Error::Read { source }),
        };

        let mut written = 0;
        while written < bytes_read {
            match writer.write(&buffer[written..bytes_read]) {
                Ok(0) => return Err(Error::WriteZero),
                Ok(n) => written += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => return Err(Error::Write { source }),
            }
        }

        total += bytes_read as u64;
    }

    Ok(total)
}
