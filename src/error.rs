//! Error types for askcopy.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur while probing, confirming, and copying, and the [`Result`]
//! type alias.
//!
//! # Error Categories
//!
//! | Category | Errors |
//! |----------|--------|
//! | Probe | [`Error::Probe`] |
//! | Confirmation | [`Error::ConfirmationEof`], [`Error::ConfirmationRead`], [`Error::Prompt`] |
//! | Open | [`Error::OpenSource`], [`Error::OpenDestination`] |
//! | Transfer | [`Error::Read`], [`Error::Write`], [`Error::WriteZero`] |

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for askcopy operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while probing, confirming, or copying.
///
/// All errors are terminal: nothing in this crate retries a failed
/// operation. Variants include the offending path where one exists.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Destination existence check failed for a reason other than absence
    /// or an access restriction
    #[error("Failed to check destination file {path}: {source}")]
    Probe {
        /// The destination path that was probed
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Confirmation input ended before a y/n answer was given
    ///
    /// End-of-input is never treated as consent; an unattended run with a
    /// closed stdin must not overwrite anything.
    #[error("No input received (EOF) while awaiting overwrite confirmation")]
    ConfirmationEof,

    /// Reading the confirmation input failed
    #[error("Failed to read user input: {source}")]
    ConfirmationRead {
        /// Underlying error
        source: io::Error,
    },

    /// Writing or flushing the confirmation prompt failed
    #[error("Failed to write overwrite prompt: {source}")]
    Prompt {
        /// Underlying error
        source: io::Error,
    },

    /// Source file could not be opened for reading
    #[error("Cannot open source file {path} for reading: {source}")]
    OpenSource {
        /// The source path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Destination file could not be created or opened for writing
    #[error("Cannot create or open destination file {path}: {source}")]
    OpenDestination {
        /// The destination path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Reading from the source failed mid-copy
    #[error("Problem occurred while reading source: {source}")]
    Read {
        /// Underlying error
        source: io::Error,
    },

    /// Writing to the destination failed mid-copy
    #[error("Failed to write data to destination: {source}")]
    Write {
        /// Underlying error
        source: io::Error,
    },

    /// A write of a non-empty chunk reported zero bytes written
    ///
    /// The copy loop never issues a zero-length write, so a zero result is
    /// an unexpected condition and is treated as fatal rather than retried.
    #[error("Write returned 0 bytes unexpectedly")]
    WriteZero,
}
