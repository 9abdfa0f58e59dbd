//! # askcopy
//!
//! Prompt-before-overwrite single-file copying for Rust.
//!
//! ## Core Features
//!
//! - **Overwrite protection**: the destination is probed before anything is
//!   opened, and an existing file is only replaced after explicit consent
//! - **Conservative probing**: a permission-denied existence check is treated
//!   as "occupied" rather than risking a silent overwrite
//! - **Partial-write safe**: the copy loop reissues short writes until every
//!   byte of each chunk has reached the destination
//! - **Testable seams**: the confirmation and copy loops are generic over
//!   [`Read`](std::io::Read)/[`Write`](std::io::Write)
//!
//! ## Quick Start
//!
//! ```no_run
//! use askcopy::{copy_file, probe_destination, DestinationState};
//! use std::path::Path;
//!
//! let dst = Path::new("notes.bak");
//! if probe_destination(dst)? == DestinationState::Absent {
//!     let bytes = copy_file(Path::new("notes.txt"), dst)?;
//!     println!("copied {bytes} bytes");
//! }
//! # Ok::<(), askcopy::Error>(())
//! ```
//!
//! ## Interactive confirmation
//!
//! When the destination exists, drive [`confirm_overwrite`] with the process
//! standard streams (or any `Read`/`Write` pair in tests):
//!
//! ```no_run
//! use askcopy::{confirm_overwrite, copy_file, Decision};
//! use std::io;
//! use std::path::Path;
//!
//! let decision = confirm_overwrite(&mut io::stdin().lock(), &mut io::stdout().lock())?;
//! if decision == Decision::Proceed {
//!     copy_file(Path::new("a"), Path::new("b"))?;
//! }
//! # Ok::<(), askcopy::Error>(())
//! ```
//!
//! ## Safety Guarantees
//!
//! - The destination is never opened (and thus never truncated) before the
//!   probe/confirm phase has resolved to "proceed"
//! - Ambiguous confirmation input (end-of-input before a y/n) is an error,
//!   never consent
//! - File handles are released on every path, including error returns
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Structured logging with the tracing crate |

#![cfg_attr(docsrs, feature(doc_cfg))]

mod confirm;
mod copy;
mod error;
mod probe;

pub use confirm::{confirm_overwrite, Decision, OVERWRITE_PROMPT};
pub use copy::{copy_contents, copy_file, CHUNK_SIZE};
pub use error::{Error, Result};
pub use probe::{probe_destination, DestinationState};
