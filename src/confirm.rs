//! Interactive overwrite confirmation.
//!
//! A byte-at-a-time y/n loop over arbitrary `Read`/`Write` streams. The CLI
//! drives it with locked stdin/stdout; tests drive it with in-memory buffers.
//!
//! The loop never infers consent: a newline re-prompts, a rejected character
//! drains its line and re-prompts, and end-of-input before an answer is an
//! error ([`Error::ConfirmationEof`]).

use crate::error::{Error, Result};
use std::io::{Read, Write};

/// Prompt printed before each confirmation attempt.
pub const OVERWRITE_PROMPT: &str = "Target file exists. Overwrite? (y/n): ";

/// Outcome of the overwrite confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The user answered y/Y; the copy may overwrite the destination
    Proceed,
    /// The user answered n/N; nothing must be written
    Cancelled,
}

/// Run the confirmation loop until the user answers y/Y or n/N.
///
/// Each iteration writes [`OVERWRITE_PROMPT`] to `output`, flushes it, and
/// reads a single byte from `input`:
///
/// - `y`/`Y` drains the rest of the line and returns [`Decision::Proceed`]
/// - `n`/`N` drains the rest of the line and returns [`Decision::Cancelled`]
/// - `\n`/`\r` is discarded and the prompt is repeated
/// - any other byte drains its line and the prompt is repeated
///
/// # Errors
///
/// Returns [`Error::ConfirmationEof`] if `input` ends before an answer,
/// [`Error::ConfirmationRead`] on a read failure, and [`Error::Prompt`] if
/// the prompt cannot be written.
pub fn confirm_overwrite<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<Decision> {
    loop {
        output
            .write_all(OVERWRITE_PROMPT.as_bytes())
            .and_then(|()| output.flush())
            .map_err(|source| Error::Prompt { source })?;

        let answer = match read_byte(input)? {
            Some(byte) => byte,
            None => return Err(Error::ConfirmationEof),
        };

        // Ignore line terminators left over from a previous prompt
        if answer == b'\n' || answer == b'\r' {
            continue;
        }

        drain_line(input)?;

        match answer {
            b'y' | b'Y' => return Ok(Decision::Proceed),
            b'n' | b'N' => return Ok(Decision::Cancelled),
            _ => {}
        }
    }
}

/// Read one byte, returning `None` at end-of-input.
fn read_byte<R: Read>(input: &mut R) -> Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match input.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(source) => return Err(Error::ConfirmationRead { source }),
        }
    }
}

/// Discard input up to and including the next newline, so stray characters
/// on the answered line cannot leak into a later prompt.
fn drain_line<R: Read>(input: &mut R) -> Result<()> {
    while let Some(byte) = read_byte(input)? {
        if byte == b'\n' {
            break;
        }
    }
    Ok(())
}
