//! acp - Ask-before-overwrite Copy
//!
//! Copies one file to another path, prompting on stdin before an existing
//! destination is overwritten. Powered by askcopy.

use askcopy::{
    confirm_overwrite, copy_file, probe_destination, Decision, DestinationState, Result,
};
use clap::Parser;
use std::io;
use std::path::PathBuf;

/// acp - Copy a file, asking before overwriting
///
/// Copies the byte contents of SOURCE to DESTINATION. If DESTINATION
/// already exists, you are asked for confirmation before it is replaced.
///
/// Usage:
///   acp SOURCE DESTINATION
#[derive(Parser, Debug)]
#[command(name = "acp", version, about, long_about = None)]
struct Args {
    /// Source file to copy (opened read-only, never modified)
    source: PathBuf,

    /// Destination path (created with mode 0644 if absent, truncated if present)
    destination: PathBuf,
}

/// What a successful run ended as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Source exhausted, destination written
    Copied,
    /// User declined the overwrite; nothing was written
    Cancelled,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            // clap exits 2 on usage errors by default; this tool reports
            // every failure, bad arguments included, with exit code 1.
            // --help and --version still render to stdout and exit 0.
            let _ = error.print();
            std::process::exit(if error.use_stderr() { 1 } else { 0 });
        }
    };

    match run(&args) {
        Ok(Outcome::Copied) => {
            println!("File copied successfully!");
        }
        Ok(Outcome::Cancelled) => {
            println!("Copy canceled by user.");
        }
        Err(error) => {
            eprintln!("error: {}", error);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<Outcome> {
    if probe_destination(&args.destination)? == DestinationState::Exists {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let decision = confirm_overwrite(&mut stdin.lock(), &mut stdout.lock())?;
        if decision == Decision::Cancelled {
            return Ok(Outcome::Cancelled);
        }
    }

    copy_file(&args.source, &args.destination)?;
    Ok(Outcome::Copied)
}
