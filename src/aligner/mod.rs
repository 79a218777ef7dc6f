//! External aligner integration.
//!
//! Alignment itself is delegated to NCBI BLAST+. This module only runs the
//! binaries and hands their tabular output to [`crate::parsing::tabular`]:
//!
//! - [`Blastn`]: searches query contigs against the serotype database
//! - [`build_database`]: builds that database with `makeblastdb`
//!
//! A missing binary or a non-zero exit is fatal: without aligner output there
//! is nothing to interpret.

use std::path::Path;
use std::process::ExitStatus;

use thiserror::Error;

use crate::core::types::CallMethod;

pub mod blastn;
pub mod database;

pub use blastn::Blastn;
pub use database::{build_database, DEFAULT_DATABASE_TITLE};

#[derive(Error, Debug)]
pub enum AlignerError {
    #[error("{program} not found. Please install BLAST+ tools.")]
    NotFound { program: String },

    #[error("{program} failed ({status}): {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A sequence search tool producing tabular (outfmt 6) output
pub trait Aligner {
    /// How calls derived from this tool's hits were made
    fn method(&self) -> CallMethod;

    /// Search a query FASTA and return the raw tabular output.
    ///
    /// The output is returned undecoded; rows are decoded one at a time by
    /// [`crate::parsing::tabular::parse_tabular_bytes`].
    ///
    /// # Errors
    ///
    /// Returns an `AlignerError` if the tool is missing or fails.
    fn search(&self, query: &Path) -> Result<Vec<u8>, AlignerError>;
}

/// Run an external program to completion, mapping spawn and exit failures
fn run_tool(program: &Path, args: &[&std::ffi::OsStr]) -> Result<std::process::Output, AlignerError> {
    let name = program.display().to_string();
    tracing::debug!("Running {name} {:?}", args);

    let output = std::process::Command::new(program)
        .args(args)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AlignerError::NotFound {
                    program: name.clone(),
                }
            } else {
                AlignerError::Io(e)
            }
        })?;

    if !output.status.success() {
        return Err(AlignerError::Failed {
            program: name,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_not_found() {
        let err = run_tool(Path::new("campyser-no-such-binary"), &[]).unwrap_err();
        assert!(matches!(err, AlignerError::NotFound { .. }));
        assert!(err.to_string().contains("not found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_failed() {
        let err = run_tool(Path::new("false"), &[]).unwrap_err();
        assert!(matches!(err, AlignerError::Failed { .. }));
    }
}
