use std::ffi::OsStr;
use std::path::Path;

use tracing::info;

use crate::aligner::{run_tool, AlignerError};

pub const DEFAULT_DATABASE_TITLE: &str = "Campylobacter Serotypes Database";

/// Build a nucleotide BLAST database from a reference FASTA with `makeblastdb`
///
/// # Errors
///
/// Returns `AlignerError::NotFound` if `makeblastdb` is missing,
/// `AlignerError::Failed` if it exits with an error, or `AlignerError::Io` if
/// the output directory cannot be created.
pub fn build_database(
    makeblastdb: &Path,
    fasta: &Path,
    out: &Path,
    title: &str,
) -> Result<(), AlignerError> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    info!("Building BLAST database: {}", out.display());
    run_tool(
        makeblastdb,
        &[
            OsStr::new("-in"),
            fasta.as_os_str(),
            OsStr::new("-dbtype"),
            OsStr::new("nucl"),
            OsStr::new("-out"),
            out.as_os_str(),
            OsStr::new("-title"),
            OsStr::new(title),
        ],
    )?;
    info!("BLAST database created successfully: {}", out.display());

    Ok(())
}
