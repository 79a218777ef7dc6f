//! Reader for query and reference FASTA files using noodles.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna`, `.fas` (uncompressed)
//! - any of the above with `.gz` or `.bgz` (gzip/bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use noodles::fasta;
use tempfile::NamedTempFile;

use crate::parsing::ParseError;

/// Name and length of one FASTA record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContigSummary {
    pub name: String,
    pub length: u64,
}

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    let stripped = path_str
        .strip_suffix(".gz")
        .or_else(|| path_str.strip_suffix(".bgz"))
        .unwrap_or(&path_str);

    matches!(
        Path::new(stripped)
            .extension()
            .and_then(OsStr::to_str),
        Some("fa" | "fasta" | "fna" | "fas")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read the name and length of every record in a FASTA file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// a record is malformed, or `ParseError::InvalidFormat` if the file holds no
/// sequences.
pub fn read_contigs(path: &Path) -> Result<Vec<ContigSummary>, ParseError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        let mut reader = fasta::io::Reader::new(BufReader::new(GzDecoder::new(file)));
        read_contigs_from(&mut reader)
    } else {
        let mut reader = fasta::io::Reader::new(BufReader::new(file));
        read_contigs_from(&mut reader)
    }
}

fn read_contigs_from<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<ContigSummary>, ParseError> {
    let mut contigs = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        contigs.push(ContigSummary {
            name: String::from_utf8_lossy(record.name()).to_string(),
            length: record.sequence().len() as u64,
        });
    }

    if contigs.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(contigs)
}

/// A FASTA path the aligner can read directly.
///
/// Compressed inputs are decompressed into a temporary file that lives as long
/// as this value.
#[derive(Debug)]
pub enum QueryFasta {
    Plain(PathBuf),
    Decompressed(NamedTempFile),
}

impl QueryFasta {
    pub fn path(&self) -> &Path {
        match self {
            Self::Plain(path) => path,
            Self::Decompressed(temp) => temp.path(),
        }
    }
}

/// Make a FASTA file readable by an external aligner, decompressing if needed
///
/// # Errors
///
/// Returns `ParseError::Io` if the input cannot be read or the temporary file
/// cannot be written.
pub fn materialize_query(path: &Path) -> Result<QueryFasta, ParseError> {
    if !is_gzipped(path) {
        return Ok(QueryFasta::Plain(path.to_path_buf()));
    }

    let mut decoder = GzDecoder::new(std::fs::File::open(path)?);
    let mut temp = NamedTempFile::with_suffix(".fasta")?;
    std::io::copy(&mut decoder, &mut temp)?;
    Ok(QueryFasta::Decompressed(temp))
}
