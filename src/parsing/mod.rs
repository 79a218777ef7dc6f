//! Parsers for aligner output and sequence files.
//!
//! - **Tabular alignment output** (`-outfmt 6`/`7`): one hit per row
//! - **FASTA**: record names and lengths, plain or gzip compressed
//!
//! ## Tabular Columns
//!
//! | Index | Column   | Used |
//! |-------|----------|------|
//! | 0     | qseqid   | Yes (query length is derived from it) |
//! | 1     | sseqid   | Yes |
//! | 2     | pident   | Yes |
//! | 3     | length   | Yes |
//! | 4-9   | mismatch, gapopen, qstart, qend, sstart, send | No |
//! | 10    | evalue   | Yes |
//! | 11    | bitscore | Yes |
//!
//! ## Example
//!
//! ```rust
//! use campyser::parsing::tabular::parse_tabular_text;
//!
//! let row = "NODE_1_length_1000_cov_5\tACC001\t98.5\t950\t10\t1\t1\t950\t1\t950\t1e-50\t800\n";
//! let hits = parse_tabular_text(row);
//! assert_eq!(hits[0].query_length, 1000);
//! ```

use thiserror::Error;

pub mod fasta;
pub mod tabular;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),
}
