//! # campyser
//!
//! A library for predicting the serotype of Campylobacter genome assemblies.
//!
//! Serotype is decided by the capsular locus an isolate carries. `campyser`
//! aligns assembled contigs against a curated database of serotype reference
//! sequences with `blastn`, then interprets the tabular alignment output:
//!
//! 1. **Parse** each result row into an [`AlignmentHit`], deriving the query
//!    length from assembler-style contig names and the query coverage from it
//! 2. **Rank** hits by bit score, strongest first
//! 3. **Call** a serotype for every hit with at least 95% identity and 80%
//!    coverage, labelled through the [`SerotypeMap`]
//!
//! The first call is the prediction. No call means no serotype was detected.
//!
//! ## Example
//!
//! ```rust
//! use campyser::{CallMethod, SerotypeMap, SerotypingEngine};
//! use campyser::parsing::tabular::parse_tabular_text;
//!
//! let map = SerotypeMap::from_tsv_text("serotype\taccession\nO:2\tACC001\n");
//! let hits = parse_tabular_text(
//!     "NODE_1_length_1000_cov_5\tACC001\t98.5\t950\t10\t1\t1\t950\t1\t950\t1e-50\t800\n",
//! );
//!
//! let analysis = SerotypingEngine::new(&map, CallMethod::Alignment).analyze(hits);
//! match analysis.best_call() {
//!     Some(call) => println!("{} ({:.1}% identity)", call.serotype, call.identity_pct),
//!     None => println!("No serotype detected"),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`aligner`]: Running blastn and makeblastdb
//! - [`catalog`]: Accession to serotype lookup
//! - [`core`]: Hit and call data types
//! - [`matching`]: Ranking and serotype calling
//! - [`parsing`]: Parsers for tabular alignment output and FASTA files
//! - [`cli`]: Command-line interface implementation

pub mod aligner;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;

// Re-export commonly used types for convenience
pub use catalog::SerotypeMap;
pub use core::call::SerotypeCall;
pub use core::hit::AlignmentHit;
pub use core::types::*;
pub use matching::engine::{Analysis, SerotypingEngine};
