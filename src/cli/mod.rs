//! Command-line interface for campyser.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **analyze**: Run blastn on an assembly and predict its serotype
//! - **interpret**: Predict a serotype from existing tabular blastn output
//! - **build-db**: Build the serotype BLAST database from reference sequences
//!
//! ## Usage
//!
//! ```text
//! # Serotype an assembly
//! campyser analyze sample.fasta
//!
//! # Custom database and serotype map, with detailed results
//! campyser -v analyze sample.fasta --database /path/to/db --serotype-map ser_an.txt
//!
//! # Interpret results produced elsewhere
//! blastn -query sample.fasta -db database/campylobacter_db -outfmt 6 | campyser interpret -
//!
//! # JSON output for scripting
//! campyser --format json analyze sample.fasta
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod analyze;
pub mod build_db;
pub mod interpret;
pub mod report;

/// Default location of the accession to serotype table
pub const DEFAULT_SEROTYPE_MAP: &str = "ser_an.txt";

#[derive(Parser)]
#[command(name = "campyser")]
#[command(version)]
#[command(about = "Campylobacter serotyping from assembled genomes")]
#[command(
    long_about = "campyser predicts the serotype of a Campylobacter assembly.\n\nContigs are aligned with blastn against a database of serotype reference sequences. Hits with at least 95% identity and 80% query coverage are reported as serotype calls, strongest bit score first."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict the serotype of an assembled genome
    Analyze(analyze::AnalyzeArgs),

    /// Predict a serotype from existing tabular alignment output
    Interpret(interpret::InterpretArgs),

    /// Build the serotype reference database
    BuildDb(build_db::BuildDbArgs),
}

/// Options shared by commands that load the serotype map
#[derive(clap::Args, Clone, Debug)]
pub struct SerotypeMapArgs {
    /// Accession to serotype table (TSV with header: serotype, accession)
    #[arg(short = 'm', long, default_value = DEFAULT_SEROTYPE_MAP)]
    pub serotype_map: PathBuf,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
