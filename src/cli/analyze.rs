use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Args;
use tracing::{info, warn};

use crate::aligner::blastn::{DEFAULT_DATABASE, DEFAULT_EVALUE, DEFAULT_MAX_TARGET_SEQS};
use crate::aligner::{Aligner, Blastn};
use crate::catalog::SerotypeMap;
use crate::cli::report::{self, ReportOptions};
use crate::cli::{OutputFormat, SerotypeMapArgs};
use crate::matching::{SerotypingEngine, DEFAULT_HIT_WINDOW};
use crate::parsing::fasta::{is_fasta_file, materialize_query, read_contigs};
use crate::parsing::tabular::parse_tabular_bytes;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input FASTA file to analyze (plain or gzip compressed)
    #[arg(required = true)]
    pub input: PathBuf,

    /// BLAST database path
    #[arg(short, long, default_value = DEFAULT_DATABASE)]
    pub database: PathBuf,

    #[command(flatten)]
    pub map: SerotypeMapArgs,

    /// blastn executable
    #[arg(long, default_value = "blastn")]
    pub blastn: PathBuf,

    /// E-value cutoff passed to blastn
    #[arg(long, default_value_t = DEFAULT_EVALUE)]
    pub evalue: f64,

    /// Maximum number of target sequences reported by blastn
    #[arg(long, default_value_t = DEFAULT_MAX_TARGET_SEQS)]
    pub max_target_seqs: usize,

    /// Number of ranked hits to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_HIT_WINDOW)]
    pub hits: usize,

    /// Output file for results (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute analyze subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read, blastn is missing or fails,
/// or the results cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AnalyzeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<ExitCode> {
    if !args.input.exists() {
        anyhow::bail!("File {} not found", args.input.display());
    }

    if !is_fasta_file(&args.input) {
        warn!(
            "{} does not have a FASTA extension; reading it as FASTA anyway",
            args.input.display()
        );
    }

    let contigs = read_contigs(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let total_bp: u64 = contigs.iter().map(|c| c.length).sum();
    info!(
        "Analyzing {} ({} contigs, {total_bp} bp)",
        args.input.display(),
        contigs.len()
    );

    let map = SerotypeMap::load(&args.map.serotype_map)?;

    let blastn = Blastn {
        program: args.blastn.clone(),
        database: args.database.clone(),
        evalue: args.evalue,
        max_target_seqs: args.max_target_seqs,
    };
    let query = materialize_query(&args.input)?;
    let raw = blastn.search(query.path()).context("BLAST analysis failed")?;

    let analysis = SerotypingEngine::new(&map, blastn.method()).analyze(parse_tabular_bytes(&raw));

    let options = ReportOptions {
        verbose,
        hit_window: args.hits,
        preamble: vec![
            format!("Analysis completed for: {}", args.input.display()),
            format!("Database: {}", args.database.display()),
        ],
        ..ReportOptions::default()
    };
    report::emit(&analysis, format, &options, args.output.as_deref())
}
