use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Args;
use tracing::{info, warn};

use crate::aligner::blastn::DEFAULT_DATABASE;
use crate::aligner::{build_database, DEFAULT_DATABASE_TITLE};
use crate::catalog::SerotypeMap;
use crate::cli::{OutputFormat, SerotypeMapArgs};
use crate::parsing::fasta::read_contigs;

#[derive(Args)]
pub struct BuildDbArgs {
    /// Reference sequences, one record per serotype accession
    #[arg(short, long, required = true)]
    pub reference: PathBuf,

    #[command(flatten)]
    pub map: SerotypeMapArgs,

    /// Output database prefix
    #[arg(long, default_value = DEFAULT_DATABASE)]
    pub out: PathBuf,

    /// makeblastdb executable
    #[arg(long, default_value = "makeblastdb")]
    pub makeblastdb: PathBuf,

    /// Database title
    #[arg(long, default_value = DEFAULT_DATABASE_TITLE)]
    pub title: String,
}

/// Execute build-db subcommand
///
/// # Errors
///
/// Returns an error if the reference FASTA cannot be read or makeblastdb is
/// missing or fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: BuildDbArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<ExitCode> {
    let contigs = read_contigs(&args.reference)
        .with_context(|| format!("Failed to read {}", args.reference.display()))?;
    let map = SerotypeMap::load(&args.map.serotype_map)?;
    info!(
        "Found {} reference sequences and {} serotype labels",
        contigs.len(),
        map.len()
    );

    let names: HashSet<&str> = contigs.iter().map(|c| c.name.as_str()).collect();
    let unlabelled: Vec<&str> = contigs
        .iter()
        .map(|c| c.name.as_str())
        .filter(|name| !map.contains(name))
        .collect();
    let mut missing: Vec<&str> = map.accessions().filter(|a| !names.contains(a)).collect();
    missing.sort_unstable();

    if !map.is_empty() {
        for name in &unlabelled {
            warn!("Reference {name} has no serotype label; calls will use the accession");
        }
    }
    for accession in &missing {
        warn!("Serotype accession {accession} is not in the reference FASTA");
    }

    build_database(&args.makeblastdb, &args.reference, &args.out, &args.title)
        .context("Failed to build BLAST database")?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "database": args.out.display().to_string(),
                "sequences": contigs.len(),
                "unlabelled": unlabelled,
                "missing_from_reference": missing,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("database\tsequences\tunlabelled\tmissing_from_reference");
            println!(
                "{}\t{}\t{}\t{}",
                args.out.display(),
                contigs.len(),
                unlabelled.len(),
                missing.len()
            );
        }
        OutputFormat::Text => {
            println!("BLAST database: {}", args.out.display());
            println!("Sequences: {}", contigs.len());
            if !missing.is_empty() {
                println!(
                    "Serotype accessions missing from reference ({}):",
                    missing.len()
                );
                for accession in &missing {
                    println!("  - {accession}");
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
