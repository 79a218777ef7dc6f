use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Args;

use crate::catalog::SerotypeMap;
use crate::cli::report::{self, ReportOptions};
use crate::cli::{OutputFormat, SerotypeMapArgs};
use crate::core::types::CallMethod;
use crate::matching::{SerotypingEngine, DEFAULT_HIT_WINDOW};
use crate::parsing::tabular::{parse_tabular_file, parse_tabular_reader};

#[derive(Args)]
pub struct InterpretArgs {
    /// Tabular alignment output (blastn -outfmt 6). Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    #[command(flatten)]
    pub map: SerotypeMapArgs,

    /// Number of ranked hits to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_HIT_WINDOW)]
    pub hits: usize,

    /// Output file for results (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute interpret subcommand
///
/// # Errors
///
/// Returns an error if the alignment output cannot be read or the results
/// cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: InterpretArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<ExitCode> {
    let from_stdin = args.input.to_string_lossy() == "-";
    let hits = if from_stdin {
        parse_tabular_reader(std::io::stdin().lock())?
    } else {
        parse_tabular_file(&args.input)
            .with_context(|| format!("Failed to read {}", args.input.display()))?
    };

    let map = SerotypeMap::load(&args.map.serotype_map)?;
    // Existing tabular output comes from a blastn run
    let analysis = SerotypingEngine::new(&map, CallMethod::Alignment).analyze(hits);

    let source = if from_stdin {
        "stdin".to_string()
    } else {
        args.input.display().to_string()
    };
    let options = ReportOptions {
        verbose,
        hit_window: args.hits,
        preamble: vec![
            format!("Alignment results: {source}"),
            format!("Serotype map: {}", args.map.serotype_map.display()),
        ],
        ..ReportOptions::default()
    };
    report::emit(&analysis, format, &options, args.output.as_deref())
}
