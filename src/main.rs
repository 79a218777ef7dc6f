use std::process::ExitCode;

use campyser::cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("campyser=debug,info")
    } else {
        EnvFilter::new("campyser=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Analyze(args) => cli::analyze::run(args, cli.format, cli.verbose),
        cli::Commands::Interpret(args) => cli::interpret::run(args, cli.format, cli.verbose),
        cli::Commands::BuildDb(args) => cli::build_db::run(args, cli.format, cli.verbose),
    }
}
