//! pooldiff CLI
//!
//! Command-line interface for parsing and comparing pool snapshots

use clap::{Parser, Subcommand, ValueEnum};
use pooldiff_core::logging_facility::{init, Profile};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "pooldiff")]
#[command(about = "pooldiff - Load-balancer pool snapshot comparison", long_about = None)]
struct Cli {
    /// Configuration file (default: pooldiff.toml in the snapshot directory, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Structured log output on stderr
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Off)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Off,
    Human,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse one raw snapshot into a normalized snapshot
    Parse(commands::parse::ParseArgs),
    /// Parse every raw snapshot in a directory
    ParseAll(commands::parse::ParseAllArgs),
    /// List normalized (or raw) snapshots with their selection numbers
    List(commands::list::ListArgs),
    /// Diff two normalized snapshot files
    Diff(commands::diff::DiffArgs),
    /// Diff two normalized snapshots picked by number from a directory
    Compare(commands::diff::CompareArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.log_format {
        LogFormat::Off => {}
        LogFormat::Human => init(Profile::Development),
        LogFormat::Json => init(Profile::Production),
    }

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Parse(args) => commands::parse::execute(args, config),
        Commands::ParseAll(args) => commands::parse::execute_all(args, config),
        Commands::List(args) => commands::list::execute(args, config),
        Commands::Diff(args) => commands::diff::execute(args, config),
        Commands::Compare(args) => commands::diff::execute_compare(args, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
