//! Parse commands
//!
//! Usage: pooldiff parse <INPUT> [--output <FILE> | --output-dir <DIR>]
//!        pooldiff parse-all [--dir <DIR>] [--output-dir <DIR>]

use super::{resolve_config, CommandResult};
use clap::Args;
use pooldiff_store::parse::{parse_all, parse_snapshot_file, BatchProgress, ParseOutcome};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Raw snapshot file
    pub input: PathBuf,

    /// Output file (default: <name>_parsed.txt next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory for the output file
    #[arg(long, conflicts_with = "output")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ParseAllArgs {
    /// Directory holding pool_snapshot_<id>.txt files
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Directory for normalized output (default: alongside the inputs)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

/// Execute parse command
pub fn execute(args: ParseArgs, config: Option<&Path>) -> CommandResult {
    let input_dir = args
        .input
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let config = resolve_config(config, Some(input_dir))?;

    let output = match (args.output, args.output_dir) {
        (Some(output), _) => output,
        (None, Some(dir)) => config.naming.parsed_path_for(&args.input, Some(&dir)),
        (None, None) => config.parsed_path_for(&args.input),
    };

    println!("Parsing {}...", args.input.display());
    let outcome = parse_snapshot_file(&args.input, &output)?;
    report_outcome(&outcome);
    println!("✓ Wrote {}", outcome.output.display());
    Ok(())
}

/// Execute parse-all command
pub fn execute_all(args: ParseAllArgs, config: Option<&Path>) -> CommandResult {
    let mut config = resolve_config(config, args.dir.as_deref())?;
    if let Some(output_dir) = args.output_dir {
        config.output_dir = Some(output_dir);
    }

    let report = parse_all(&config, |progress| match progress {
        BatchProgress::Started(path) => println!("Parsing {}...", path.display()),
        BatchProgress::Parsed(outcome) => report_outcome(outcome),
        BatchProgress::Skipped(path, err) => eprintln!("Skipped {}: {}", path.display(), err),
    })?;
    if report.is_empty() {
        return Err(format!("No snapshot files found in {}", config.input_dir.display()).into());
    }

    println!(
        "Parsed {} snapshot(s), skipped {}",
        report.parsed.len(),
        report.failures.len()
    );
    Ok(())
}

fn report_outcome(outcome: &ParseOutcome) {
    println!(
        "Found {} pools in {}",
        outcome.record_count,
        outcome.input.display()
    );
    if outcome.missing_status_count > 0 {
        eprintln!(
            "warning: {} pool(s) in {} have no status.availability-state",
            outcome.missing_status_count,
            outcome.input.display()
        );
    }
}
