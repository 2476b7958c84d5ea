//! Diff commands
//!
//! Usage: pooldiff diff <A> <B> [--all] [--line-numbers] [--summary]
//!        pooldiff compare [--dir <DIR>] [--first <N> --second <M>] [--sort name|modified]

use super::{resolve_config, CommandResult, SortArg};
use clap::Args;
use pooldiff_core::diff::{render_pool_summary, render_unified, RenderOptions};
use pooldiff_store::catalog::{SnapshotCatalog, SnapshotKind};
use pooldiff_store::compare::{compare_files, Comparison};
use pooldiff_store::config::PoolDiffConfig;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct DisplayArgs {
    /// Show unchanged lines too
    #[arg(long)]
    pub all: bool,

    /// Prefix lines with their positions in both snapshots
    #[arg(long)]
    pub line_numbers: bool,

    /// Append a per-pool summary after the line diff
    #[arg(long)]
    pub summary: bool,
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Older normalized snapshot
    pub a: PathBuf,

    /// Newer normalized snapshot
    pub b: PathBuf,

    #[command(flatten)]
    pub display: DisplayArgs,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Snapshot directory
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// First snapshot number as shown by `pooldiff list`
    #[arg(long, requires = "second")]
    pub first: Option<usize>,

    /// Second snapshot number as shown by `pooldiff list`
    #[arg(long, requires = "first")]
    pub second: Option<usize>,

    /// Numbering order (default from config: name)
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Execute diff command
///
/// Both files are named explicitly, so configuration is read only from an
/// explicit `--config`; nothing is looked up in the working directory.
pub fn execute(args: DiffArgs, config: Option<&Path>) -> CommandResult {
    let config = match config {
        Some(path) => PoolDiffConfig::load(path)?,
        None => PoolDiffConfig::default(),
    };
    let comparison = compare_files(&args.a, &args.b)?;
    print_comparison(&comparison, &args.display, config.show_unchanged);
    Ok(())
}

/// Execute compare command
pub fn execute_compare(args: CompareArgs, config: Option<&Path>) -> CommandResult {
    let config = resolve_config(config, args.dir.as_deref())?;
    let order = args.sort.map(Into::into).unwrap_or(config.sort_order);
    let catalog = SnapshotCatalog::discover(
        config.parsed_dir(),
        SnapshotKind::Parsed,
        &config.naming,
        order,
    )?;

    let (a, b) = match (args.first, args.second) {
        (Some(first), Some(second)) => catalog.select_pair(first, second)?,
        _ => catalog.latest_pair()?,
    };

    let comparison = compare_files(&a.path, &b.path)?;
    print_comparison(&comparison, &args.display, config.show_unchanged);
    Ok(())
}

fn print_comparison(comparison: &Comparison, display: &DisplayArgs, show_unchanged: bool) {
    let (label_a, label_b) = (comparison.a.label(), comparison.b.label());
    let options = RenderOptions {
        show_unchanged: display.all || show_unchanged,
        line_numbers: display.line_numbers,
    };

    print!(
        "{}",
        render_unified(&comparison.report, &label_a, &label_b, options)
    );
    if display.summary && !comparison.report.is_identical() {
        println!();
        print!(
            "{}",
            render_pool_summary(&comparison.pool_summary(), &label_a, &label_b)
        );
    }
}
