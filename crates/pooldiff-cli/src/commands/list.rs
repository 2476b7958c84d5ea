//! List command
//!
//! Usage: pooldiff list [--dir <DIR>] [--sort name|modified] [--raw]

use super::{resolve_config, CommandResult, SortArg};
use clap::Args;
use pooldiff_store::catalog::{SnapshotCatalog, SnapshotKind};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Snapshot directory
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Numbering order (default from config: name)
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// List raw snapshots instead of normalized ones
    #[arg(long)]
    pub raw: bool,
}

/// Execute list command
pub fn execute(args: ListArgs, config: Option<&Path>) -> CommandResult {
    let config = resolve_config(config, args.dir.as_deref())?;
    let order = args.sort.map(Into::into).unwrap_or(config.sort_order);

    let (kind, dir) = if args.raw {
        (SnapshotKind::Raw, config.input_dir.as_path())
    } else {
        (SnapshotKind::Parsed, config.parsed_dir())
    };
    let catalog = SnapshotCatalog::discover(dir, kind, &config.naming, order)?;

    if catalog.is_empty() {
        println!("No snapshot files found in {}", dir.display());
        return Ok(());
    }

    println!("Available files:");
    for (i, entry) in catalog.entries().iter().enumerate() {
        println!(
            "{}. {}  ({})",
            i + 1,
            entry.file_name(),
            entry.modified.format("%Y-%m-%d %H:%M:%S")
        );
    }
    if !catalog.has_comparable_pair() {
        eprintln!("Need at least 2 files to compare");
    }
    Ok(())
}
