pub mod diff;
pub mod list;
pub mod parse;

use clap::ValueEnum;
use pooldiff_store::config::{PoolDiffConfig, SortOrder};
use std::path::Path;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Snapshot numbering policy as a CLI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Name,
    Modified,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortOrder::Name,
            SortArg::Modified => SortOrder::Modified,
        }
    }
}

/// Build the effective configuration
///
/// An explicit `--config` file is loaded and `--dir` overrides its input
/// directory. Without one, `pooldiff.toml` is looked up in `--dir` (or the
/// current directory).
pub fn resolve_config(
    config: Option<&Path>,
    dir: Option<&Path>,
) -> Result<PoolDiffConfig, Box<dyn std::error::Error>> {
    let resolved = match (config, dir) {
        (Some(path), Some(dir)) => PoolDiffConfig {
            input_dir: dir.to_path_buf(),
            ..PoolDiffConfig::load(path)?
        },
        (Some(path), None) => PoolDiffConfig::load(path)?,
        (None, Some(dir)) => PoolDiffConfig::discover(dir)?,
        (None, None) => PoolDiffConfig::discover(Path::new("."))?,
    };
    Ok(resolved)
}
