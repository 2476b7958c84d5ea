//! Configuration
//!
//! Every location is an explicit value; nothing depends on the process
//! working directory beyond the CLI's own defaults.
//!
//! ```toml
//! input_dir = "snapshots"
//! output_dir = "snapshots/parsed"
//! sort_order = "modified"
//! show_unchanged = false
//!
//! [naming]
//! prefix = "pool_snapshot_"
//! raw_suffix = ".txt"
//! parsed_suffix = "_parsed.txt"
//! ```
//!
//! Relative directories in a config file resolve against the file's own
//! directory.

use crate::errors::{invalid_config, Result};
use crate::io::read_snapshot;
use crate::naming::NamingScheme;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file picked up from the input directory when no path is given
pub const CONFIG_FILE_NAME: &str = "pooldiff.toml";

/// How discovered snapshots are numbered
///
/// `Name` is the default: snapshot ids are usually timestamps, and file names
/// are stable across copies and platforms where modification times are not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Lexical by file name, ascending
    #[default]
    Name,
    /// Oldest modification time first; ties broken by file name
    Modified,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoolDiffConfig {
    /// Where raw snapshots are discovered
    pub input_dir: PathBuf,
    /// Where normalized output is written; `None` means next to the input
    pub output_dir: Option<PathBuf>,
    pub sort_order: SortOrder,
    /// Render unchanged lines in diffs
    pub show_unchanged: bool,
    pub naming: NamingScheme,
}

impl Default for PoolDiffConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: None,
            sort_order: SortOrder::default(),
            show_unchanged: false,
            naming: NamingScheme::default(),
        }
    }
}

impl PoolDiffConfig {
    /// Defaults rooted at `input_dir`
    pub fn for_dir(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            ..Self::default()
        }
    }

    /// Load a config file
    ///
    /// # Errors
    ///
    /// `MissingInput` when the file cannot be read, `InvalidConfig` when it
    /// is not valid TOML for this schema.
    pub fn load(path: &Path) -> Result<Self> {
        let text = read_snapshot(path)?;
        let mut config: PoolDiffConfig =
            toml::from_str(&text).map_err(|e| invalid_config(path, e))?;

        if let Some(base) = path.parent() {
            config.input_dir = base.join(&config.input_dir);
            config.output_dir = config.output_dir.map(|dir| base.join(dir));
        }
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load `<dir>/pooldiff.toml` if present, otherwise defaults for `dir`
    ///
    /// # Errors
    ///
    /// Same as [`PoolDiffConfig::load`] when the file exists.
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::for_dir(dir))
        }
    }

    /// Directory that holds normalized snapshots
    pub fn parsed_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or(&self.input_dir)
    }

    /// Output path for a raw snapshot under this configuration
    pub fn parsed_path_for(&self, input: &Path) -> PathBuf {
        self.naming
            .parsed_path_for(input, self.output_dir.as_deref())
    }
}
