//! Snapshot file naming convention
//!
//! Raw snapshots are `<prefix><id><raw_suffix>`, their normalized output is
//! `<prefix><id><parsed_suffix>`. With the defaults that is
//! `pool_snapshot_<id>.txt` -> `pool_snapshot_<id>_parsed.txt`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_PREFIX: &str = "pool_snapshot_";
pub const DEFAULT_RAW_SUFFIX: &str = ".txt";
pub const DEFAULT_PARSED_SUFFIX: &str = "_parsed.txt";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingScheme {
    pub prefix: String,
    pub raw_suffix: String,
    pub parsed_suffix: String,
}

impl Default for NamingScheme {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            raw_suffix: DEFAULT_RAW_SUFFIX.to_string(),
            parsed_suffix: DEFAULT_PARSED_SUFFIX.to_string(),
        }
    }
}

impl NamingScheme {
    /// True for `<prefix><id><raw_suffix>` names that are not parsed output
    pub fn is_raw(&self, file_name: &str) -> bool {
        !self.is_parsed(file_name) && self.strip(file_name, &self.raw_suffix).is_some()
    }

    pub fn is_parsed(&self, file_name: &str) -> bool {
        self.strip(file_name, &self.parsed_suffix).is_some()
    }

    /// The `<id>` part of a raw or parsed snapshot name
    pub fn snapshot_id(&self, file_name: &str) -> Option<String> {
        self.strip(file_name, &self.parsed_suffix)
            .or_else(|| self.strip(file_name, &self.raw_suffix))
            .map(str::to_string)
    }

    /// File name of the normalized output for a raw input name
    ///
    /// Names outside the convention keep their full name and gain the
    /// parsed suffix, so any input maps to a distinct output.
    pub fn parsed_file_name(&self, raw_name: &str) -> String {
        let stem = raw_name
            .strip_suffix(self.raw_suffix.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(raw_name);
        format!("{}{}", stem, self.parsed_suffix)
    }

    /// Output path for `input`, placed in `output_dir` (or next to the input)
    pub fn parsed_path_for(&self, input: &Path, output_dir: Option<&Path>) -> PathBuf {
        let raw_name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name = self.parsed_file_name(&raw_name);
        match output_dir {
            Some(dir) => dir.join(file_name),
            None => input.with_file_name(file_name),
        }
    }

    fn strip<'a>(&self, file_name: &'a str, suffix: &str) -> Option<&'a str> {
        file_name
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(suffix)
            .filter(|id| !id.is_empty())
    }
}
