//! Snapshot discovery and selection
//!
//! Lists snapshot files by naming convention and numbers them 1..=N under an
//! explicit [`SortOrder`]. Callers pick two entries by number; the catalog
//! refuses to hand out a pair when fewer than two snapshots exist.

use crate::config::SortOrder;
use crate::errors::{missing_input, Result};
use crate::naming::NamingScheme;
use chrono::{DateTime, Local};
use pooldiff_core::errors::{ExError, PoolDiffError};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotKind {
    /// Raw configuration dumps awaiting extraction
    Raw,
    /// Normalized `<pool> <state>` bodies
    Parsed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotEntry {
    pub path: PathBuf,
    pub id: String,
    pub modified: DateTime<Local>,
}

impl SnapshotEntry {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SnapshotCatalog {
    entries: Vec<SnapshotEntry>,
}

impl SnapshotCatalog {
    /// Scan `dir` for snapshots of one kind
    ///
    /// Files whose metadata cannot be read are skipped with a warning.
    ///
    /// # Errors
    ///
    /// `MissingInput` when `dir` itself cannot be listed.
    pub fn discover(
        dir: &Path,
        kind: SnapshotKind,
        naming: &NamingScheme,
        order: SortOrder,
    ) -> Result<Self> {
        let listing = fs::read_dir(dir).map_err(|e| missing_input(dir, &e))?;

        let mut entries = Vec::new();
        for dir_entry in listing.filter_map(|e| e.ok()) {
            let file_name = dir_entry.file_name().to_string_lossy().into_owned();
            let matches = match kind {
                SnapshotKind::Raw => naming.is_raw(&file_name),
                SnapshotKind::Parsed => naming.is_parsed(&file_name),
            };
            if !matches {
                continue;
            }

            let path = dir_entry.path();
            let metadata = match fs::metadata(&path) {
                Ok(metadata) if metadata.is_file() => metadata,
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable snapshot");
                    continue;
                }
            };
            let modified = metadata
                .modified()
                .map(DateTime::<Local>::from)
                .unwrap_or_else(|_| DateTime::<Local>::from(std::time::UNIX_EPOCH));
            let id = naming.snapshot_id(&file_name).unwrap_or_default();

            entries.push(SnapshotEntry { path, id, modified });
        }

        tracing::debug!(dir = %dir.display(), count = entries.len(), ?kind, "discovered snapshots");
        Ok(Self::from_entries(entries, order))
    }

    pub fn from_entries(mut entries: Vec<SnapshotEntry>, order: SortOrder) -> Self {
        match order {
            SortOrder::Name => entries.sort_by_key(|e| e.file_name()),
            SortOrder::Modified => {
                entries.sort_by(|a, b| {
                    a.modified
                        .cmp(&b.modified)
                        .then_with(|| a.file_name().cmp(&b.file_name()))
                })
            }
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[SnapshotEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a comparison can be offered at all
    pub fn has_comparable_pair(&self) -> bool {
        self.entries.len() >= 2
    }

    /// Entry by 1-based position
    ///
    /// # Errors
    ///
    /// `InvalidInput` when `index` is 0 or past the end.
    pub fn select(&self, index: usize) -> Result<&SnapshotEntry> {
        index
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .ok_or_else(|| {
                ExError::from(PoolDiffError::SelectionOutOfRange {
                    index,
                    available: self.entries.len(),
                })
            })
    }

    /// Two entries by 1-based position
    ///
    /// # Errors
    ///
    /// `NotEnoughSnapshots` when fewer than two exist, otherwise as
    /// [`SnapshotCatalog::select`].
    pub fn select_pair(
        &self,
        first: usize,
        second: usize,
    ) -> Result<(&SnapshotEntry, &SnapshotEntry)> {
        self.ensure_comparable()?;
        Ok((self.select(first)?, self.select(second)?))
    }

    /// The last two entries in catalog order, older first
    ///
    /// # Errors
    ///
    /// `NotEnoughSnapshots` when fewer than two exist.
    pub fn latest_pair(&self) -> Result<(&SnapshotEntry, &SnapshotEntry)> {
        self.ensure_comparable()?;
        let n = self.entries.len();
        Ok((&self.entries[n - 2], &self.entries[n - 1]))
    }

    fn ensure_comparable(&self) -> Result<()> {
        if self.has_comparable_pair() {
            Ok(())
        } else {
            Err(PoolDiffError::NotEnoughSnapshots {
                available: self.entries.len(),
            }
            .into())
        }
    }
}
