//! File-level comparison of two normalized snapshots

use crate::errors::Result;
use crate::io::read_snapshot;
use pooldiff_core::diff::{diff_texts, summarize, PoolSummary};
use pooldiff_core::{log_op_end, log_op_start, DiffReport, NormalizedSnapshot};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// A normalized snapshot as read from disk
#[derive(Debug, Clone)]
pub struct LoadedSnapshot {
    pub path: PathBuf,
    pub body: String,
}

impl LoadedSnapshot {
    /// # Errors
    ///
    /// `MissingInput` when the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self {
            path: path.to_path_buf(),
            body: read_snapshot(path)?,
        })
    }

    /// File name for report headers
    pub fn label(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn snapshot(&self) -> NormalizedSnapshot {
        NormalizedSnapshot::from_text(&self.body)
    }
}

/// Two loaded snapshots and the edit script between them
#[derive(Debug, Clone)]
pub struct Comparison {
    pub a: LoadedSnapshot,
    pub b: LoadedSnapshot,
    pub report: DiffReport,
}

impl Comparison {
    pub fn pool_summary(&self) -> PoolSummary {
        summarize(&self.a.snapshot(), &self.b.snapshot())
    }
}

/// Read two normalized files and diff them line by line
///
/// # Errors
///
/// `MissingInput` when either file cannot be read.
pub fn compare_files(a: &Path, b: &Path) -> Result<Comparison> {
    let start = Instant::now();
    log_op_start!("compare_files", a = %a.display(), b = %b.display());

    let a = LoadedSnapshot::load(a)?;
    let b = LoadedSnapshot::load(b)?;
    let report = diff_texts(&a.body, &b.body);

    log_op_end!(
        "compare_files",
        duration_ms = start.elapsed().as_millis() as u64,
        change_count = report.stats().changes(),
    );
    Ok(Comparison { a, b, report })
}
