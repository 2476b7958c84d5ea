//! Raw snapshot -> normalized snapshot file
//!
//! The extractor itself is pure; this module owns reading the input,
//! writing the output, and carrying on past unreadable files in a batch.

use crate::catalog::{SnapshotCatalog, SnapshotKind};
use crate::config::PoolDiffConfig;
use crate::errors::Result;
use crate::io::{atomic_write, read_snapshot};
use pooldiff_core::errors::ExError;
use pooldiff_core::{log_op_end, log_op_error, log_op_start, NormalizedSnapshot};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Result of normalizing one snapshot file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub record_count: usize,
    /// Pool blocks that had no `status.availability-state` line
    pub missing_status_count: usize,
    /// SHA256 of the written body
    pub digest: String,
}

/// Parse `input` and write the normalized body to `output`
///
/// Accepts any path pair; the naming convention is applied by callers.
///
/// # Errors
///
/// `MissingInput` when `input` cannot be read, `Io` when `output` cannot be
/// written. Snapshot content never causes an error.
pub fn parse_snapshot_file(input: &Path, output: &Path) -> Result<ParseOutcome> {
    let start = Instant::now();
    log_op_start!("parse_snapshot_file", path = %input.display());

    let result = read_snapshot(input).and_then(|raw| {
        let snapshot = NormalizedSnapshot::from_raw(&raw);
        let body = snapshot.to_text();
        atomic_write(output, body.as_bytes())?;
        Ok(ParseOutcome {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            record_count: snapshot.len(),
            missing_status_count: snapshot.missing_status_count(),
            digest: snapshot.digest(),
        })
    });

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(outcome) => {
            log_op_end!(
                "parse_snapshot_file",
                duration_ms = duration_ms,
                path = %input.display(),
                record_count = outcome.record_count,
            );
        }
        Err(err) => {
            log_op_error!(
                "parse_snapshot_file",
                err,
                duration_ms = duration_ms,
                path = %input.display(),
            );
        }
    }
    result
}

/// Per-file progress of a directory-wide parse, reported as it happens
#[derive(Debug, Clone, Copy)]
pub enum BatchProgress<'a> {
    /// About to read this raw snapshot
    Started(&'a Path),
    Parsed(&'a ParseOutcome),
    /// The file failed and the batch moves on
    Skipped(&'a Path, &'a ExError),
}

/// Outcome of a directory-wide parse
#[derive(Debug, Default)]
pub struct BatchReport {
    pub parsed: Vec<ParseOutcome>,
    /// Files that were skipped, with the reason
    pub failures: Vec<(PathBuf, ExError)>,
}

impl BatchReport {
    pub fn is_empty(&self) -> bool {
        self.parsed.is_empty() && self.failures.is_empty()
    }
}

/// Parse every raw snapshot found in `config.input_dir`
///
/// A file that fails is recorded in [`BatchReport::failures`] and the batch
/// moves on. `progress` sees every file before and after it is parsed.
///
/// # Errors
///
/// `MissingInput` only when the input directory cannot be listed.
pub fn parse_all<F>(config: &PoolDiffConfig, mut progress: F) -> Result<BatchReport>
where
    F: FnMut(BatchProgress<'_>),
{
    let catalog = SnapshotCatalog::discover(
        &config.input_dir,
        SnapshotKind::Raw,
        &config.naming,
        config.sort_order,
    )?;

    let mut report = BatchReport::default();
    for entry in catalog.entries() {
        progress(BatchProgress::Started(&entry.path));
        let output = config.parsed_path_for(&entry.path);
        match parse_snapshot_file(&entry.path, &output) {
            Ok(outcome) => {
                progress(BatchProgress::Parsed(&outcome));
                report.parsed.push(outcome);
            }
            Err(err) => {
                progress(BatchProgress::Skipped(&entry.path, &err));
                report.failures.push((entry.path.clone(), err));
            }
        }
    }
    Ok(report)
}
