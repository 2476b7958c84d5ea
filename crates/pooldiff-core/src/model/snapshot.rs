//! Normalized snapshot: the ordered record set persisted per raw snapshot.
//!
//! ## Determinism Guarantees
//!
//! - Same raw input -> byte-identical `to_text()` and identical `digest()`
//! - Record order follows source block order; nothing is sorted or deduplicated

use crate::extract::extract;
use crate::model::record::PoolRecord;
use crate::{log_op_end, log_op_start};
use sha2::{Digest, Sha256};
use std::time::Instant;

/// Ordered sequence of pool records extracted from one raw snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedSnapshot {
    records: Vec<PoolRecord>,
}

impl NormalizedSnapshot {
    pub fn from_records(records: Vec<PoolRecord>) -> Self {
        Self { records }
    }

    /// Run the extractor over a raw snapshot and collect its records
    pub fn from_raw(raw: &str) -> Self {
        let start = Instant::now();
        log_op_start!("normalize_snapshot", input_bytes = raw.len());

        let records: Vec<PoolRecord> = extract(raw).collect();

        log_op_end!(
            "normalize_snapshot",
            duration_ms = start.elapsed().as_millis() as u64,
            record_count = records.len(),
        );
        Self { records }
    }

    /// Read a previously serialized normalized body
    ///
    /// Blank lines are skipped. Use the line-level differ on raw text when
    /// exact byte fidelity matters; this is for pool-level inspection.
    pub fn from_text(body: &str) -> Self {
        Self {
            records: body.lines().filter_map(PoolRecord::from_line).collect(),
        }
    }

    pub fn records(&self) -> &[PoolRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records whose block had no status line
    pub fn missing_status_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_status_missing()).count()
    }

    /// One serialized line per record, without terminators
    pub fn lines(&self) -> Vec<String> {
        self.records.iter().map(PoolRecord::to_string).collect()
    }

    /// Serialized body: every record on its own newline-terminated line
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&record.to_string());
            out.push('\n');
        }
        out
    }

    /// Hex-encoded SHA256 of `to_text()`
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.to_text().as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl FromIterator<PoolRecord> for NormalizedSnapshot {
    fn from_iter<I: IntoIterator<Item = PoolRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
