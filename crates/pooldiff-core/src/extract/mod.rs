//! Record extractor.
//!
//! Two stages, each testable on its own:
//!
//! 1. [`blocks::split_blocks`] cuts the raw dump on standalone `}` lines.
//! 2. [`block::extract_block`] projects one block onto a [`PoolRecord`], or
//!    skips it when the block is not a pool definition.
//!
//! [`extract`] chains the two lazily. The returned iterator is `Clone`, and a
//! fresh call re-parses from the start, so extraction is restartable.

pub mod block;
pub mod blocks;

pub use block::{extract_block, POOL_MARKER, STATUS_MARKER};
pub use blocks::{split_blocks, Blocks, BLOCK_DELIMITER};

use crate::model::PoolRecord;
use std::iter::FusedIterator;

/// Lazy sequence of records extracted from one raw snapshot
#[derive(Debug, Clone)]
pub struct PoolRecords<'a> {
    blocks: Blocks<'a>,
}

/// Extract pool records from a raw snapshot, in block order
///
/// Never fails: blocks without the pool marker are skipped, and a pool block
/// without a status line yields a record with an empty state.
pub fn extract(raw: &str) -> PoolRecords<'_> {
    PoolRecords {
        blocks: split_blocks(raw),
    }
}

impl Iterator for PoolRecords<'_> {
    type Item = PoolRecord;

    fn next(&mut self) -> Option<PoolRecord> {
        for block in self.blocks.by_ref() {
            if let Some(record) = extract_block(block) {
                if record.is_status_missing() {
                    tracing::warn!(
                        pool_name = %record.pool_name,
                        "pool block has no status.availability-state line"
                    );
                }
                return Some(record);
            }
        }
        None
    }
}

impl FusedIterator for PoolRecords<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restart_yields_same_records() {
        let raw = "ltm pool /Common/a {\n    status.availability-state available\n}\nltm pool /Common/b {\n    status.availability-state offline\n}\n";
        let records = extract(raw);
        let first: Vec<_> = records.clone().collect();
        let second: Vec<_> = records.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_noise_blocks_are_skipped() {
        let raw = "sys global-settings {\n    hostname lb01\n}\nltm pool /Common/a {\n    status.availability-state available\n}\nltm virtual /Common/vs {\n}\n";
        let records: Vec<_> = extract(raw).collect();
        assert_eq!(records, vec![PoolRecord::new("/Common/a", "available")]);
    }
}
