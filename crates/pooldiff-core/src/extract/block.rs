//! Per-block token extraction.

use crate::model::PoolRecord;

/// Marks a pool definition block; the pool name follows it
pub const POOL_MARKER: &str = "ltm pool ";

/// Precedes the availability state value
pub const STATUS_MARKER: &str = "status.availability-state ";

/// Project a single block onto a record
///
/// Returns `None` when the block has no pool marker, or when the marker is
/// followed directly by whitespace or end of block (no name to report).
/// Only the first occurrence of each marker is used.
pub fn extract_block(block: &str) -> Option<PoolRecord> {
    let name_start = block.find(POOL_MARKER)? + POOL_MARKER.len();
    let pool_name = leading_token(&block[name_start..]);
    if pool_name.is_empty() {
        return None;
    }

    let availability_state = block
        .find(STATUS_MARKER)
        .map(|at| leading_token(&block[at + STATUS_MARKER.len()..]))
        .unwrap_or_default();

    Some(PoolRecord::new(pool_name, availability_state))
}

/// Run of characters up to the first whitespace (space, tab, CR, LF)
fn leading_token(text: &str) -> &str {
    let end = text.find(char::is_whitespace).unwrap_or(text.len());
    &text[..end]
}
