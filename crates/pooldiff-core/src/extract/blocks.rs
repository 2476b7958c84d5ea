//! Block splitting.

use std::iter::FusedIterator;

/// A standalone closing-brace line: newline, `}`, newline
pub const BLOCK_DELIMITER: &str = "\n}\n";

/// Iterator over the raw blocks of a snapshot
///
/// Yields the text between delimiters, then the trailing fragment after the
/// last delimiter (empty if the input ends with one). Input with no delimiter
/// is a single block; empty input is a single empty block.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    inner: std::str::Split<'a, &'static str>,
}

pub fn split_blocks(raw: &str) -> Blocks<'_> {
    Blocks {
        inner: raw.split(BLOCK_DELIMITER),
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.inner.next()
    }
}

impl FusedIterator for Blocks<'_> {}
