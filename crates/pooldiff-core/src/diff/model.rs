//! Edit script types.

/// One line-level edit operation
///
/// Line numbers are 1-based positions in the respective input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// Line present in both inputs
    Equal {
        old_line: usize,
        new_line: usize,
        text: String,
    },
    /// Line only in `a`
    Delete { old_line: usize, text: String },
    /// Line only in `b`
    Insert { new_line: usize, text: String },
}

impl EditOp {
    pub fn text(&self) -> &str {
        match self {
            EditOp::Equal { text, .. } | EditOp::Delete { text, .. } | EditOp::Insert { text, .. } => {
                text
            }
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, EditOp::Equal { .. })
    }
}

/// Counts of each operation kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub unchanged: usize,
    pub deleted: usize,
    pub inserted: usize,
}

impl DiffStats {
    /// Total insert+delete count (the edit distance)
    pub fn changes(&self) -> usize {
        self.deleted + self.inserted
    }
}

/// Ordered edit script transforming `a` into `b`
///
/// Empty when the inputs are identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffReport {
    ops: Vec<EditOp>,
}

impl DiffReport {
    pub(crate) fn new(ops: Vec<EditOp>) -> Self {
        Self { ops }
    }

    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    pub fn is_identical(&self) -> bool {
        self.ops.is_empty()
    }

    /// Only the insert and delete operations, in script order
    pub fn changes(&self) -> impl Iterator<Item = &EditOp> {
        self.ops.iter().filter(|op| op.is_change())
    }

    pub fn stats(&self) -> DiffStats {
        self.ops.iter().fold(DiffStats::default(), |mut stats, op| {
            match op {
                EditOp::Equal { .. } => stats.unchanged += 1,
                EditOp::Delete { .. } => stats.deleted += 1,
                EditOp::Insert { .. } => stats.inserted += 1,
            }
            stats
        })
    }

    /// Rebuild `b` from `a` and this script
    pub fn apply<S: AsRef<str>>(&self, a: &[S]) -> Vec<String> {
        if self.is_identical() {
            return a.iter().map(|line| line.as_ref().to_string()).collect();
        }
        self.ops
            .iter()
            .filter_map(|op| match op {
                EditOp::Equal { old_line, text, .. } => Some(
                    a.get(old_line - 1)
                        .map_or_else(|| text.clone(), |line| line.as_ref().to_string()),
                ),
                EditOp::Insert { text, .. } => Some(text.clone()),
                EditOp::Delete { .. } => None,
            })
            .collect()
    }

    /// Rebuild `a` from `b` and this script
    pub fn revert<S: AsRef<str>>(&self, b: &[S]) -> Vec<String> {
        if self.is_identical() {
            return b.iter().map(|line| line.as_ref().to_string()).collect();
        }
        self.ops
            .iter()
            .filter_map(|op| match op {
                EditOp::Equal { new_line, text, .. } => Some(
                    b.get(new_line - 1)
                        .map_or_else(|| text.clone(), |line| line.as_ref().to_string()),
                ),
                EditOp::Delete { text, .. } => Some(text.clone()),
                EditOp::Insert { .. } => None,
            })
            .collect()
    }
}
