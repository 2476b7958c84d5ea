//! Pool-level comparison summary.
//!
//! Groups changes by pool name instead of by line. This view is for reading,
//! the line diff stays the authoritative report. When a pool name repeats
//! within one snapshot the last record wins.

use crate::model::NormalizedSnapshot;
use std::collections::BTreeMap;

/// How one pool differs between two snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolChange {
    /// Only in `b`
    Added { state: String },
    /// Only in `a`
    Removed { state: String },
    /// In both with a different availability state
    StateChanged { from: String, to: String },
}

/// Per-pool differences, ordered by pool name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolSummary {
    pub changes: BTreeMap<String, PoolChange>,
}

impl PoolSummary {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

pub fn summarize(a: &NormalizedSnapshot, b: &NormalizedSnapshot) -> PoolSummary {
    let states = |snapshot: &NormalizedSnapshot| -> BTreeMap<String, String> {
        snapshot
            .records()
            .iter()
            .map(|r| (r.pool_name.clone(), r.availability_state.clone()))
            .collect()
    };
    let a_states = states(a);
    let mut b_states = states(b);

    let mut changes = BTreeMap::new();
    for (pool, from) in a_states {
        match b_states.remove(&pool) {
            None => {
                changes.insert(pool, PoolChange::Removed { state: from });
            }
            Some(to) if to != from => {
                changes.insert(pool, PoolChange::StateChanged { from, to });
            }
            Some(_) => {}
        }
    }
    for (pool, state) in b_states {
        changes.insert(pool, PoolChange::Added { state });
    }

    PoolSummary { changes }
}

/// Render a [`PoolSummary`] as `Pool: <name>` sections
pub fn render_pool_summary(summary: &PoolSummary, label_a: &str, label_b: &str) -> String {
    if summary.is_empty() {
        return format!("No pool changes between {} and {}\n", label_a, label_b);
    }

    let mut out = format!("Pool changes between {} and {}:\n", label_a, label_b);
    for (pool, change) in &summary.changes {
        out.push_str(&format!("\nPool: {}\n", pool));
        out.push_str(&"-".repeat(pool.len() + 6));
        out.push('\n');
        match change {
            PoolChange::Added { .. } => out.push_str(&format!("  Missing in {}\n", label_a)),
            PoolChange::Removed { .. } => out.push_str(&format!("  Missing in {}\n", label_b)),
            PoolChange::StateChanged { from, to } => out.push_str(&format!(
                "  status.availability-state: {} -> {}\n",
                display_state(from),
                display_state(to)
            )),
        }
    }
    out
}

fn display_state(state: &str) -> &str {
    if state.is_empty() {
        "<missing>"
    } else {
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PoolRecord;

    fn snapshot(records: &[(&str, &str)]) -> NormalizedSnapshot {
        records
            .iter()
            .map(|(name, state)| PoolRecord::new(*name, *state))
            .collect()
    }

    #[test]
    fn test_classifies_added_removed_changed() {
        let a = snapshot(&[("/Common/a", "available"), ("/Common/b", "offline"), ("/Common/c", "available")]);
        let b = snapshot(&[("/Common/a", "available"), ("/Common/b", "available"), ("/Common/d", "unknown")]);

        let summary = summarize(&a, &b);
        assert_eq!(summary.changes.len(), 3);
        assert_eq!(
            summary.changes["/Common/b"],
            PoolChange::StateChanged {
                from: "offline".to_string(),
                to: "available".to_string()
            }
        );
        assert_eq!(
            summary.changes["/Common/c"],
            PoolChange::Removed {
                state: "available".to_string()
            }
        );
        assert_eq!(
            summary.changes["/Common/d"],
            PoolChange::Added {
                state: "unknown".to_string()
            }
        );
    }

    #[test]
    fn test_reordering_is_not_a_pool_change() {
        let a = snapshot(&[("/Common/a", "available"), ("/Common/b", "offline")]);
        let b = snapshot(&[("/Common/b", "offline"), ("/Common/a", "available")]);
        assert!(summarize(&a, &b).is_empty());
    }

    #[test]
    fn test_render_sections() {
        let a = snapshot(&[("/Common/b", "")]);
        let b = snapshot(&[("/Common/b", "available"), ("/Common/n", "available")]);
        let text = render_pool_summary(&summarize(&a, &b), "old.txt", "new.txt");

        assert!(text.contains("Pool: /Common/b\n---------------\n"));
        assert!(text.contains("  status.availability-state: <missing> -> available\n"));
        assert!(text.contains("Pool: /Common/n\n"));
        assert!(text.contains("  Missing in old.txt\n"));
    }
}
