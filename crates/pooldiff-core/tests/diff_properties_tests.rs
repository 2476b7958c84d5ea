//! Property tests for the line differ.

use pooldiff_core::diff::{diff_lines, EditOp};
use proptest::prelude::*;

fn pool_lines() -> impl Strategy<Value = Vec<String>> {
    // Small alphabet so that inputs share lines often
    prop::collection::vec(
        (0u8..6, prop_oneof![
            Just("available"),
            Just("offline"),
            Just("unknown"),
            Just(""),
        ]),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(pool, state)| format!("/Common/pool{} {}", pool, state))
            .collect()
    })
}

/// Reference LCS length, straightforward O(n*m)
fn lcs_len(a: &[String], b: &[String]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    for x in a {
        let mut cur = vec![0usize; b.len() + 1];
        for (j, y) in b.iter().enumerate() {
            cur[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(cur[j])
            };
        }
        prev = cur;
    }
    prev[b.len()]
}

proptest! {
    #[test]
    fn prop_self_diff_is_empty(a in pool_lines()) {
        prop_assert!(diff_lines(&a, &a).is_identical());
    }

    #[test]
    fn prop_apply_reconstructs_b(a in pool_lines(), b in pool_lines()) {
        let report = diff_lines(&a, &b);
        prop_assert_eq!(report.apply(&a), b.clone());
        prop_assert_eq!(report.revert(&b), a);
    }

    #[test]
    fn prop_equal_lines_preserve_relative_order(a in pool_lines(), b in pool_lines()) {
        let report = diff_lines(&a, &b);
        let mut last = (0, 0);
        for op in report.ops() {
            if let EditOp::Equal { old_line, new_line, text } = op {
                prop_assert!(*old_line > last.0 && *new_line > last.1);
                prop_assert_eq!(&a[old_line - 1], text);
                prop_assert_eq!(&b[new_line - 1], text);
                last = (*old_line, *new_line);
            }
        }
    }

    #[test]
    fn prop_change_count_is_minimal(a in pool_lines(), b in pool_lines()) {
        let report = diff_lines(&a, &b);
        if !report.is_identical() {
            let lcs = lcs_len(&a, &b);
            let stats = report.stats();
            prop_assert_eq!(stats.unchanged, lcs);
            prop_assert_eq!(stats.changes(), a.len() + b.len() - 2 * lcs);
        }
    }

    #[test]
    fn prop_diff_is_deterministic(a in pool_lines(), b in pool_lines()) {
        prop_assert_eq!(diff_lines(&a, &b), diff_lines(&a, &b));
    }
}
