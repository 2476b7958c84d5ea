//! Line diff computation.
//!
//! Myers' O((N+M)·D) algorithm in its linear-space form: the middle snake of
//! each region splits it in two, and shared prefixes and suffixes are peeled
//! off at every level. Memory stays proportional to the input length however
//! far apart the changes sit. Within each run of changes all deletions come
//! before the insertions.

use crate::diff::model::{DiffReport, EditOp};
use crate::model::NormalizedSnapshot;
use crate::{log_op_end, log_op_start};
use std::ops::{Index, IndexMut, Range};
use std::time::Instant;

/// Diff two normalized snapshots
pub fn diff(a: &NormalizedSnapshot, b: &NormalizedSnapshot) -> DiffReport {
    diff_lines(&a.lines(), &b.lines())
}

/// Diff two normalized bodies as read from disk
///
/// Lines are split on `\n` only, so a `\r` before the terminator is part of
/// the line and `"x\r\n"` differs from `"x\n"`. The final terminator does not
/// produce an extra empty line.
pub fn diff_texts(a: &str, b: &str) -> DiffReport {
    diff_lines(&split_body(a), &split_body(b))
}

fn split_body(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.strip_suffix('\n').unwrap_or(text).split('\n').collect()
}

/// Diff two ordered line lists
pub fn diff_lines<S: AsRef<str>>(a: &[S], b: &[S]) -> DiffReport {
    let start = Instant::now();
    log_op_start!("diff", old_lines = a.len(), new_lines = b.len());

    let a: Vec<&str> = a.iter().map(AsRef::as_ref).collect();
    let b: Vec<&str> = b.iter().map(AsRef::as_ref).collect();

    let report = if a == b {
        DiffReport::default()
    } else {
        DiffReport::new(edit_script(&a, &b))
    };

    log_op_end!(
        "diff",
        duration_ms = start.elapsed().as_millis() as u64,
        change_count = report.stats().changes(),
    );
    report
}

fn edit_script(a: &[&str], b: &[&str]) -> Vec<EditOp> {
    let max_d = max_d(a.len(), b.len());
    let mut forward = Frontier::new(max_d);
    let mut backward = Frontier::new(max_d);
    let mut matches = Vec::new();
    collect_matches(
        a,
        0..a.len(),
        b,
        0..b.len(),
        &mut forward,
        &mut backward,
        &mut matches,
    );

    let mut ops = Vec::with_capacity(a.len().max(b.len()));
    let (mut i, mut j) = (0, 0);
    // (a.len(), b.len()) closes the last run of changes
    for (x, y) in matches.into_iter().chain(std::iter::once((a.len(), b.len()))) {
        ops.extend((i..x).map(|k| EditOp::Delete {
            old_line: k + 1,
            text: a[k].to_string(),
        }));
        ops.extend((j..y).map(|k| EditOp::Insert {
            new_line: k + 1,
            text: b[k].to_string(),
        }));
        if x < a.len() {
            ops.push(EditOp::Equal {
                old_line: x + 1,
                new_line: y + 1,
                text: a[x].to_string(),
            });
        }
        i = x + 1;
        j = y + 1;
    }
    ops
}

fn max_d(n: usize, m: usize) -> usize {
    (n + m + 1) / 2 + 1
}

/// Furthest x reached on each diagonal `k`, for `k` in `-max_d..max_d`
struct Frontier {
    offset: isize,
    xs: Vec<usize>,
}

impl Frontier {
    fn new(max_d: usize) -> Self {
        Self {
            offset: max_d as isize,
            xs: vec![0; 2 * max_d],
        }
    }
}

impl Index<isize> for Frontier {
    type Output = usize;

    fn index(&self, k: isize) -> &usize {
        &self.xs[(k + self.offset) as usize]
    }
}

impl IndexMut<isize> for Frontier {
    fn index_mut(&mut self, k: isize) -> &mut usize {
        &mut self.xs[(k + self.offset) as usize]
    }
}

fn common_prefix_len(a: &[&str], b: &[&str]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

fn common_suffix_len(a: &[&str], b: &[&str]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Push the matched `(old, new)` index pairs of one region, in order
fn collect_matches(
    a: &[&str],
    mut old: Range<usize>,
    b: &[&str],
    mut new: Range<usize>,
    forward: &mut Frontier,
    backward: &mut Frontier,
    out: &mut Vec<(usize, usize)>,
) {
    let prefix = common_prefix_len(&a[old.clone()], &b[new.clone()]);
    out.extend((0..prefix).map(|k| (old.start + k, new.start + k)));
    old.start += prefix;
    new.start += prefix;

    let suffix = common_suffix_len(&a[old.clone()], &b[new.clone()]);
    old.end -= suffix;
    new.end -= suffix;

    if !old.is_empty() && !new.is_empty() {
        if let Some((x, y)) = middle_snake(a, old.clone(), b, new.clone(), forward, backward) {
            collect_matches(a, old.start..x, b, new.start..y, forward, backward, out);
            collect_matches(a, x..old.end, b, y..new.end, forward, backward, out);
        }
    }

    out.extend((0..suffix).map(|k| (old.end + k, new.end + k)));
}

/// Split point of a region with no shared prefix or suffix
///
/// Runs the forward and backward searches until their D-paths overlap; the
/// returned point lies on an optimal path, so both halves can be solved
/// independently.
fn middle_snake(
    a: &[&str],
    old: Range<usize>,
    b: &[&str],
    new: Range<usize>,
    vf: &mut Frontier,
    vb: &mut Frontier,
) -> Option<(usize, usize)> {
    let (n, m) = (old.len(), new.len());
    let delta = n as isize - m as isize;
    let odd = delta & 1 == 1;
    vf[1] = 0;
    vb[1] = 0;

    for d in 0..max_d(n, m) as isize {
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                vf[k + 1]
            } else {
                vf[k - 1] + 1
            };
            let y = (x as isize - k) as usize;
            let (x0, y0) = (x, y);
            if x < n && y < m {
                x += common_prefix_len(
                    &a[old.start + x..old.end],
                    &b[new.start + y..new.end],
                );
            }
            vf[k] = x;
            if odd && (k - delta).abs() < d && vf[k] + vb[delta - k] >= n {
                return Some((old.start + x0, new.start + y0));
            }
        }

        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                vb[k + 1]
            } else {
                vb[k - 1] + 1
            };
            let mut y = (x as isize - k) as usize;
            if x < n && y < m {
                let advance = common_suffix_len(
                    &a[old.start..old.end - x],
                    &b[new.start..new.end - y],
                );
                x += advance;
                y += advance;
            }
            vb[k] = x;
            if !odd && (k - delta).abs() <= d && vb[k] + vf[delta - k] >= n {
                return Some((old.start + n - x, new.start + m - y));
            }
        }
    }
    None
}
