//! Plain-text renderer for line diffs.

use crate::diff::model::{DiffReport, EditOp};

const RULE_WIDTH: usize = 60;

/// Presentation knobs for [`render_unified`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Print unchanged lines with a two-space marker
    pub show_unchanged: bool,
    /// Prefix each line with its position in `a` / `b`
    pub line_numbers: bool,
}

/// Render a [`DiffReport`] for terminal display
///
/// Markers: `- ` only in `a`, `+ ` only in `b`, two spaces unchanged.
/// Unchanged lines are omitted unless `show_unchanged` is set.
pub fn render_unified(
    report: &DiffReport,
    label_a: &str,
    label_b: &str,
    options: RenderOptions,
) -> String {
    if report.is_identical() {
        return format!("No differences found between {} and {}\n", label_a, label_b);
    }

    let mut out = String::new();
    out.push_str(&format!("Differences between {} and {}:\n", label_a, label_b));
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');

    for op in report.ops() {
        let (marker, position) = match op {
            EditOp::Equal {
                old_line, new_line, ..
            } => {
                if !options.show_unchanged {
                    continue;
                }
                ("  ", format!("{:>4},{:<4} ", old_line, new_line))
            }
            EditOp::Delete { old_line, .. } => ("- ", format!("{:>4},{:<4} ", old_line, "")),
            EditOp::Insert { new_line, .. } => ("+ ", format!("{:>4},{:<4} ", "", new_line)),
        };
        if options.line_numbers {
            out.push_str(&position);
        }
        out.push_str(marker);
        out.push_str(op.text());
        out.push('\n');
    }

    let stats = report.stats();
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "{} removed, {} added, {} unchanged\n",
        stats.deleted, stats.inserted, stats.unchanged
    ));
    out
}
