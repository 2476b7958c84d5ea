//! Snapshot differ.
//!
//! Compares two normalized snapshot bodies line by line and produces a
//! minimal edit script, plus renderers for display.
//!
//! ## Entry point
//!
//! ```
//! use pooldiff_core::diff::{diff_texts, render_unified, RenderOptions};
//!
//! let a = "/Common/pool1 available\n/Common/pool2 offline\n";
//! let b = "/Common/pool1 available\n/Common/pool2 available\n";
//! let report = diff_texts(a, b);
//! let text = render_unified(&report, "a", "b", RenderOptions::default());
//! assert!(text.contains("- /Common/pool2 offline"));
//! ```
//!
//! ## Guarantees
//!
//! - **Minimality**: insert+delete count equals `len(a) + len(b) - 2 * LCS`.
//! - **Determinism**: identical inputs give identical scripts; within a run
//!   of changes every deletion is emitted before the insertions.
//! - **Identity**: equal inputs give an empty script.
//! - **Lossless**: a non-empty script keeps unchanged lines, so either side
//!   can be rebuilt from the other with [`DiffReport::apply`] / [`DiffReport::revert`].
//! - **Field-blind**: a pool whose state changed is one deleted line and one
//!   inserted line, never an update.

pub mod engine;
pub mod model;
pub mod pool_summary;
pub mod render;

pub use engine::{diff, diff_lines, diff_texts};
pub use model::{DiffReport, DiffStats, EditOp};
pub use pool_summary::{render_pool_summary, summarize, PoolChange, PoolSummary};
pub use render::{render_unified, RenderOptions};
