//! pooldiff Core - load-balancer pool snapshot extraction and comparison
//!
//! This crate provides the pure, in-memory half of pooldiff:
//! - Record extraction from raw `ltm pool` configuration dumps
//! - Normalized snapshot model (`"<pool> <availability-state>"` per line)
//! - Line-level Myers differ (linear space) with lossless edit scripts
//! - Plain-text and pool-level renderers
//! - Canonical error and structured logging facilities
//!
//! Nothing here touches the filesystem; see `pooldiff-store` for that.

pub mod diff;
pub mod errors;
pub mod extract;
pub mod logging_facility;
pub mod model;

#[doc(hidden)]
pub use pooldiff_core_types as core_types;

// Re-export commonly used types
pub use diff::{diff, diff_texts, DiffReport, EditOp};
pub use errors::{ExError, ExErrorKind, PoolDiffError, Result};
pub use extract::extract;
pub use model::{NormalizedSnapshot, PoolRecord};
