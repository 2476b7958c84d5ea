//! pooldiff Store - filesystem side of snapshot processing
//!
//! Provides:
//! - Snapshot reads that surface missing files as `MissingInput`
//! - Atomic writes of normalized snapshots
//! - The `pool_snapshot_<id>.txt` -> `pool_snapshot_<id>_parsed.txt` naming scheme
//! - Snapshot discovery with an explicit ordering policy
//! - Batch parsing and file-to-file comparison
//! - TOML configuration

pub mod catalog;
pub mod compare;
pub mod config;
pub mod errors;
pub mod io;
pub mod naming;
pub mod parse;

// Re-export key types
pub use catalog::{SnapshotCatalog, SnapshotEntry, SnapshotKind};
pub use config::{PoolDiffConfig, SortOrder};
pub use errors::Result;
