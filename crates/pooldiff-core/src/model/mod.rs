pub mod record;
pub mod snapshot;

pub use record::PoolRecord;
pub use snapshot::NormalizedSnapshot;
