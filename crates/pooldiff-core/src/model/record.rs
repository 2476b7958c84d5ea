use std::fmt;

/// PoolRecord - the normalized projection of one pool block
///
/// Serializes as `"<pool_name> <availability_state>"`. The separator space is
/// always written, so a record with no status line renders with a trailing
/// space.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PoolRecord {
    /// Pool identifier, e.g. `/Common/web_pool`. Never empty.
    pub pool_name: String,

    /// Value of `status.availability-state`, empty when the block had none
    pub availability_state: String,
}

impl PoolRecord {
    pub fn new(pool_name: impl Into<String>, availability_state: impl Into<String>) -> Self {
        Self {
            pool_name: pool_name.into(),
            availability_state: availability_state.into(),
        }
    }

    /// True when the source block carried the pool marker but no status line
    pub fn is_status_missing(&self) -> bool {
        self.availability_state.is_empty()
    }

    /// Parse one normalized line back into a record
    ///
    /// Splits at the first space. A line with no space is a pool with an
    /// empty state. Blank lines yield `None`.
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            return None;
        }
        let (name, state) = line.split_once(' ').unwrap_or((line, ""));
        Some(Self::new(name, state))
    }
}

impl fmt::Display for PoolRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pool_name, self.availability_state)
    }
}
