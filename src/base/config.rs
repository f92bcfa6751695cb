//! Cookie jar configuration.

/// Maximum number of records (cookies plus comment lines) a jar holds.
pub const MAX_RECORDS: usize = 1000;

/// What to do when a cookie file has more lines than the jar can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Fail the load with [`JarError::CapacityExceeded`](crate::base::jarerror::JarError).
    #[default]
    Reject,
    /// Keep the first `max_records` lines and drop the rest.
    Truncate,
}

/// Cookie jar limits.
#[derive(Debug, Clone)]
pub struct JarConfig {
    /// Maximum number of records, evicted slots included
    pub max_records: usize,
    /// Behavior when loading a file past `max_records`
    pub overflow: OverflowPolicy,
}

impl Default for JarConfig {
    fn default() -> Self {
        Self {
            max_records: MAX_RECORDS,
            overflow: OverflowPolicy::Reject,
        }
    }
}

impl JarConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the record limit.
    pub fn max_records(mut self, max: usize) -> Self {
        self.max_records = max;
        self
    }

    /// Set the overflow policy.
    pub fn overflow(mut self, policy: OverflowPolicy) -> Self {
        self.overflow = policy;
        self
    }
}
