use chrono::{DateTime, Utc};
use std::fmt;

use crate::shared::time::elapsed_seconds;

/// Identity of a resident part. Assigned by [`PartCollection`](super::PartCollection)
/// and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartId(pub u64);

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "part-{:05}", self.0)
    }
}

/// An immutable unit of stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Part {
    pub id: PartId,
    /// Size in bytes, strictly positive.
    pub size: u64,
    pub created_at: DateTime<Utc>,
}

impl Part {
    pub fn new(id: PartId, size: u64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            size,
            created_at,
        }
    }

    /// Seconds elapsed since creation, as seen at `now`.
    pub fn age_secs(&self, now: DateTime<Utc>) -> f64 {
        elapsed_seconds(self.created_at, now)
    }
}
