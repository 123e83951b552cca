use chrono::{DateTime, Utc};

use super::merge_selection::MergeSelection;
use crate::engine::core::part::Part;

/// Strategy for choosing the next merge from a snapshot of resident parts.
///
/// Callers must not mutate the parts while a call is in flight; implementations
/// measure every age against the single `now` they are given.
pub trait CompactionPolicy {
    fn select(&self, parts: &[Part], now: DateTime<Utc>) -> MergeSelection;
}

/// A policy that never merges. Useful as a baseline for workloads.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMergePolicy;

impl CompactionPolicy for NoMergePolicy {
    fn select(&self, _parts: &[Part], _now: DateTime<Utc>) -> MergeSelection {
        MergeSelection::empty()
    }
}
