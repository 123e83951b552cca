use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::trace;

use super::part::{Part, PartId};
use crate::engine::errors::PartError;

/// The resident parts of one table, in insertion order.
///
/// Only grows by [`insert`](Self::insert) and shrinks by [`merge`](Self::merge),
/// which replaces a set of parts with one part of their summed size.
#[derive(Debug, Default, Clone)]
pub struct PartCollection {
    parts: Vec<Part>,
    next_id: u64,
}

impl PartCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, size: u64, now: DateTime<Utc>) -> Result<PartId, PartError> {
        if size == 0 {
            return Err(PartError::InvalidSize);
        }
        let id = self.allocate_id();
        self.parts.push(Part::new(id, size, now));
        trace!(target: "part_collection::insert", %id, size, "Inserted part");
        Ok(id)
    }

    /// Removes `ids` and appends one part holding their total size, stamped `now`.
    ///
    /// The collection is left untouched when any id is unknown or repeated.
    pub fn merge(&mut self, ids: &[PartId], now: DateTime<Utc>) -> Result<Part, PartError> {
        if ids.is_empty() {
            return Err(PartError::EmptyMerge);
        }

        let mut seen = HashSet::with_capacity(ids.len());
        let mut total: u64 = 0;
        for id in ids {
            if !seen.insert(*id) {
                return Err(PartError::DuplicatePart(*id));
            }
            let part = self.get(*id).ok_or(PartError::UnknownPart(*id))?;
            total = total
                .checked_add(part.size)
                .ok_or(PartError::SizeOverflow)?;
        }

        self.parts.retain(|p| !seen.contains(&p.id));

        let merged = Part::new(self.allocate_id(), total, now);
        self.parts.push(merged);
        trace!(
            target: "part_collection::merge",
            merged_id = %merged.id,
            inputs = ids.len(),
            size = total,
            "Merged parts"
        );
        Ok(merged)
    }

    pub fn get(&self, id: PartId) -> Option<&Part> {
        self.parts.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PartId) -> bool {
        self.get(id).is_some()
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn total_size(&self) -> u64 {
        self.parts
            .iter()
            .fold(0u64, |total, p| total.saturating_add(p.size))
    }

    fn allocate_id(&mut self) -> PartId {
        let id = PartId(self.next_id);
        self.next_id += 1;
        id
    }
}
