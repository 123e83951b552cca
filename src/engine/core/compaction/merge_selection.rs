use crate::engine::core::part::{Part, PartId};

/// The parts chosen for the next merge, in the order they were scanned.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeSelection {
    pub parts: Vec<Part>,
    /// Score of the winning window; `f64::INFINITY` when nothing was selected.
    pub score: f64,
}

impl MergeSelection {
    pub fn new(parts: Vec<Part>, score: f64) -> Self {
        Self { parts, score }
    }

    pub fn empty() -> Self {
        Self {
            parts: Vec::new(),
            score: f64::INFINITY,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn part_ids(&self) -> Vec<PartId> {
        self.parts.iter().map(|p| p.id).collect()
    }

    /// Sum of the selected parts' sizes, i.e. the size of the merged result.
    ///
    /// Saturates at `u64::MAX`, like the window sum it was admitted with.
    pub fn total_size(&self) -> u64 {
        self.parts
            .iter()
            .fold(0u64, |total, p| total.saturating_add(p.size))
    }
}
