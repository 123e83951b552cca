use chrono::{DateTime, Utc};

use crate::engine::core::part::Part;

/// A contiguous run of sorted parts being evaluated as one merge.
///
/// Aggregates are maintained incrementally as the window grows.
#[derive(Debug, Clone)]
pub struct CandidateWindow {
    start: usize,
    parts: Vec<Part>,
    sum_size: u64,
    max_size: u64,
    min_age: f64,
}

impl CandidateWindow {
    /// Opens a window of one part at position `start` of the sorted list.
    pub fn new(start: usize, part: Part, age: f64) -> Self {
        Self {
            start,
            parts: vec![part],
            sum_size: part.size,
            max_size: part.size,
            min_age: age,
        }
    }

    /// Builds a window over `parts`, computing ages against `now`.
    pub fn from_parts(start: usize, parts: &[Part], now: DateTime<Utc>) -> Option<Self> {
        let (first, rest) = parts.split_first()?;
        let mut window = Self::new(start, *first, first.age_secs(now));
        for part in rest {
            window.push(*part, part.age_secs(now));
        }
        Some(window)
    }

    pub fn push(&mut self, part: Part, age: f64) {
        self.sum_size = self.sum_size.saturating_add(part.size);
        self.max_size = self.max_size.max(part.size);
        self.min_age = self.min_age.min(age);
        self.parts.push(part);
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn sum_size(&self) -> u64 {
        self.sum_size
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Age of the youngest member, in seconds.
    pub fn min_age(&self) -> f64 {
        self.min_age
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Member list for in-place trimming. Aggregates are left as they were.
    pub fn parts_mut(&mut self) -> &mut Vec<Part> {
        &mut self.parts
    }
}
