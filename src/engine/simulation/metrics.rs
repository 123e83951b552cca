use serde::Serialize;

/// Outcome of a workload run.
///
/// Field names match the ones reported for production part logs so the two
/// can be compared directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationMetrics {
    /// Bytes rewritten by merges per byte inserted.
    pub write_amplification: f64,
    /// Resident part count averaged over every insert and merge event.
    pub average_part_count: f64,
    pub merge_count: u64,
    pub final_part_count: usize,
    pub total_bytes_inserted: u64,
    pub total_bytes_merged: u64,
}

/// Running totals behind [`SimulationMetrics`].
#[derive(Debug, Default, Clone)]
pub struct MetricsTracker {
    total_bytes_inserted: u64,
    total_bytes_merged: u64,
    merge_count: u64,
    part_count_sum: u128,
    samples: u64,
    current_part_count: usize,
}

impl MetricsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an insert of `size` bytes leaving `part_count` resident parts.
    pub fn record_insert(&mut self, size: u64, part_count: usize) {
        self.total_bytes_inserted = self.total_bytes_inserted.saturating_add(size);
        self.sample(part_count);
    }

    /// Records a merge that wrote `size` bytes, leaving `part_count` resident parts.
    pub fn record_merge(&mut self, size: u64, part_count: usize) {
        self.total_bytes_merged = self.total_bytes_merged.saturating_add(size);
        self.merge_count += 1;
        self.sample(part_count);
    }

    fn sample(&mut self, part_count: usize) {
        self.part_count_sum += part_count as u128;
        self.samples += 1;
        self.current_part_count = part_count;
    }

    pub fn snapshot(&self) -> SimulationMetrics {
        SimulationMetrics {
            write_amplification: ratio(self.total_bytes_merged as f64, self.total_bytes_inserted as f64),
            average_part_count: ratio(self.part_count_sum as f64, self.samples as f64),
            merge_count: self.merge_count,
            final_part_count: self.current_part_count,
            total_bytes_inserted: self.total_bytes_inserted,
            total_bytes_merged: self.total_bytes_merged,
        }
    }
}

/// `numerator / denominator`, or `0` when there is nothing to divide by.
pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
