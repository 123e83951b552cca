use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use super::admission::allow_merge;
use super::candidate_window::CandidateWindow;
use super::heuristics::{align_parts_score_adjustment, remove_small_parts_at_right};
use super::score::score;
use crate::engine::core::compaction::{CompactionPolicy, MergeSelection};
use crate::engine::core::part::Part;
use crate::engine::errors::ConfigurationError;
use crate::shared::config::SelectorConfig;

/// Size-tiered merge selection over a snapshot of resident parts.
///
/// Parts are ordered youngest first, every contiguous window up to the
/// configured limits is tried, and the admitted window with the lowest
/// score wins.
#[derive(Debug, Clone)]
pub struct MergeSelector {
    config: SelectorConfig,
}

impl MergeSelector {
    pub fn new(config: SelectorConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Picks the next set of parts to merge, or an empty selection.
    ///
    /// `now` is the single instant every part age is measured against.
    pub fn select_parts_to_merge(&self, parts: &[Part], now: DateTime<Utc>) -> MergeSelection {
        if parts.len() < 2 {
            return MergeSelection::empty();
        }

        let mut sorted: Vec<(Part, f64)> = parts.iter().map(|p| (*p, p.age_secs(now))).collect();
        sorted.sort_by(|a, b| a.1.total_cmp(&b.1));

        let config = &self.config;
        let total_part_count = sorted.len();
        let mut best: Option<(f64, Vec<Part>)> = None;

        for (i, &(first, first_age)) in sorted.iter().enumerate() {
            let mut window = CandidateWindow::new(i, first, first_age);

            for &(part, age) in &sorted[i + 1..] {
                window.push(part, age);

                if window.len() > config.max_parts_to_merge_at_once
                    || window.sum_size() > config.max_total_size_to_merge
                {
                    break;
                }

                if !allow_merge(config, &window, total_part_count) {
                    continue;
                }

                let sum_size = window.sum_size();
                let prev_part_size = i.checked_sub(1).map(|prev| sorted[prev].0.size);
                let current_score = score(window.len(), sum_size, config.size_fixed_cost_to_add)
                    * align_parts_score_adjustment(config, sum_size, prev_part_size);

                // Trimmed members stay out of later expansions; the running sum does not shrink.
                remove_small_parts_at_right(config, window.parts_mut(), sum_size);

                let improves = best
                    .as_ref()
                    .is_none_or(|(best_score, _)| current_score < *best_score);
                if improves {
                    trace!(
                        target: "merge_selector::select",
                        start = window.start(),
                        len = window.len(),
                        sum_size,
                        score = current_score,
                        "New best merge candidate"
                    );
                    best = Some((current_score, window.parts().to_vec()));
                }
            }
        }

        match best {
            Some((score, parts)) => {
                debug!(
                    target: "merge_selector::select",
                    total_parts = total_part_count,
                    selected = parts.len(),
                    score,
                    "Selected parts to merge"
                );
                MergeSelection::new(parts, score)
            }
            None => {
                debug!(
                    target: "merge_selector::select",
                    total_parts = total_part_count,
                    "No merge candidate admitted"
                );
                MergeSelection::empty()
            }
        }
    }
}

impl CompactionPolicy for MergeSelector {
    fn select(&self, parts: &[Part], now: DateTime<Utc>) -> MergeSelection {
        self.select_parts_to_merge(parts, now)
    }
}
