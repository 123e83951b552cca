use super::candidate_window::CandidateWindow;
use super::interpolation::{interpolate_linear, map_piecewise_linear};
use crate::shared::config::SelectorConfig;

/// The admission ratio that applies most permissively, under full pressure.
pub const MIN_LOWERED_BASE: f64 = 2.0;

/// How the admission threshold was derived for one candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdmissionThreshold {
    pub size_normalized: f64,
    pub min_age_to_lower_base: f64,
    pub max_age_to_lower_base: f64,
    pub age_normalized: f64,
    pub num_parts_normalized: f64,
    pub combined_ratio: f64,
    pub lowered_base: f64,
}

impl AdmissionThreshold {
    /// Relaxes `base` towards [`MIN_LOWERED_BASE`] as the youngest member ages
    /// and as the number of resident parts grows. Larger merges need older parts
    /// before the bar drops.
    pub fn compute(
        config: &SelectorConfig,
        sum_size: u64,
        min_age: f64,
        total_part_count: usize,
    ) -> Self {
        let size_normalized = map_piecewise_linear(
            (1.0 + sum_size as f64).ln(),
            (1.0 + config.min_size_to_lower_base as f64).ln(),
            (1.0 + config.max_size_to_lower_base as f64).ln(),
        );

        let min_age_to_lower_base = interpolate_linear(
            config.min_age_to_lower_base_at_min_size,
            config.min_age_to_lower_base_at_max_size,
            size_normalized,
        );
        let max_age_to_lower_base = interpolate_linear(
            config.max_age_to_lower_base_at_min_size,
            config.max_age_to_lower_base_at_max_size,
            size_normalized,
        );

        let age_normalized =
            map_piecewise_linear(min_age, min_age_to_lower_base, max_age_to_lower_base);
        let num_parts_normalized = map_piecewise_linear(
            total_part_count as f64,
            config.min_parts_to_lower_base as f64,
            config.max_parts_to_lower_base as f64,
        );

        let combined_ratio = (age_normalized + num_parts_normalized).min(1.0);
        let lowered_base = interpolate_linear(config.base, MIN_LOWERED_BASE, combined_ratio);

        Self {
            size_normalized,
            min_age_to_lower_base,
            max_age_to_lower_base,
            age_normalized,
            num_parts_normalized,
            combined_ratio,
            lowered_base,
        }
    }
}

/// Size-growth ratio of a merge: the batch against its biggest member, both
/// padded by the fixed per-part cost.
pub fn admission_ratio(count: usize, sum_size: u64, max_size: u64, fixed_cost: u64) -> f64 {
    let fixed_cost = fixed_cost as f64;
    (sum_size as f64 + count as f64 * fixed_cost) / (max_size as f64 + fixed_cost)
}

/// Decides whether `window` may be merged at all.
pub fn allow_merge(
    config: &SelectorConfig,
    window: &CandidateWindow,
    total_part_count: usize,
) -> bool {
    if config.min_age_to_force_merge > 0.0 && window.min_age() >= config.min_age_to_force_merge {
        return true;
    }

    let threshold =
        AdmissionThreshold::compute(config, window.sum_size(), window.min_age(), total_part_count);

    admission_ratio(
        window.len(),
        window.sum_size(),
        window.max_size(),
        config.size_fixed_cost_to_add,
    ) >= threshold.lowered_base
}
