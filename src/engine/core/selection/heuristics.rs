use super::interpolation::interpolate_linear;
use crate::engine::core::part::Part;
use crate::shared::config::SelectorConfig;

/// Score multiplier rewarding a merge whose result lands in the same
/// power-of-two size class as the part just before the window.
///
/// Returns `1.0` when the heuristic is disabled, the window starts the list,
/// or the sizes are too far apart.
pub fn align_parts_score_adjustment(
    config: &SelectorConfig,
    sum_size: u64,
    prev_part_size: Option<u64>,
) -> f64 {
    if !config.enable_heuristic_to_align_parts {
        return 1.0;
    }
    let Some(prev_part_size) = prev_part_size else {
        return 1.0;
    };

    let sum_size = sum_size as f64;
    let prev_part_size = prev_part_size as f64;
    if prev_part_size <= sum_size * config.heuristic_to_align_parts_min_ratio_of_sum_size_to_prev_part
    {
        return 1.0;
    }

    let max_difference = config.heuristic_to_align_parts_max_absolute_difference_in_powers_of_two;
    let difference = (sum_size / prev_part_size).log2().abs();
    if difference >= max_difference {
        return 1.0;
    }

    interpolate_linear(
        config.heuristic_to_align_parts_max_score_adjustment,
        1.0,
        difference / max_difference,
    )
}

/// Drops trailing parts that are small relative to `sum_size`, keeping at least two.
///
/// `sum_size` is the pre-trim total and is not recomputed between drops.
pub fn remove_small_parts_at_right(config: &SelectorConfig, parts: &mut Vec<Part>, sum_size: u64) {
    if !config.enable_heuristic_to_remove_small_parts_at_right {
        return;
    }

    let limit = config.heuristic_to_remove_small_parts_at_right_max_ratio * sum_size as f64;
    while parts.len() >= 3 {
        match parts.last() {
            Some(last) if (last.size as f64) < limit => {
                parts.pop();
            }
            _ => break,
        }
    }
}
