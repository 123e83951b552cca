use crate::shared::config::SelectorConfig;
use serde_json::{Map, Value, json};

/// Builds selector settings. Defaults are conservative: admission needs a
/// size ratio of 5, nothing is forced, both heuristics are off.
pub struct SelectorConfigFactory {
    params: Map<String, Value>,
}

impl SelectorConfigFactory {
    pub fn new() -> Self {
        let defaults = json!({
            "size_fixed_cost_to_add": 100,
            "min_age_to_force_merge": 0.0,
            "min_size_to_lower_base": 1000,
            "max_size_to_lower_base": 1_000_000,
            "min_age_to_lower_base_at_min_size": 10.0,
            "max_age_to_lower_base_at_min_size": 100.0,
            "min_age_to_lower_base_at_max_size": 5.0,
            "max_age_to_lower_base_at_max_size": 50.0,
            "min_parts_to_lower_base": 5,
            "max_parts_to_lower_base": 50,
            "base": 5.0,
            "max_parts_to_merge_at_once": 100,
            "max_total_size_to_merge": 150u64 * 1024 * 1024 * 1024,
            "enable_heuristic_to_align_parts": false,
            "heuristic_to_align_parts_min_ratio_of_sum_size_to_prev_part": 0.9,
            "heuristic_to_align_parts_max_absolute_difference_in_powers_of_two": 0.5,
            "heuristic_to_align_parts_max_score_adjustment": 0.75,
            "enable_heuristic_to_remove_small_parts_at_right": false,
            "heuristic_to_remove_small_parts_at_right_max_ratio": 0.01,
        });
        let Value::Object(params) = defaults else {
            unreachable!("defaults are an object")
        };
        Self { params }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        assert!(self.params.contains_key(key), "unknown selector setting {key}");
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn create(self) -> SelectorConfig {
        serde_json::from_value(Value::Object(self.params)).unwrap()
    }
}
