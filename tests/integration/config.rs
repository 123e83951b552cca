use indoc::formatdoc;
use serde_json::{Map, Value, json};
use std::fs;
use std::path::{Path, PathBuf};

/// Conservative selector settings: admission needs a size ratio of 5 and
/// nothing is forced. Scenarios override what they exercise.
pub fn base_selector() -> Map<String, Value> {
    let Value::Object(fields) = json!({
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
    }) else {
        unreachable!("selector settings are an object")
    };
    fields
}

/// Writes a complete settings file under `dir` and returns its path.
///
/// `selector` replaces the base selector settings; `sweep_grid` is pasted
/// verbatim under `[sweep.grid]`.
pub fn write_config_for(
    dir: &Path,
    selector: &Map<String, Value>,
    steps: usize,
    sweep_grid: &str,
) -> PathBuf {
    let mut fields = base_selector();
    for (name, value) in selector {
        fields.insert(name.clone(), value.clone());
    }
    let selector_toml = fields
        .iter()
        .map(|(name, value)| format!("{name} = {value}"))
        .collect::<Vec<_>>()
        .join("\n");

    let output = dir.join("results.csv");
    let toml = formatdoc! {r#"
        [selector]
        {selector_toml}

        [simulation]
        steps = {steps}
        min_insert_size = 100
        max_insert_size = 10000
        seconds_per_step = 1.0
        seed = 11

        [sweep]
        output = "{output}"

        [sweep.grid]
        {sweep_grid}

        [logging]
        stdout_level = "error"
        file_level = "error"
    "#,
        output = output.display(),
    };

    let config_path = dir.join("config.test.toml");
    fs::write(&config_path, toml).unwrap();
    config_path
}
