use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::env;

use crate::engine::errors::ConfigurationError;
use crate::shared::time::ClockKind;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub selector: SelectorConfig,
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
    pub logging: LoggingConfig,
}

/// Thresholds that drive merge admission and the two search heuristics.
///
/// Sizes are bytes, ages are seconds. Every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectorConfig {
    /// Per-part cost added to sizes in both the score and the admission ratio.
    pub size_fixed_cost_to_add: u64,
    /// Windows whose youngest member is at least this old are always admitted. `0` disables.
    pub min_age_to_force_merge: f64,
    pub min_size_to_lower_base: u64,
    pub max_size_to_lower_base: u64,
    pub min_age_to_lower_base_at_min_size: f64,
    pub max_age_to_lower_base_at_min_size: f64,
    pub min_age_to_lower_base_at_max_size: f64,
    pub max_age_to_lower_base_at_max_size: f64,
    pub min_parts_to_lower_base: usize,
    pub max_parts_to_lower_base: usize,
    /// Admission ratio required when there is no age or part-count pressure.
    pub base: f64,
    pub max_parts_to_merge_at_once: usize,
    pub max_total_size_to_merge: u64,
    pub enable_heuristic_to_align_parts: bool,
    pub heuristic_to_align_parts_min_ratio_of_sum_size_to_prev_part: f64,
    pub heuristic_to_align_parts_max_absolute_difference_in_powers_of_two: f64,
    pub heuristic_to_align_parts_max_score_adjustment: f64,
    pub enable_heuristic_to_remove_small_parts_at_right: bool,
    pub heuristic_to_remove_small_parts_at_right_max_ratio: f64,
}

impl SelectorConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.base.is_finite() && self.base > 2.0) {
            return Err(ConfigurationError::invalid("base", "must be finite and greater than 2.0"));
        }
        if self.max_parts_to_merge_at_once < 2 {
            return Err(ConfigurationError::invalid(
                "max_parts_to_merge_at_once",
                "must allow at least 2 parts",
            ));
        }
        if self.max_total_size_to_merge == 0 {
            return Err(ConfigurationError::invalid(
                "max_total_size_to_merge",
                "must be greater than 0",
            ));
        }
        if self.min_size_to_lower_base > self.max_size_to_lower_base {
            return Err(ConfigurationError::invalid(
                "min_size_to_lower_base",
                "must not exceed max_size_to_lower_base",
            ));
        }
        if self.min_parts_to_lower_base > self.max_parts_to_lower_base {
            return Err(ConfigurationError::invalid(
                "min_parts_to_lower_base",
                "must not exceed max_parts_to_lower_base",
            ));
        }

        let non_negative = [
            ("min_age_to_force_merge", self.min_age_to_force_merge),
            ("min_age_to_lower_base_at_min_size", self.min_age_to_lower_base_at_min_size),
            ("max_age_to_lower_base_at_min_size", self.max_age_to_lower_base_at_min_size),
            ("min_age_to_lower_base_at_max_size", self.min_age_to_lower_base_at_max_size),
            ("max_age_to_lower_base_at_max_size", self.max_age_to_lower_base_at_max_size),
            (
                "heuristic_to_align_parts_min_ratio_of_sum_size_to_prev_part",
                self.heuristic_to_align_parts_min_ratio_of_sum_size_to_prev_part,
            ),
            (
                "heuristic_to_align_parts_max_absolute_difference_in_powers_of_two",
                self.heuristic_to_align_parts_max_absolute_difference_in_powers_of_two,
            ),
            (
                "heuristic_to_align_parts_max_score_adjustment",
                self.heuristic_to_align_parts_max_score_adjustment,
            ),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigurationError::invalid(field, "must be finite and non-negative"));
            }
        }

        if self.enable_heuristic_to_align_parts {
            if self.heuristic_to_align_parts_max_absolute_difference_in_powers_of_two <= 0.0 {
                return Err(ConfigurationError::invalid(
                    "heuristic_to_align_parts_max_absolute_difference_in_powers_of_two",
                    "must be greater than 0 when alignment is enabled",
                ));
            }
            let adjustment = self.heuristic_to_align_parts_max_score_adjustment;
            if adjustment <= 0.0 || adjustment > 1.0 {
                return Err(ConfigurationError::invalid(
                    "heuristic_to_align_parts_max_score_adjustment",
                    "must be in (0, 1] when alignment is enabled",
                ));
            }
        }

        let ratio = self.heuristic_to_remove_small_parts_at_right_max_ratio;
        if !(0.0..=1.0).contains(&ratio) {
            return Err(ConfigurationError::invalid(
                "heuristic_to_remove_small_parts_at_right_max_ratio",
                "must be in [0, 1]",
            ));
        }

        Ok(())
    }

    /// Returns a copy with the named settings replaced.
    ///
    /// Names must match field names exactly; values must have the field's type.
    pub fn with_overrides(
        &self,
        overrides: &BTreeMap<String, Value>,
    ) -> Result<SelectorConfig, ConfigurationError> {
        let mut fields = match serde_json::to_value(self) {
            Ok(Value::Object(fields)) => fields,
            Ok(other) => {
                return Err(ConfigurationError::InvalidOverride {
                    field: "selector".to_string(),
                    reason: format!("expected a table, got {other}"),
                });
            }
            Err(e) => {
                return Err(ConfigurationError::InvalidOverride {
                    field: "selector".to_string(),
                    reason: e.to_string(),
                });
            }
        };

        for (name, value) in overrides {
            match fields.get_mut(name) {
                Some(slot) => *slot = value.clone(),
                None => return Err(ConfigurationError::UnknownSetting(name.clone())),
            }
        }

        let config: SelectorConfig = serde_json::from_value(Value::Object(fields)).map_err(|e| {
            ConfigurationError::InvalidOverride {
                field: overrides.keys().cloned().collect::<Vec<_>>().join(","),
                reason: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Number of insert-then-merge cycles per run.
    pub steps: usize,
    pub min_insert_size: u64,
    pub max_insert_size: u64,
    /// How far the simulated clock moves per step.
    pub seconds_per_step: f64,
    /// Seed for the insert-size generator. A fixed seed makes runs comparable.
    pub seed: Option<u64>,
    #[serde(default)]
    pub clock: ClockKind,
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.min_insert_size == 0 {
            return Err(ConfigurationError::invalid("min_insert_size", "must be greater than 0"));
        }
        if self.min_insert_size > self.max_insert_size {
            return Err(ConfigurationError::invalid(
                "min_insert_size",
                "must not exceed max_insert_size",
            ));
        }
        if !(self.seconds_per_step.is_finite() && self.seconds_per_step >= 0.0) {
            return Err(ConfigurationError::invalid(
                "seconds_per_step",
                "must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps: 500,
            min_insert_size: 100,
            max_insert_size: 10_000,
            seconds_per_step: 1.0,
            seed: None,
            clock: ClockKind::Simulated,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SweepConfig {
    /// Candidate values per selector setting; the sweep runs their Cartesian product.
    #[serde(default)]
    pub grid: BTreeMap<String, Vec<Value>>,
    #[serde(default = "default_sweep_output")]
    pub output: String,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            grid: BTreeMap::new(),
            output: default_sweep_output(),
        }
    }
}

fn default_sweep_output() -> String {
    "results.csv".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub stdout_level: String,
    pub file_level: String,
    /// Directory for the rolling log file. No file is written when unset.
    pub log_dir: Option<String>,
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.selector.validate()?;
        self.simulation.validate()?;
        Ok(())
    }
}

/// Loads settings from `path`, falling back to `MERGE_SELECTOR_CONFIG`, then `config`.
pub fn load_settings(path: Option<&str>) -> Result<Settings, ConfigurationError> {
    let config_path = match path {
        Some(path) => path.to_string(),
        None => env::var("MERGE_SELECTOR_CONFIG").unwrap_or_else(|_| "config".to_string()),
    };

    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(&config_path))
        .build()?
        .try_deserialize()?;

    settings.validate()?;
    Ok(settings)
}

pub fn load_settings_from_str(toml: &str) -> Result<Settings, ConfigurationError> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?
        .try_deserialize()?;

    settings.validate()?;
    Ok(settings)
}
