use rayon::prelude::*;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::info;

use super::metrics::SimulationMetrics;
use super::workload::run_simulation;
use crate::engine::errors::{ConfigurationError, SimulationError};
use crate::shared::config::{SelectorConfig, SimulationConfig, SweepConfig};

/// Candidate values per selector setting.
///
/// Combinations are the Cartesian product of all axes, taken in setting-name order.
#[derive(Debug, Clone, Default)]
pub struct SweepGrid {
    axes: BTreeMap<String, Vec<Value>>,
}

impl SweepGrid {
    pub fn new(axes: BTreeMap<String, Vec<Value>>) -> Self {
        Self { axes }
    }

    pub fn from_config(config: &SweepConfig) -> Self {
        Self::new(config.grid.clone())
    }

    pub fn axis(mut self, name: &str, values: Vec<Value>) -> Self {
        self.axes.insert(name.to_string(), values);
        self
    }

    /// Number of combinations. A grid without axes has one: the base itself.
    pub fn len(&self) -> usize {
        self.axes.values().map(Vec::len).product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn overrides(&self) -> Result<Vec<BTreeMap<String, Value>>, ConfigurationError> {
        let mut combinations = vec![BTreeMap::new()];
        for (name, values) in &self.axes {
            if values.is_empty() {
                return Err(ConfigurationError::EmptySweepAxis(name.clone()));
            }
            combinations = combinations
                .into_iter()
                .flat_map(|combination| {
                    values.iter().map(move |value| {
                        let mut next = combination.clone();
                        next.insert(name.clone(), value.clone());
                        next
                    })
                })
                .collect();
        }
        Ok(combinations)
    }

    /// Applies every combination to `base`, validating each result.
    pub fn combinations(
        &self,
        base: &SelectorConfig,
    ) -> Result<Vec<SelectorConfig>, ConfigurationError> {
        self.overrides()?
            .iter()
            .map(|overrides| base.with_overrides(overrides))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct SweepOutcome {
    pub config: SelectorConfig,
    pub metrics: SimulationMetrics,
}

impl SweepOutcome {
    /// Strictly better than `baseline` on both write amplification and part count.
    pub fn beats(&self, baseline: &SimulationMetrics) -> bool {
        self.metrics.write_amplification < baseline.write_amplification
            && self.metrics.average_part_count < baseline.average_part_count
    }
}

#[derive(Debug, Clone)]
pub struct SweepReport {
    pub baseline: SimulationMetrics,
    /// Every combination, best first.
    pub outcomes: Vec<SweepOutcome>,
}

impl SweepReport {
    pub fn improved(&self) -> Vec<&SweepOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.beats(&self.baseline))
            .collect()
    }
}

/// Orders by write amplification, then by average part count, both ascending.
pub fn rank_outcomes(outcomes: &mut [SweepOutcome]) {
    outcomes.sort_by(|a, b| {
        match a
            .metrics
            .write_amplification
            .total_cmp(&b.metrics.write_amplification)
        {
            Ordering::Equal => a
                .metrics
                .average_part_count
                .total_cmp(&b.metrics.average_part_count),
            other => other,
        }
    });
}

/// Runs `base` and every grid combination on the same workload.
///
/// All combinations are validated before anything runs. Runs share one seed
/// so their metrics are comparable.
pub fn run_sweep(
    base: &SelectorConfig,
    grid: &SweepGrid,
    simulation: &SimulationConfig,
) -> Result<SweepReport, SimulationError> {
    let combinations = grid.combinations(base)?;

    let mut simulation = simulation.clone();
    let seed = *simulation.seed.get_or_insert_with(rand::random);

    info!(
        target: "sweep::run",
        combinations = combinations.len(),
        steps = simulation.steps,
        seed,
        "Starting configuration sweep"
    );

    let baseline = run_simulation(base, &simulation)?;
    info!(
        target: "sweep::run",
        write_amplification = baseline.write_amplification,
        average_part_count = baseline.average_part_count,
        "Baseline finished"
    );

    let mut outcomes = combinations
        .into_par_iter()
        .map(|config| {
            let metrics = run_simulation(&config, &simulation)?;
            Ok(SweepOutcome { config, metrics })
        })
        .collect::<Result<Vec<_>, SimulationError>>()?;

    rank_outcomes(&mut outcomes);

    let report = SweepReport { baseline, outcomes };
    info!(
        target: "sweep::run",
        improved = report.improved().len(),
        total = report.outcomes.len(),
        "Configuration sweep finished"
    );
    Ok(report)
}
