use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use tracing::{debug, trace};

use super::metrics::{MetricsTracker, SimulationMetrics};
use crate::engine::core::{CompactionPolicy, MergeSelector, Part, PartCollection, PartId};
use crate::engine::errors::{ConfigurationError, PartError, SimulationError};
use crate::shared::config::{SelectorConfig, SimulationConfig};
use crate::shared::time::Clock;

/// Synthetic insert/merge workload driven by a [`CompactionPolicy`].
///
/// Each step inserts one part of random size and then asks the policy for at
/// most one merge.
pub struct Simulation<P: CompactionPolicy> {
    parts: PartCollection,
    policy: P,
    clock: Box<dyn Clock + Send>,
    rng: StdRng,
    insert_sizes: RangeInclusive<u64>,
    metrics: MetricsTracker,
}

impl<P: CompactionPolicy> Simulation<P> {
    pub fn new(policy: P, config: &SimulationConfig) -> Result<Self, ConfigurationError> {
        let clock = config.clock.build(config.seconds_per_step);
        Self::with_clock(policy, config, clock)
    }

    pub fn with_clock(
        policy: P,
        config: &SimulationConfig,
        clock: Box<dyn Clock + Send>,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            parts: PartCollection::new(),
            policy,
            clock,
            rng,
            insert_sizes: config.min_insert_size..=config.max_insert_size,
            metrics: MetricsTracker::new(),
        })
    }

    /// Appends a part of `size` bytes created now.
    pub fn insert(&mut self, size: u64) -> Result<PartId, PartError> {
        let id = self.parts.insert(size, self.clock.now())?;
        self.metrics.record_insert(size, self.parts.len());
        Ok(id)
    }

    /// Runs one selection and applies the merge it returns, if any.
    pub fn advance(&mut self) -> Result<Option<Part>, PartError> {
        let now = self.clock.now();
        let selection = self.policy.select(self.parts.parts(), now);
        if selection.is_empty() {
            return Ok(None);
        }

        let merged = self.parts.merge(&selection.part_ids(), now)?;
        self.metrics.record_merge(merged.size, self.parts.len());
        trace!(
            target: "simulation::advance",
            inputs = selection.len(),
            size = merged.size,
            score = selection.score,
            resident = self.parts.len(),
            "Applied merge"
        );
        Ok(Some(merged))
    }

    /// Moves the clock, inserts one random part and advances.
    pub fn step(&mut self) -> Result<Option<Part>, PartError> {
        self.clock.tick();
        let size = self.rng.gen_range(self.insert_sizes.clone());
        self.insert(size)?;
        self.advance()
    }

    pub fn run(&mut self, steps: usize) -> Result<SimulationMetrics, PartError> {
        for _ in 0..steps {
            self.step()?;
        }
        let metrics = self.metrics();
        debug!(
            target: "simulation::run",
            steps,
            write_amplification = metrics.write_amplification,
            average_part_count = metrics.average_part_count,
            merges = metrics.merge_count,
            "Simulation finished"
        );
        Ok(metrics)
    }

    pub fn tick(&mut self) {
        self.clock.tick();
    }

    pub fn metrics(&self) -> SimulationMetrics {
        self.metrics.snapshot()
    }

    pub fn parts(&self) -> &PartCollection {
        &self.parts
    }
}

/// Runs `simulation.steps` steps of a workload against a [`MergeSelector`].
pub fn run_simulation(
    selector: &SelectorConfig,
    simulation: &SimulationConfig,
) -> Result<SimulationMetrics, SimulationError> {
    let selector = MergeSelector::new(selector.clone())?;
    debug!(
        target: "simulation::run",
        base = selector.config().base,
        max_parts_to_merge_at_once = selector.config().max_parts_to_merge_at_once,
        steps = simulation.steps,
        "Starting simulation"
    );
    let mut workload = Simulation::new(selector, simulation)?;
    Ok(workload.run(simulation.steps)?)
}
