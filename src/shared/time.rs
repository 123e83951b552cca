use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// Source of "now" for a workload.
///
/// A selection call reads the clock once and threads that instant through
/// every age computation.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Moves the clock forward by one workload step.
    fn tick(&mut self) {}
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock that only moves when ticked.
#[derive(Debug, Clone)]
pub struct SimulatedClock {
    now: DateTime<Utc>,
    step: Duration,
}

impl SimulatedClock {
    /// Starts at the Unix epoch and advances `seconds_per_step` on every tick.
    pub fn new(seconds_per_step: f64) -> Self {
        Self::starting_at(DateTime::<Utc>::default(), seconds_per_step)
    }

    pub fn starting_at(start: DateTime<Utc>, seconds_per_step: f64) -> Self {
        Self {
            now: start,
            step: Duration::milliseconds((seconds_per_step * 1000.0).round() as i64),
        }
    }

    pub fn advance_secs(&mut self, seconds: f64) {
        self.now += Duration::milliseconds((seconds * 1000.0).round() as i64);
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn tick(&mut self) {
        self.now += self.step;
    }
}

/// Which clock a workload runs against.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockKind {
    #[default]
    Simulated,
    Wall,
}

impl ClockKind {
    pub fn build(self, seconds_per_step: f64) -> Box<dyn Clock + Send> {
        match self {
            ClockKind::Simulated => Box::new(SimulatedClock::new(seconds_per_step)),
            ClockKind::Wall => Box::new(SystemClock),
        }
    }
}

/// Elapsed seconds between `created_at` and `now`, never negative.
pub fn elapsed_seconds(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let elapsed = now.signed_duration_since(created_at);
    (elapsed.num_milliseconds() as f64 / 1000.0).max(0.0)
}
