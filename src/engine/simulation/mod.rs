pub mod metrics;
pub mod part_log;
pub mod report;
pub mod sweep;
pub mod workload;

pub use metrics::{MetricsTracker, SimulationMetrics};
pub use part_log::{PartLogMetrics, compute_part_log_metrics, parse_part_log, read_part_log};
pub use report::{write_csv, write_csv_to};
pub use sweep::{SweepGrid, SweepOutcome, SweepReport, rank_outcomes, run_sweep};
pub use workload::{Simulation, run_simulation};
