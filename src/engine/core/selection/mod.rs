pub mod admission;
pub mod candidate_window;
pub mod heuristics;
pub mod interpolation;
pub mod merge_selector;
pub mod score;

pub use admission::{AdmissionThreshold, admission_ratio, allow_merge};
pub use candidate_window::CandidateWindow;
pub use interpolation::{interpolate_linear, map_piecewise_linear};
pub use merge_selector::MergeSelector;
pub use score::score;
