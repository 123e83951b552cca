pub mod merge_selection;
pub mod policy;

pub use merge_selection::MergeSelection;
pub use policy::{CompactionPolicy, NoMergePolicy};
