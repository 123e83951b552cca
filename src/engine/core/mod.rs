pub mod compaction;
pub mod part;
pub mod selection;

pub use compaction::{CompactionPolicy, MergeSelection, NoMergePolicy};
pub use part::{Part, PartCollection, PartId};
pub use selection::MergeSelector;
