pub mod part;
pub mod part_collection;

pub use part::{Part, PartId};
pub use part_collection::PartCollection;
