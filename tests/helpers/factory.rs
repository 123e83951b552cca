pub use super::factories::{PartFactory, SelectorConfigFactory};

pub struct Factory;

impl Factory {
    pub fn part() -> PartFactory {
        PartFactory::new()
    }

    pub fn selector_config() -> SelectorConfigFactory {
        SelectorConfigFactory::new()
    }
}
