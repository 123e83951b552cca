pub mod part_factory;
pub mod selector_config_factory;

#[cfg(test)]
mod part_factory_test;
#[cfg(test)]
mod selector_config_factory_test;

pub use part_factory::PartFactory;
pub use selector_config_factory::SelectorConfigFactory;
