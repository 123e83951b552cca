pub mod model;

pub use model::{
    LoggingConfig, SelectorConfig, Settings, SimulationConfig, SweepConfig, load_settings,
    load_settings_from_str,
};
