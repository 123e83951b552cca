use thiserror::Error;
use tracing::{debug, error};

use crate::engine::core::PartId;

/// Errors raised while loading or validating settings.
///
/// Every variant is produced before a selection call runs; the selector never
/// validates mid-algorithm.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("Unknown selector setting: {0}")]
    UnknownSetting(String),

    #[error("Invalid override for `{field}`: {reason}")]
    InvalidOverride { field: String, reason: String },

    #[error("Sweep axis `{0}` has no candidate values")]
    EmptySweepAxis(String),
}

impl ConfigurationError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigurationError::Invalid {
            field,
            reason: reason.into(),
        }
    }

    pub fn log_error(&self) {
        error!(target: "config", "Configuration rejected: {}", self);
        debug!(target: "config", "Configuration error details: {:?}", self);
    }
}

/// Errors raised by the part collection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartError {
    #[error("Part size must be strictly positive")]
    InvalidSize,

    #[error("Part {0} is not resident in the collection")]
    UnknownPart(PartId),

    #[error("Part {0} appears more than once in the merge")]
    DuplicatePart(PartId),

    #[error("A merge needs at least one part")]
    EmptyMerge,

    #[error("Merged part size overflows u64")]
    SizeOverflow,
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Part collection error: {0}")]
    Part(#[from] PartError),
}

/// Errors raised while reading or writing reports.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid event time: {0}")]
    InvalidEventTime(String),

    #[error("Invalid profile counter `{name}`: {value}")]
    InvalidCounter { name: String, value: String },
}
