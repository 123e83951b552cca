use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

use super::metrics::ratio;
use crate::engine::errors::ReportError;

/// Profile counter holding the bytes a part event wrote to disk.
pub const WRITE_BYTES_COUNTER: &str = "WriteBufferFromFileDescriptorWriteBytes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PartLogEventType {
    NewPart,
    #[serde(alias = "MergePart")]
    MergeParts,
    RemovePart,
    #[serde(other)]
    Other,
}

/// A counter as exported in JSON: 64-bit integers usually arrive quoted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ProfileCounter {
    Number(u64),
    Text(String),
}

/// One row of a `system.part_log` dump.
#[derive(Debug, Clone, Deserialize)]
pub struct PartLogEvent {
    pub event_type: PartLogEventType,
    pub event_time: String,
    #[serde(rename = "ProfileEvents", default)]
    pub profile_events: HashMap<String, ProfileCounter>,
    #[serde(default)]
    pub merged_from: Vec<String>,
}

impl PartLogEvent {
    pub fn write_bytes(&self) -> Result<u64, ReportError> {
        match self.profile_events.get(WRITE_BYTES_COUNTER) {
            None => Ok(0),
            Some(ProfileCounter::Number(bytes)) => Ok(*bytes),
            Some(ProfileCounter::Text(text)) => {
                text.trim()
                    .parse()
                    .map_err(|_| ReportError::InvalidCounter {
                        name: WRITE_BYTES_COUNTER.to_string(),
                        value: text.clone(),
                    })
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct PartLogDump {
    data: Vec<PartLogEvent>,
}

/// Write amplification and resident part count observed in a production part log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartLogMetrics {
    /// Bytes written by everything except inserts, per inserted byte.
    pub write_amplification: f64,
    pub average_part_count: f64,
    pub total_bytes_written: u64,
    pub insert_bytes_written: u64,
    pub event_count: usize,
}

/// Parses the `{"data": [...]}` document produced by `FORMAT JSON`.
pub fn parse_part_log(json: &str) -> Result<Vec<PartLogEvent>, ReportError> {
    let dump: PartLogDump = serde_json::from_str(json)?;
    Ok(dump.data)
}

pub fn read_part_log(path: &Path) -> Result<Vec<PartLogEvent>, ReportError> {
    let json = std::fs::read_to_string(path)?;
    parse_part_log(&json)
}

fn parse_event_time(value: &str) -> Result<NaiveDateTime, ReportError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.naive_utc()))
        .map_err(|_| ReportError::InvalidEventTime(value.to_string()))
}

/// Replays part events in time order.
///
/// Removals are ignored; a merge of `n` parts lowers the resident count by `n - 1`.
pub fn compute_part_log_metrics(events: Vec<PartLogEvent>) -> Result<PartLogMetrics, ReportError> {
    let mut timed = Vec::with_capacity(events.len());
    for event in events {
        if event.event_type == PartLogEventType::RemovePart {
            continue;
        }
        timed.push((parse_event_time(&event.event_time)?, event));
    }
    timed.sort_by_key(|(time, _)| *time);

    let mut total_bytes_written: u64 = 0;
    let mut insert_bytes_written: u64 = 0;
    let mut resident: i64 = 0;
    let mut resident_sum: i128 = 0;

    for (_, event) in &timed {
        let bytes = event.write_bytes()?;
        total_bytes_written = total_bytes_written.saturating_add(bytes);

        match event.event_type {
            PartLogEventType::NewPart => {
                insert_bytes_written = insert_bytes_written.saturating_add(bytes);
                resident += 1;
            }
            PartLogEventType::MergeParts => {
                resident -= event.merged_from.len() as i64 - 1;
            }
            PartLogEventType::RemovePart | PartLogEventType::Other => {}
        }
        resident_sum += resident as i128;
    }

    if resident < 0 {
        warn!(
            target: "part_log::metrics",
            resident,
            "Part log starts mid-history; resident count went negative"
        );
    }

    let metrics = PartLogMetrics {
        write_amplification: ratio(
            total_bytes_written.saturating_sub(insert_bytes_written) as f64,
            insert_bytes_written as f64,
        ),
        average_part_count: ratio(resident_sum as f64, timed.len() as f64),
        total_bytes_written,
        insert_bytes_written,
        event_count: timed.len(),
    };
    debug!(target: "part_log::metrics", ?metrics, "Computed part log metrics");
    Ok(metrics)
}
