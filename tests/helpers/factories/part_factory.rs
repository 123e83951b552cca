use crate::engine::core::{Part, PartId};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{Value, json};
use std::collections::HashMap;

/// Fixed instant the factories measure ages against.
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).single().unwrap()
}

pub struct PartFactory {
    params: HashMap<String, Value>,
    now: DateTime<Utc>,
}

impl PartFactory {
    pub fn new() -> Self {
        let mut params = HashMap::new();
        params.insert("id".into(), json!(0));
        params.insert("size".into(), json!(1000));
        params.insert("age_secs".into(), json!(0.0));
        Self {
            params,
            now: reference_now(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn create(self) -> Part {
        let id = self.params["id"].as_u64().unwrap();
        let size = self.params["size"].as_u64().unwrap();
        let age = self.params["age_secs"].as_f64().unwrap();
        Part::new(PartId(id), size, created_before(self.now, age))
    }

    /// One part per `(size, age_secs)` pair, with ids `0..n` in order.
    pub fn create_list(self, sizes_and_ages: &[(u64, f64)]) -> Vec<Part> {
        sizes_and_ages
            .iter()
            .enumerate()
            .map(|(i, (size, age))| {
                Part::new(PartId(i as u64), *size, created_before(self.now, *age))
            })
            .collect()
    }
}

fn created_before(now: DateTime<Utc>, age_secs: f64) -> DateTime<Utc> {
    now - Duration::milliseconds((age_secs * 1000.0).round() as i64)
}
