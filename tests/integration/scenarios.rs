use crate::integration::matcher::Matcher;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct TestScenario {
    pub name: String,
    /// Selector settings replacing the base ones for this scenario.
    #[serde(default)]
    pub selector: BTreeMap<String, Value>,
    /// `[size, age_secs]` pairs; part ids follow the list order.
    pub parts: Vec<(u64, f64)>,
    pub matchers: Vec<Matcher>,
}

pub fn load_scenarios_from_json(path: &str) -> Vec<TestScenario> {
    let content = fs::read_to_string(path).expect("Failed to read scenario file");
    serde_json::from_str(&content).expect("Invalid JSON format")
}
