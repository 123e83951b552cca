use crate::integration::config::base_selector;
use crate::integration::scenarios::TestScenario;
use chrono::{DateTime, Duration, TimeZone, Utc};
use merge_selector::engine::core::{MergeSelector, Part, PartId};
use merge_selector::shared::config::SelectorConfig;
use serde_json::Value;
use tracing::{error, info};

fn scenario_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).single().unwrap()
}

pub fn run_scenario(scenario: &TestScenario) {
    info!("▶ Running scenario: {}", scenario.name);

    let mut fields = base_selector();
    for (name, value) in &scenario.selector {
        assert!(
            fields.contains_key(name),
            "scenario '{}' overrides unknown setting {}",
            scenario.name,
            name
        );
        fields.insert(name.clone(), value.clone());
    }
    let config: SelectorConfig = serde_json::from_value(Value::Object(fields)).unwrap();
    let selector = MergeSelector::new(config).unwrap();

    let now = scenario_now();
    let parts: Vec<Part> = scenario
        .parts
        .iter()
        .enumerate()
        .map(|(i, (size, age))| {
            let created_at = now - Duration::milliseconds((age * 1000.0).round() as i64);
            Part::new(PartId(i as u64), *size, created_at)
        })
        .collect();

    let selection = selector.select_parts_to_merge(&parts, now);

    for matcher in &scenario.matchers {
        if !matcher.matches(&selection) {
            error!("Scenario '{}' failed on {:?}", scenario.name, matcher);
            panic!(
                "❌ Scenario '{}' failed: {:?} did not match {:?}",
                scenario.name, matcher, selection
            );
        }
    }
    info!("✅ Scenario '{}' passed", scenario.name);
}
