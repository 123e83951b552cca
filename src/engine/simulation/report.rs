use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use super::sweep::SweepOutcome;
use crate::engine::errors::ReportError;

const METRIC_COLUMNS: [&str; 4] = [
    "write_amplification",
    "average_part_count",
    "merge_count",
    "final_part_count",
];

/// Writes one row per outcome: the metrics, then every selector setting.
pub fn write_csv(path: &Path, outcomes: &[SweepOutcome]) -> Result<(), ReportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_csv_to(&mut writer, outcomes)?;
    writer.flush()?;
    info!(target: "report::csv", path = %path.display(), rows = outcomes.len(), "Wrote sweep results");
    Ok(())
}

pub fn write_csv_to<W: Write>(writer: &mut W, outcomes: &[SweepOutcome]) -> Result<(), ReportError> {
    let mut rows = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        if let Value::Object(settings) = serde_json::to_value(&outcome.config)? {
            rows.push((&outcome.metrics, settings));
        }
    }

    let setting_columns: Vec<String> = rows
        .first()
        .map(|(_, settings)| settings.keys().cloned().collect())
        .unwrap_or_default();

    let header: Vec<&str> = METRIC_COLUMNS
        .iter()
        .copied()
        .chain(setting_columns.iter().map(String::as_str))
        .collect();
    writeln!(writer, "{}", header.join(","))?;

    for (metrics, settings) in &rows {
        let mut row = vec![
            metrics.write_amplification.to_string(),
            metrics.average_part_count.to_string(),
            metrics.merge_count.to_string(),
            metrics.final_part_count.to_string(),
        ];
        row.extend(
            setting_columns
                .iter()
                .map(|name| settings.get(name).map(Value::to_string).unwrap_or_default()),
        );
        writeln!(writer, "{}", row.join(","))?;
    }

    Ok(())
}
