//! CSV persistence and per-size summary statistics for timing records

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use super::runner::TimingRecord;
use super::ExperimentError;

/// Aggregated running time for one instance size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub nodes: usize,
    pub samples: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator), 0 for a single sample
    pub std_dev: f64,
    pub p25: f64,
    pub p75: f64,
    pub min: f64,
    pub max: f64,
}

/// Write raw timing records with a header row. Nothing is written for an empty slice.
pub fn write_records_csv(
    path: impl AsRef<Path>,
    records: &[TimingRecord],
) -> Result<(), ExperimentError> {
    let path = path.as_ref();
    if records.is_empty() {
        debug!("no records; skipping {}", path.display());
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    debug!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Read timing records previously written by [`write_records_csv`]
pub fn read_records_csv(path: impl AsRef<Path>) -> Result<Vec<TimingRecord>, ExperimentError> {
    let mut reader = csv::Reader::from_path(path)?;
    let records = reader
        .deserialize()
        .collect::<Result<Vec<TimingRecord>, csv::Error>>()?;
    Ok(records)
}

pub fn write_summary_csv(path: impl AsRef<Path>, rows: &[SummaryRow]) -> Result<(), ExperimentError> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Group records by size (ascending) and compute timing statistics for each group
pub fn summarize(records: &[TimingRecord]) -> Vec<SummaryRow> {
    let mut groups: BTreeMap<usize, Vec<f64>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.nodes)
            .or_default()
            .push(record.time_seconds);
    }

    groups
        .into_iter()
        .map(|(nodes, mut times)| {
            times.sort_by(|a, b| a.total_cmp(b));
            let samples = times.len();
            let mean = times.iter().sum::<f64>() / samples as f64;
            let std_dev = if samples > 1 {
                let squares: f64 = times.iter().map(|t| (t - mean).powi(2)).sum();
                (squares / (samples - 1) as f64).sqrt()
            } else {
                0.0
            };

            SummaryRow {
                nodes,
                samples,
                mean,
                std_dev,
                p25: percentile(&times, 0.25),
                p75: percentile(&times, 0.75),
                min: times[0],
                max: times[samples - 1],
            }
        })
        .collect()
}

/// Linearly interpolated quantile of an ascending, non-empty slice
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    sorted[lower] + (sorted[upper] - sorted[lower]) * (position - lower as f64)
}

/// Render summary rows as a fixed-width text table, times in milliseconds
pub fn format_summary_table(title: &str, rows: &[SummaryRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(
        out,
        "{:>8} {:>7} {:>12} {:>12} {:>12} {:>12}",
        "nodes", "samples", "mean ms", "std ms", "p25 ms", "p75 ms"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:>8} {:>7} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
            row.nodes,
            row.samples,
            row.mean * 1e3,
            row.std_dev * 1e3,
            row.p25 * 1e3,
            row.p75 * 1e3
        );
    }
    out
}
