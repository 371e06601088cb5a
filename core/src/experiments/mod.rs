//! Empirical study of Ford-Fulkerson running time
//!
//! Generates random and worst-case chain instances over a range of sizes,
//! times each max-flow computation, persists the raw timings as CSV and
//! condenses them into per-size summary statistics.

pub mod config;
pub mod report;
pub mod runner;

pub use self::config::{ExperimentConfig, RandomExperimentConfig, WorstCaseExperimentConfig};
pub use self::report::{
    format_summary_table, read_records_csv, summarize, write_records_csv, write_summary_csv,
    SummaryRow,
};
pub use self::runner::{run_random_experiments, run_worst_case_experiments, TimingRecord};

use crate::generators::GeneratorError;
use crate::validation::correctness::InvariantViolation;

/// Failures of the experiment pipeline
#[derive(Debug, thiserror::Error)]
pub enum ExperimentError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("Flow check failed for {nodes}-node instance, run {run}: {violation}")]
    InvariantViolated {
        nodes: usize,
        run: usize,
        violation: InvariantViolation,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration parse error: {0}")]
    Json(#[from] serde_json::Error),
}
