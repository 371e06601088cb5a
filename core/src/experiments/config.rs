//! Experiment configuration
//!
//! Every field has a default, so a JSON file only needs to name the values
//! it changes.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use super::ExperimentError;
use crate::algorithm::traits::Capacity;
use crate::generators::RandomGraphParams;

/// Top-level experiment configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Random instance sweep
    pub random: RandomExperimentConfig,

    /// Linear chain sweep
    pub worst_case: WorstCaseExperimentConfig,

    /// Base seed for instance generation; drawn from entropy when absent
    pub seed: Option<u64>,

    /// Check flow invariants after every timed run
    pub verify: bool,

    /// Directory receiving the CSV outputs
    pub output_dir: PathBuf,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            random: RandomExperimentConfig::default(),
            worst_case: WorstCaseExperimentConfig::default(),
            seed: None,
            verify: false,
            output_dir: PathBuf::from("results"),
        }
    }
}

/// Random instance sweep parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomExperimentConfig {
    /// Internal vertex counts to sweep
    pub sizes: Vec<usize>,
    /// Instances generated and timed per size
    pub repetitions: usize,
    pub edge_probability: f64,
    pub min_capacity: Capacity,
    pub max_capacity: Capacity,
}

impl Default for RandomExperimentConfig {
    fn default() -> Self {
        Self {
            sizes: vec![10, 20, 40, 80, 160],
            repetitions: 5,
            edge_probability: 0.3,
            min_capacity: 1,
            max_capacity: 20,
        }
    }
}

impl RandomExperimentConfig {
    /// Generator parameters for instances with `nodes` internal vertices
    pub fn params(&self, nodes: usize) -> RandomGraphParams {
        RandomGraphParams {
            nodes,
            edge_probability: self.edge_probability,
            min_capacity: self.min_capacity,
            max_capacity: self.max_capacity,
        }
    }
}

/// Chain sweep parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorstCaseExperimentConfig {
    /// Chain lengths (internal layers) to sweep
    pub sizes: Vec<usize>,
    pub repetitions: usize,
    pub capacity_per_edge: Capacity,
}

impl Default for WorstCaseExperimentConfig {
    fn default() -> Self {
        Self {
            sizes: vec![10, 50, 100, 200, 400],
            repetitions: 5,
            capacity_per_edge: 1000,
        }
    }
}

impl ExperimentConfig {
    /// Load a configuration from a JSON file, falling back to defaults per field
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ExperimentError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        debug!("loaded experiment configuration from {}", path.display());
        Ok(config)
    }

    /// Validate both sweeps, as needed before running them together
    pub fn validate(&self) -> Result<(), ExperimentError> {
        self.random.validate()?;
        self.worst_case.validate()
    }
}

fn check_sweep(name: &str, sizes: &[usize], repetitions: usize) -> Result<(), ExperimentError> {
    if sizes.is_empty() {
        return Err(ExperimentError::InvalidConfig(format!(
            "{}: no instance sizes configured",
            name
        )));
    }
    if repetitions == 0 {
        return Err(ExperimentError::InvalidConfig(format!(
            "{}: repetitions must be positive",
            name
        )));
    }
    Ok(())
}

impl RandomExperimentConfig {
    pub fn validate(&self) -> Result<(), ExperimentError> {
        check_sweep("random", &self.sizes, self.repetitions)?;
        // Range and probability checks share the generator's validation.
        self.params(0).validate()?;
        Ok(())
    }
}

impl WorstCaseExperimentConfig {
    pub fn validate(&self) -> Result<(), ExperimentError> {
        check_sweep("worst_case", &self.sizes, self.repetitions)?;
        if self.capacity_per_edge < 0 {
            return Err(ExperimentError::InvalidConfig(format!(
                "worst_case: capacity_per_edge must be non-negative, got {}",
                self.capacity_per_edge
            )));
        }
        Ok(())
    }
}
