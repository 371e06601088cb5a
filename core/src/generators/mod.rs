//! Instance generators for max-flow experiments
//!
//! Both generators name the terminals [`SOURCE`] and [`SINK`] and the
//! internal vertices `N0`, `N1`, ... so that their output can be handed
//! directly to the solver.

pub mod random;
pub mod worst_case;

pub use self::random::{random_graph, RandomGraphParams};
pub use self::worst_case::worst_case_graph;

use crate::algorithm::traits::{Capacity, FlowError};

/// Label of the designated source vertex
pub const SOURCE: &str = "S";

/// Label of the designated sink vertex
pub const SINK: &str = "T";

/// Label of the `index`-th internal vertex
pub fn internal_label(index: usize) -> String {
    format!("N{}", index)
}

/// Errors raised for invalid generator parameters
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeneratorError {
    #[error("Edge probability must be between 0 and 1, got {0}")]
    InvalidProbability(f64),

    #[error("Invalid capacity range [{min}, {max}]")]
    InvalidCapacityRange { min: Capacity, max: Capacity },

    #[error("Capacity must be non-negative, got {0}")]
    NegativeCapacity(Capacity),

    #[error(transparent)]
    Network(#[from] FlowError),
}
