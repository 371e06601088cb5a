//! Core type definitions shared by the flow algorithms
//!
//! Identifiers, capacity arithmetic types, the error taxonomy for network
//! construction and the minimal [`Algorithm`] trait every solver exposes
//! for reporting.

use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

/// Capacity type. Integral so that augmentation always terminates.
pub type Capacity = i64;

/// Flow value type. Signed: reverse edges carry the negated forward flow.
pub type Flow = i64;

/// Bound handed to the search at the source, standing in for +infinity.
pub const UNBOUNDED: Capacity = Capacity::MAX;

/// Dense vertex index assigned by a [`crate::FlowNetwork`] on first sight of a label
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct VertexId(pub usize);

impl VertexId {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Index of an edge inside the network's edge arena.
///
/// Forward edges live at even indices and their reverse companions at the
/// following odd index, so the twin of any edge is `id ^ 1`.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl EdgeId {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }

    /// The companion edge of the residual pair
    #[inline]
    pub fn twin(self) -> EdgeId {
        EdgeId(self.0 ^ 1)
    }

    #[inline]
    pub fn is_forward(self) -> bool {
        self.0 & 1 == 0
    }
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Errors raised while building a flow network
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("Negative capacity {capacity} on edge {from} -> {to}")]
    NegativeCapacity {
        from: String,
        to: String,
        capacity: Capacity,
    },

    #[error("Capacity {capacity} on edge {from} -> {to} pushes the network total past i64::MAX")]
    CapacityOverflow {
        from: String,
        to: String,
        capacity: Capacity,
    },
}

/// Descriptive surface shared by the solvers
pub trait Algorithm: Debug {
    /// Returns the algorithm's descriptive name
    fn name(&self) -> &'static str;

    /// Returns the algorithm's category (e.g., max_flow)
    fn category(&self) -> &'static str;

    /// Returns a short description including the complexity bound
    fn description(&self) -> String;
}
