//! AUGMENT core: augmenting-path maximum flow
//!
//! Residual flow networks with paired forward/reverse edges, a depth-first
//! augmenting-path search and the Ford-Fulkerson driver that consumes it,
//! together with the instance generators, invariant checks and timing
//! harness used to study the algorithm empirically.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod data_structures;
pub mod experiments;
pub mod generators;
pub mod validation;

pub use algorithm::graph::{
    max_flow, min_cut, AugmentingPath, DepthFirstSearch, FlowMetrics, FordFulkerson,
    MaxFlowResult, MinCut,
};
pub use algorithm::traits::{Algorithm, Capacity, EdgeId, Flow, FlowError, VertexId, UNBOUNDED};
pub use data_structures::flow_network::{FlowEdge, FlowNetwork, NodeLabel};
pub use validation::correctness::{check_flow, FlowReport, InvariantViolation};
