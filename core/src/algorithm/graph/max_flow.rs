//! Ford-Fulkerson Maximum Flow
//!
//! Repeatedly asks the depth-first search for one augmenting path in the
//! current residual network, pushes the path's bottleneck along every arc
//! (debiting each reverse companion), and stops when the sink is no longer
//! reachable. With integral capacities each round raises the total by at
//! least one unit, giving the classic O(|f*| * E) bound.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::borrow::Borrow;
use std::hash::Hash;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::algorithm::graph::augmenting_path::DepthFirstSearch;
use crate::algorithm::traits::{Algorithm, Flow, VertexId, UNBOUNDED};
use crate::data_structures::flow_network::{FlowNetwork, NodeLabel};

/// Maximum flow result with solver statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MaxFlowResult {
    /// Flow delivered from source to sink by this run
    pub max_flow: Flow,
    /// Flow algorithm performance metrics
    pub metrics: FlowMetrics,
}

/// Counters gathered while solving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlowMetrics {
    /// Number of paths along which flow was pushed
    pub augmentations: usize,
    /// Vertex expansions performed by the search, failed final attempt included
    pub vertices_explored: usize,
}

/// Ford-Fulkerson solver using first-found depth-first augmenting paths
#[derive(Debug, Clone, Default)]
pub struct FordFulkerson {
    search: DepthFirstSearch,
}

impl FordFulkerson {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run to completion and return the flow added to `network`.
    ///
    /// Unknown labels are treated as isolated vertices, so the result is 0.
    pub fn compute<N, Q>(&mut self, network: &mut FlowNetwork<N>, source: &Q, sink: &Q) -> Flow
    where
        N: NodeLabel + Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.solve(network, source, sink).max_flow
    }

    /// Run to completion, returning the total together with solver metrics
    pub fn solve<N, Q>(
        &mut self,
        network: &mut FlowNetwork<N>,
        source: &Q,
        sink: &Q,
    ) -> MaxFlowResult
    where
        N: NodeLabel + Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match (network.vertex_id(source), network.vertex_id(sink)) {
            (Some(s), Some(t)) => self.solve_ids(network, s, t),
            _ => {
                debug!("source or sink absent from network; no flow possible");
                MaxFlowResult::default()
            }
        }
    }

    /// Same as [`FordFulkerson::solve`] for already-resolved vertex ids
    pub fn solve_ids<N: NodeLabel>(
        &mut self,
        network: &mut FlowNetwork<N>,
        source: VertexId,
        sink: VertexId,
    ) -> MaxFlowResult {
        let mut result = MaxFlowResult::default();

        // An empty path would carry the unbounded sentinel.
        if source == sink {
            debug!("source equals sink ({}); max flow is 0", network.label(source));
            return result;
        }

        let explored_before = self.search.explored();

        while let Some(path) = self.search.find_path(network, source, sink, UNBOUNDED) {
            for &id in &path.edges {
                network.push_flow(id, path.bottleneck);
            }
            // cannot overflow: the network's total capacity fits in `Flow`
            result.max_flow += path.bottleneck;
            result.metrics.augmentations += 1;
            trace!(
                "augmentation {}: +{} (total {})",
                result.metrics.augmentations,
                path.bottleneck,
                result.max_flow
            );
        }

        result.metrics.vertices_explored = self.search.explored() - explored_before;
        debug!(
            "max flow {} -> {} = {} after {} augmentations",
            network.label(source),
            network.label(sink),
            result.max_flow,
            result.metrics.augmentations
        );
        result
    }
}

impl Algorithm for FordFulkerson {
    fn name(&self) -> &'static str {
        "Ford-Fulkerson"
    }

    fn category(&self) -> &'static str {
        "max_flow"
    }

    fn description(&self) -> String {
        "Ford-Fulkerson maximum flow with first-found depth-first augmenting paths; \
         O(|f*| * E) time for integral capacities, O(V + E) space."
            .to_string()
    }
}

/// Compute the maximum flow from `source` to `sink`, mutating edge flows in place.
///
/// Running it again on an already maximised network returns 0.
pub fn max_flow<N, Q>(network: &mut FlowNetwork<N>, source: &Q, sink: &Q) -> Flow
where
    N: NodeLabel + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    FordFulkerson::new().compute(network, source, sink)
}
