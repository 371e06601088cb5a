//! Depth-first augmenting-path search over the residual network
//!
//! The search walks outgoing arcs in adjacency order and returns the first
//! source-to-sink path it completes, not the shortest or widest one. Each
//! vertex is expanded at most once per search, so a single attempt costs
//! O(V + E); the Ford-Fulkerson driver may need O(|f*|) attempts.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::trace;
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{Capacity, EdgeId, VertexId};
use crate::data_structures::flow_network::{FlowNetwork, NodeLabel};

/// One sink-reaching path in the residual network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentingPath {
    /// Arcs from source to sink, in traversal order
    pub edges: Vec<EdgeId>,
    /// Minimum residual capacity along `edges`, bounded by the initial limit
    pub bottleneck: Capacity,
}

impl AugmentingPath {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Recursive depth-first search with a reusable visited buffer
#[derive(Debug, Clone, Default)]
pub struct DepthFirstSearch {
    visited: Vec<bool>,
    /// Vertices expanded since construction
    explored: usize,
}

impl DepthFirstSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of vertex expansions across every search run so far
    pub fn explored(&self) -> usize {
        self.explored
    }

    /// Find one augmenting path from `source` to `sink` with bottleneck at
    /// most `limit`.
    ///
    /// Returns `None` when the sink is unreachable through arcs with
    /// positive residual capacity. When `source == sink` the result is an
    /// empty path carrying `limit` unchanged; callers decide what that means.
    pub fn find_path<N: NodeLabel>(
        &mut self,
        network: &FlowNetwork<N>,
        source: VertexId,
        sink: VertexId,
        limit: Capacity,
    ) -> Option<AugmentingPath> {
        self.visited.clear();
        self.visited.resize(network.vertex_count(), false);

        let mut edges = Vec::new();
        let bottleneck = self.visit(network, source, sink, limit, &mut edges);
        if bottleneck == 0 {
            return None;
        }

        // collected while unwinding, sink end first
        edges.reverse();
        trace!(
            "augmenting path of {} arcs, bottleneck {}",
            edges.len(),
            bottleneck
        );
        Some(AugmentingPath { edges, bottleneck })
    }

    fn visit<N: NodeLabel>(
        &mut self,
        network: &FlowNetwork<N>,
        current: VertexId,
        sink: VertexId,
        limit: Capacity,
        path: &mut Vec<EdgeId>,
    ) -> Capacity {
        if current == sink {
            return limit;
        }

        self.visited[current.0] = true;
        self.explored += 1;

        for &id in network.outgoing(current) {
            let edge = network.edge(id);
            let residual = edge.residual_capacity();
            if residual == 0 || self.visited[edge.to().0] {
                continue;
            }

            let found = self.visit(network, edge.to(), sink, limit.min(residual), path);
            if found > 0 {
                path.push(id);
                return found;
            }
        }

        0
    }
}
