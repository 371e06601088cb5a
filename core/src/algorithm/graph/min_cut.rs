//! Minimum cut extraction from a maximised residual network
//!
//! After Ford-Fulkerson terminates, the vertices reachable from the source
//! through arcs with positive residual capacity form the source side of a
//! minimum cut. Every caller edge leaving that set is saturated and their
//! capacities sum to the maximum flow value.

use std::borrow::Borrow;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{Capacity, EdgeId, VertexId};
use crate::data_structures::flow_network::{FlowNetwork, NodeLabel};

/// Source/sink separating cut of a flow network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinCut {
    /// Vertices reachable from the source in the residual network
    pub source_side: Vec<VertexId>,
    /// Caller edges from the source side to the other side
    pub cut_edges: Vec<EdgeId>,
    /// Sum of the capacities of `cut_edges`
    pub capacity: Capacity,
}

impl MinCut {
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.source_side.contains(&vertex)
    }
}

/// Residual reachability cut starting from `source`.
///
/// An unknown source yields an empty cut with zero capacity.
pub fn min_cut<N, Q>(network: &FlowNetwork<N>, source: &Q) -> MinCut
where
    N: NodeLabel + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    let Some(source) = network.vertex_id(source) else {
        return MinCut {
            source_side: Vec::new(),
            cut_edges: Vec::new(),
            capacity: 0,
        };
    };

    let reachable = residual_reachable(network, source);

    let source_side = (0..network.vertex_count())
        .filter(|&v| reachable[v])
        .map(VertexId)
        .collect();

    let cut_edges: Vec<EdgeId> = network
        .edges()
        .filter(|(_, edge)| reachable[edge.from().0] && !reachable[edge.to().0])
        .map(|(id, _)| id)
        .collect();

    let capacity = cut_edges
        .iter()
        .map(|&id| network.edge(id).capacity())
        .sum();

    MinCut {
        source_side,
        cut_edges,
        capacity,
    }
}

/// Mark every vertex reachable from `source` over arcs with residual capacity
fn residual_reachable<N: NodeLabel>(network: &FlowNetwork<N>, source: VertexId) -> Vec<bool> {
    let mut reachable = vec![false; network.vertex_count()];
    let mut stack = vec![source];
    reachable[source.0] = true;

    while let Some(vertex) = stack.pop() {
        for &id in network.outgoing(vertex) {
            let edge = network.edge(id);
            if edge.residual_capacity() > 0 && !reachable[edge.to().0] {
                reachable[edge.to().0] = true;
                stack.push(edge.to());
            }
        }
    }

    reachable
}
