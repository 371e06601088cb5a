//! Residual flow network with paired forward/reverse edges
//!
//! Every call to [`FlowNetwork::add_edge`] creates two records in the edge
//! arena: the forward edge carrying the caller's capacity and a reverse edge
//! of capacity zero. Each holds the index of its twin rather than owning
//! it; the network owns both. Pushing flow on one side always subtracts the
//! same amount from the other, so `edge.flow == -twin.flow` holds at all
//! times and the reverse edge's residual capacity equals the forward flow
//! that may be cancelled.
//!
//! Vertices are interned: a label is assigned a dense [`VertexId`] the first
//! time it appears as an endpoint, and per-vertex adjacency lists keep edge
//! insertion order so that the search explores edges deterministically.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{Capacity, EdgeId, Flow, FlowError, VertexId};

/// Requirements on vertex labels: strings, integers or any comparable key
pub trait NodeLabel: Clone + Eq + Hash + Debug + Display {}

impl<T: Clone + Eq + Hash + Debug + Display> NodeLabel for T {}

/// A directed arc of the residual network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    from: VertexId,
    to: VertexId,
    capacity: Capacity,
    flow: Flow,
    reverse: EdgeId,
}

impl FlowEdge {
    fn new(from: VertexId, to: VertexId, capacity: Capacity, reverse: EdgeId) -> Self {
        Self {
            from,
            to,
            capacity,
            flow: 0,
            reverse,
        }
    }

    #[inline]
    pub fn from(&self) -> VertexId {
        self.from
    }

    #[inline]
    pub fn to(&self) -> VertexId {
        self.to
    }

    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    #[inline]
    pub fn flow(&self) -> Flow {
        self.flow
    }

    /// Index of the companion edge in the opposite direction
    #[inline]
    pub fn reverse(&self) -> EdgeId {
        self.reverse
    }

    /// Unused capacity, `capacity - flow`.
    ///
    /// # Panics
    /// If the result is negative; flow was pushed past capacity somewhere.
    #[inline]
    pub fn residual_capacity(&self) -> Capacity {
        let residual = self.capacity - self.flow;
        assert!(
            residual >= 0,
            "negative residual capacity on {} -> {}: capacity {}, flow {}",
            self.from,
            self.to,
            self.capacity,
            self.flow
        );
        residual
    }

    /// Whether this is a caller-added edge rather than a reverse companion
    #[inline]
    pub fn is_forward(&self) -> bool {
        !self.reverse.is_forward()
    }

    /// Whether the edge has no remaining residual capacity
    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.residual_capacity() == 0
    }
}

/// Flow network representation with residual graph
#[derive(Debug, Clone)]
pub struct FlowNetwork<N> {
    /// Vertex labels indexed by `VertexId`
    labels: Vec<N>,
    /// Label to dense id
    index: HashMap<N, VertexId>,
    /// Outgoing edges per vertex, forward and reverse, in insertion order
    adjacency: Vec<Vec<EdgeId>>,
    /// Edge arena: forward at `2k`, reverse at `2k + 1`
    edges: Vec<FlowEdge>,
    /// Sum of all forward capacities; bounds every flow and cut total
    total_capacity: Capacity,
}

impl<N: NodeLabel> Default for FlowNetwork<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeLabel> FlowNetwork<N> {
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edges: Vec::new(),
            total_capacity: 0,
        }
    }

    /// Create a network with room for `vertices` labels and `edges` caller edges
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            labels: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            adjacency: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges * 2),
            total_capacity: 0,
        }
    }

    /// Intern a label, returning its existing id when already known
    pub fn add_vertex(&mut self, label: N) -> VertexId {
        if let Some(&id) = self.index.get(&label) {
            return id;
        }
        let id = VertexId(self.labels.len());
        self.labels.push(label.clone());
        self.index.insert(label, id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Add edge `u -> v` together with its zero-capacity reverse.
    ///
    /// Self-loops are accepted; the search never benefits from them.
    ///
    /// The summed capacity of the network must stay within [`Capacity`], so
    /// that flow totals, cut capacities and per-vertex balances cannot
    /// overflow. An edge that would exceed it is rejected and nothing is added.
    pub fn add_edge(&mut self, u: N, v: N, capacity: Capacity) -> Result<EdgeId, FlowError> {
        if capacity < 0 {
            return Err(FlowError::NegativeCapacity {
                from: u.to_string(),
                to: v.to_string(),
                capacity,
            });
        }
        let Some(total_capacity) = self.total_capacity.checked_add(capacity) else {
            return Err(FlowError::CapacityOverflow {
                from: u.to_string(),
                to: v.to_string(),
                capacity,
            });
        };
        self.total_capacity = total_capacity;

        let from = self.add_vertex(u);
        let to = self.add_vertex(v);

        let forward = EdgeId(self.edges.len());
        let reverse = forward.twin();

        self.edges.push(FlowEdge::new(from, to, capacity, reverse));
        self.edges.push(FlowEdge::new(to, from, 0, forward));

        self.adjacency[from.0].push(forward);
        self.adjacency[to.0].push(reverse);

        Ok(forward)
    }

    pub fn vertex_id<Q>(&self, label: &Q) -> Option<VertexId>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(label).copied()
    }

    pub fn label(&self, id: VertexId) -> &N {
        &self.labels[id.0]
    }

    pub fn labels(&self) -> &[N] {
        &self.labels
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of caller-added (forward) edges
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Sum of the capacities of all caller-added edges
    pub fn total_capacity(&self) -> Capacity {
        self.total_capacity
    }

    pub fn edge(&self, id: EdgeId) -> &FlowEdge {
        &self.edges[id.0]
    }

    /// Outgoing residual arcs of `vertex`, forward and reverse, in insertion order
    pub fn outgoing(&self, vertex: VertexId) -> &[EdgeId] {
        &self.adjacency[vertex.0]
    }

    /// Outgoing arcs of a labelled vertex; empty when the label is unknown
    pub fn adjacent<Q>(&self, label: &Q) -> impl Iterator<Item = &FlowEdge> + '_
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let ids: &[EdgeId] = match self.vertex_id(label) {
            Some(vertex) => &self.adjacency[vertex.0],
            None => &[],
        };
        ids.iter().map(move |&id| &self.edges[id.0])
    }

    /// Caller-added edges in insertion order, reverse companions excluded
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &FlowEdge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .step_by(2)
            .map(|(i, edge)| (EdgeId(i), edge))
    }

    /// Every arc in the arena including reverse companions
    pub fn arcs(&self) -> impl Iterator<Item = (EdgeId, &FlowEdge)> + '_ {
        self.edges.iter().enumerate().map(|(i, edge)| (EdgeId(i), edge))
    }

    /// Look up the forward edge `u -> v` added first between those labels
    pub fn find_edge<Q>(&self, u: &Q, v: &Q) -> Option<&FlowEdge>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let to = self.vertex_id(v)?;
        self.adjacent(u).find(|edge| edge.to == to && edge.is_forward())
    }

    /// Push `amount` units along `id`, debiting its twin by the same amount.
    ///
    /// # Panics
    /// If this leaves either side with negative residual capacity.
    pub(crate) fn push_flow(&mut self, id: EdgeId, amount: Flow) {
        let reverse = self.edges[id.0].reverse;

        self.edges[id.0].flow += amount;
        self.edges[reverse.0].flow -= amount;

        debug_assert_eq!(
            self.edges[id.0].flow,
            -self.edges[reverse.0].flow,
            "skew symmetry broken on {}",
            id
        );
        self.edges[id.0].residual_capacity();
        self.edges[reverse.0].residual_capacity();
    }

    /// Sum of forward flow into `vertex` minus forward flow out of it
    pub fn net_inflow(&self, vertex: VertexId) -> Flow {
        self.edges()
            .map(|(_, edge)| {
                let mut delta = 0;
                if edge.to == vertex {
                    delta += edge.flow;
                }
                if edge.from == vertex {
                    delta -= edge.flow;
                }
                delta
            })
            .sum()
    }
}
