//! Flow Correctness Verification
//!
//! Checks a computed flow against the invariants every valid flow must
//! satisfy: capacity respect on caller edges, skew symmetry between each
//! edge and its reverse companion, conservation at every vertex other than
//! the terminals, and agreement between the reported total and the net flow
//! leaving the source and entering the sink.
//!
//! Unlike the assertions inside the network itself, violations are collected
//! and returned so that tests and the experiment harness can report them.

use std::borrow::Borrow;
use std::hash::Hash;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{Capacity, EdgeId, Flow, VertexId};
use crate::data_structures::flow_network::{FlowNetwork, NodeLabel};

/// A single broken flow invariant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum InvariantViolation {
    #[error("edge {edge} carries flow {flow} outside [0, {capacity}]")]
    CapacityExceeded {
        edge: EdgeId,
        flow: Flow,
        capacity: Capacity,
    },

    #[error("edge {edge} has flow {flow} but its reverse carries {reverse_flow}")]
    SkewSymmetry {
        edge: EdgeId,
        flow: Flow,
        reverse_flow: Flow,
    },

    #[error("vertex {vertex} is unbalanced by {imbalance}")]
    Conservation { vertex: VertexId, imbalance: Flow },

    #[error("net source outflow {actual} differs from reported total {expected}")]
    SourceOutflow { expected: Flow, actual: Flow },

    #[error("net sink inflow {actual} differs from reported total {expected}")]
    SinkInflow { expected: Flow, actual: Flow },
}

/// Outcome of [`check_flow`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowReport {
    pub violations: Vec<InvariantViolation>,
}

impl FlowReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Convert into a `Result`, surfacing the first violation
    pub fn into_result(self) -> Result<(), InvariantViolation> {
        match self.violations.into_iter().next() {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }
}

/// Verify the flow currently stored in `network` for a run reporting `total`.
///
/// Terminals missing from the network are treated as isolated vertices.
pub fn check_flow<N, Q>(network: &FlowNetwork<N>, source: &Q, sink: &Q, total: Flow) -> FlowReport
where
    N: NodeLabel + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    let mut report = FlowReport::default();

    for (id, edge) in network.edges() {
        if edge.flow() < 0 || edge.flow() > edge.capacity() {
            report.violations.push(InvariantViolation::CapacityExceeded {
                edge: id,
                flow: edge.flow(),
                capacity: edge.capacity(),
            });
        }

        let reverse = network.edge(edge.reverse());
        if edge.flow() != -reverse.flow() {
            report.violations.push(InvariantViolation::SkewSymmetry {
                edge: id,
                flow: edge.flow(),
                reverse_flow: reverse.flow(),
            });
        }
    }

    let mut inflow: Vec<Flow> = vec![0; network.vertex_count()];
    for (_, edge) in network.edges() {
        inflow[edge.to().0] += edge.flow();
        inflow[edge.from().0] -= edge.flow();
    }

    let source = network.vertex_id(source);
    let sink = network.vertex_id(sink);

    for (v, &imbalance) in inflow.iter().enumerate() {
        let vertex = VertexId(v);
        if Some(vertex) == source || Some(vertex) == sink {
            continue;
        }
        if imbalance != 0 {
            report
                .violations
                .push(InvariantViolation::Conservation { vertex, imbalance });
        }
    }

    // With source == sink both nets are the same vertex and must be zero.
    let source_out = source.map_or(0, |s| -inflow[s.0]);
    if source_out != total {
        report.violations.push(InvariantViolation::SourceOutflow {
            expected: total,
            actual: source_out,
        });
    }

    let sink_in = sink.map_or(0, |t| inflow[t.0]);
    if sink_in != total {
        report.violations.push(InvariantViolation::SinkInflow {
            expected: total,
            actual: sink_in,
        });
    }

    if !report.is_valid() {
        warn!("flow check found {} violations", report.violations.len());
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::graph::max_flow::max_flow;

    #[test]
    fn test_valid_flow_passes() {
        let mut network = FlowNetwork::new();
        network.add_edge("S", "A", 3).unwrap();
        network.add_edge("S", "B", 2).unwrap();
        network.add_edge("A", "T", 2).unwrap();
        network.add_edge("B", "T", 3).unwrap();
        network.add_edge("A", "B", 1).unwrap();

        let total = max_flow(&mut network, "S", "T");
        let report = check_flow(&network, "S", "T", total);
        assert!(report.is_valid(), "{:?}", report.violations);
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_wrong_total_is_reported() {
        let mut network = FlowNetwork::new();
        network.add_edge("S", "T", 5).unwrap();
        let total = max_flow(&mut network, "S", "T");

        let report = check_flow(&network, "S", "T", total + 1);
        assert_eq!(
            report.violations,
            vec![
                InvariantViolation::SourceOutflow {
                    expected: 6,
                    actual: 5
                },
                InvariantViolation::SinkInflow {
                    expected: 6,
                    actual: 5
                },
            ]
        );
    }

    #[test]
    fn test_unbalanced_vertex_is_reported() {
        let mut network = FlowNetwork::new();
        let sa = network.add_edge("S", "A", 3).unwrap();
        network.add_edge("A", "T", 3).unwrap();
        network.push_flow(sa, 2);

        let report = check_flow(&network, "S", "T", 0);
        let a = network.vertex_id("A").unwrap();
        assert!(report
            .violations
            .contains(&InvariantViolation::Conservation { vertex: a, imbalance: 2 }));
    }

    #[test]
    fn test_untouched_network_with_zero_total_is_valid() {
        let mut network = FlowNetwork::new();
        network.add_edge("S", "A", 3).unwrap();
        assert!(check_flow(&network, "S", "S", 0).is_valid());
        assert!(check_flow(&network, "S", "T", 0).is_valid());
    }

    #[test]
    fn test_violation_display() {
        let violation = InvariantViolation::Conservation {
            vertex: VertexId(3),
            imbalance: -2,
        };
        assert_eq!(violation.to_string(), "vertex v3 is unbalanced by -2");
    }
}
