//! Linear chain networks
//!
//! `S -> N0 -> N1 -> ... -> N{layers-1} -> T` with a uniform capacity. Every
//! augmenting path has to walk the full chain, which makes the per-round
//! cost of the depth-first search grow with the number of layers.

use log::debug;

use super::{internal_label, GeneratorError, SINK, SOURCE};
use crate::algorithm::traits::Capacity;
use crate::data_structures::flow_network::FlowNetwork;

/// Build a chain of `layers` internal vertices between [`SOURCE`] and [`SINK`].
///
/// Zero layers yields the single edge `S -> T`.
pub fn worst_case_graph(
    layers: usize,
    capacity_per_edge: Capacity,
) -> Result<FlowNetwork<String>, GeneratorError> {
    if capacity_per_edge < 0 {
        return Err(GeneratorError::NegativeCapacity(capacity_per_edge));
    }

    let mut network = FlowNetwork::with_capacity(layers + 2, layers + 1);
    let mut previous = SOURCE.to_string();

    for i in 0..layers {
        let node = internal_label(i);
        network.add_edge(previous, node.clone(), capacity_per_edge)?;
        previous = node;
    }
    network.add_edge(previous, SINK.to_string(), capacity_per_edge)?;

    debug!("generated chain network with {} layers", layers);
    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::graph::max_flow::FordFulkerson;

    #[test]
    fn test_chain_shape() {
        let network = worst_case_graph(3, 7).unwrap();

        assert_eq!(network.vertex_count(), 5);
        assert_eq!(network.edge_count(), 4);
        let hops: Vec<(String, String)> = network
            .edges()
            .map(|(_, e)| (network.label(e.from()).clone(), network.label(e.to()).clone()))
            .collect();
        assert_eq!(hops[0], ("S".to_string(), "N0".to_string()));
        assert_eq!(hops[3], ("N2".to_string(), "T".to_string()));
        assert!(network.edges().all(|(_, e)| e.capacity() == 7));
    }

    #[test]
    fn test_zero_layers_is_direct_edge() {
        let network = worst_case_graph(0, 4).unwrap();
        assert_eq!(network.edge_count(), 1);
        assert!(network.find_edge(SOURCE, SINK).is_some());
    }

    #[test]
    fn test_chain_flow_equals_edge_capacity() {
        let mut network = worst_case_graph(100, 1000).unwrap();
        let result = FordFulkerson::new().solve(&mut network, SOURCE, SINK);

        assert_eq!(result.max_flow, 1000);
        assert_eq!(result.metrics.augmentations, 1);
    }

    #[test]
    fn test_negative_capacity_rejected() {
        assert_eq!(
            worst_case_graph(2, -1).unwrap_err(),
            GeneratorError::NegativeCapacity(-1)
        );
    }
}
