//! Random layered-by-chance flow networks
//!
//! Each internal vertex is wired to the source and to the sink with
//! probability [`TERMINAL_EDGE_PROBABILITY`], and every ordered pair of
//! distinct internal vertices receives an edge with the configured
//! probability. Capacities are drawn uniformly from an inclusive range.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{internal_label, GeneratorError, SINK, SOURCE};
use crate::algorithm::traits::Capacity;
use crate::data_structures::flow_network::FlowNetwork;

/// Probability that an internal vertex is connected to each terminal
pub const TERMINAL_EDGE_PROBABILITY: f64 = 0.8;

/// Shape parameters for [`random_graph`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RandomGraphParams {
    /// Number of internal vertices, terminals excluded
    pub nodes: usize,
    /// Probability of an edge between an ordered pair of internal vertices
    pub edge_probability: f64,
    pub min_capacity: Capacity,
    pub max_capacity: Capacity,
}

impl RandomGraphParams {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(GeneratorError::InvalidProbability(self.edge_probability));
        }
        if self.min_capacity < 0 || self.min_capacity > self.max_capacity {
            return Err(GeneratorError::InvalidCapacityRange {
                min: self.min_capacity,
                max: self.max_capacity,
            });
        }
        Ok(())
    }
}

/// Build a random network with source [`SOURCE`] and sink [`SINK`]
pub fn random_graph<R: Rng + ?Sized>(
    params: &RandomGraphParams,
    rng: &mut R,
) -> Result<FlowNetwork<String>, GeneratorError> {
    params.validate()?;

    let nodes: Vec<String> = (0..params.nodes).map(internal_label).collect();
    let expected_edges =
        (params.nodes * params.nodes) as f64 * params.edge_probability + 2.0 * params.nodes as f64;
    let mut network = FlowNetwork::with_capacity(params.nodes + 2, expected_edges as usize);

    for node in &nodes {
        if rng.gen_bool(TERMINAL_EDGE_PROBABILITY) {
            let cap = draw_capacity(params, rng);
            network.add_edge(SOURCE.to_string(), node.clone(), cap)?;
        }
    }

    for u in &nodes {
        for v in &nodes {
            if u != v && rng.gen_bool(params.edge_probability) {
                let cap = draw_capacity(params, rng);
                network.add_edge(u.clone(), v.clone(), cap)?;
            }
        }
    }

    for node in &nodes {
        if rng.gen_bool(TERMINAL_EDGE_PROBABILITY) {
            let cap = draw_capacity(params, rng);
            network.add_edge(node.clone(), SINK.to_string(), cap)?;
        }
    }

    debug!(
        "generated random network: {} vertices, {} edges",
        network.vertex_count(),
        network.edge_count()
    );
    Ok(network)
}

fn draw_capacity<R: Rng + ?Sized>(params: &RandomGraphParams, rng: &mut R) -> Capacity {
    rng.gen_range(params.min_capacity..=params.max_capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn params(nodes: usize, edge_probability: f64) -> RandomGraphParams {
        RandomGraphParams {
            nodes,
            edge_probability,
            min_capacity: 1,
            max_capacity: 20,
        }
    }

    fn edge_list(network: &FlowNetwork<String>) -> Vec<(String, String, Capacity)> {
        network
            .edges()
            .map(|(_, e)| {
                (
                    network.label(e.from()).clone(),
                    network.label(e.to()).clone(),
                    e.capacity(),
                )
            })
            .collect()
    }

    #[test]
    fn test_same_seed_same_network() {
        let a = random_graph(&params(12, 0.3), &mut StdRng::seed_from_u64(7)).unwrap();
        let b = random_graph(&params(12, 0.3), &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(edge_list(&a), edge_list(&b));
    }

    #[test]
    fn test_capacities_within_range() {
        let network = random_graph(&params(15, 0.5), &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(network
            .edges()
            .all(|(_, e)| (1..=20).contains(&e.capacity())));
    }

    #[test]
    fn test_full_probability_connects_every_internal_pair() {
        let network = random_graph(&params(4, 1.0), &mut StdRng::seed_from_u64(3)).unwrap();
        let internal = network
            .edges()
            .filter(|(_, e)| {
                let from = network.label(e.from());
                let to = network.label(e.to());
                from != SOURCE && to != SINK
            })
            .count();
        assert_eq!(internal, 12);
    }

    #[test]
    fn test_zero_probability_has_only_terminal_edges() {
        let network = random_graph(&params(10, 0.0), &mut StdRng::seed_from_u64(5)).unwrap();
        assert!(network.edges().all(|(_, e)| {
            network.label(e.from()) == SOURCE || network.label(e.to()) == SINK
        }));
    }

    #[test]
    fn test_no_internal_nodes_gives_empty_network() {
        let network = random_graph(&params(0, 0.5), &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(network.vertex_count(), 0);
        assert_eq!(network.edge_count(), 0);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            random_graph(&params(3, 1.5), &mut rng).unwrap_err(),
            GeneratorError::InvalidProbability(1.5)
        );

        let inverted = RandomGraphParams {
            min_capacity: 10,
            max_capacity: 2,
            ..params(3, 0.5)
        };
        assert!(matches!(
            random_graph(&inverted, &mut rng),
            Err(GeneratorError::InvalidCapacityRange { min: 10, max: 2 })
        ));

        assert!(params(3, f64::NAN).validate().is_err());
    }
}
