//! Timed max-flow runs over generated instances
//!
//! Instances for one size are generated in parallel, each from its own seed
//! drawn from a master generator, so results are reproducible for a fixed
//! base seed regardless of thread scheduling. Solving and timing then happen
//! sequentially so that runs do not compete for cores while being measured.

use std::time::Instant;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{ExperimentConfig, ExperimentError};
use crate::algorithm::graph::max_flow::FordFulkerson;
use crate::algorithm::traits::{Algorithm, Flow};
use crate::data_structures::flow_network::FlowNetwork;
use crate::generators::{random_graph, worst_case_graph, SINK, SOURCE};
use crate::validation::correctness::check_flow;

/// One timed max-flow computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingRecord {
    /// Instance size: internal vertices for random graphs, all vertices for chains
    pub nodes: usize,
    /// 1-based repetition index
    pub run: usize,
    /// Wall-clock time of the max-flow call alone
    pub time_seconds: f64,
    pub max_flow: Flow,
    pub augmentations: usize,
    /// Vertex expansions made by the search over the whole run
    pub vertices_explored: usize,
}

/// Sweep the configured random instance sizes
pub fn run_random_experiments(
    config: &ExperimentConfig,
) -> Result<Vec<TimingRecord>, ExperimentError> {
    let sweep = &config.random;
    sweep.validate()?;
    let mut master = master_rng(config.seed);
    let mut solver = FordFulkerson::new();
    let mut records = Vec::with_capacity(sweep.sizes.len() * sweep.repetitions);

    info!(
        "{}: random sweep over sizes {:?}, {} repetitions, p = {}",
        solver.name(),
        sweep.sizes,
        sweep.repetitions,
        sweep.edge_probability
    );

    for &size in &sweep.sizes {
        let params = sweep.params(size);
        let seeds: Vec<u64> = (0..sweep.repetitions).map(|_| master.gen()).collect();

        let networks = seeds
            .into_par_iter()
            .map(|seed| random_graph(&params, &mut StdRng::seed_from_u64(seed)))
            .collect::<Result<Vec<_>, _>>()?;

        for (i, network) in networks.into_iter().enumerate() {
            records.push(time_instance(&mut solver, network, size, i + 1, config.verify)?);
        }
    }

    Ok(records)
}

/// Sweep the configured chain lengths
pub fn run_worst_case_experiments(
    config: &ExperimentConfig,
) -> Result<Vec<TimingRecord>, ExperimentError> {
    let sweep = &config.worst_case;
    sweep.validate()?;
    let mut solver = FordFulkerson::new();
    let mut records = Vec::with_capacity(sweep.sizes.len() * sweep.repetitions);

    info!(
        "{}: worst-case sweep over {:?} layers, capacity {}",
        solver.name(),
        sweep.sizes,
        sweep.capacity_per_edge
    );

    for &layers in &sweep.sizes {
        let networks = (0..sweep.repetitions)
            .into_par_iter()
            .map(|_| worst_case_graph(layers, sweep.capacity_per_edge))
            .collect::<Result<Vec<_>, _>>()?;

        for (i, network) in networks.into_iter().enumerate() {
            // terminals included
            records.push(time_instance(&mut solver, network, layers + 2, i + 1, config.verify)?);
        }
    }

    Ok(records)
}

fn master_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(rand::random::<u64>);
    info!("instance seed: {}", seed);
    StdRng::seed_from_u64(seed)
}

fn time_instance(
    solver: &mut FordFulkerson,
    mut network: FlowNetwork<String>,
    nodes: usize,
    run: usize,
    verify: bool,
) -> Result<TimingRecord, ExperimentError> {
    let start = Instant::now();
    let result = solver.solve(&mut network, SOURCE, SINK);
    let elapsed = start.elapsed();

    if verify {
        check_flow(&network, SOURCE, SINK, result.max_flow)
            .into_result()
            .map_err(|violation| ExperimentError::InvariantViolated {
                nodes,
                run,
                violation,
            })?;
        debug!("flow check passed for {} nodes, run {}", nodes, run);
    }

    info!(
        "nodes={} run={} flow={} augmentations={} explored={} time={:?}",
        nodes,
        run,
        result.max_flow,
        result.metrics.augmentations,
        result.metrics.vertices_explored,
        elapsed
    );

    Ok(TimingRecord {
        nodes,
        run,
        time_seconds: elapsed.as_secs_f64(),
        max_flow: result.max_flow,
        augmentations: result.metrics.augmentations,
        vertices_explored: result.metrics.vertices_explored,
    })
}
