//! Strategy builders for hierarchy property tests.
//!
//! Generates random connected graphs. A spanning tree is laid down first so
//! connectivity always holds, then extra edges (possibly parallel) are
//! sprinkled on top. The weight distribution varies from effectively unique
//! to a single plateau, the stress case for tie-breaking.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::UndirectedGraph;

/// Smallest generated vertex count.
const MIN_VERTICES: usize = 2;
/// Largest generated vertex count.
const MAX_VERTICES: usize = 24;

/// Weight distributions stressed by the property suites.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Wide range; ties are unlikely.
    Unique,
    /// Narrow range; ties dominate.
    ManyTies,
    /// Every edge carries the same weight.
    Plateau,
}

/// A connected graph with one weight per edge.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub(super) graph: UndirectedGraph,
    pub(super) weights: Vec<u32>,
    pub(super) distribution: WeightDistribution,
}

/// Generates fixtures covering all three weight distributions.
pub(super) fn connected_graph_strategy() -> impl Strategy<Value = GraphFixture> {
    let distribution = prop_oneof![
        Just(WeightDistribution::Unique),
        Just(WeightDistribution::ManyTies),
        Just(WeightDistribution::Plateau),
    ];
    (distribution, any::<u64>())
        .prop_map(|(distribution, seed)| generate_fixture(distribution, seed))
}

/// Generates one fixture for a fixed distribution and seed; also used by the
/// targeted rstest cases.
pub(super) fn generate_fixture(distribution: WeightDistribution, seed: u64) -> GraphFixture {
    let mut rng = SmallRng::seed_from_u64(seed);
    let num_vertices = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut graph = UndirectedGraph::new(num_vertices);
    let mut weights = Vec::new();

    // Spanning tree first: every vertex attaches to a random earlier one.
    for vertex in 1..num_vertices {
        let anchor = rng.gen_range(0..vertex);
        graph.add_edge(anchor, vertex);
        weights.push(sample_weight(&mut rng, distribution));
    }

    let extra_edges = rng.gen_range(0..=2 * num_vertices);
    for _ in 0..extra_edges {
        let source = rng.gen_range(0..num_vertices);
        let target = rng.gen_range(0..num_vertices);
        if source != target {
            graph.add_edge(source, target);
            weights.push(sample_weight(&mut rng, distribution));
        }
    }

    GraphFixture {
        graph,
        weights,
        distribution,
    }
}

fn sample_weight(rng: &mut SmallRng, distribution: WeightDistribution) -> u32 {
    match distribution {
        WeightDistribution::Unique => rng.gen_range(0..1_000_000),
        WeightDistribution::ManyTies => rng.gen_range(1..5),
        WeightDistribution::Plateau => 1,
    }
}
