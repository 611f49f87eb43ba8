//! Helpers shared by the unit tests of this crate

use rand::Rng;

use crate::{ops::*, repr::Graph, *};

/// Installs `env_logger` for the current test binary; repeated calls are no-ops
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a graph with `n` default-labelled vertices (`A`, `B`, ...) and the given weighted edges
pub(crate) fn graph_from_edges(n: NumNodes, edges: &[(Node, Node, Weight)]) -> Graph {
    let mut graph = Graph::new();
    for u in 0..n {
        graph.add_vertex_at(u as f64, 0.0);
    }
    for &(u, v, w) in edges {
        graph.create_edge(u, v, Some(w)).unwrap();
    }
    graph
}

/// Creates a random connected graph on `n > 0` nodes with integral weights in `1..=max_weight`.
///
/// A random spanning tree is created first; afterwards up to `extra` random edges are added
/// (duplicates and loops are skipped, so fewer may be created).
pub(crate) fn random_connected_weighted_graph<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    extra: NumEdges,
    max_weight: u32,
) -> Graph {
    assert!(n > 0);
    let mut graph = graph_from_edges(n, &[]);

    for v in 1..n {
        let u = rng.random_range(0..v);
        let w = rng.random_range(1..=max_weight) as Weight;
        graph.create_edge(u, v, Some(w)).unwrap();
    }

    for _ in 0..extra {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u == v || graph.has_edge(u, v) {
            continue;
        }
        let w = rng.random_range(1..=max_weight) as Weight;
        graph.create_edge(u, v, Some(w)).unwrap();
    }

    graph
}
