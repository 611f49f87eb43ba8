use std::convert::Infallible;

use log::debug;

use super::{macros::impl_graph_ops_via, *};
use crate::algo::Connectivity;

/// A [`Graph`] that was checked to be non-empty, connected and fully weighted.
///
/// Constructing a `WeightedGraph` is the gate every step-narrated algorithm passes through:
/// once it exists, weight lookups cannot fail, which is expressed by
/// `WeightLookup::Error = Infallible`.
///
/// ```
/// use graph_tutor::prelude::*;
///
/// let mut graph = Graph::new();
/// assert!(matches!(WeightedGraph::new(&graph), Err(GraphError::EmptyGraph)));
///
/// let a = graph.add_vertex_at(0.0, 0.0);
/// let b = graph.add_vertex_at(1.0, 0.0);
/// assert!(matches!(WeightedGraph::new(&graph), Err(GraphError::DisconnectedGraph)));
///
/// graph.create_edge(a, b, None).unwrap();
/// assert!(matches!(WeightedGraph::new(&graph), Err(GraphError::InvalidWeight)));
/// ```
#[derive(Debug, Clone)]
pub struct WeightedGraph<'a> {
    graph: &'a Graph,
    weights: Vec<Weight>,
}

impl<'a> WeightedGraph<'a> {
    /// Validates `graph` for the weighted algorithms.
    ///
    /// # Errors
    /// Checked in this order:
    /// - [`GraphError::EmptyGraph`] if the graph has no vertices,
    /// - [`GraphError::DisconnectedGraph`] if the graph is not connected,
    /// - [`GraphError::InvalidWeight`] if any edge is unweighted.
    pub fn new(graph: &'a Graph) -> Result<Self> {
        if graph.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        if !graph.is_connected() {
            return Err(GraphError::DisconnectedGraph);
        }

        let weights = graph
            .edge_ids()
            .map(|e| graph.weight_of(e))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "validated graph with {} vertices and {} weighted edges",
            graph.number_of_nodes(),
            weights.len()
        );

        Ok(Self { graph, weights })
    }

    /// Returns the underlying graph
    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    /// Returns the weight of edge `e`.
    /// ** Panics if `e >= m` **
    pub fn weight(&self, e: EdgeId) -> Weight {
        self.weights[e as usize]
    }

    /// Returns the sum of all edge weights
    pub fn total_weight(&self) -> Weight {
        self.weights.iter().sum()
    }
}

impl_graph_ops_via!(WeightedGraph<'a> => graph);

impl WeightLookup for WeightedGraph<'_> {
    type Error = Infallible;

    fn weight_of(&self, e: EdgeId) -> std::result::Result<Weight, Infallible> {
        Ok(self.weight(e))
    }
}
