use std::ops::Range;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V in insertion order.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if `u` is a node of the graph
    fn contains_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns an iterator over all edge ids in creation order
    fn edge_ids(&self) -> Range<EdgeId> {
        0..self.number_of_edges()
    }

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over pairs `(v, e)` where `e` is the id of the edge connecting `u` and `v`.
    /// Neighbors are reported in the order their edges were created.
    /// ** Panics if `u >= n` **
    fn incident_edges_of(&self, u: Node) -> impl Iterator<Item = (Node, EdgeId)> + '_;

    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.incident_edges_of(u).map(|(v, _)| v)
    }

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns an iterator over all nodes of odd degree in insertion order
    fn odd_vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) % 2 == 1)
    }

    /// Returns the number of nodes of odd degree
    fn number_of_odd_vertices(&self) -> NumNodes {
        self.odd_vertices().count() as NumNodes
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns the id of the edge connecting `u` and `v` if it exists.
    /// Out-of-range nodes simply have no edges.
    fn edge_between(&self, u: Node, v: Node) -> Option<EdgeId>;

    /// Returns *true* if the edge {u,v} exists in the graph.
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edge_between(u, v).is_some()
    }
}

/// Access to the weights of edges.
///
/// A plain [`Graph`](crate::repr::Graph) may contain unweighted edges and hence reports
/// [`GraphError::InvalidWeight`] for them, whereas a validated
/// [`WeightedGraph`](crate::repr::WeightedGraph) cannot fail.
pub trait WeightLookup {
    /// Error returned for edges without a weight
    type Error;

    /// Returns the weight of edge `e`.
    /// ** Panics if `e >= m` **
    fn weight_of(&self, e: EdgeId) -> std::result::Result<Weight, Self::Error>;
}

/// Gives access to the labels of nodes, e.g. for narration
pub trait Labelled {
    /// Returns the label of `u`.
    /// ** Panics if `u >= n` **
    fn label_of(&self, u: Node) -> &str;

    /// Returns the labels of both endpoints concatenated, e.g. `"AB"`
    fn edge_label(&self, Edge(u, v): Edge) -> String {
        format!("{}{}", self.label_of(u), self.label_of(v))
    }
}
