use std::iter::FusedIterator;

use itertools::Itertools;

use super::*;

/// Reachability queries on undirected graphs
pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns *true* if every node can be reached from every other node.
    /// Graphs with fewer than two nodes are connected.
    ///
    /// ```
    /// use graph_tutor::{prelude::*, algo::*};
    ///
    /// let mut graph = Graph::new();
    /// assert!(graph.is_connected());
    ///
    /// let a = graph.add_vertex_at(0.0, 0.0);
    /// let b = graph.add_vertex_at(1.0, 0.0);
    /// assert!(!graph.is_connected());
    ///
    /// graph.create_edge(a, b, None).unwrap();
    /// assert!(graph.is_connected());
    /// ```
    fn is_connected(&self) -> bool {
        self.len() < 2 || self.bfs(0).count() == self.len()
    }

    /// Returns *true* if there is a path from `a` to `b`; `a == b` is trivially reachable.
    /// Returns *false* if either node is not part of the graph.
    fn path_exists(&self, a: Node, b: Node) -> bool {
        self.contains_node(a) && self.contains_node(b) && self.bfs(a).is_node_reachable(b)
    }

    /// Returns an iterator over the connected components of the graph.
    /// Each component is reported in BFS order starting at its smallest node;
    /// components are ordered by their smallest node.
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

/// Iterator over the connected components of a graph, see [`Connectivity::connected_components`]
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    /// Creates the iterator; an empty graph has no components
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: (!graph.is_empty()).then(|| graph.bfs(0)),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                self.bfs = None;
                return None;
            }
        }
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where G: AdjacencyList {}
