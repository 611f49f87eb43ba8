/*!
Structural classification of graphs.

All predicates run in `O(n + m)` and never mutate the graph. [`Classify::properties`] gathers them
(plus the result of the Hamiltonian cycle search) into a [`GraphProperties`] summary that renders
as a short human readable description.
*/

use std::fmt::Display;

use itertools::Itertools;

use super::*;

/// Eulerian classification of a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EulerianKind {
    /// Connected and all degrees are even: there is a closed walk using every edge exactly once
    Eulerian,
    /// Connected with exactly two odd vertices: there is an open walk using every edge exactly once
    SemiEulerian,
    NonEulerian,
}

impl Display for EulerianKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Eulerian => "Eulerian",
            Self::SemiEulerian => "Semi-Eulerian",
            Self::NonEulerian => "Non-Eulerian",
        })
    }
}

/// Structural predicates on undirected graphs
pub trait Classify: Connectivity + GraphEdgeOrder {
    /// Returns *true* if the graph is connected and every node has even degree.
    /// Graphs with fewer than two nodes are vacuously Eulerian.
    fn is_eulerian(&self) -> bool {
        self.len() < 2 || (self.is_connected() && self.number_of_odd_vertices() == 0)
    }

    /// Returns *true* if the graph has at least two nodes, is connected and has exactly two
    /// nodes of odd degree.
    fn is_semi_eulerian(&self) -> bool {
        self.len() >= 2 && self.is_connected() && self.number_of_odd_vertices() == 2
    }

    /// Classifies the graph as Eulerian, semi-Eulerian or neither
    fn eulerian_kind(&self) -> EulerianKind {
        if self.is_eulerian() {
            EulerianKind::Eulerian
        } else if self.is_semi_eulerian() {
            EulerianKind::SemiEulerian
        } else {
            EulerianKind::NonEulerian
        }
    }

    /// Returns *true* if the graph is connected and has exactly `n - 1` edges.
    /// The empty graph is not a tree.
    fn is_tree(&self) -> bool {
        self.number_of_edges() as u64 + 1 == self.number_of_nodes() as u64 && self.is_connected()
    }

    /// Returns *true* if every pair of distinct nodes is connected by an edge.
    /// As the graph is simple, this is a pure edge count.
    fn is_complete(&self) -> bool {
        let n = self.number_of_nodes() as u64;
        self.number_of_edges() as u64 == n * n.saturating_sub(1) / 2
    }

    /// Returns *true* if every edge carries a weight; trivially true for graphs without edges
    fn is_weighted(&self) -> bool
    where
        Self: WeightLookup,
    {
        self.edge_ids().all(|e| self.weight_of(e).is_ok())
    }

    /// Collects all properties of the graph into a summary.
    ///
    /// This includes a Hamiltonian cycle search and therefore takes factorial time in the
    /// number of nodes (see [`HamiltonianSearch`]).
    ///
    /// ```
    /// use graph_tutor::{prelude::*, algo::*};
    ///
    /// let mut graph = Graph::new();
    /// for _ in 0..3 {
    ///     graph.add_vertex_at(0.0, 0.0);
    /// }
    /// graph.create_edge(0, 1, None).unwrap();
    /// graph.create_edge(1, 2, None).unwrap();
    /// graph.create_edge(2, 0, None).unwrap();
    ///
    /// assert_eq!(
    ///     graph.properties().to_string(),
    ///     "This graph is Connected, Eulerian, Complete.\nThis graph has a Hamiltonian cycle: A B C A."
    /// );
    /// ```
    fn properties(&self) -> GraphProperties
    where
        Self: AdjacencyTest + Labelled,
    {
        GraphProperties {
            connected: self.is_connected(),
            eulerian: self.eulerian_kind(),
            tree: self.is_tree(),
            complete: self.is_complete(),
            hamiltonian_cycle: self.find_hamiltonian_cycle().map(|cycle| {
                cycle
                    .into_iter()
                    .map(|u| self.label_of(u).to_string())
                    .collect()
            }),
        }
    }
}

impl<G> Classify for G where G: AdjacencyList + GraphEdgeOrder {}

/// Summary of the structural properties of a graph, see [`Classify::properties`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphProperties {
    pub connected: bool,
    pub eulerian: EulerianKind,
    pub tree: bool,
    pub complete: bool,
    /// Labels of a Hamiltonian cycle without repeating the first vertex, if any
    pub hamiltonian_cycle: Option<Vec<String>>,
}

impl Display for GraphProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut properties = vec![
            if self.connected {
                "Connected".to_string()
            } else {
                "Disconnected".to_string()
            },
            self.eulerian.to_string(),
        ];
        if self.tree {
            properties.push("a Tree".to_string());
        }
        if self.complete {
            properties.push("Complete".to_string());
        }
        writeln!(f, "This graph is {}.", properties.join(", "))?;

        match &self.hamiltonian_cycle {
            None => write!(f, "This graph has no Hamiltonian cycle."),
            Some(cycle) => {
                // close the walk unless it is a single vertex
                let closing = cycle.first().filter(|_| cycle.len() > 1);
                write!(
                    f,
                    "This graph has a Hamiltonian cycle: {}.",
                    cycle.iter().chain(closing).join(" ")
                )
            }
        }
    }
}

#[cfg(test)]
mod test {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::{graph_from_edges, random_connected_weighted_graph};

    #[test]
    fn small_graphs() {
        let empty = graph_from_edges(0, &[]);
        assert!(empty.is_eulerian());
        assert!(!empty.is_semi_eulerian());
        assert!(!empty.is_tree());
        assert!(empty.is_complete());
        assert!(empty.is_weighted());

        let single = graph_from_edges(1, &[]);
        assert!(single.is_eulerian());
        assert!(single.is_tree());
        assert!(single.is_complete());

        let pair = graph_from_edges(2, &[]);
        assert!(!pair.is_eulerian());
        assert!(!pair.is_tree());
        assert_eq!(pair.eulerian_kind(), EulerianKind::NonEulerian);
    }

    #[test]
    fn triangle_and_path() {
        let triangle = graph_from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.0)]);
        assert!(triangle.is_eulerian());
        assert!(!triangle.is_semi_eulerian());
        assert!(!triangle.is_tree());
        assert!(triangle.is_complete());

        let path = graph_from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
        assert_eq!(path.eulerian_kind(), EulerianKind::SemiEulerian);
        assert!(path.is_tree());
        assert!(!path.is_complete());
    }

    #[test]
    fn disconnected_even_graph_is_not_eulerian() {
        let graph = graph_from_edges(
            6,
            &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0), (3, 4, 1.0), (4, 5, 1.0), (5, 3, 1.0)],
        );
        assert!(graph.degrees().all(|d| d % 2 == 0));
        assert_eq!(graph.eulerian_kind(), EulerianKind::NonEulerian);
    }

    #[test]
    fn weighted() {
        let mut graph = graph_from_edges(3, &[(0, 1, 1.0)]);
        assert!(graph.is_weighted());
        graph.create_edge(1, 2, None).unwrap();
        assert!(!graph.is_weighted());
    }

    #[test]
    fn properties_summary() {
        let path = graph_from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
        assert_eq!(
            path.properties().to_string(),
            "This graph is Connected, Semi-Eulerian, a Tree.\nThis graph has no Hamiltonian cycle."
        );

        let single = graph_from_edges(1, &[]);
        let properties = single.properties();
        assert_eq!(properties.hamiltonian_cycle, Some(vec!["A".to_string()]));
        assert!(properties.to_string().ends_with("Hamiltonian cycle: A."));

        let disconnected = graph_from_edges(2, &[]);
        assert!(
            disconnected
                .properties()
                .to_string()
                .starts_with("This graph is Disconnected, Non-Eulerian.")
        );
    }

    #[test]
    fn random_graph_implications() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for _ in 0..200 {
            let n = rng.random_range(1..12);
            let extra = rng.random_range(0..2 * n);
            let graph = random_connected_weighted_graph(rng, n, extra, 5);

            let odd = graph.number_of_odd_vertices();
            assert_eq!(odd % 2, 0);

            if graph.is_tree() {
                assert!(graph.is_connected());
                assert_eq!(graph.number_of_edges() + 1, graph.number_of_nodes());
            }
            if graph.is_eulerian() {
                assert!(graph.is_connected() && odd == 0);
            }
            if graph.is_semi_eulerian() {
                assert!(graph.is_connected() && odd == 2);
            }
            assert!(!(graph.is_eulerian() && graph.is_semi_eulerian()));
            assert_eq!(graph.is_tree(), graph.number_of_edges() + 1 == n);
        }
    }
}
