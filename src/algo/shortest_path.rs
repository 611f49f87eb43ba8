use log::trace;

use super::*;

/// A shortest path between two nodes together with its total weight
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPath {
    /// Sum of the weights of all edges on the path
    pub length: Weight,
    /// Nodes of the path from start to end (both included)
    pub nodes: Vec<Node>,
}

/// Dijkstra's algorithm on graphs with non-negative edge weights.
///
/// The next node to settle is found by a linear scan over all unsettled nodes; among nodes with
/// equal tentative distance the one with the smallest index is settled first. This keeps results
/// deterministic and is fast enough for hand-drawn graphs (`O(n^2 + m)`).
pub trait ShortestPath: AdjacencyList + WeightLookup {
    /// Computes a shortest path from `start` to `end`.
    ///
    /// Returns `Ok(None)` if either node is not part of the graph or `end` cannot be reached.
    ///
    /// # Errors
    /// Fails with the graph's weight lookup error as soon as an unweighted edge would have to be
    /// relaxed. Edges outside the explored region are never looked at.
    fn shortest_path(
        &self,
        start: Node,
        end: Node,
    ) -> std::result::Result<Option<WeightedPath>, Self::Error> {
        if !self.contains_node(start) || !self.contains_node(end) {
            return Ok(None);
        }

        let mut dist = vec![Weight::INFINITY; self.len()];
        let mut prev: Vec<Option<Node>> = vec![None; self.len()];
        let mut settled = NodeBitSet::new(self.number_of_nodes());
        dist[start as usize] = 0.0;

        loop {
            let Some(u) = self
                .vertices()
                .filter(|&u| !settled.get_bit(u))
                .min_by(|&x, &y| dist[x as usize].total_cmp(&dist[y as usize]))
            else {
                break;
            };

            // all remaining nodes are unreachable
            if dist[u as usize].is_infinite() {
                break;
            }

            settled.set_bit(u);
            trace!("settled node {u} at distance {}", dist[u as usize]);
            if u == end {
                break;
            }

            for (v, e) in self.incident_edges_of(u) {
                if settled.get_bit(v) {
                    continue;
                }

                let alt = dist[u as usize] + self.weight_of(e)?;
                if alt < dist[v as usize] {
                    dist[v as usize] = alt;
                    prev[v as usize] = Some(u);
                }
            }
        }

        if !settled.get_bit(end) {
            return Ok(None);
        }

        let mut nodes = vec![end];
        let mut u = end;
        while let Some(p) = prev[u as usize] {
            nodes.push(p);
            u = p;
        }
        nodes.reverse();

        Ok(Some(WeightedPath {
            length: dist[end as usize],
            nodes,
        }))
    }

    /// Returns the length of a shortest path from `start` to `end`; see [`ShortestPath::shortest_path`].
    ///
    /// ```
    /// use graph_tutor::{prelude::*, algo::*};
    ///
    /// let mut graph = Graph::new();
    /// for _ in 0..4 {
    ///     graph.add_vertex_at(0.0, 0.0);
    /// }
    /// graph.create_edge(0, 1, Some(1.0)).unwrap();
    /// graph.create_edge(1, 2, Some(1.5)).unwrap();
    /// graph.create_edge(0, 2, Some(3.0)).unwrap();
    ///
    /// assert_eq!(graph.shortest_distance(0, 2).unwrap(), Some(2.5));
    /// assert_eq!(graph.shortest_distance(0, 3).unwrap(), None);
    /// ```
    fn shortest_distance(
        &self,
        start: Node,
        end: Node,
    ) -> std::result::Result<Option<Weight>, Self::Error> {
        Ok(self.shortest_path(start, end)?.map(|path| path.length))
    }
}

impl<G> ShortestPath for G where G: AdjacencyList + WeightLookup {}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::{graph_from_edges, random_connected_weighted_graph};

    #[test]
    fn small_paths() {
        //   0 --1-- 1 --1-- 2
        //    \             /
        //     -----5------
        let graph = graph_from_edges(4, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)]);

        let path = graph.shortest_path(0, 2).unwrap().unwrap();
        assert_eq!(path.length, 2.0);
        assert_eq!(path.nodes, [0, 1, 2]);

        assert_eq!(graph.shortest_distance(2, 0).unwrap(), Some(2.0));
        assert_eq!(graph.shortest_distance(1, 1).unwrap(), Some(0.0));
        assert_eq!(graph.shortest_path(1, 1).unwrap().unwrap().nodes, [1]);
    }

    #[test]
    fn no_path_is_none() {
        let graph = graph_from_edges(4, &[(0, 1, 1.0), (2, 3, 1.0)]);
        assert_eq!(graph.shortest_distance(0, 3).unwrap(), None);
        assert_eq!(graph.shortest_distance(0, 4).unwrap(), None);
        assert_eq!(graph.shortest_distance(7, 0).unwrap(), None);
    }

    #[test]
    fn zero_weights() {
        let graph = graph_from_edges(3, &[(0, 1, 0.0), (1, 2, 0.0)]);
        assert_eq!(graph.shortest_distance(0, 2).unwrap(), Some(0.0));
    }

    #[test]
    fn unweighted_edges() {
        let mut graph = graph_from_edges(4, &[(0, 1, 1.0)]);
        graph.create_edge(1, 2, None).unwrap();
        graph.create_edge(0, 3, Some(1.0)).unwrap();

        // the unweighted edge is relaxed before 3 is settled
        assert!(matches!(
            graph.shortest_distance(0, 3),
            Err(GraphError::InvalidWeight)
        ));

        // the target is settled before the unweighted edge is reached
        assert_eq!(graph.shortest_distance(0, 1).unwrap(), Some(1.0));
    }

    #[test]
    fn validated_graphs_cannot_fail() {
        let graph = graph_from_edges(3, &[(0, 1, 2.0), (1, 2, 2.0)]);
        let weighted = WeightedGraph::new(&graph).unwrap();
        let Ok(dist) = weighted.shortest_distance(0, 2);
        assert_eq!(dist, Some(4.0));
    }

    #[test]
    fn random_graphs_against_bellman_ford() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..50 {
            let n = rng.random_range(1..15);
            let graph = random_connected_weighted_graph(rng, n, 2 * n, 9);

            let start = rng.random_range(0..n);
            let mut dist = vec![Weight::INFINITY; n as usize];
            dist[start as usize] = 0.0;
            for _ in 0..n {
                for (e, Edge(u, v)) in graph.edges().enumerate() {
                    let w = graph.weight_of(e as EdgeId).unwrap();
                    let (u, v) = (u as usize, v as usize);
                    dist[v] = dist[v].min(dist[u] + w);
                    dist[u] = dist[u].min(dist[v] + w);
                }
            }

            for end in graph.vertices() {
                let path = graph.shortest_path(start, end).unwrap().unwrap();
                assert_eq!(path.length, dist[end as usize]);
                assert_eq!(path.nodes.first(), Some(&start));
                assert_eq!(path.nodes.last(), Some(&end));

                let walked: Weight = path
                    .nodes
                    .iter()
                    .tuple_windows()
                    .map(|(&u, &v)| graph.weight_of(graph.edge_between(u, v).unwrap()).unwrap())
                    .sum();
                assert_eq!(walked, path.length);
            }
        }
    }
}
