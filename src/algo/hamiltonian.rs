/*!
Brute-force Hamiltonian cycle search.

A Hamiltonian cycle visits every node exactly once before returning to its start. Deciding
whether one exists is NP-complete and this module makes no attempt to be clever: it fixes an
anchor node and tries all orders of the remaining nodes, i.e. up to `(n - 1)!` candidates.
This is fine for the hand-drawn graphs of a classroom but hopeless beyond a dozen nodes.
*/

use std::iter::FusedIterator;

use log::{debug, trace, warn};

use super::*;

/// Lazily enumerates all permutations of a sequence using Heap's algorithm.
///
/// The first permutation is the sequence itself; every following one differs from its
/// predecessor by a single swap. A sequence of length `k` yields exactly `k!` permutations
/// (in particular a single empty permutation for an empty sequence).
///
/// ```
/// use graph_tutor::algo::Permutations;
///
/// let perms: Vec<_> = Permutations::new(vec![1, 2, 3]).collect();
/// assert_eq!(
///     perms,
///     [[1, 2, 3], [2, 1, 3], [3, 1, 2], [1, 3, 2], [2, 3, 1], [3, 2, 1]]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    counters: Vec<usize>,
    i: usize,
    started: bool,
}

impl<T: Clone> Permutations<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            counters: vec![0; items.len()],
            items,
            i: 1,
            started: false,
        }
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(self.items.clone());
        }

        while self.i < self.items.len() {
            let i = self.i;
            if self.counters[i] < i {
                let k = if i % 2 == 1 { self.counters[i] } else { 0 };
                self.items.swap(i, k);
                self.counters[i] += 1;
                self.i = 1;
                return Some(self.items.clone());
            }

            self.counters[i] = 0;
            self.i += 1;
        }

        None
    }
}

impl<T: Clone> FusedIterator for Permutations<T> {}

/// Configuration of the Hamiltonian cycle search.
///
/// The anchor is the node every candidate cycle starts at; the remaining nodes are
/// permuted in the order of [`Permutations`] starting from increasing node order.
#[derive(Debug, Clone, Copy, Default)]
pub struct HamiltonianSearch {
    anchor: Node,
}

impl HamiltonianSearch {
    /// Search anchored at node `0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the node every cycle starts at
    pub fn set_anchor(&mut self, anchor: Node) {
        self.anchor = anchor;
    }

    /// Sets the node every cycle starts at
    pub fn anchor(mut self, anchor: Node) -> Self {
        self.set_anchor(anchor);
        self
    }

    /// Returns the first Hamiltonian cycle found as a sequence of all `n` nodes starting at the
    /// anchor (the closing edge back to the anchor is implied).
    ///
    /// - A single node forms a trivial cycle.
    /// - Empty, disconnected and two-node graphs have no cycle, nor has any graph whose anchor
    ///   is not one of its nodes.
    ///
    /// Runs in time `O(n!)` in the worst case.
    pub fn find<G>(&self, graph: &G) -> Option<Vec<Node>>
    where
        G: AdjacencyList + AdjacencyTest,
    {
        let n = graph.len();
        if !graph.contains_node(self.anchor) {
            return None;
        }
        if n == 1 {
            return Some(vec![self.anchor]);
        }
        if n == 2 || !graph.is_connected() {
            return None;
        }

        // every node of a cycle has two cycle neighbors
        if graph.degrees().any(|d| d < 2) {
            debug!("Hamiltonian search skipped: node of degree < 2");
            return None;
        }

        if n > 10 {
            warn!("searching Hamiltonian cycles among up to {}! permutations", n - 1);
        }

        let rest = graph.vertices().filter(|&u| u != self.anchor).collect();
        let cycle = Permutations::new(rest).find(|perm| {
            trace!("testing candidate {perm:?}");
            perm.windows(2).all(|w| graph.has_edge(w[0], w[1]))
                && graph.has_edge(self.anchor, perm[0])
                && graph.has_edge(perm[n - 2], self.anchor)
        })?;

        let mut result = Vec::with_capacity(n);
        result.push(self.anchor);
        result.extend(cycle);
        debug!("found Hamiltonian cycle {result:?}");
        Some(result)
    }
}

/// Hamiltonian cycle search on graphs, see [`HamiltonianSearch`]
pub trait HamiltonianCycle: AdjacencyList + AdjacencyTest {
    /// Returns a Hamiltonian cycle starting at node `0` if one exists.
    ///
    /// ```
    /// use graph_tutor::{prelude::*, algo::*};
    ///
    /// let mut graph = Graph::new();
    /// for _ in 0..4 {
    ///     graph.add_vertex_at(0.0, 0.0);
    /// }
    /// for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
    ///     graph.create_edge(u, v, None).unwrap();
    /// }
    /// assert_eq!(graph.find_hamiltonian_cycle(), Some(vec![0, 1, 2, 3]));
    /// ```
    fn find_hamiltonian_cycle(&self) -> Option<Vec<Node>> {
        HamiltonianSearch::new().find(self)
    }
}

impl<G> HamiltonianCycle for G where G: AdjacencyList + AdjacencyTest {}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::{graph_from_edges, random_connected_weighted_graph};

    fn is_hamiltonian_cycle<G: AdjacencyTest>(graph: &G, cycle: &[Node]) -> bool {
        cycle.len() == graph.len()
            && cycle.iter().all_unique()
            && cycle
                .iter()
                .circular_tuple_windows()
                .all(|(&u, &v)| graph.has_edge(u, v))
    }

    #[test]
    fn permutation_counts() {
        let mut factorial = 1;
        for k in 0..7 {
            if k > 0 {
                factorial *= k;
            }
            let perms = Permutations::new((0..k).collect_vec()).collect_vec();
            assert_eq!(perms.len(), factorial);
            assert!(perms.iter().all_unique());
            assert_eq!(perms[0], (0..k).collect_vec());
        }
    }

    #[test]
    fn small_graphs() {
        assert_eq!(graph_from_edges(0, &[]).find_hamiltonian_cycle(), None);
        assert_eq!(graph_from_edges(1, &[]).find_hamiltonian_cycle(), Some(vec![0]));
        assert_eq!(
            graph_from_edges(2, &[(0, 1, 1.0)]).find_hamiltonian_cycle(),
            None
        );
        assert_eq!(
            graph_from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]).find_hamiltonian_cycle(),
            Some(vec![0, 1, 2])
        );
        assert_eq!(
            graph_from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)]).find_hamiltonian_cycle(),
            None
        );
    }

    #[test]
    fn first_cycle_in_permutation_order() {
        // 0 - 2 - 1 - 3 - 0
        let graph = graph_from_edges(4, &[(0, 2, 1.0), (2, 1, 1.0), (1, 3, 1.0), (3, 0, 1.0)]);
        assert_eq!(graph.find_hamiltonian_cycle(), Some(vec![0, 2, 1, 3]));

        let cycle = HamiltonianSearch::new().anchor(1).find(&graph).unwrap();
        assert_eq!(cycle[0], 1);
        assert!(is_hamiltonian_cycle(&graph, &cycle));

        assert_eq!(HamiltonianSearch::new().anchor(4).find(&graph), None);
    }

    #[test]
    fn disconnected_graphs() {
        let graph = graph_from_edges(
            6,
            &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0), (3, 4, 1.0), (4, 5, 1.0), (5, 3, 1.0)],
        );
        assert_eq!(graph.find_hamiltonian_cycle(), None);
    }

    #[test]
    fn random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for _ in 0..100 {
            let n = rng.random_range(3..8);
            let graph = random_connected_weighted_graph(rng, n, 2 * n, 1);

            match graph.find_hamiltonian_cycle() {
                Some(cycle) => assert!(is_hamiltonian_cycle(&graph, &cycle)),
                None => {
                    // cross-check against an exhaustive search over all orders
                    assert!(
                        graph
                            .vertices()
                            .permutations(n as usize)
                            .all(|order| !is_hamiltonian_cycle(&graph, &order))
                    );
                }
            }
        }
    }
}
