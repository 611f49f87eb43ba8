/*!
Route inspection (the Chinese Postman problem), narrated step by step.

The shortest closed walk traversing every edge at least once has length
`total weight + extra`, where `extra` is zero for Eulerian graphs and otherwise the cheapest way to
pair up the odd vertices, each pair costing its shortest path distance. The pairing is found by
brute force over all `(k - 1)!!` perfect pairings of the `k` odd vertices (see [`Pairings`]),
which is only feasible for small `k`.
*/

use std::iter::FusedIterator;

use itertools::Itertools;
use log::{debug, trace, warn};

use super::*;
use crate::narrate::Highlight;

/// Lazily enumerates all perfect pairings of a sequence of even length.
///
/// The first element is paired with each other element in turn (in sequence order) and the
/// remaining elements are paired recursively. A sequence of length `k` yields `(k - 1)!!`
/// pairings; an empty sequence yields a single empty pairing.
///
/// ```
/// use graph_tutor::algo::Pairings;
///
/// let pairings: Vec<_> = Pairings::new(vec!['a', 'b', 'c', 'd']).collect();
/// assert_eq!(
///     pairings,
///     [
///         [('a', 'b'), ('c', 'd')],
///         [('a', 'c'), ('b', 'd')],
///         [('a', 'd'), ('b', 'c')],
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Pairings<T> {
    items: Vec<T>,
    // partner chosen on each level as index into the elements left after removing the first
    choices: Vec<usize>,
    exhausted: bool,
}

impl<T: Clone> Pairings<T> {
    /// ** Panics if `items` has odd length **
    pub fn new(items: Vec<T>) -> Self {
        assert!(items.len() % 2 == 0, "cannot pair an odd number of elements");
        Self {
            choices: vec![0; items.len() / 2],
            items,
            exhausted: false,
        }
    }

    /// Returns the number of pairings of `k` elements, i.e. `(k - 1)!!`,
    /// or `None` if it does not fit into a `usize` (from `k = 36` on with 64-bit pointers)
    pub fn count_for(k: usize) -> Option<usize> {
        (1..k)
            .step_by(2)
            .try_fold(1usize, |count, i| count.checked_mul(i))
    }

    /// Renders [`Pairings::count_for`] for humans
    pub fn describe_count(k: usize) -> String {
        match Self::count_for(k) {
            Some(count) => count.to_string(),
            None => format!("more than {}", usize::MAX),
        }
    }

    fn current(&self) -> Vec<(T, T)> {
        let mut remaining = self.items.clone();
        self.choices
            .iter()
            .map(|&j| {
                let a = remaining.remove(0);
                let b = remaining.remove(j);
                (a, b)
            })
            .collect()
    }

    fn advance(&mut self) {
        let k = self.items.len();
        for level in (0..self.choices.len()).rev() {
            self.choices[level] += 1;
            if self.choices[level] < k - 2 * level - 1 {
                return;
            }
            self.choices[level] = 0;
        }
        self.exhausted = true;
    }
}

impl<T: Clone> Iterator for Pairings<T> {
    type Item = Vec<(T, T)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let pairing = self.current();
        self.advance();
        Some(pairing)
    }
}

impl<T: Clone> FusedIterator for Pairings<T> {}

/// Configuration of the route inspection solver
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteInspection {
    max_odd_vertices: Option<usize>,
}

impl RouteInspection {
    /// Solver without a limit on the number of odd vertices
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of odd vertices the pairing enumeration is attempted for
    pub fn set_max_odd_vertices(&mut self, limit: Option<usize>) {
        self.max_odd_vertices = limit;
    }

    /// Sets the maximum number of odd vertices the pairing enumeration is attempted for
    pub fn max_odd_vertices(mut self, limit: usize) -> Self {
        self.set_max_odd_vertices(Some(limit));
        self
    }

    /// Validates `graph` and returns the steps of the solver.
    ///
    /// # Errors
    /// Fails if `graph` is not a valid [`WeightedGraph`] or has more odd vertices than the
    /// configured limit ([`GraphError::TooManyOddVertices`]).
    pub fn run<'a>(&self, graph: &'a Graph) -> Result<RouteInspectionSteps<'a>> {
        let graph = WeightedGraph::new(graph)?;
        let odd = graph.odd_vertices().collect_vec();

        if let Some(limit) = self.max_odd_vertices.filter(|&limit| odd.len() > limit) {
            return Err(GraphError::TooManyOddVertices {
                found: odd.len(),
                limit,
            });
        }
        if odd.len() > 12 {
            warn!(
                "route inspection enumerates {} pairings of {} odd vertices",
                Pairings::<Node>::describe_count(odd.len()),
                odd.len()
            );
        }

        // pairwise distances between odd vertices; finite as the graph is connected
        let distances = odd
            .iter()
            .map(|&u| {
                odd.iter()
                    .map(|&v| {
                        let Ok(dist) = graph.shortest_distance(u, v);
                        dist.unwrap_or(Weight::INFINITY)
                    })
                    .collect_vec()
            })
            .collect_vec();

        debug!("starting route inspection with {} odd vertices", odd.len());
        Ok(RouteInspectionSteps {
            base_weight: graph.total_weight(),
            graph,
            odd,
            distances,
            highlight: Highlight::new(),
            shortest_extra: None,
            phase: Phase::BaseWeight,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    BaseWeight,
    Eulerian,
    OddVertices,
    SemiEulerian,
    PairingList,
    PairingLengths,
    Optimal,
    Finished,
}

/// Steps of the route inspection solver, see [`RouteInspection`]
pub struct RouteInspectionSteps<'a> {
    graph: WeightedGraph<'a>,
    base_weight: Weight,
    odd: Vec<Node>,
    distances: Vec<Vec<Weight>>,
    highlight: Highlight,
    shortest_extra: Option<Weight>,
    phase: Phase,
}

impl RouteInspectionSteps<'_> {
    /// Returns the total weight of all edges
    pub fn base_weight(&self) -> Weight {
        self.base_weight
    }

    /// Returns the odd vertices in node order
    pub fn odd_vertices(&self) -> &[Node] {
        &self.odd
    }

    /// Returns the length of a shortest closed walk traversing every edge at least once.
    /// Computed independently of the narration.
    pub fn optimal_length(&self) -> Weight {
        self.base_weight + self.shortest_extra()
    }

    fn pairings(&self) -> Pairings<usize> {
        Pairings::new((0..self.odd.len()).collect())
    }

    fn pairing_length(&self, pairing: &[(usize, usize)]) -> Weight {
        pairing.iter().map(|&(a, b)| self.distances[a][b]).sum()
    }

    fn shortest_extra(&self) -> Weight {
        if let Some(extra) = self.shortest_extra {
            return extra;
        }
        self.pairings()
            .map(|pairing| self.pairing_length(&pairing))
            .min_by(Weight::total_cmp)
            .unwrap_or(0.0)
    }

    fn pair_label(&self, (a, b): (usize, usize)) -> String {
        self.graph.edge_label(Edge(self.odd[a], self.odd[b]))
    }
}

impl Iterator for RouteInspectionSteps<'_> {
    type Item = StepEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let base = self.base_weight;
        let step = match self.phase {
            Phase::BaseWeight => {
                self.phase = if self.odd.is_empty() {
                    Phase::Eulerian
                } else {
                    Phase::OddVertices
                };
                StepEvent::new(
                    format!("The total weight of the graph's edges is {base}."),
                    &self.highlight,
                )
            }
            Phase::Eulerian => {
                self.phase = Phase::Finished;
                StepEvent::finish(
                    format!(
                        "The graph is Eulerian, so it can be traversed without repeating edges. \
                         Therefore the optimal route has length {base}."
                    ),
                    &self.highlight,
                    base,
                )
            }
            Phase::OddVertices => {
                self.phase = if self.odd.len() == 2 {
                    Phase::SemiEulerian
                } else {
                    Phase::PairingList
                };
                self.highlight.set_vertices(self.odd.iter().copied());
                StepEvent::new(
                    format!(
                        "The graph has {} odd vertices: {}.",
                        self.odd.len(),
                        self.odd.iter().map(|&u| self.graph.label_of(u)).join(", ")
                    ),
                    &self.highlight,
                )
            }
            Phase::SemiEulerian => {
                self.phase = Phase::Finished;
                let dist = self.distances[0][1];
                StepEvent::finish(
                    format!(
                        "The shortest path between these has length {dist}. \
                         Therefore the optimal route has length {base} + {dist} = {}.",
                        base + dist
                    ),
                    &self.highlight,
                    base + dist,
                )
            }
            Phase::PairingList => {
                self.phase = Phase::PairingLengths;
                let pairings = self
                    .pairings()
                    .map(|pairing| {
                        pairing
                            .into_iter()
                            .map(|pair| self.pair_label(pair))
                            .join(" ")
                    })
                    .join(", ");
                StepEvent::new(
                    format!(
                        "There are {} ways to pair these: {pairings}.",
                        Pairings::<usize>::describe_count(self.odd.len())
                    ),
                    &self.highlight,
                )
            }
            Phase::PairingLengths => {
                self.phase = Phase::Optimal;
                let lengths = self
                    .pairings()
                    .map(|pairing| {
                        let length = self.pairing_length(&pairing);
                        trace!("pairing {pairing:?} adds {length}");
                        length
                    })
                    .collect_vec();
                let shortest = lengths
                    .iter()
                    .copied()
                    .min_by(Weight::total_cmp)
                    .unwrap_or(0.0);
                self.shortest_extra = Some(shortest);
                StepEvent::new(
                    format!(
                        "Their additional path lengths are {}, the shortest of which is {shortest}.",
                        lengths.iter().join(", ")
                    ),
                    &self.highlight,
                )
            }
            Phase::Optimal => {
                self.phase = Phase::Finished;
                let extra = self.shortest_extra();
                debug!("route inspection completed with length {}", base + extra);
                StepEvent::finish(
                    format!(
                        "Therefore, the length of the optimal route is {base} + {extra} = {}.",
                        base + extra
                    ),
                    &self.highlight,
                    base + extra,
                )
            }
            Phase::Finished => return None,
        };

        Some(step)
    }
}

/// Route inspection on graphs, see [`RouteInspection`]
pub trait RouteInspect {
    /// Returns the narrated steps of the route inspection solver without odd vertex limit
    fn route_inspection(&self) -> Result<RouteInspectionSteps<'_>>;

    /// Returns the length of a shortest closed walk traversing every edge at least once,
    /// without narration.
    fn route_inspection_length(&self) -> Result<Weight> {
        Ok(self.route_inspection()?.optimal_length())
    }
}

impl RouteInspect for Graph {
    fn route_inspection(&self) -> Result<RouteInspectionSteps<'_>> {
        RouteInspection::new().run(self)
    }
}

#[cfg(test)]
mod test {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::{graph_from_edges, init_logger, random_connected_weighted_graph};

    fn messages(graph: &Graph) -> Vec<String> {
        graph
            .route_inspection()
            .unwrap()
            .map(|s| s.message().to_string())
            .collect_vec()
    }

    #[test]
    fn pairing_counts() {
        assert_eq!(
            Pairings::new(Vec::<u8>::new()).collect_vec(),
            vec![Vec::<(u8, u8)>::new()]
        );

        for k in (2..=10).step_by(2) {
            let pairings = Pairings::new((0..k).collect_vec()).collect_vec();
            assert_eq!(Some(pairings.len()), Pairings::<usize>::count_for(k));
            assert!(pairings.iter().all_unique());

            for pairing in pairings {
                assert_eq!(pairing.len(), k / 2);
                assert!(pairing.iter().all(|&(a, b)| a < b));
                let covered = pairing.iter().flat_map(|&(a, b)| [a, b]).sorted().collect_vec();
                assert_eq!(covered, (0..k).collect_vec());
            }
        }

        assert_eq!(Pairings::<usize>::count_for(0), Some(1));
        assert_eq!(Pairings::<usize>::count_for(6), Some(15));
        assert_eq!(Pairings::<usize>::describe_count(8), "105");
    }

    #[test]
    fn huge_pairing_counts_do_not_overflow() {
        assert_eq!(Pairings::<usize>::count_for(36), None);
        assert_eq!(Pairings::<usize>::count_for(200), None);
        assert_eq!(
            Pairings::<usize>::describe_count(36),
            format!("more than {}", usize::MAX)
        );
    }

    #[test]
    #[should_panic]
    fn odd_number_of_elements() {
        Pairings::new(vec![1, 2, 3]);
    }

    #[test]
    fn eulerian_triangle() {
        let graph = graph_from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.0)]);
        assert_eq!(
            messages(&graph),
            [
                "The total weight of the graph's edges is 3.",
                "The graph is Eulerian, so it can be traversed without repeating edges. \
                 Therefore the optimal route has length 3.",
            ]
        );
        assert_eq!(graph.route_inspection_length().unwrap(), 3.0);
    }

    #[test]
    fn semi_eulerian_path() {
        let graph = graph_from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
        let steps = graph.route_inspection().unwrap().collect_vec();

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[1].message(), "The graph has 2 odd vertices: A, C.");
        assert_eq!(steps[1].highlighted_vertices(), [0, 2]);
        assert_eq!(
            steps[2].message(),
            "The shortest path between these has length 2. \
             Therefore the optimal route has length 2 + 2 = 4."
        );
        assert_eq!(steps[2].result(), Some(4.0));
        assert_eq!(graph.route_inspection_length().unwrap(), 4.0);
    }

    #[test]
    fn complete_graph_on_four_vertices() {
        init_logger();
        let graph = graph_from_edges(
            4,
            &[(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0), (1, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0)],
        );
        assert_eq!(
            messages(&graph),
            [
                "The total weight of the graph's edges is 6.",
                "The graph has 4 odd vertices: A, B, C, D.",
                "There are 3 ways to pair these: AB CD, AC BD, AD BC.",
                "Their additional path lengths are 2, 2, 2, the shortest of which is 2.",
                "Therefore, the length of the optimal route is 6 + 2 = 8.",
            ]
        );
        assert_eq!(graph.route_inspection_length().unwrap(), 8.0);
    }

    #[test]
    fn cheapest_pairing_wins() {
        // K4 where only AD and BC are cheap
        let graph = graph_from_edges(
            4,
            &[(0, 3, 1.0), (1, 2, 1.0), (0, 1, 5.0), (2, 3, 5.0), (0, 2, 5.0), (1, 3, 5.0)],
        );
        let steps = graph.route_inspection().unwrap().collect_vec();
        assert_eq!(steps.len(), 5);
        assert_eq!(
            steps[3].message(),
            "Their additional path lengths are 10, 10, 2, the shortest of which is 2."
        );
        assert_eq!(steps[4].result(), Some(24.0));
        assert_eq!(steps[4].highlighted_vertices(), [0, 1, 2, 3]);
    }

    #[test]
    fn odd_vertex_limit() {
        let graph = graph_from_edges(4, &[(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0)]);
        assert!(matches!(
            RouteInspection::new().max_odd_vertices(2).run(&graph),
            Err(GraphError::TooManyOddVertices { found: 4, limit: 2 })
        ));
        assert!(RouteInspection::new().max_odd_vertices(4).run(&graph).is_ok());
    }

    #[test]
    fn random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        for _ in 0..100 {
            let n = rng.random_range(1..12);
            let graph = random_connected_weighted_graph(rng, n, n, 10);
            let total = graph.total_weight().unwrap();

            let steps = graph.route_inspection().unwrap();
            let expected = steps.optimal_length();
            let last = steps.last().unwrap();

            assert!(last.is_final());
            assert_eq!(last.result(), Some(expected));
            assert!(expected >= total);
            if graph.is_eulerian() {
                assert_eq!(expected, total);
            }
        }
    }
}
