/*!
Minimum spanning trees, narrated step by step.

Both [`Prim`] and [`Kruskal`] run on a validated [`WeightedGraph`] and build a [`DerivedTree`]
over the source graph without ever mutating it. Their steps are yielded as [`StepEvent`]s;
the final step carries the total weight of the tree.

Ties are always broken by edge creation order, so both algorithms are deterministic.
*/

use itertools::Itertools;
use log::{debug, trace};

use super::*;
use crate::narrate::Highlight;

const TREE_COMPLETE: &str = "All vertices are now in the tree, so the algorithm is complete.";

fn final_step(highlight: &Highlight, weight: Weight) -> StepEvent {
    debug!("spanning tree completed with weight {weight}");
    StepEvent::finish(
        format!("{TREE_COMPLETE} The weight of the tree is {weight}."),
        highlight,
        weight,
    )
}

fn tree_weight(graph: &WeightedGraph, tree: &DerivedTree) -> Weight {
    tree.selected_edges().iter().map(|&e| graph.weight(e)).sum()
}

/// Configuration of Prim's algorithm.
///
/// Starting from the root, the tree repeatedly grows by the lightest edge leaving it.
/// Among crossing edges of equal weight the one created first is chosen.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prim {
    root: Node,
}

impl Prim {
    /// Prim's algorithm starting at node `0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the node the tree is grown from
    pub fn set_root(&mut self, root: Node) {
        self.root = root;
    }

    /// Sets the node the tree is grown from
    pub fn root(mut self, root: Node) -> Self {
        self.set_root(root);
        self
    }

    /// Validates `graph` and returns the steps of the algorithm.
    ///
    /// # Errors
    /// Fails if `graph` is not a valid [`WeightedGraph`] or the root is not a node of `graph`.
    pub fn run<'a>(&self, graph: &'a Graph) -> Result<PrimSteps<'a>> {
        let graph = WeightedGraph::new(graph)?;
        if !graph.contains_node(self.root) {
            return Err(GraphError::UnknownVertex(self.root));
        }

        debug!("starting Prim's algorithm at {}", graph.label_of(self.root));
        Ok(PrimSteps {
            tree: DerivedTree::new(graph.graph()),
            in_tree: NodeBitSet::new(graph.number_of_nodes()),
            highlight: Highlight::new(),
            root: self.root,
            phase: Phase::Start,
            graph,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Grow,
    Finished,
}

/// Steps of Prim's algorithm, see [`Prim`]
pub struct PrimSteps<'a> {
    graph: WeightedGraph<'a>,
    tree: DerivedTree<'a>,
    in_tree: NodeBitSet,
    highlight: Highlight,
    root: Node,
    phase: Phase,
}

impl<'a> PrimSteps<'a> {
    /// Returns the tree built so far
    pub fn tree(&self) -> &DerivedTree<'a> {
        &self.tree
    }

    /// Consumes the steps and returns the tree built so far
    pub fn into_tree(self) -> DerivedTree<'a> {
        self.tree
    }

    fn add_to_tree(&mut self, u: Node) {
        if !self.in_tree.set_bit(u) {
            self.highlight.add_vertex(u);
        }
    }

    /// Returns the lightest edge with exactly one endpoint in the tree
    fn lightest_crossing_edge(&self) -> Option<EdgeId> {
        self.graph
            .graph()
            .edges()
            .zip(self.graph.edge_ids())
            .filter(|(Edge(u, v), _)| self.in_tree.get_bit(*u) != self.in_tree.get_bit(*v))
            .map(|(_, e)| e)
            .min_by(|&x, &y| self.graph.weight(x).total_cmp(&self.graph.weight(y)))
    }
}

impl Iterator for PrimSteps<'_> {
    type Item = StepEvent;

    fn next(&mut self) -> Option<Self::Item> {
        match self.phase {
            Phase::Start => {
                self.add_to_tree(self.root);
                self.phase = Phase::Grow;
                Some(StepEvent::new(
                    format!(
                        "First, we pick an arbitrary starting vertex: {}",
                        self.graph.label_of(self.root)
                    ),
                    &self.highlight,
                ))
            }
            Phase::Grow if (self.in_tree.cardinality() as usize) < self.graph.len() => {
                // the graph is connected, so a crossing edge exists
                let e = self.lightest_crossing_edge()?;
                let endpoints = self.graph.graph().edge_at(e).endpoints();

                self.tree.add_edge(e);
                self.highlight.add_edge(e);
                self.add_to_tree(endpoints.0);
                self.add_to_tree(endpoints.1);

                let label = self.graph.edge_label(endpoints);
                trace!("Prim adds {label}");
                Some(StepEvent::new(
                    format!(
                        "The next shortest edge leading to a new vertex is {label}, so we add this to the tree."
                    ),
                    &self.highlight,
                ))
            }
            Phase::Grow => {
                self.phase = Phase::Finished;
                Some(final_step(
                    &self.highlight,
                    tree_weight(&self.graph, &self.tree),
                ))
            }
            Phase::Finished => None,
        }
    }
}

/// Configuration of Kruskal's algorithm.
///
/// Edges are considered by increasing weight (ties in creation order); an edge is added unless its
/// endpoints are already connected within the partial tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal;

impl Kruskal {
    pub fn new() -> Self {
        Self
    }

    /// Validates `graph` and returns the steps of the algorithm.
    ///
    /// # Errors
    /// Fails if `graph` is not a valid [`WeightedGraph`].
    pub fn run<'a>(&self, graph: &'a Graph) -> Result<KruskalSteps<'a>> {
        let graph = WeightedGraph::new(graph)?;
        let candidates = graph
            .edge_ids()
            .sorted_by(|&x, &y| graph.weight(x).total_cmp(&graph.weight(y)))
            .collect_vec();

        debug!("starting Kruskal's algorithm on {} edges", candidates.len());
        Ok(KruskalSteps {
            tree: DerivedTree::new(graph.graph()),
            candidates: candidates.into_iter(),
            highlight: Highlight::new(),
            phase: Phase::Start,
            graph,
        })
    }
}

/// Steps of Kruskal's algorithm, see [`Kruskal`]
pub struct KruskalSteps<'a> {
    graph: WeightedGraph<'a>,
    tree: DerivedTree<'a>,
    candidates: std::vec::IntoIter<EdgeId>,
    highlight: Highlight,
    phase: Phase,
}

impl<'a> KruskalSteps<'a> {
    /// Returns the tree built so far
    pub fn tree(&self) -> &DerivedTree<'a> {
        &self.tree
    }

    /// Consumes the steps and returns the tree built so far
    pub fn into_tree(self) -> DerivedTree<'a> {
        self.tree
    }

    fn add_to_tree(&mut self, e: EdgeId) -> Edge {
        let endpoints = self.graph.graph().edge_at(e).endpoints();
        self.tree.add_edge(e);
        self.highlight.add_edge(e);
        self.highlight.add_vertex(endpoints.0);
        self.highlight.add_vertex(endpoints.1);
        endpoints
    }

    fn is_spanning(&self) -> bool {
        // only acyclic additions are made, so n - 1 edges span the graph
        self.tree.number_of_edges() as usize + 1 == self.tree.len()
    }
}

impl Iterator for KruskalSteps<'_> {
    type Item = StepEvent;

    fn next(&mut self) -> Option<Self::Item> {
        match self.phase {
            Phase::Finished => None,
            _ if self.is_spanning() => {
                self.phase = Phase::Finished;
                Some(final_step(
                    &self.highlight,
                    tree_weight(&self.graph, &self.tree),
                ))
            }
            Phase::Start => {
                self.phase = Phase::Grow;
                let e = self.candidates.next()?;
                let endpoints = self.add_to_tree(e);
                let label = self.graph.edge_label(endpoints);
                trace!("Kruskal adds {label}");
                Some(StepEvent::new(
                    format!("The shortest edge, {label}, is added to the tree."),
                    &self.highlight,
                ))
            }
            Phase::Grow => {
                let e = self.candidates.next()?;
                let Edge(u, v) = self.graph.graph().edge_at(e).endpoints();
                let label = self.graph.edge_label(Edge(u, v));

                if self.tree.path_exists(u, v) {
                    trace!("Kruskal disregards {label}");
                    Some(StepEvent::new(
                        format!(
                            "The next shortest edge, {label}, would create a cycle, so we disregard it."
                        ),
                        &self.highlight,
                    ))
                } else {
                    self.add_to_tree(e);
                    trace!("Kruskal adds {label}");
                    Some(StepEvent::new(
                        format!(
                            "The next shortest edge, {label}, does not create a cycle, and is added to the tree."
                        ),
                        &self.highlight,
                    ))
                }
            }
        }
    }
}

/// Minimum spanning tree algorithms on graphs
pub trait SpanningTree {
    /// Returns the narrated steps of Prim's algorithm starting at node `0`; see [`Prim`]
    fn prim(&self) -> Result<PrimSteps<'_>>;

    /// Returns the narrated steps of Kruskal's algorithm; see [`Kruskal`]
    fn kruskal(&self) -> Result<KruskalSteps<'_>>;

    /// Computes a minimum spanning tree without narration.
    ///
    /// ```
    /// use graph_tutor::{prelude::*, algo::*};
    ///
    /// let mut graph = Graph::new();
    /// for _ in 0..3 {
    ///     graph.add_vertex_at(0.0, 0.0);
    /// }
    /// graph.create_edge(0, 1, Some(3.0)).unwrap();
    /// graph.create_edge(1, 2, Some(1.0)).unwrap();
    /// graph.create_edge(2, 0, Some(2.0)).unwrap();
    ///
    /// let tree = graph.minimum_spanning_tree().unwrap();
    /// assert_eq!(tree.selected_edges(), [1, 2]);
    /// assert_eq!(tree.total_weight().unwrap(), 3.0);
    /// ```
    fn minimum_spanning_tree(&self) -> Result<DerivedTree<'_>> {
        let mut steps = self.kruskal()?;
        steps.by_ref().for_each(drop);
        Ok(steps.into_tree())
    }
}

impl SpanningTree for Graph {
    fn prim(&self) -> Result<PrimSteps<'_>> {
        Prim::new().run(self)
    }

    fn kruskal(&self) -> Result<KruskalSteps<'_>> {
        Kruskal::new().run(self)
    }
}

#[cfg(test)]
mod test {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::{graph_from_edges, init_logger, random_connected_weighted_graph};

    fn square() -> Graph {
        graph_from_edges(4, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0)])
    }

    #[test]
    fn prim_square() {
        init_logger();
        let graph = square();
        let steps = graph.prim().unwrap().collect_vec();

        assert_eq!(
            steps.iter().map(|s| s.message()).collect_vec(),
            [
                "First, we pick an arbitrary starting vertex: A",
                "The next shortest edge leading to a new vertex is AB, so we add this to the tree.",
                "The next shortest edge leading to a new vertex is BC, so we add this to the tree.",
                "The next shortest edge leading to a new vertex is CD, so we add this to the tree.",
                "All vertices are now in the tree, so the algorithm is complete. The weight of the tree is 3.",
            ]
        );
        assert_eq!(steps[0].highlighted_vertices(), [0]);
        assert_eq!(steps[2].highlighted_vertices(), [0, 1, 2]);
        assert_eq!(steps[2].highlighted_edges(), [0, 1]);
        assert_eq!(steps.last().unwrap().result(), Some(3.0));
    }

    #[test]
    fn prim_with_root() {
        let graph = graph_from_edges(3, &[(0, 1, 5.0), (1, 2, 1.0)]);
        let mut steps = Prim::new().root(2).run(&graph).unwrap();

        assert!(steps.next().unwrap().message().ends_with(": C"));
        assert!(steps.next().unwrap().message().contains(" BC,"));
        assert!(steps.next().unwrap().message().contains(" AB,"));
        assert_eq!(steps.next().unwrap().result(), Some(6.0));
        assert!(steps.next().is_none());
        assert_eq!(steps.tree().selected_edges(), [1, 0]);

        assert!(matches!(
            Prim::new().root(3).run(&graph),
            Err(GraphError::UnknownVertex(3))
        ));
    }

    #[test]
    fn kruskal_disregards_cycles() {
        let graph = square();
        let messages = graph
            .kruskal()
            .unwrap()
            .map(|s| s.message().to_string())
            .collect_vec();

        assert_eq!(
            messages,
            [
                "The shortest edge, AB, is added to the tree.",
                "The next shortest edge, BC, does not create a cycle, and is added to the tree.",
                "The next shortest edge, CD, does not create a cycle, and is added to the tree.",
                "All vertices are now in the tree, so the algorithm is complete. The weight of the tree is 3.",
            ]
        );

        // 0 -1- 1 -1- 2, 0 -1- 2 closes a triangle before 2 -5- 3 is reached
        let graph = graph_from_edges(4, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.0), (2, 3, 5.0)]);
        let steps = graph.kruskal().unwrap().collect_vec();
        assert_eq!(steps.len(), 5);
        assert_eq!(
            steps[2].message(),
            "The next shortest edge, AC, would create a cycle, so we disregard it."
        );
        assert_eq!(steps[2].highlighted_edges(), [0, 1]);
        assert_eq!(steps[4].result(), Some(7.0));
    }

    #[test]
    fn kruskal_keeps_creation_order_on_ties() {
        let graph = graph_from_edges(3, &[(1, 2, 2.0), (0, 1, 1.0), (0, 2, 2.0)]);
        let tree = graph.minimum_spanning_tree().unwrap();
        assert_eq!(tree.selected_edges(), [1, 0]);
    }

    #[test]
    fn single_vertex() {
        let graph = graph_from_edges(1, &[]);

        let steps = graph.kruskal().unwrap().collect_vec();
        assert_eq!(steps.len(), 1);
        assert!(steps[0].is_final());
        assert_eq!(steps[0].result(), Some(0.0));

        let steps = graph.prim().unwrap().collect_vec();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].result(), Some(0.0));
    }

    #[test]
    fn source_graph_is_not_modified() {
        let graph = square();
        let tree = graph.minimum_spanning_tree().unwrap();
        assert_eq!(tree.number_of_edges(), 3);
        assert_eq!(graph.number_of_edges(), 4);
        assert!(tree.is_tree());
    }

    #[test]
    fn prim_and_kruskal_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for _ in 0..100 {
            let n = rng.random_range(1..25);
            let graph = random_connected_weighted_graph(rng, n, 3 * n, 20);

            let prim = graph.prim().unwrap().last().unwrap();
            let kruskal = graph.kruskal().unwrap().last().unwrap();
            assert!(prim.is_final() && kruskal.is_final());
            assert_eq!(prim.result(), kruskal.result());

            let mut steps = graph.prim().unwrap();
            steps.by_ref().for_each(drop);
            let tree = steps.into_tree();
            assert!(tree.is_tree());
            assert_eq!(Some(tree.total_weight().unwrap()), prim.result());
        }
    }
}
