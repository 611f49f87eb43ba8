use super::*;

/// A subset of the edges of a [`Graph`] spanning all of its vertices.
///
/// This is what the spanning tree algorithms build: it borrows the source graph for labels
/// and weights and only records which edges were selected (in selection order). While being
/// built it is a forest, and the traversal/connectivity traits work on it directly, e.g. to test
/// whether a candidate edge would close a cycle.
#[derive(Debug, Clone)]
pub struct DerivedTree<'a> {
    graph: &'a Graph,
    edges: Vec<EdgeId>,
    nbs: Vec<Vec<(Node, EdgeId)>>,
}

impl<'a> DerivedTree<'a> {
    /// Creates a tree over all vertices of `graph` without any edges
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            edges: Vec::new(),
            nbs: vec![Vec::new(); graph.len()],
        }
    }

    /// Selects edge `e` of the source graph.
    /// ** Panics if `e >= m` or `e` was already selected **
    pub fn add_edge(&mut self, e: EdgeId) {
        assert!(!self.edges.contains(&e));
        let Edge(u, v) = self.graph.edge_at(e).endpoints();
        self.edges.push(e);
        self.nbs[u as usize].push((v, e));
        self.nbs[v as usize].push((u, e));
    }

    /// Returns the source graph
    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    /// Returns the selected edges in selection order
    pub fn selected_edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Returns *true* if edge `e` of the source graph was selected
    pub fn contains_edge(&self, e: EdgeId) -> bool {
        self.edges.contains(&e)
    }

    /// Returns the sum of the weights of all selected edges.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidWeight`] if a selected edge is unweighted.
    pub fn total_weight(&self) -> Result<Weight> {
        self.edges.iter().map(|&e| self.graph.weight_of(e)).sum()
    }
}

impl GraphNodeOrder for DerivedTree<'_> {
    fn number_of_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }
}

impl GraphEdgeOrder for DerivedTree<'_> {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl AdjacencyList for DerivedTree<'_> {
    fn incident_edges_of(&self, u: Node) -> impl Iterator<Item = (Node, EdgeId)> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl AdjacencyTest for DerivedTree<'_> {
    fn edge_between(&self, u: Node, v: Node) -> Option<EdgeId> {
        self.nbs
            .get(u as usize)?
            .iter()
            .find_map(|&(w, e)| (w == v).then_some(e))
    }
}

impl WeightLookup for DerivedTree<'_> {
    type Error = GraphError;

    fn weight_of(&self, e: EdgeId) -> Result<Weight> {
        self.graph.weight_of(e)
    }
}

impl Labelled for DerivedTree<'_> {
    fn label_of(&self, u: Node) -> &str {
        self.graph.label_of(u)
    }
}
