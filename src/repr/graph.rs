use fxhash::FxHashMap;
use log::trace;

use super::*;
use crate::vertex::{DefaultLabels, Vertex};

/// An undirected, simple graph of labelled vertices and optionally weighted edges.
///
/// The graph owns its vertices and edges in creation order. Edges store the [`Node`]
/// indices of their endpoints and each node keeps its incident edges in creation order,
/// so neighborhoods are reported in the order the edges were drawn.
///
/// The graph maintains the following invariants on every mutation:
/// - labels are unique,
/// - no two edges connect the same unordered pair,
/// - there are no self-loops,
/// - weights, if present, are finite and non-negative.
///
/// ```
/// use graph_tutor::prelude::*;
///
/// let mut graph = Graph::new();
/// let a = graph.add_vertex_at(0.0, 0.0);
/// let b = graph.add_vertex_at(10.0, 0.0);
/// graph.create_edge(a, b, Some(2.0)).unwrap();
///
/// assert_eq!(graph.label_of(b), "B");
/// assert!(graph.has_edge(b, a));
/// assert!(graph.create_edge(b, a, None).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<WeightedEdge>,
    nbs: Vec<Vec<(Node, EdgeId)>>,
    edge_index: FxHashMap<Edge, EdgeId>,
    label_index: FxHashMap<String, Node>,
}

impl Graph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `vertex` to the graph and returns its node.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateLabel`] if the label is already in use.
    pub fn add_vertex(&mut self, vertex: Vertex) -> Result<Node> {
        if self.label_in_use(vertex.label()) {
            return Err(GraphError::DuplicateLabel(vertex.label().to_string()));
        }

        let u = self.vertices.len() as Node;
        self.label_index.insert(vertex.label().to_string(), u);
        self.vertices.push(vertex);
        self.nbs.push(Vec::new());
        Ok(u)
    }

    /// Adds a vertex at `(x, y)` labelled with [`Graph::next_vertex_label`] and returns its node
    pub fn add_vertex_at(&mut self, x: f64, y: f64) -> Node {
        let label = self.next_vertex_label();
        let u = self.vertices.len() as Node;
        self.label_index.insert(label.clone(), u);
        self.vertices.push(Vertex::new(label, x, y));
        self.nbs.push(Vec::new());
        u
    }

    /// Creates the edge {u, v} with an optional weight and returns its id.
    ///
    /// # Errors
    /// - [`GraphError::UnknownVertex`] if `u` or `v` is not a node of the graph,
    /// - [`GraphError::SelfLoop`] if `u == v`,
    /// - [`GraphError::DuplicateEdge`] if {u, v} already exists,
    /// - [`GraphError::InvalidWeight`] / [`GraphError::NegativeWeight`] for a weight that is
    ///   not finite or negative.
    ///
    /// The graph is left unchanged on error.
    pub fn create_edge(&mut self, u: Node, v: Node, weight: Option<Weight>) -> Result<EdgeId> {
        for w in [u, v] {
            if !self.contains_node(w) {
                return Err(GraphError::UnknownVertex(w));
            }
        }

        if u == v {
            return Err(GraphError::SelfLoop(self.label_of(u).to_string()));
        }

        if self.has_edge(u, v) {
            return Err(GraphError::DuplicateEdge {
                u: self.label_of(u).to_string(),
                v: self.label_of(v).to_string(),
            });
        }

        let weight = weight.map(validate_weight).transpose()?;

        let e = self.edges.len() as EdgeId;
        self.edges.push(WeightedEdge::new(Edge(u, v), weight));
        self.edge_index.insert(Edge(u, v).normalized(), e);
        self.nbs[u as usize].push((v, e));
        self.nbs[v as usize].push((u, e));

        trace!(
            "created edge {}{} with weight {weight:?}",
            self.label_of(u),
            self.label_of(v)
        );
        Ok(e)
    }

    /// Checks whether any vertex of the graph carries `label`
    pub fn label_in_use(&self, label: &str) -> bool {
        self.label_index.contains_key(label)
    }

    /// Returns the first default label (`"A"`, ..., `"Z"`, `"1"`, `"2"`, ...) that is not yet in use
    pub fn next_vertex_label(&self) -> String {
        DefaultLabels::new()
            .find(|label| !self.label_in_use(label))
            .unwrap_or_default()
    }

    /// Returns the node labelled `label` if it exists
    pub fn vertex_by_label(&self, label: &str) -> Option<Node> {
        self.label_index.get(label).copied()
    }

    /// Returns the vertex data of `u`.
    /// ** Panics if `u >= n` **
    pub fn vertex(&self, u: Node) -> &Vertex {
        &self.vertices[u as usize]
    }

    /// Returns the vertex data of all nodes in insertion order
    pub fn vertex_data(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the edge with id `e`.
    /// ** Panics if `e >= m` **
    pub fn edge_at(&self, e: EdgeId) -> &WeightedEdge {
        &self.edges[e as usize]
    }

    /// Returns the edge connecting `u` and `v` if it exists
    pub fn edge(&self, u: Node, v: Node) -> Option<&WeightedEdge> {
        self.edge_between(u, v).map(|e| self.edge_at(e))
    }

    /// Returns all edges in creation order
    pub fn weighted_edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Returns an iterator over the endpoints of all edges in creation order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().map(|e| e.endpoints())
    }

    /// Returns the sum of all edge weights.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidWeight`] if any edge is unweighted.
    pub fn total_weight(&self) -> Result<Weight> {
        self.edges
            .iter()
            .map(|e| e.weight().ok_or(GraphError::InvalidWeight))
            .sum()
    }
}

impl GraphNodeOrder for Graph {
    fn number_of_nodes(&self) -> NumNodes {
        self.vertices.len() as NumNodes
    }
}

impl GraphEdgeOrder for Graph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl AdjacencyList for Graph {
    fn incident_edges_of(&self, u: Node) -> impl Iterator<Item = (Node, EdgeId)> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl AdjacencyTest for Graph {
    fn edge_between(&self, u: Node, v: Node) -> Option<EdgeId> {
        self.edge_index.get(&Edge(u, v).normalized()).copied()
    }
}

impl WeightLookup for Graph {
    type Error = GraphError;

    fn weight_of(&self, e: EdgeId) -> Result<Weight> {
        self.edge_at(e).weight().ok_or(GraphError::InvalidWeight)
    }
}

impl Labelled for Graph {
    fn label_of(&self, u: Node) -> &str {
        self.vertex(u).label()
    }
}
