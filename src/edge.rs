use std::fmt::{Debug, Display};

use crate::{GraphError, Node, Result};

/// An edge is defined by two nodes/endpoints.
/// All edges in this crate are undirected, i.e. `Edge(u, v)` and `Edge(v, u)` denote the same edge.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Index of an edge in the creation-ordered edge sequence of a graph
pub type EdgeId = NumEdges;

/// Edge weights are non-negative reals as entered by the user
pub type Weight = f64;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Returns *true* if the edge connects `u` and `v` (in any order)
    pub fn connects(&self, u: Node, v: Node) -> bool {
        (self.0 == u && self.1 == v) || (self.0 == v && self.1 == u)
    }

    /// Returns *true* if `u` is one of the endpoints
    pub fn is_incident_to(&self, u: Node) -> bool {
        self.0 == u || self.1 == u
    }

    /// Returns the endpoint opposite to `u`.
    /// ** Panics (in debug builds) if `u` is not an endpoint **
    pub fn opposite(&self, u: Node) -> Node {
        debug_assert!(self.is_incident_to(u));
        if self.0 == u { self.1 } else { self.0 }
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// An edge as stored by a graph: its endpoints plus an optional weight.
///
/// An unweighted edge is perfectly valid for structural queries; only the weight-dependent
/// algorithms require every edge to carry a weight (see [`WeightedGraph`](crate::repr::WeightedGraph)).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WeightedEdge {
    endpoints: Edge,
    weight: Option<Weight>,
}

impl WeightedEdge {
    pub(crate) fn new(endpoints: Edge, weight: Option<Weight>) -> Self {
        Self { endpoints, weight }
    }

    /// Returns the endpoints in the order they were given on creation
    pub fn endpoints(&self) -> Edge {
        self.endpoints
    }

    /// Returns the weight of the edge, if any
    pub fn weight(&self) -> Option<Weight> {
        self.weight
    }

    /// Returns *true* if the edge connects `u` and `v` (in any order)
    pub fn connects(&self, u: Node, v: Node) -> bool {
        self.endpoints.connects(u, v)
    }
}

/// Checks that `weight` is a finite, non-negative number and returns it
pub fn validate_weight(weight: Weight) -> Result<Weight> {
    if !weight.is_finite() {
        Err(GraphError::InvalidWeight)
    } else if weight < 0.0 {
        Err(GraphError::NegativeWeight(weight))
    } else {
        Ok(weight)
    }
}

/// Parses a weight as typed by a user, e.g. `" 2.5"`
///
/// ```
/// use graph_tutor::prelude::*;
///
/// assert_eq!(parse_weight("2.5").unwrap(), 2.5);
/// assert!(parse_weight("-1").is_err());
/// assert!(parse_weight("abc").is_err());
/// ```
pub fn parse_weight(input: &str) -> Result<Weight> {
    let weight = input
        .trim()
        .parse::<Weight>()
        .map_err(|_| GraphError::InvalidWeight)?;
    validate_weight(weight)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalization() {
        assert_eq!(Edge(3, 1).normalized(), Edge(1, 3));
        assert!(Edge(1, 3).is_normalized());
        assert!(!Edge(3, 1).is_normalized());
        assert_eq!(Edge(3, 1).reverse(), Edge(1, 3));
        assert!(Edge(2, 2).is_loop());
    }

    #[test]
    fn connects_is_unordered() {
        let e = Edge(0, 4);
        assert!(e.connects(0, 4));
        assert!(e.connects(4, 0));
        assert!(!e.connects(0, 3));
        assert_eq!(e.opposite(0), 4);
        assert_eq!(e.opposite(4), 0);
    }

    #[test]
    fn weights() {
        assert_eq!(parse_weight("0").unwrap(), 0.0);
        assert_eq!(parse_weight(" 7.25 ").unwrap(), 7.25);
        assert!(matches!(parse_weight(""), Err(GraphError::InvalidWeight)));
        assert!(matches!(parse_weight("NaN"), Err(GraphError::InvalidWeight)));
        assert!(matches!(parse_weight("inf"), Err(GraphError::InvalidWeight)));
        assert!(matches!(
            parse_weight("-0.5"),
            Err(GraphError::NegativeWeight(w)) if w == -0.5
        ));
    }
}
