/*!
# Representations

- [`Graph`]: the editable, owning graph a user draws. Vertices and edges are kept in creation order;
  edges refer to their endpoints by [`Node`] index so the graph is the single owner of everything.
- [`DerivedTree`]: a subset of a graph's edges over all of its vertices, as built by the spanning tree
  algorithms. It borrows the graph instead of copying it.
- [`WeightedGraph`]: a validated view of a graph that is non-empty, connected and fully weighted.
  All step-narrated algorithms run on this view.

All three implement the traits in [`ops`](crate::ops), so traversals, connectivity tests and
shortest paths work on any of them.
*/

use crate::{ops::*, *};

mod graph;
mod tree;
mod weighted;

pub use graph::*;
pub use tree::*;
pub use weighted::*;

pub(crate) mod macros {
    /// Implements `GraphNodeOrder`, `GraphEdgeOrder`, `AdjacencyList`, `AdjacencyTest` and `Labelled`
    /// for a wrapper by forwarding to the graph stored in `$field`.
    macro_rules! impl_graph_ops_via {
        ($struct:ident<$lt:lifetime> => $field:ident) => {
            impl<$lt> GraphNodeOrder for $struct<$lt> {
                fn number_of_nodes(&self) -> NumNodes {
                    self.$field.number_of_nodes()
                }
            }

            impl<$lt> GraphEdgeOrder for $struct<$lt> {
                fn number_of_edges(&self) -> NumEdges {
                    self.$field.number_of_edges()
                }
            }

            impl<$lt> AdjacencyList for $struct<$lt> {
                fn incident_edges_of(&self, u: Node) -> impl Iterator<Item = (Node, EdgeId)> + '_ {
                    self.$field.incident_edges_of(u)
                }

                fn degree_of(&self, u: Node) -> NumNodes {
                    self.$field.degree_of(u)
                }
            }

            impl<$lt> AdjacencyTest for $struct<$lt> {
                fn edge_between(&self, u: Node, v: Node) -> Option<EdgeId> {
                    self.$field.edge_between(u, v)
                }
            }

            impl<$lt> Labelled for $struct<$lt> {
                fn label_of(&self, u: Node) -> &str {
                    self.$field.label_of(u)
                }
            }
        };
    }

    pub(super) use impl_graph_ops_via;
}
