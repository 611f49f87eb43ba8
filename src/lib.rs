/*!
`graph_tutor` is a graph model plus a collection of classical graph algorithms that explain
themselves step by step, written for teaching graph theory.

# Representation

A [`Graph`](crate::repr::Graph) owns labelled [`Vertex`](crate::vertex::Vertex)es and optionally
weighted edges, both in creation order. Internally we represent **nodes** as `u32` indices into
the vertex sequence and **edges** as a simple tuple-struct `Edge(Node, Node)`; all edges are
undirected, i.e. `Edge(u, v)` and `Edge(v, u)` are the same edge. The graph is always simple:
no loops, no parallel edges and no two vertices with the same label.

# Design

All algorithms are provided as configurable structs that one can alter to their needs using the
*Builder* / *Setter* pattern before running them on a provided graph (e.g. `Prim::new().root(2)`).
Alternatively, the common functionality is implemented via traits on the graph itself, making it
usable without configuring the algorithm beforehand (e.g. `graph.prim()`).

The teaching algorithms do not return their answer directly but an iterator of
[`StepEvent`](crate::narrate::StepEvent)s: each event explains one step and names the vertices and
edges to highlight; the last one carries the result. A [`Narrator`](crate::narrate::Narrator)
drives such an iterator one step at a time and can be cancelled between steps.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and the graph representations,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS (`graph.bfs(start_node)`),
  classification (`graph.is_eulerian()`), Dijkstra, Prim, Kruskal, Hamiltonian cycles and route inspection,
- [`narrate`] includes the step events and the cancellable narrator driving them,
- [`io`] includes the persisted JSON form of a graph and a Graphviz writer.

In most use-cases, `use graph_tutor::{prelude::*, algo::*};` suffices for your needs.

```
use graph_tutor::{prelude::*, algo::*};

let mut graph = Graph::new();
let a = graph.add_vertex_at(0.0, 0.0);
let b = graph.add_vertex_at(1.0, 0.0);
let c = graph.add_vertex_at(0.0, 1.0);
graph.create_edge(a, b, Some(1.0)).unwrap();
graph.create_edge(b, c, Some(1.0)).unwrap();

assert!(graph.is_semi_eulerian());
assert_eq!(graph.route_inspection_length().unwrap(), 4.0);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod narrate;
pub mod node;
pub mod ops;
pub mod repr;
pub mod vertex;

#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;

/// Re-exports the types and traits needed to build and query graphs
pub mod prelude {
    pub use super::{
        edge::*,
        error::*,
        narrate::{Narrator, NarratorState, StepEvent},
        node::*,
        ops::*,
        repr::*,
        vertex::{Vertex, is_valid_label},
    };
}
