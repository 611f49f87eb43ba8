/*!
# Graph Algorithms

This module provides the **graph algorithms** of this crate, built on the traits in [`ops`](crate::ops).
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use graph_tutor::algo::*;
```
and gain access to traversals, classification, shortest paths, spanning trees,
Hamiltonian cycles and route inspection.

If possible, algorithms are provided as **iterators**: the combinatorial searches enumerate their
candidates lazily and the teaching algorithms (Prim, Kruskal, route inspection) yield one
[`StepEvent`](crate::narrate::StepEvent) per narrated step.
*/

mod classify;
mod connectivity;
mod hamiltonian;
mod route_inspection;
mod shortest_path;
mod spanning_tree;
mod traversal;

use stream_bitset::prelude::*;

use crate::prelude::*;

pub use classify::*;
pub use connectivity::*;
pub use hamiltonian::*;
pub use route_inspection::*;
pub use shortest_path::*;
pub use spanning_tree::*;
pub use traversal::*;
