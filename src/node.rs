/*!
# Node Representation

We choose `Node = u32` as the graphs drawn by a user rarely exceed a few dozen vertices, let alone `2^32`.
A `Node` is the index of a vertex in the insertion-ordered vertex sequence of its [`Graph`](crate::repr::Graph).
Vertices are never removed, hence a `Node` stays valid for the lifetime of its graph.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
