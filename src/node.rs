/*!
# Node Representation

We choose `Node = u32` as graphs handled here stay far below `2^32` nodes.
Nodes are always the dense range `0..n`: deleting a node renumbers every higher node down by one,
so a `Node` is simultaneously an identifier and an index into per-node arrays.
*/

use fixedbitset::FixedBitSet;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Weights of nodes and edges
pub type Weight = f64;

/// Weight of a node that was never assigned one
pub const DEFAULT_NODE_WEIGHT: Weight = 0.0;

/// Weight of an edge in a graph without edge weights
pub const DEFAULT_EDGE_WEIGHT: Weight = 1.0;

/// BitSet for Nodes; indexed by `node as usize`
pub type NodeBitSet = FixedBitSet;

/// Shorthand to build a [`NodeBitSet`] of `n` nodes with the given nodes set
pub fn node_bitset_with<I>(n: NumNodes, nodes: I) -> NodeBitSet
where
    I: IntoIterator<Item = Node>,
{
    let mut set = NodeBitSet::with_capacity(n as usize);
    for u in nodes {
        set.insert(u as usize);
    }
    set
}
