/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
This allows us to (1) save space by not using `usize` or `u64` and (2) directly index
per-node tables with `node as usize`.
*/

use std::num::NonZero;
use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Path lengths are measured in edges (or 0/1-weight sums) and thus never exceed `Node::MAX - 1`
pub type Distance = Node;

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since we often need to use `Vec<Option<Node>>`. This instead uses the
/// `NonZero`-Wrapper to reserve the constant `N` as the `None`-Value.
///
/// Predecessor and distance tables of the traversals store `Option<OptionalNodeImpl<N>>`,
/// so an unreached node is never confused with a legitimate large value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// Often, `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}

/// Reads a compact optional entry back into a plain `Option`
#[inline]
pub fn unpack<const N: Node>(value: Option<OptionalNodeImpl<N>>) -> Option<Node> {
    value.map(|x| x.get())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn optional_node_is_compact() {
        assert_eq!(
            std::mem::size_of::<Option<OptionalNode>>(),
            std::mem::size_of::<Node>()
        );
    }

    #[test]
    fn optional_node_round_trip() {
        assert_eq!(OptionalNode::new(0).map(|x| x.get()), Some(0));
        assert_eq!(OptionalNode::new(17).map(|x| x.get()), Some(17));
        assert!(OptionalNode::new(INVALID_NODE).is_none());
        assert_eq!(unpack(OptionalNode::new(5)), Some(5));
    }
}
