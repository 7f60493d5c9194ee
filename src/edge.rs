use std::fmt::{Debug, Display};

use stream_bitset::bitset::BitSetImpl;

use crate::node::{Distance, Node};

/// An edge is defined by two nodes/endpoints.
/// Is is up to the graph whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Every stored edge is identified by its insertion index `0..m`.
/// Both adjacency entries of an undirected edge share the same id.
pub type EdgeId = NumEdges;

/// A BitSet over EdgeIds
pub type EdgeBitSet = BitSetImpl<NumEdges>;

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

/// Edge weights are restricted to `{0, 1}`; plain BFS ignores them, 0/1-BFS sums them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EdgeWeight {
    Zero,
    #[default]
    One,
}

impl EdgeWeight {
    /// Returns the weight as a distance summand
    #[inline]
    pub const fn cost(self) -> Distance {
        match self {
            EdgeWeight::Zero => 0,
            EdgeWeight::One => 1,
        }
    }
}

impl TryFrom<u8> for EdgeWeight {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EdgeWeight::Zero),
            1 => Ok(EdgeWeight::One),
            x => Err(x),
        }
    }
}

/// One entry of an adjacency list: the edge `id` leads to `to` with `weight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link {
    pub to: Node,
    pub id: EdgeId,
    pub weight: EdgeWeight,
}
