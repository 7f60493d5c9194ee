use std::ops::Range;

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::{error::*, repr::AdjArrayGraph, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    /// The range does not borrow self and hence may be used where additional
    /// mutable references of self are needed
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `Err(OutOfRange)` if `u` is not a node of the graph
    fn check_vertex(&self, u: Node) -> Result<()> {
        GraphError::check_vertex(u, self.number_of_nodes())
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (stored) edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns the endpoints of the edge with the given id in insertion orientation.
    /// ** Panics if `id >= m` **
    fn edge(&self, id: EdgeId) -> Edge;

    /// Returns the weight of the edge with the given id.
    /// ** Panics if `id >= m` **
    fn weight_of(&self, id: EdgeId) -> EdgeWeight;

    /// Returns an iterator over all edges in the order of their ids
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.number_of_edges()).map(|id| self.edge(id))
    }

    /// Returns empty bitset with one entry per edge
    fn edge_bitset_unset(&self) -> EdgeBitSet {
        EdgeBitSet::new(self.number_of_edges())
    }

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Directedness is a property of the graph value, fixed at construction
pub trait GraphOrientation {
    /// Returns *true* if edges are one-way
    fn is_directed(&self) -> bool;

    /// Returns *true* if every edge is stored at both endpoints
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }

    fn orientation(&self) -> Orientation {
        if self.is_directed() {
            Orientation::Directed
        } else {
            Orientation::Undirected
        }
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + GraphEdgeOrder + GraphOrientation + Sized {
    /// Iterator over the (outgoing) links of a node in adjacency order.
    /// It is `Clone` so that explicit-stack traversals can park it in a frame and resume it.
    type LinkIter<'a>: Iterator<Item = Link> + Clone + 'a
    where
        Self: 'a;

    /// Returns an iterator over the (outgoing) links of a given vertex.
    /// ** Panics if `u >= n` **
    fn links_of(&self, u: Node) -> Self::LinkIter<'_>;

    /// Returns the number of (outgoing) links of `u`.
    /// An undirected self-loop in an adjacency list counts twice.
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.links_of(u).map(|link| link.to)
    }

    /// Returns the ordered neighbors of `u` or `Err(OutOfRange)` if `u >= n`
    fn try_neighbors_of(&self, u: Node) -> Result<impl Iterator<Item = Node> + '_> {
        self.check_vertex(u)?;
        Ok(self.neighbors_of(u))
    }

    /// Returns the links of `u` or `Err(OutOfRange)` if `u >= n`
    fn try_links_of(&self, u: Node) -> Result<Self::LinkIter<'_>> {
        self.check_vertex(u)?;
        Ok(self.links_of(u))
    }

    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.links_of(u).any(|link| link.to == v)
    }

    /// Returns an iterator over the (out-)degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the in-degree of every node.
    /// For undirected graphs this coincides with [`AdjacencyList::degrees`].
    fn in_degrees(&self) -> Vec<NumNodes> {
        if self.is_undirected() {
            return self.degrees().collect_vec();
        }

        let mut in_degs = vec![0; self.len()];
        for Edge(_, v) in self.edges() {
            in_degs[v as usize] += 1;
        }
        in_degs
    }

    /// Returns a NodeBitSet of all nodes incident to at least one edge (in either direction)
    fn vertices_with_links(&self) -> NodeBitSet {
        let mut non_isolated = self.vertex_bitset_unset();
        for Edge(u, v) in self.edges() {
            non_isolated.set_bit(u);
            non_isolated.set_bit(v);
        }
        non_isolated
    }

    /// Counts how often each endpoint pair occurs.
    /// Pairs are normalized for undirected graphs.
    fn edge_multiplicities(&self) -> FxHashMap<Edge, NumEdges> {
        let directed = self.is_directed();
        let mut multiplicities = FxHashMap::default();
        for e in self.edges() {
            let key = if directed { e } else { e.normalized() };
            *multiplicities.entry(key).or_insert(0) += 1;
        }
        multiplicities
    }

    /// Returns the underlying undirected graph as adjacency lists.
    /// Edge ids and weights are kept, so results computed on the copy refer to the same edges.
    fn to_undirected(&self) -> AdjArrayGraph {
        let mut graph = AdjArrayGraph::new(self.number_of_nodes(), false);
        for id in 0..self.number_of_edges() {
            let Edge(u, v) = self.edge(id);
            let stored = graph.add_weighted_edge(u, v, self.weight_of(id));
            debug_assert_eq!(stored, Some(id));
        }
        graph
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes, directed: bool) -> Self;
}

/// Provides functions to insert edges.
/// There is no edge deletion: analyses work on a fixed snapshot.
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge *(u,v)* with the given weight.
    /// For undirected graphs, the edge is stored at both endpoints immediately.
    ///
    /// Returns the id of the stored edge or `None` if the representation discards it
    /// (e.g. self-loops and duplicates in an adjacency matrix).
    /// Returns `Err(OutOfRange)` if `u >= n || v >= n`.
    fn try_add_weighted_edge(
        &mut self,
        u: Node,
        v: Node,
        weight: EdgeWeight,
    ) -> Result<Option<EdgeId>>;

    /// Adds the edge *(u,v)* with unit weight (see [`GraphEdgeEditing::try_add_weighted_edge`])
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<Option<EdgeId>> {
        self.try_add_weighted_edge(u, v, EdgeWeight::One)
    }

    /// Adds the edge *(u,v)* with the given weight.
    /// ** Panics if `u >= n || v >= n` **
    fn add_weighted_edge(&mut self, u: Node, v: Node, weight: EdgeWeight) -> Option<EdgeId> {
        match self.try_add_weighted_edge(u, v, weight) {
            Ok(id) => id,
            Err(err) => panic!("{err}"),
        }
    }

    /// Adds the edge *(u,v)* with unit weight.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node) -> Option<EdgeId> {
        self.add_weighted_edge(u, v, EdgeWeight::One)
    }

    /// Adds all edges in the collection and stops at the first invalid one
    fn try_add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<()> {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.try_add_edge(u, v)?;
        }
        Ok(())
    }

    /// Adds all edges in the collection.
    /// ** Panics if any endpoint is `>= n` **
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and an iterator over Edges.
    /// ** Panics if any endpoint is `>= n` **
    fn from_edges(
        n: NumNodes,
        directed: bool,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Self;

    /// Create a graph from weighted edges.
    /// ** Panics if any endpoint is `>= n` **
    fn from_weighted_edges(
        n: NumNodes,
        directed: bool,
        edges: impl IntoIterator<Item = (Node, Node, EdgeWeight)>,
    ) -> Self;

    /// Like [`GraphFromScratch::from_edges`] but reports invalid endpoints
    fn try_from_edges(
        n: NumNodes,
        directed: bool,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(
        n: NumNodes,
        directed: bool,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Self {
        let mut graph = Self::new(n, directed);
        graph.add_edges(edges);
        graph
    }

    fn from_weighted_edges(
        n: NumNodes,
        directed: bool,
        edges: impl IntoIterator<Item = (Node, Node, EdgeWeight)>,
    ) -> Self {
        let mut graph = Self::new(n, directed);
        for (u, v, w) in edges {
            graph.add_weighted_edge(u, v, w);
        }
        graph
    }

    fn try_from_edges(
        n: NumNodes,
        directed: bool,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self> {
        let mut graph = Self::new(n, directed);
        graph.try_add_edges(edges)?;
        Ok(graph)
    }
}

/// Reversing all edges
pub trait GraphTranspose {
    /// Returns a new graph of the same representation and orientation with every edge
    /// reversed. Edge ids and weights are kept.
    fn transpose(&self) -> Self;
}
