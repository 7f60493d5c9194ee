use tracing::trace;

use crate::{error::*, ops::*, testing::test_graph_ops};

use super::*;

/// A graph over the nodes `0..n` whose adjacency is stored in one `Nbs` per node.
///
/// - Directed graphs store a link only at the source.
/// - Undirected graphs store a link at both endpoints at insertion time.
///   Both links carry the same [`EdgeId`].
#[derive(Debug, Clone)]
pub struct Graph<Nbs: Neighborhood = ArrNeighborhood> {
    nbs: Vec<Nbs>,
    edges: Vec<(Edge, EdgeWeight)>,
    directed: bool,
}

/// Representation using adjacency lists (sparse graphs, multigraphs)
pub type AdjArrayGraph = Graph<ArrNeighborhood>;

/// Representation using an adjacency matrix (small or dense simple graphs)
pub type AdjMatrixGraph = Graph<MatrixNeighborhood>;

impl<Nbs: Neighborhood> GraphNodeOrder for Graph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for Graph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    fn edge(&self, id: EdgeId) -> Edge {
        self.edges[id as usize].0
    }

    fn weight_of(&self, id: EdgeId) -> EdgeWeight {
        self.edges[id as usize].1
    }
}

impl<Nbs: Neighborhood> GraphOrientation for Graph<Nbs> {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<Nbs: Neighborhood> AdjacencyList for Graph<Nbs> {
    type LinkIter<'a>
        = Nbs::LinkIter<'a>
    where
        Self: 'a;

    fn links_of(&self, u: Node) -> Self::LinkIter<'_> {
        self.nbs[u as usize].links()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_links()
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> GraphNew for Graph<Nbs> {
    fn new(n: NumNodes, directed: bool) -> Self {
        Self {
            nbs: vec![Nbs::new(n); n as usize],
            edges: Vec::new(),
            directed,
        }
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for Graph<Nbs> {
    fn try_add_weighted_edge(
        &mut self,
        u: Node,
        v: Node,
        weight: EdgeWeight,
    ) -> Result<Option<EdgeId>> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        if u == v && !Nbs::KEEPS_LOOPS {
            trace!(node = u, "representation ignores self-loop");
            return Ok(None);
        }

        let id = self.number_of_edges();
        if !self.nbs[u as usize].try_push_link(Link { to: v, id, weight }) {
            trace!(from = u, to = v, "representation collapses parallel edge");
            return Ok(None);
        }

        if !self.directed {
            let mirrored = self.nbs[v as usize].try_push_link(Link { to: u, id, weight });
            debug_assert!(mirrored, "undirected edge {u}-{v} stored only at one endpoint");
        }

        self.edges.push((Edge(u, v), weight));
        Ok(Some(id))
    }
}

impl<Nbs: Neighborhood> GraphTranspose for Graph<Nbs> {
    fn transpose(&self) -> Self {
        let mut transposed = Self::new(self.number_of_nodes(), self.directed);
        for &(Edge(u, v), weight) in &self.edges {
            let id = transposed.add_weighted_edge(v, u, weight);
            debug_assert!(id.is_some());
        }
        transposed
    }
}

test_graph_ops!(test_adj_array, AdjArrayGraph, true);
test_graph_ops!(test_adj_matrix, AdjMatrixGraph, false);
