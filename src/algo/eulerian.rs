/*!
# Eulerian Circuits

A closed walk that uses every edge exactly once exists iff
- every node has even degree (undirected) or equal in- and out-degree (directed), and
- all nodes with at least one incident edge lie in one component of the underlying
  undirected graph.

The circuit is built with Hierholzer's algorithm. Instead of deleting edges from the graph,
every node keeps a cursor into its links and a bitset marks consumed edge ids; both entries
of an undirected edge share an id, so consuming one also consumes its mirror.
*/

use itertools::Itertools;

use super::*;

pub trait EulerianCircuit: AdjacencyList + Sized {
    /// Returns *true* if the graph has an Eulerian circuit.
    /// A graph without edges has the empty circuit.
    fn is_eulerian(&self) -> bool {
        has_balanced_degrees(self) && links_are_connected(self)
    }

    /// Returns the nodes of an Eulerian circuit (the first node repeated at the end), or `None`
    /// if there is none. The circuit starts at the smallest node with an incident edge.
    ///
    /// # Examples
    /// ```
    /// use walkgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayGraph::from_edges(4, true, [(1, 2), (2, 3), (3, 1)]);
    /// assert_eq!(g.eulerian_circuit(), Some(vec![1, 2, 3, 1]));
    ///
    /// let g = AdjArrayGraph::from_edges(3, false, [(0, 1), (1, 2)]);
    /// assert_eq!(g.eulerian_circuit(), None);
    /// ```
    fn eulerian_circuit(&self) -> Option<Vec<Node>> {
        if !self.is_eulerian() {
            debug!(
                nodes = self.number_of_nodes(),
                edges = self.number_of_edges(),
                "graph is not eulerian"
            );
            return None;
        }

        let Some(start) = self.vertices_with_links().iter_set_bits().next() else {
            return Some(Vec::new());
        };

        let circuit = walk_circuit(self, start);
        debug!(
            nodes = self.number_of_nodes(),
            edges = self.number_of_edges(),
            start,
            "eulerian circuit built"
        );
        Some(circuit)
    }
}

impl<G> EulerianCircuit for G where G: AdjacencyList + Sized {}

fn has_balanced_degrees<G: AdjacencyList>(graph: &G) -> bool {
    if graph.is_undirected() {
        if let Some(u) = graph.vertices().find(|&u| graph.degree_of(u) % 2 == 1) {
            trace!(node = u, degree = graph.degree_of(u), "odd degree");
            return false;
        }
        return true;
    }

    let in_degrees = graph.in_degrees();
    match graph
        .vertices()
        .find(|&u| graph.degree_of(u) != in_degrees[u as usize])
    {
        Some(u) => {
            trace!(
                node = u,
                out_degree = graph.degree_of(u),
                in_degree = in_degrees[u as usize],
                "unbalanced degrees"
            );
            false
        }
        None => true,
    }
}

/// One search from the first node with links must reach every node with links
fn links_are_connected<G: AdjacencyList>(graph: &G) -> bool {
    let with_links = graph.vertices_with_links();
    let Some(start) = with_links.iter_set_bits().next() else {
        return true;
    };

    let reached = if graph.is_directed() {
        graph.to_undirected().bfs(start).count()
    } else {
        graph.bfs(start).count()
    };

    if reached != with_links.cardinality() as usize {
        trace!(
            reached,
            with_links = with_links.cardinality(),
            "edges are spread over several components"
        );
        return false;
    }
    true
}

/// Iterative Hierholzer: follow unused links until stuck, then emit the stuck node and
/// backtrack. Emission order is the reversed circuit.
fn walk_circuit<G: AdjacencyList>(graph: &G, start: Node) -> Vec<Node> {
    let mut cursors = graph.vertices().map(|u| graph.links_of(u)).collect_vec();
    let mut used = graph.edge_bitset_unset();

    let mut circuit = Vec::with_capacity(graph.number_of_edges() as usize + 1);
    let mut stack = vec![start];

    while let Some(&u) = stack.last() {
        match cursors[u as usize].find(|link| !used.get_bit(link.id)) {
            Some(link) => {
                used.set_bit(link.id);
                stack.push(link.to);
            }
            None => {
                circuit.push(u);
                stack.pop();
            }
        }
    }

    assert_eq!(
        used.cardinality(),
        graph.number_of_edges(),
        "edges left unconsumed by the circuit"
    );
    assert_eq!(circuit.len(), graph.number_of_edges() as usize + 1);

    circuit.reverse();
    circuit
}
