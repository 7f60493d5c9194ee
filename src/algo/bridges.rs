/*!
# Bridges

A bridge is an edge whose removal disconnects its connected component. The tree edge
above `v` is a bridge iff `low[v] > disc[parent(v)]`, i.e. no link out of the subtree of `v`
reaches its parent or anything above it.

Parallel edges are never bridges: the second copy is a non-tree link from the child to its
parent and pulls the low point of the child down to the parent's discovery time. Self-loops
are never tree edges and hence never bridges.
*/

use itertools::Itertools;

use super::*;

pub trait Bridges: AdjacencyList + Sized {
    /// Computes the ids of all bridges in ascending order.
    /// Directed graphs are handled as their underlying undirected graph.
    ///
    /// # Examples
    /// ```
    /// use walkgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 0), (2, 3)]);
    /// assert_eq!(g.compute_bridges(), vec![3]);
    /// ```
    fn compute_bridges(&self) -> Vec<EdgeId> {
        let bridges = if self.is_directed() {
            bridges_of(&self.to_undirected())
        } else {
            bridges_of(self)
        };

        debug!(
            nodes = self.number_of_nodes(),
            edges = self.number_of_edges(),
            bridges = bridges.len(),
            "bridges computed"
        );

        bridges
    }

    /// Labels the nodes with their two-edge-connected component, i.e. the nodes that remain
    /// connected after removing all bridges. Labels follow the smallest node of each component.
    fn two_edge_connected_components(&self) -> ComponentLabels {
        if self.is_directed() {
            let graph = self.to_undirected();
            label_bridge_free_components(&graph, &bridges_of(&graph))
        } else {
            label_bridge_free_components(self, &bridges_of(self))
        }
    }

    /// Minimum number of edges to add so that the (connected) graph has no bridge.
    ///
    /// Contracting each two-edge-connected component yields the bridge tree; pairing up
    /// its leaves takes `ceil(leaves / 2)` new edges. Components without any bridge are no
    /// leaves, so isolated parts of a disconnected graph are ignored.
    fn edges_to_bridge_connect(&self) -> NumEdges {
        let (labels, bridges) = if self.is_directed() {
            let graph = self.to_undirected();
            let bridges = bridges_of(&graph);
            (label_bridge_free_components(&graph, &bridges), bridges)
        } else {
            let bridges = bridges_of(self);
            (label_bridge_free_components(self, &bridges), bridges)
        };

        let mut degrees = vec![0 as NumEdges; labels.number_of_components() as usize];
        for &id in &bridges {
            let Edge(u, v) = self.edge(id);
            degrees[labels.label_of(u) as usize] += 1;
            degrees[labels.label_of(v) as usize] += 1;
        }

        let leaves = degrees.iter().filter(|&&d| d == 1).count() as NumEdges;
        trace!(bridges = bridges.len(), leaves, "bridge tree");
        leaves.div_ceil(2)
    }
}

impl<G> Bridges for G where G: AdjacencyList + Sized {}

fn bridges_of<G: AdjacencyList>(graph: &G) -> Vec<EdgeId> {
    let low_points = LowPoints::new(graph);
    let bridges = low_points
        .tree_links()
        .filter(|&(child, _)| low_points.is_bridge_above(child))
        .map(|(_, parent)| parent.id)
        .sorted_unstable()
        .collect_vec();

    debug_assert!({
        let multiplicities = graph.edge_multiplicities();
        bridges
            .iter()
            .all(|&id| multiplicities[&graph.edge(id).normalized()] == 1)
    });

    bridges
}

fn label_bridge_free_components<G: AdjacencyList>(graph: &G, bridges: &[EdgeId]) -> ComponentLabels {
    let mut is_bridge = graph.edge_bitset_unset();
    for &id in bridges {
        is_bridge.set_bit(id);
    }

    let mut visited = graph.vertex_bitset_unset();
    let mut stack = Vec::new();
    let mut components = Vec::new();

    for root in graph.vertices() {
        if visited.set_bit(root) {
            continue;
        }

        let mut component = vec![root];
        stack.push(root);
        while let Some(u) = stack.pop() {
            for link in graph.links_of(u) {
                if !is_bridge.get_bit(link.id) && !visited.set_bit(link.to) {
                    component.push(link.to);
                    stack.push(link.to);
                }
            }
        }
        components.push(component);
    }

    ComponentLabels::from_components(graph.number_of_nodes(), components)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::*};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn five_cycle() {
        let mut graph = AdjArrayGraph::new(5, false);
        graph.connect_cycle(0..5);
        assert!(graph.compute_bridges().is_empty());
        assert_eq!(graph.two_edge_connected_components().number_of_components(), 1);
        assert_eq!(graph.edges_to_bridge_connect(), 0);
    }

    #[test]
    fn path() {
        let mut graph = AdjArrayGraph::new(4, false);
        graph.connect_path([0, 1, 2, 3]);
        assert_eq!(graph.compute_bridges(), vec![0, 1, 2]);
        assert_eq!(graph.two_edge_connected_components().number_of_components(), 4);
        assert_eq!(graph.edges_to_bridge_connect(), 1);
    }

    #[test]
    fn parallel_edges_and_loops_are_no_bridges() {
        let graph = AdjArrayGraph::from_edges(3, false, [(0, 1), (1, 0), (1, 2), (2, 2)]);
        assert_eq!(graph.compute_bridges(), vec![2]);

        // the matrix collapses the parallel edge, so both remaining edges are bridges
        let matrix = AdjMatrixGraph::from_edges(3, false, [(0, 1), (1, 0), (1, 2), (2, 2)]);
        assert_eq!(matrix.compute_bridges(), vec![0, 1]);

        // antiparallel directed edges are parallel in the underlying graph
        let directed = AdjArrayGraph::from_edges(3, true, [(0, 1), (1, 0), (1, 2)]);
        assert_eq!(directed.compute_bridges(), vec![2]);
    }

    #[test]
    fn bridge_tree() {
        // two triangles joined by the bridge 2-3, plus a pendant node 6 at 5
        let mut graph = AdjArrayGraph::new(7, false);
        graph.connect_cycle([0, 1, 2]);
        graph.connect_cycle([3, 4, 5]);
        graph.add_edges([(2, 3), (5, 6)]);

        assert_eq!(graph.compute_bridges(), vec![6, 7]);

        let labels = graph.two_edge_connected_components();
        assert_eq!(labels.as_slice(), &[0, 0, 0, 1, 1, 1, 2]);
        assert_eq!(graph.edges_to_bridge_connect(), 1);

        // a star with three leaves needs two more edges
        let star = AdjArrayGraph::from_edges(4, false, [(0, 1), (0, 2), (0, 3)]);
        assert_eq!(star.edges_to_bridge_connect(), 2);
    }

    #[test]
    fn random_graphs_against_edge_removal() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0xb7);

        for _ in 0..300 {
            let n = rng.random_range(1..15);
            let m = rng.random_range(0..2 * n);
            let directed = rng.random_bool(0.2);

            let graph: AdjArrayGraph = random_graph(rng, n, m, directed);
            let bridges = graph.compute_bridges();
            let before = count_components(&graph, None, None);

            for id in 0..graph.number_of_edges() {
                let after = count_components(&graph, None, Some(id));
                assert_eq!(bridges.contains(&id), after > before, "edge {id}");
            }

            let labels = graph.two_edge_connected_components();
            for (id, Edge(u, v)) in graph.edges().enumerate() {
                let is_bridge = bridges.contains(&(id as EdgeId));
                assert_eq!(labels.are_connected(u, v), !is_bridge);
            }
        }
    }
}
