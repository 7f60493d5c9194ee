use super::*;

/// Nodes whose removal disconnects their connected component
pub trait ArticulationPoints: AdjacencyList + Sized {
    /// Computes all articulation points.
    /// Directed graphs are handled as their underlying undirected graph.
    ///
    /// # Examples
    /// ```
    /// use walkgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 3)]);
    /// let cuts = g.compute_articulation_points();
    /// assert_eq!(cuts.iter_set_bits().collect::<Vec<_>>(), vec![1, 2]);
    /// ```
    fn compute_articulation_points(&self) -> NodeBitSet {
        let cuts = self.low_points().articulation_points();
        debug!(
            nodes = self.number_of_nodes(),
            edges = self.number_of_edges(),
            articulation_points = cuts.cardinality(),
            "articulation points computed"
        );
        cuts
    }

    /// Returns *true* if the graph has no articulation point
    fn is_biconnected_or_trivial(&self) -> bool {
        self.compute_articulation_points().cardinality() == 0
    }
}

impl<G> ArticulationPoints for G where G: AdjacencyList + Sized {}

impl LowPoints {
    /// A non-root `p` is an articulation point iff some child `v` has `low[v] >= disc[p]`;
    /// a root iff it has more than one child.
    pub fn articulation_points(&self) -> NodeBitSet {
        let n = self.number_of_nodes();
        let mut cuts = NodeBitSet::new(n);

        for (child, TreeLink { node: parent, .. }) in self.tree_links() {
            if self.is_root(parent) {
                if self.number_of_children(parent) > 1 {
                    cuts.set_bit(parent);
                }
            } else if self.low_of(child) >= self.discovery_of(parent) {
                trace!(parent, child, "articulation point");
                cuts.set_bit(parent);
            }
        }

        cuts
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::*};
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn five_cycle() {
        let graph = AdjArrayGraph::from_edges(5, false, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
        assert_eq!(graph.compute_articulation_points().cardinality(), 0);
        assert!(graph.is_biconnected_or_trivial());
    }

    #[test]
    fn path() {
        let mut graph = AdjMatrixGraph::new(4, false);
        graph.connect_path([0, 1, 2, 3]);
        assert_eq!(
            graph.compute_articulation_points().iter_set_bits().collect_vec(),
            vec![1, 2]
        );
    }

    #[test]
    fn root_with_two_children() {
        // two triangles sharing node 0
        let mut graph = AdjArrayGraph::new(5, false);
        graph.connect_cycle([0, 1, 2]);
        graph.connect_cycle([0, 3, 4]);

        assert_eq!(
            graph.compute_articulation_points().iter_set_bits().collect_vec(),
            vec![0]
        );
    }

    #[test]
    fn back_link_to_cut_vertex() {
        // triangle 1-2-3 hangs off 0 via 1; the back link 3 -> 1 ends exactly at the cut
        let graph = AdjArrayGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 3), (3, 1)]);
        assert_eq!(
            graph.compute_articulation_points().iter_set_bits().collect_vec(),
            vec![1]
        );
    }

    #[test]
    fn directed_graph_and_loops() {
        let graph = AdjArrayGraph::from_edges(3, true, [(0, 1), (2, 1), (1, 1)]);
        assert_eq!(
            graph.compute_articulation_points().iter_set_bits().collect_vec(),
            vec![1]
        );
    }

    #[test]
    fn random_graphs_against_node_removal() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0xa9);

        for _ in 0..300 {
            let n = rng.random_range(1..15);
            let m = rng.random_range(0..2 * n);
            let directed = rng.random_bool(0.2);

            let graph: AdjArrayGraph = random_graph(rng, n, m, directed);
            let cuts = graph.compute_articulation_points();
            let before = count_components(&graph, None, None);

            for u in graph.vertices() {
                // removing u also drops its own component if it was isolated
                let isolated = graph.to_undirected().neighbors_of(u).all(|v| v == u);
                let after = count_components(&graph, Some(u), None) + isolated as usize;
                assert_eq!(cuts.get_bit(u), after > before, "node {u}");
            }
        }
    }
}
