/*!
# Bipartite Graphs

Testing whether a graph admits a proper 2-coloring, computing such a coloring and
producing an odd cycle as a certificate if it does not.

Bipartiteness is a property of the underlying undirected graph: directed graphs are
checked as if every edge was undirected. Every connected component is colored
independently; a self-loop makes any graph non-bipartite.
*/

use super::*;

/// A bipartition is stored as a [`NodeBitSet`]:
/// - nodes in the set are on the **right** (1) side
/// - nodes not in the set are on the **left** (0) side
pub type Bipartition = NodeBitSet;

/// Outcome of a 2-coloring attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TwoColoring {
    /// A proper 2-coloring
    Bipartite(Bipartition),
    /// The nodes of an odd cycle in traversal order; consecutive nodes (and the last and
    /// the first node) are adjacent. A self-loop is reported as a cycle of one node.
    OddCycle(Vec<Node>),
}

/// A trait for testing and computing bipartitions in graphs.
pub trait BipartiteTest: AdjacencyList + Sized {
    /// Tests whether the given candidate partition is a valid bipartition, i.e. no edge
    /// has both endpoints on the same side.
    /// ** Panics if the bitset holds less than `n` entries **
    ///
    /// # Examples
    /// ```
    /// use walkgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = AdjArrayGraph::new(10, false);
    /// g.connect_path(0..10 as Node);
    ///
    /// assert!(g.is_bipartition(&NodeBitSet::new_with_bits_set(10, vec![0 as Node, 2, 4, 6, 8])));
    /// ```
    fn is_bipartition(&self, bipartition: &Bipartition) -> bool {
        self.edges()
            .all(|Edge(u, v)| bipartition.get_bit(u) != bipartition.get_bit(v))
    }

    /// Colors the graph or finds an odd cycle.
    /// Each component is rooted at its smallest node, which is put on the left side.
    fn two_coloring(&self) -> TwoColoring {
        let coloring = if self.is_directed() {
            color_by_dfs(&self.to_undirected())
        } else {
            color_by_dfs(self)
        };

        debug!(
            nodes = self.number_of_nodes(),
            edges = self.number_of_edges(),
            bipartite = matches!(coloring, TwoColoring::Bipartite(_)),
            "two-coloring finished"
        );

        coloring
    }

    /// Computes a valid bipartition of the graph, if one exists.
    ///
    /// # Examples
    /// ```
    /// use walkgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = AdjArrayGraph::new(10, false);
    /// g.connect_path(0..10 as Node);
    ///
    /// let bip = g.compute_bipartition().unwrap();
    /// assert_eq!(bip.cardinality(), 5);
    /// ```
    fn compute_bipartition(&self) -> Option<Bipartition> {
        match self.two_coloring() {
            TwoColoring::Bipartite(bipartition) => Some(bipartition),
            TwoColoring::OddCycle(_) => None,
        }
    }

    /// Returns an odd cycle if the graph is not bipartite
    fn find_odd_cycle(&self) -> Option<Vec<Node>> {
        match self.two_coloring() {
            TwoColoring::Bipartite(_) => None,
            TwoColoring::OddCycle(cycle) => Some(cycle),
        }
    }

    /// Tests whether the graph is bipartite.
    ///
    /// # Examples
    /// ```
    /// use walkgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = AdjArrayGraph::new(5, false);
    /// g.connect_cycle(0..5 as Node);
    ///
    /// assert!(!g.is_bipartite());
    /// ```
    fn is_bipartite(&self) -> bool {
        matches!(self.two_coloring(), TwoColoring::Bipartite(_))
    }
}

impl<G> BipartiteTest for G where G: AdjacencyList + Sized {}

/// A child gets the opposite color of its DFS parent. A link between two equally colored
/// nodes closes an odd cycle with the tree path between them, which is still on the stack
/// when the conflict is seen first.
fn color_by_dfs<G: AdjacencyList>(graph: &G) -> TwoColoring {
    debug_assert!(graph.is_undirected());

    let mut right_side = graph.vertex_bitset_unset();
    let mut search = graph.depth_first_events();

    while let Some(event) = search.next() {
        match event {
            DfsEvent::Discover {
                node,
                parent: Some(parent),
            } => {
                if !right_side.get_bit(parent.node) {
                    right_side.set_bit(node);
                }
            }
            DfsEvent::NonTreeLink {
                node, link, state, ..
            } if right_side.get_bit(node) == right_side.get_bit(link.to) => {
                debug_assert_eq!(state, VisitState::InProgress);
                trace!(node, to = link.to, "color conflict");

                if let Some(cycle) = search.active_path_from(link.to) {
                    return TwoColoring::OddCycle(cycle);
                }
            }
            _ => {}
        }
    }

    TwoColoring::Bipartite(right_side)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::*};
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn assert_odd_cycle<G: AdjacencyList>(graph: &G, cycle: &[Node]) {
        assert!(cycle.len() % 2 == 1, "{cycle:?} is not odd");
        assert!(cycle.iter().all_unique());

        for (&u, &v) in cycle.iter().circular_tuple_windows() {
            assert!(
                graph.has_edge(u, v) || graph.has_edge(v, u),
                "{u}-{v} of {cycle:?} is not an edge"
            );
        }
    }

    #[test]
    fn five_cycle() {
        let graph = AdjArrayGraph::from_edges(5, false, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
        assert!(!graph.is_bipartite());
        assert!(graph.compute_bipartition().is_none());

        let cycle = graph.find_odd_cycle().unwrap();
        assert_eq!(cycle.len(), 5);
        assert_odd_cycle(&graph, &cycle);
    }

    #[test]
    fn path() {
        let mut graph = AdjArrayGraph::new(10, false);
        graph.connect_path(0..10 as Node);

        let bip = graph.compute_bipartition().unwrap();
        assert_eq!(bip.iter_set_bits().collect_vec(), vec![1, 3, 5, 7, 9]);
        assert!(graph.is_bipartition(&bip));
        assert!(graph.find_odd_cycle().is_none());
    }

    #[test]
    fn components_are_colored_independently() {
        let mut graph = AdjArrayGraph::new(8, false);
        graph.connect_cycle([0, 1, 2, 3]);
        graph.connect_path([5, 6, 7]);

        let bip = graph.compute_bipartition().unwrap();
        assert!(graph.is_bipartition(&bip));
        assert!(!bip.get_bit(4));
        assert!(!bip.get_bit(5));

        graph.connect_cycle([5, 6, 7]);
        assert_eq!(graph.find_odd_cycle().map(|c| c.len()), Some(3));
    }

    #[test]
    fn self_loop() {
        let graph = AdjArrayGraph::from_edges(3, false, [(0, 1), (2, 2)]);
        assert_eq!(graph.find_odd_cycle(), Some(vec![2]));

        let directed = AdjArrayGraph::from_edges(3, true, [(0, 1), (1, 1)]);
        assert!(!directed.is_bipartite());

        // matrices ignore loops
        let matrix = AdjMatrixGraph::from_edges(3, false, [(0, 1), (2, 2)]);
        assert!(matrix.is_bipartite());
    }

    #[test]
    fn parallel_edges_form_even_cycles() {
        let graph = AdjArrayGraph::from_edges(2, false, [(0, 1), (1, 0)]);
        assert!(graph.is_bipartite());
    }

    #[test]
    fn directed_graphs_use_underlying_graph() {
        // 0 -> 1 -> 2 and 0 -> 2 is acyclic but its underlying graph is a triangle
        let graph = AdjArrayGraph::from_edges(3, true, [(0, 1), (1, 2), (0, 2)]);
        let cycle = graph.find_odd_cycle().unwrap();
        assert_odd_cycle(&graph, &cycle);

        let graph = AdjMatrixGraph::from_edges(4, true, [(0, 1), (2, 1), (2, 3), (0, 3)]);
        let bip = graph.compute_bipartition().unwrap();
        assert!(graph.is_bipartition(&bip));
    }

    #[test]
    fn random_graphs_against_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0xb1b);

        for _ in 0..300 {
            let n = rng.random_range(1..10);
            let m = rng.random_range(0..2 * n);
            let directed = rng.random_bool(0.3);

            let graph: AdjArrayGraph = random_graph(rng, n, m, directed);
            let expected = is_two_colorable(&graph);

            match graph.two_coloring() {
                TwoColoring::Bipartite(bip) => {
                    assert!(expected);
                    assert!(graph.is_bipartition(&bip));
                }
                TwoColoring::OddCycle(cycle) => {
                    assert!(!expected);
                    assert_odd_cycle(&graph, &cycle);
                }
            }
        }
    }
}
