/*!
# Strongly Connected Components

Kosaraju's two-pass algorithm:
1. a depth-first search over the graph records the finishing order of all nodes;
2. a depth-first search over the transposed graph starts new trees in *reverse*
   finishing order. Each tree of the second pass is exactly one strongly connected component.

Components are labelled `1..=k` in the order in which the second pass discovers them.
This order is a topological order of the condensation: every edge between two different
components leads from a smaller to a larger label.
*/

use itertools::Itertools;

use super::*;

pub trait StronglyConnected: AdjacencyList + GraphTranspose + Sized {
    /// Computes the strongly connected components.
    /// For undirected graphs these coincide with the connected components.
    ///
    /// # Examples
    /// ```
    /// use walkgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayGraph::from_edges(4, true, [(0, 1), (1, 0), (1, 2), (3, 3)]);
    /// let sccs = g.strongly_connected_components();
    ///
    /// assert_eq!(sccs.number_of_components(), 3);
    /// assert_eq!(sccs.label_of(0), sccs.label_of(1));
    /// assert_ne!(sccs.label_of(1), sccs.label_of(2));
    /// ```
    fn strongly_connected_components(&self) -> StrongComponents {
        let mut finished = Vec::with_capacity(self.len());
        for event in self.depth_first_events() {
            if let DfsEvent::Finish { node, .. } = event {
                finished.push(node);
            }
        }
        debug_assert_eq!(finished.len(), self.len());

        let transposed = self.transpose();
        let mut labels = vec![0; self.len()];
        let mut count = 0;

        for event in transposed
            .depth_first_events()
            .with_roots(finished.iter().rev().copied())
        {
            if let DfsEvent::Discover { node, parent } = event {
                if parent.is_none() {
                    count += 1;
                }
                labels[node as usize] = count;
            }
        }

        debug!(
            nodes = self.number_of_nodes(),
            edges = self.number_of_edges(),
            components = count,
            "strongly connected components computed"
        );

        StrongComponents { labels, count }
    }

    /// Returns *true* if every node reaches every other node
    fn is_strongly_connected(&self) -> bool {
        self.strongly_connected_components().number_of_components() <= 1
    }
}

impl<G> StronglyConnected for G where G: AdjacencyList + GraphTranspose + Sized {}

/// Labelling of nodes with their strongly connected component (labels start at 1)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrongComponents {
    labels: Vec<NumNodes>,
    count: NumNodes,
}

impl StrongComponents {
    /// Label of the component containing `u`, in `1..=k`.
    /// ** Panics if `u >= n` **
    pub fn label_of(&self, u: Node) -> NumNodes {
        self.labels[u as usize]
    }

    /// Labels of all nodes
    pub fn as_slice(&self) -> &[NumNodes] {
        &self.labels
    }

    /// Returns the number of components `k`
    pub fn number_of_components(&self) -> NumNodes {
        self.count
    }

    /// Returns *true* if `u` and `v` reach each other
    pub fn are_strongly_connected(&self, u: Node, v: Node) -> bool {
        self.label_of(u) == self.label_of(v)
    }

    /// Nodes of each component in ascending order; entry `i` holds label `i + 1`
    pub fn components(&self) -> Vec<Vec<Node>> {
        let mut components = vec![Vec::new(); self.count as usize];
        for (u, &l) in self.labels.iter().enumerate() {
            components[l as usize - 1].push(u as Node);
        }
        components
    }

    /// Contracts every component into a single node. Node `i` of the result is the
    /// component with label `i + 1`; parallel edges and loops are dropped.
    /// `graph` must be the graph these components were computed on.
    pub fn condensation<G: AdjacencyList>(&self, graph: &G) -> AdjArrayGraph {
        let edges = graph
            .edges()
            .map(|Edge(u, v)| Edge(self.label_of(u) - 1, self.label_of(v) - 1))
            .filter(|e| !e.is_loop())
            .sorted_unstable()
            .dedup()
            .collect_vec();

        AdjArrayGraph::from_edges(self.count, true, edges)
    }

    /// Labels of all components without links to other components, in ascending order.
    /// `graph` must be the graph these components were computed on.
    pub fn sink_components<G: AdjacencyList>(&self, graph: &G) -> Vec<NumNodes> {
        let mut has_exit = vec![false; self.count as usize];
        for Edge(u, v) in graph.edges() {
            let (lu, lv) = (self.label_of(u), self.label_of(v));
            if lu != lv {
                has_exit[lu as usize - 1] = true;
            }
        }

        (1..=self.count)
            .filter(|&l| !has_exit[l as usize - 1])
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::*};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn scc() {
        let graph = AdjArrayGraph::from_edges(
            8,
            true,
            [
                (0, 1),
                (1, 2),
                (1, 4),
                (1, 5),
                (2, 6),
                (2, 3),
                (3, 2),
                (3, 7),
                (4, 0),
                (4, 5),
                (5, 6),
                (6, 5),
                (7, 3),
                (7, 6),
            ],
        );

        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.number_of_components(), 3);
        assert_eq!(sccs.as_slice(), &[1, 1, 2, 2, 1, 3, 3, 2]);
        assert_eq!(
            sccs.components(),
            vec![vec![0, 1, 4], vec![2, 3, 7], vec![5, 6]]
        );
        assert_eq!(sccs.sink_components(&graph), vec![3]);

        let dag = sccs.condensation(&graph);
        assert_eq!(dag.edges().collect_vec(), vec![Edge(0, 1), Edge(0, 2), Edge(1, 2)]);
    }

    #[test]
    fn directed_five_cycle() {
        let graph = AdjMatrixGraph::from_edges(5, true, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.number_of_components(), 1);
        assert!(graph.vertices().all(|u| sccs.label_of(u) == 1));
        assert!(graph.is_strongly_connected());
    }

    #[test]
    fn singletons() {
        // {0,1} and {4,5} are scc pairs, 2 is a loop, 3 is isolated
        let graph = AdjArrayGraph::from_edges(6, true, [(0, 1), (1, 0), (2, 2), (4, 5), (5, 4)]);

        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.number_of_components(), 4);
        assert_eq!(
            sccs.components(),
            vec![vec![4, 5], vec![3], vec![2], vec![0, 1]]
        );
        assert_eq!(sccs.sink_components(&graph), vec![1, 2, 3, 4]);
    }

    #[test]
    fn tree() {
        let graph = AdjArrayGraph::from_edges(7, true, [(0, 1), (1, 2), (1, 3), (1, 4), (3, 5), (3, 6)]);

        let sccs = graph.strongly_connected_components();
        // in a directed tree each vertex is a strongly connected component
        assert_eq!(sccs.number_of_components(), 7);
        assert_eq!(sccs.label_of(0), 1);
        assert_eq!(sccs.sink_components(&graph).len(), 4);
    }

    #[test]
    fn undirected_graph() {
        let graph = AdjArrayGraph::from_edges(5, false, [(0, 1), (3, 4), (4, 3)]);
        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.number_of_components(), 3);
        assert!(sccs.are_strongly_connected(3, 4));
        assert!(!sccs.are_strongly_connected(1, 2));
    }

    #[test]
    fn long_cycle() {
        let n: Node = 100_000;
        let mut graph = AdjArrayGraph::new(n, true);
        graph.connect_cycle(0..n);
        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.number_of_components(), 1);
        assert_eq!(sccs.components()[0].len(), n as usize);
    }

    #[test]
    fn gnp_covers_all_nodes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);

        for i in 0..10 {
            let n = 5000;
            let graph = AdjArrayGraph::gnp(rng, n, 0.5 / (n as f64) * (i as f64), true);

            let sccs = graph.strongly_connected_components();
            assert_eq!(
                sccs.components().iter().map(|c| c.len()).sum::<usize>(),
                n as usize
            );
        }
    }

    #[test]
    fn random_graphs_against_transitive_closure() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x5cc);

        for _ in 0..300 {
            let n = rng.random_range(1..12);
            let m = rng.random_range(0..3 * n);

            let graph: AdjArrayGraph = random_graph(rng, n, m, true);
            let closure = transitive_closure(&graph);
            let sccs = graph.strongly_connected_components();

            for u in graph.vertices() {
                for v in graph.vertices() {
                    let mutual = closure[u as usize].get_bit(v) && closure[v as usize].get_bit(u);
                    assert_eq!(sccs.are_strongly_connected(u, v), mutual);
                }
            }

            for Edge(u, v) in graph.edges() {
                assert!(sccs.label_of(u) <= sccs.label_of(v));
            }

            let dag = sccs.condensation(&graph);
            assert!(dag.topological_order().unwrap().is_some());
            assert!(!sccs.sink_components(&graph).is_empty());
        }
    }
}
