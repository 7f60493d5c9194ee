/// Every representation should behave like the reference model below:
/// - adjacency lists (`$keeps_multi = true`) store every edge in insertion order,
///   an undirected self-loop appears twice in its node's list
/// - adjacency matrices (`$keeps_multi = false`) drop loops and repeated edges and
///   enumerate neighbors in ascending order
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $keeps_multi:literal) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::random_edges, *};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Returns the expected neighbor lists and the stored edges
            fn reference_model(
                n: NumNodes,
                directed: bool,
                edges: &[Edge],
            ) -> (Vec<Vec<Node>>, Vec<Edge>) {
                let mut adj: Vec<Vec<Node>> = vec![Vec::new(); n as usize];
                let mut stored = Vec::new();

                for &Edge(u, v) in edges {
                    if !$keeps_multi && (u == v || adj[u as usize].contains(&v)) {
                        continue;
                    }

                    adj[u as usize].push(v);
                    if !directed {
                        adj[v as usize].push(u);
                    }
                    stored.push(Edge(u, v));
                }

                if !$keeps_multi {
                    adj.iter_mut().for_each(|nbs| nbs.sort_unstable());
                }

                (adj, stored)
            }

            #[test]
            fn graph_new() {
                for n in 0..50 {
                    for directed in [false, true] {
                        let graph = <$graph>::new(n, directed);

                        assert_eq!(graph.number_of_edges(), 0);
                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.is_directed(), directed);
                        assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                        assert!(graph.is_singleton_graph());
                    }
                }
            }

            #[test]
            fn adjacency_list() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [1 as NumNodes, 10, 20, 50] {
                    for m in [n, n * 2, n * 5] {
                        for directed in [false, true] {
                            let edges = random_edges(rng, n, m);
                            let (adj, stored) = reference_model(n, directed, &edges);

                            let mut graph = <$graph>::new(n, directed);
                            for &Edge(u, v) in &edges {
                                let id = graph.add_edge(u, v);
                                if let Some(id) = id {
                                    assert_eq!(graph.edge(id), Edge(u, v));
                                }
                            }

                            assert_eq!(graph.number_of_nodes(), n);
                            assert_eq!(graph.number_of_edges() as usize, stored.len());
                            assert_eq!(graph.edges().collect_vec(), stored);

                            for u in graph.vertices() {
                                assert_eq!(graph.neighbors_of(u).collect_vec(), adj[u as usize]);
                                assert_eq!(graph.degree_of(u) as usize, adj[u as usize].len());

                                for link in graph.links_of(u) {
                                    let e = graph.edge(link.id);
                                    assert!(
                                        e == Edge(u, link.to)
                                            || (!directed && e == Edge(link.to, u))
                                    );
                                    assert!(graph.has_edge(u, link.to));
                                }
                            }

                            for _ in 0..n {
                                let u = rng.random_range(0..n);
                                let v = rng.random_range(0..n);
                                assert_eq!(graph.has_edge(u, v), adj[u as usize].contains(&v));
                            }
                        }
                    }
                }
            }

            #[test]
            fn transpose() {
                let rng = &mut Pcg64Mcg::seed_from_u64(4);

                for n in [1 as NumNodes, 10, 30] {
                    for directed in [false, true] {
                        let graph = <$graph>::from_edges(n, directed, random_edges(rng, n, 3 * n));
                        let transposed = graph.transpose();

                        assert_eq!(transposed.is_directed(), directed);
                        assert_eq!(transposed.number_of_edges(), graph.number_of_edges());
                        for (e, t) in graph.edges().zip(transposed.edges()) {
                            assert_eq!(e.reverse(), t);
                        }

                        assert_eq!(
                            transposed.degrees().collect_vec(),
                            graph.in_degrees()
                        );
                    }
                }
            }

            #[test]
            fn weights_are_kept() {
                let mut graph = <$graph>::new(3, false);
                let id = graph.add_weighted_edge(0, 1, EdgeWeight::Zero).unwrap();
                assert_eq!(graph.weight_of(id), EdgeWeight::Zero);
                assert_eq!(graph.links_of(1).next().map(|l| l.weight), Some(EdgeWeight::Zero));
                assert_eq!(graph.transpose().weight_of(id), EdgeWeight::Zero);
            }
        }
    };
}

pub(crate) use test_graph_ops;

#[cfg(test)]
pub(crate) use oracles::*;
