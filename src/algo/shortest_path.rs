/*!
# Shortest Paths

Single- and multi-source shortest paths on unweighted graphs (BFS, distance = number of
edges) and on graphs with edge weights in `{0, 1}` (0/1-BFS, distance = sum of weights).

The search is configured with [`ShortestPathSearch`] and produces a [`DistanceTree`]
which stores, for every node, its distance to the nearest source and its predecessor on
one shortest path. Unreached nodes carry no distance and no predecessor; there are no
sentinel values.
*/

use std::collections::VecDeque;

use super::*;

/// How the length of a path is measured
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DistanceMetric {
    /// Number of edges; weights are ignored
    #[default]
    Hops,
    /// Sum of the [`EdgeWeight`]s along the path
    ZeroOne,
}

/// A shortest path from a source to a destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Length of the path according to the metric of the search
    pub distance: Distance,
    /// All nodes of the path, starting at the source and ending at the destination
    pub path: Vec<Node>,
}

/// Builder for a shortest path search
///
/// # Examples
/// ```
/// use walkgraphs::{prelude::*, algo::*};
///
/// let g = AdjArrayGraph::from_weighted_edges(
///     3,
///     true,
///     [(0, 1, EdgeWeight::One), (1, 2, EdgeWeight::Zero), (0, 2, EdgeWeight::One)],
/// );
///
/// let tree = ShortestPathSearch::new(&g)
///     .metric(DistanceMetric::ZeroOne)
///     .source(0)
///     .compute()
///     .unwrap();
/// assert_eq!(tree.distance_to(2), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct ShortestPathSearch<'a, G> {
    graph: &'a G,
    metric: DistanceMetric,
    sources: Vec<Node>,
}

impl<'a, G> ShortestPathSearch<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            metric: DistanceMetric::default(),
            sources: Vec::new(),
        }
    }

    /// Sets the metric (default: [`DistanceMetric::Hops`])
    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Adds a source node
    pub fn source(mut self, u: Node) -> Self {
        self.sources.push(u);
        self
    }

    /// Adds multiple source nodes; every node's distance is measured to its nearest source
    pub fn sources<I>(mut self, us: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.sources.extend(us);
        self
    }

    /// Runs the search.
    /// Returns `Err(OutOfRange)` if any source is not a node of the graph.
    pub fn compute(self) -> Result<DistanceTree> {
        for &s in &self.sources {
            self.graph.check_vertex(s)?;
        }

        let mut tree = DistanceTree::new(self.graph.number_of_nodes(), self.metric);
        match self.metric {
            DistanceMetric::Hops => self.breadth_first(&mut tree),
            DistanceMetric::ZeroOne => self.zero_one(&mut tree),
        }

        debug!(
            nodes = self.graph.number_of_nodes(),
            sources = self.sources.len(),
            metric = ?self.metric,
            reached = tree.reachable_nodes().count(),
            "shortest path search finished"
        );

        Ok(tree)
    }

    fn breadth_first(&self, tree: &mut DistanceTree) {
        let mut queue = VecDeque::with_capacity(self.graph.len());
        for &s in &self.sources {
            if tree.distance_to(s).is_none() {
                tree.settle(s, 0, None);
                queue.push_back(s);
            }
        }

        while let Some(u) = queue.pop_front() {
            let Some(d) = tree.distance_to(u) else {
                continue;
            };

            for v in self.graph.neighbors_of(u) {
                if tree.distance_to(v).is_none() {
                    tree.settle(v, d + 1, Some(u));
                    queue.push_back(v);
                }
            }
        }
    }

    /// The deque holds `(node, distance at push time)`. An entry whose distance is larger
    /// than the node's current distance was superseded by a cheaper relaxation and is skipped.
    fn zero_one(&self, tree: &mut DistanceTree) {
        let mut deque: VecDeque<(Node, Distance)> = VecDeque::with_capacity(self.graph.len());
        for &s in &self.sources {
            if tree.distance_to(s).is_none() {
                tree.settle(s, 0, None);
                deque.push_back((s, 0));
            }
        }

        while let Some((u, d)) = deque.pop_front() {
            if tree.distance_to(u).is_some_and(|current| current < d) {
                continue;
            }

            for link in self.graph.links_of(u) {
                let relaxed = d + link.weight.cost();
                if tree.distance_to(link.to).is_some_and(|current| current <= relaxed) {
                    continue;
                }

                tree.settle(link.to, relaxed, Some(u));
                match link.weight {
                    EdgeWeight::Zero => deque.push_front((link.to, relaxed)),
                    EdgeWeight::One => deque.push_back((link.to, relaxed)),
                }
            }
        }
    }
}

/// Result of a [`ShortestPathSearch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTree {
    distances: Vec<Option<OptionalNode>>,
    predecessors: Vec<Option<OptionalNode>>,
    metric: DistanceMetric,
}

impl DistanceTree {
    fn new(n: NumNodes, metric: DistanceMetric) -> Self {
        Self {
            distances: vec![None; n as usize],
            predecessors: vec![None; n as usize],
            metric,
        }
    }

    fn settle(&mut self, u: Node, distance: Distance, predecessor: Option<Node>) {
        self.distances[u as usize] = OptionalNode::new(distance);
        self.predecessors[u as usize] = predecessor.and_then(OptionalNode::new);
    }

    /// Metric the distances are measured in
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Distance from the nearest source, or `None` if `u` is unreachable.
    /// ** Panics if `u >= n` **
    pub fn distance_to(&self, u: Node) -> Option<Distance> {
        unpack(self.distances[u as usize])
    }

    /// Predecessor of `u` on a shortest path. Sources and unreachable nodes have none.
    /// ** Panics if `u >= n` **
    pub fn predecessor_of(&self, u: Node) -> Option<Node> {
        unpack(self.predecessors[u as usize])
    }

    /// ** Panics if `u >= n` **
    pub fn is_reachable(&self, u: Node) -> bool {
        self.distances[u as usize].is_some()
    }

    /// Returns all reached nodes in ascending order
    pub fn reachable_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(u, d)| d.map(|_| u as Node))
    }

    /// Returns the nodes of a shortest path from the nearest source to `dest`,
    /// or `None` if `dest` is unreachable.
    /// ** Panics if `dest >= n` **
    pub fn path_to(&self, dest: Node) -> Option<Vec<Node>> {
        self.distance_to(dest)?;

        let mut path = vec![dest];
        let mut node = dest;
        while let Some(pred) = self.predecessor_of(node) {
            path.push(pred);
            node = pred;
            debug_assert!(path.len() <= self.distances.len());
        }

        path.reverse();
        Some(path)
    }

    /// Returns distance and path to `dest`, or `None` if `dest` is unreachable.
    /// ** Panics if `dest >= n` **
    pub fn shortest_path_to(&self, dest: Node) -> Option<ShortestPath> {
        Some(ShortestPath {
            distance: self.distance_to(dest)?,
            path: self.path_to(dest)?,
        })
    }
}

/// Shortest path queries as methods on graphs
pub trait ShortestPaths: AdjacencyList + Sized {
    /// Returns a configurable search on this graph
    fn shortest_path_search(&self) -> ShortestPathSearch<'_, Self> {
        ShortestPathSearch::new(self)
    }

    /// Hop distances and predecessors of all nodes reachable from `source`
    fn distances_from(&self, source: Node) -> Result<DistanceTree> {
        self.shortest_path_search().source(source).compute()
    }

    /// Returns a shortest path (in number of edges) from `source` to `dest` or
    /// `Ok(None)` if `dest` is unreachable.
    /// Returns `Err(OutOfRange)` if either node is invalid.
    ///
    /// # Examples
    /// ```
    /// use walkgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 3)]);
    /// let sp = g.shortest_path(0, 3).unwrap().unwrap();
    /// assert_eq!(sp.distance, 3);
    /// assert_eq!(sp.path, vec![0, 1, 2, 3]);
    /// ```
    fn shortest_path(&self, source: Node, dest: Node) -> Result<Option<ShortestPath>> {
        self.check_vertex(dest)?;
        Ok(self.distances_from(source)?.shortest_path_to(dest))
    }

    /// Like [`ShortestPaths::shortest_path`] but sums up the 0/1 weights of the edges
    fn zero_one_shortest_path(&self, source: Node, dest: Node) -> Result<Option<ShortestPath>> {
        self.check_vertex(dest)?;
        Ok(self
            .shortest_path_search()
            .metric(DistanceMetric::ZeroOne)
            .source(source)
            .compute()?
            .shortest_path_to(dest))
    }

    /// Builds a directed graph in which every edge `u -> v` can be used for free and in
    /// reverse direction `v -> u` at cost 1. A 0/1 shortest path in the result is a path
    /// of the original graph that reverses the fewest edges.
    ///
    /// Edge `i` of the original graph becomes edges `2i` (forward) and `2i + 1` (reverse).
    fn with_reversal_costs(&self) -> AdjArrayGraph {
        let mut graph = AdjArrayGraph::new(self.number_of_nodes(), true);
        for Edge(u, v) in self.edges() {
            graph.add_weighted_edge(u, v, EdgeWeight::Zero);
            graph.add_weighted_edge(v, u, EdgeWeight::One);
        }
        graph
    }
}

impl<G> ShortestPaths for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::*};
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn path_graph() {
        let graph = AdjArrayGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 3)]);

        let sp = graph.shortest_path(0, 3).unwrap().unwrap();
        assert_eq!(sp.distance, 3);
        assert_eq!(sp.path, vec![0, 1, 2, 3]);

        let sp = graph.shortest_path(3, 1).unwrap().unwrap();
        assert_eq!(sp.distance, 2);
        assert_eq!(sp.path, vec![3, 2, 1]);
    }

    #[test]
    fn source_is_destination() {
        let graph = AdjMatrixGraph::from_edges(3, true, [(0, 1)]);
        let sp = graph.shortest_path(2, 2).unwrap().unwrap();
        assert_eq!(sp.distance, 0);
        assert_eq!(sp.path, vec![2]);
    }

    #[test]
    fn unreachable() {
        let graph = AdjArrayGraph::from_edges(4, true, [(0, 1), (2, 1), (2, 3)]);
        assert_eq!(graph.shortest_path(0, 3).unwrap(), None);
        assert_eq!(graph.shortest_path(1, 0).unwrap(), None);

        let tree = graph.distances_from(2).unwrap();
        assert_eq!(tree.reachable_nodes().collect_vec(), vec![1, 2, 3]);
        assert_eq!(tree.distance_to(0), None);
        assert_eq!(tree.predecessor_of(0), None);
        assert_eq!(tree.path_to(0), None);
        assert_eq!(tree.predecessor_of(2), None);
        assert_eq!(tree.predecessor_of(3), Some(2));
    }

    #[test]
    fn out_of_range() {
        let graph = AdjArrayGraph::from_edges(3, false, [(0, 1)]);
        assert_eq!(
            graph.shortest_path(0, 3),
            Err(GraphError::OutOfRange {
                vertex: 3,
                number_of_nodes: 3
            })
        );
        assert!(graph.shortest_path(5, 0).is_err());
        assert!(graph.zero_one_shortest_path(0, 9).is_err());
        assert!(graph.shortest_path_search().sources([0, 4]).compute().is_err());
    }

    #[test]
    fn zero_weight_edges_are_preferred() {
        // 0 -1-> 3 directly, or 0 -0-> 1 -0-> 2 -0-> 3 for free
        let graph = AdjArrayGraph::from_weighted_edges(
            4,
            true,
            [
                (0, 3, EdgeWeight::One),
                (0, 1, EdgeWeight::Zero),
                (1, 2, EdgeWeight::Zero),
                (2, 3, EdgeWeight::Zero),
            ],
        );

        let hops = graph.shortest_path(0, 3).unwrap().unwrap();
        assert_eq!(hops.distance, 1);
        assert_eq!(hops.path, vec![0, 3]);

        let weighted = graph.zero_one_shortest_path(0, 3).unwrap().unwrap();
        assert_eq!(weighted.distance, 0);
        assert_eq!(weighted.path, vec![0, 1, 2, 3]);
    }

    #[test]
    fn improved_before_popped() {
        // 2 is first reached at cost 1 via 0 -> 2 and improved to 0 via 0 -> 1 -> 2
        let graph = AdjArrayGraph::from_weighted_edges(
            4,
            true,
            [
                (0, 2, EdgeWeight::One),
                (0, 1, EdgeWeight::Zero),
                (1, 2, EdgeWeight::Zero),
                (2, 3, EdgeWeight::One),
            ],
        );

        let tree = graph
            .shortest_path_search()
            .metric(DistanceMetric::ZeroOne)
            .source(0)
            .compute()
            .unwrap();

        assert_eq!(tree.metric(), DistanceMetric::ZeroOne);
        assert_eq!(
            graph.vertices().map(|u| tree.distance_to(u)).collect_vec(),
            vec![Some(0), Some(0), Some(0), Some(1)]
        );
        assert_eq!(tree.path_to(3), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn minimum_reversals() {
        // 0 <- 1 -> 2 <- 3: reaching 3 from 0 needs to reverse (1,0) and (3,2)
        let graph = AdjArrayGraph::from_edges(4, true, [(1, 0), (1, 2), (3, 2)]);
        let costs = graph.with_reversal_costs();
        assert_eq!(costs.number_of_edges(), 6);

        let sp = costs.zero_one_shortest_path(0, 3).unwrap().unwrap();
        assert_eq!(sp.distance, 2);
        assert_eq!(sp.path, vec![0, 1, 2, 3]);

        assert_eq!(costs.zero_one_shortest_path(3, 0).unwrap().unwrap().distance, 1);
    }

    #[test]
    fn multi_source() {
        let mut graph = AdjArrayGraph::new(7, false);
        graph.connect_path(0..7);

        let tree = graph
            .shortest_path_search()
            .sources([0, 6, 0])
            .compute()
            .unwrap();

        assert_eq!(
            graph.vertices().filter_map(|u| tree.distance_to(u)).collect_vec(),
            vec![0, 1, 2, 3, 2, 1, 0]
        );
        assert_eq!(tree.path_to(4), Some(vec![6, 5, 4]));
        assert_eq!(tree.path_to(0), Some(vec![0]));
    }

    #[test]
    fn no_sources() {
        let graph = AdjArrayGraph::from_edges(3, false, [(0, 1)]);
        let tree = graph.shortest_path_search().compute().unwrap();
        assert_eq!(tree.reachable_nodes().count(), 0);
    }

    fn assert_matches_oracle<G: AdjacencyList>(graph: &G, metric: DistanceMetric) {
        let expected = all_pairs_distances(graph, metric);
        for s in graph.vertices() {
            let tree = graph
                .shortest_path_search()
                .metric(metric)
                .source(s)
                .compute()
                .unwrap();

            for d in graph.vertices() {
                assert_eq!(tree.distance_to(d), expected[s as usize][d as usize]);

                if let Some(path) = tree.path_to(d) {
                    assert_eq!(path.first(), Some(&s));
                    assert_eq!(path.last(), Some(&d));

                    let length: Distance = path
                        .iter()
                        .tuple_windows()
                        .map(|(&u, &v)| {
                            graph
                                .links_of(u)
                                .filter(|l| l.to == v)
                                .map(|l| match metric {
                                    DistanceMetric::Hops => 1,
                                    DistanceMetric::ZeroOne => l.weight.cost(),
                                })
                                .min()
                                .unwrap()
                        })
                        .sum();
                    assert_eq!(Some(length), tree.distance_to(d));
                }
            }
        }
    }

    #[test]
    fn random_graphs_against_floyd_warshall() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x5eed);

        for _ in 0..200 {
            let n = rng.random_range(1..10);
            let m = rng.random_range(0..3 * n);
            let directed = rng.random_bool(0.5);

            let graph: AdjArrayGraph = random_weighted_graph(rng, n, m, directed);
            assert_matches_oracle(&graph, DistanceMetric::Hops);
            assert_matches_oracle(&graph, DistanceMetric::ZeroOne);

            let matrix: AdjMatrixGraph = random_weighted_graph(rng, n, m, directed);
            assert_matches_oracle(&matrix, DistanceMetric::Hops);
            assert_matches_oracle(&matrix, DistanceMetric::ZeroOne);
        }
    }
}
