/*!
# Low Points

Discovery times and low points of a depth-first search on an undirected graph.

The low point of `u` is the smallest discovery time reachable from the DFS subtree of `u`
using tree edges downwards and at most one non-tree link. The tree edge to the parent is
excluded by its id; a parallel edge to the parent is an ordinary non-tree link.

Articulation points and bridges are both read off this table.
*/

use super::*;

#[derive(Debug, Clone, Copy, Default)]
struct NodeInfo {
    discovery: Node,
    low: Node,
    parent: Option<TreeLink>,
    children: NumNodes,
}

/// Discovery times (starting at 1) and low points of a DFS forest.
/// Trees are rooted in ascending node order.
#[derive(Debug, Clone)]
pub struct LowPoints {
    infos: Vec<NodeInfo>,
}

impl LowPoints {
    /// Runs a depth-first search over the whole undirected graph.
    /// ** Panics (in debug builds) if the graph is directed **
    pub fn new<G: AdjacencyList>(graph: &G) -> Self {
        debug_assert!(graph.is_undirected());

        let mut infos = vec![NodeInfo::default(); graph.len()];
        let mut time = 0;

        for event in graph.depth_first_events() {
            match event {
                DfsEvent::Discover { node, parent } => {
                    time += 1;
                    infos[node as usize] = NodeInfo {
                        discovery: time,
                        low: time,
                        parent,
                        children: 0,
                    };
                    if let Some(p) = parent {
                        infos[p.node as usize].children += 1;
                    }
                }
                DfsEvent::NonTreeLink {
                    node,
                    link,
                    to_parent: false,
                    ..
                } => {
                    let discovery = infos[link.to as usize].discovery;
                    let info = &mut infos[node as usize];
                    info.low = info.low.min(discovery);
                }
                DfsEvent::Finish {
                    node,
                    parent: Some(p),
                } => {
                    let low = infos[node as usize].low;
                    assert!(low <= infos[node as usize].discovery);
                    let parent = &mut infos[p.node as usize];
                    parent.low = parent.low.min(low);
                }
                _ => {}
            }
        }

        Self { infos }
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.infos.len() as NumNodes
    }

    /// Time at which `u` was discovered
    pub fn discovery_of(&self, u: Node) -> Node {
        self.infos[u as usize].discovery
    }

    pub fn low_of(&self, u: Node) -> Node {
        self.infos[u as usize].low
    }

    /// The tree edge through which `u` was discovered, `None` for roots
    pub fn parent_of(&self, u: Node) -> Option<TreeLink> {
        self.infos[u as usize].parent
    }

    pub fn number_of_children(&self, u: Node) -> NumNodes {
        self.infos[u as usize].children
    }

    pub fn is_root(&self, u: Node) -> bool {
        self.infos[u as usize].parent.is_none()
    }

    /// Iterates over all tree edges as `(child, link to parent)`
    pub fn tree_links(&self) -> impl Iterator<Item = (Node, TreeLink)> + '_ {
        self.infos
            .iter()
            .enumerate()
            .filter_map(|(u, info)| info.parent.map(|p| (u as Node, p)))
    }

    /// Returns *true* if the tree edge above `child` is a bridge
    pub fn is_bridge_above(&self, child: Node) -> bool {
        self.parent_of(child)
            .is_some_and(|p| self.low_of(child) > self.discovery_of(p.node))
    }
}

/// Computes the [`LowPoints`] of a graph
pub trait LowPointSearch: AdjacencyList + Sized {
    /// Low points of the graph; directed graphs are handled as their underlying undirected graph.
    fn low_points(&self) -> LowPoints {
        if self.is_directed() {
            LowPoints::new(&self.to_undirected())
        } else {
            LowPoints::new(self)
        }
    }
}

impl<G> LowPointSearch for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;

    #[test]
    fn path() {
        let mut graph = AdjArrayGraph::new(4, false);
        graph.connect_path([0, 1, 2, 3]);

        let lp = graph.low_points();
        for u in 0..4 {
            assert_eq!(lp.discovery_of(u), u + 1);
            assert_eq!(lp.low_of(u), u + 1);
        }
        assert!(lp.is_root(0));
        assert_eq!(lp.parent_of(2), Some(TreeLink { node: 1, id: 1 }));
        assert_eq!(lp.number_of_children(1), 1);
        assert_eq!(lp.tree_links().count(), 3);
    }

    #[test]
    fn cycle_lowers_everything_to_root() {
        let mut graph = AdjArrayGraph::new(6, false);
        graph.connect_cycle(0..5);

        let lp = graph.low_points();
        assert!((0..5).all(|u| lp.low_of(u) == 1));
        assert!((1..5).all(|u| !lp.is_bridge_above(u)));

        // isolated node is its own tree
        assert!(lp.is_root(5));
        assert_eq!(lp.discovery_of(5), 6);
        assert_eq!(lp.number_of_children(5), 0);
    }

    #[test]
    fn parallel_edge_to_parent_counts() {
        let graph = AdjArrayGraph::from_edges(3, false, [(0, 1), (1, 0), (1, 2)]);
        let lp = graph.low_points();
        assert_eq!(lp.low_of(1), 1);
        assert!(!lp.is_bridge_above(1));
        assert!(lp.is_bridge_above(2));
    }

    #[test]
    fn directed_graphs_use_underlying_graph() {
        let graph = AdjArrayGraph::from_edges(3, true, [(1, 0), (2, 1), (0, 2)]);
        let lp = graph.low_points();
        assert_eq!(lp.number_of_children(0), 1);
        assert!((0..3).all(|u| lp.low_of(u) == 1));
    }
}
