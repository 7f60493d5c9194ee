use itertools::Itertools;

use super::*;

/// Connected components of undirected graphs and weakly connected components of
/// directed graphs (components of the underlying undirected graph).
pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Iterates the connected components of an undirected graph.
    /// Components are emitted in order of their smallest node, nodes within a component
    /// in BFS order from that node.
    /// Returns `Err(Orientation)` for directed graphs; use
    /// [`Connectivity::weakly_connected_components`] instead.
    ///
    /// # Examples
    /// ```
    /// use walkgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayGraph::from_edges(4, false, [(0, 2), (3, 1)]);
    /// let ccs: Vec<_> = g.connected_components().unwrap().collect();
    /// assert_eq!(ccs, vec![vec![0, 2], vec![1, 3]]);
    /// ```
    fn connected_components(&self) -> Result<ConnectedComponents<'_, Self>> {
        if self.is_directed() {
            return Err(GraphError::Orientation {
                expected: Orientation::Undirected,
            });
        }
        Ok(ConnectedComponents::new(self))
    }

    /// Labels every node with the index of its (weakly) connected component.
    /// Labels are `0..k`, assigned in order of the smallest node of each component.
    fn component_labels(&self) -> ComponentLabels {
        let labels = if self.is_directed() {
            ComponentLabels::from_components(self.number_of_nodes(), ConnectedComponents::new(&self.to_undirected()))
        } else {
            ComponentLabels::from_components(self.number_of_nodes(), ConnectedComponents::new(self))
        };

        debug!(
            nodes = self.number_of_nodes(),
            directed = self.is_directed(),
            components = labels.number_of_components(),
            "connected components labelled"
        );

        labels
    }

    /// Returns the number of (weakly) connected components; isolated nodes count as components
    fn number_of_components(&self) -> NumNodes {
        self.component_labels().number_of_components()
    }

    /// Returns the nodes of each weakly connected component in ascending order.
    /// For undirected graphs these are the connected components.
    fn weakly_connected_components(&self) -> Vec<Vec<Node>> {
        self.component_labels().components()
    }

    /// Returns *true* if the graph has at most one (weakly) connected component
    fn is_connected(&self) -> bool {
        self.number_of_components() <= 1
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

/// Iterator over the connected components of an undirected graph, one BFS per component
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        debug_assert!(graph.is_undirected());
        Self {
            bfs: (!graph.is_empty()).then(|| graph.bfs(0)),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                self.bfs = None;
                return None;
            }
        }
    }
}

/// Assignment of nodes to connected components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentLabels {
    labels: Vec<Node>,
    count: NumNodes,
}

impl ComponentLabels {
    pub(super) fn from_components<I>(n: NumNodes, components: I) -> Self
    where
        I: IntoIterator<Item = Vec<Node>>,
    {
        let mut labels = vec![INVALID_NODE; n as usize];
        let mut count = 0;
        for component in components {
            for u in component {
                labels[u as usize] = count;
            }
            count += 1;
        }

        debug_assert!(!labels.contains(&INVALID_NODE));
        Self { labels, count }
    }

    /// Component index of `u`.
    /// ** Panics if `u >= n` **
    pub fn label_of(&self, u: Node) -> Node {
        self.labels[u as usize]
    }

    /// Labels of all nodes
    pub fn as_slice(&self) -> &[Node] {
        &self.labels
    }

    pub fn number_of_components(&self) -> NumNodes {
        self.count
    }

    /// Returns *true* if `u` and `v` lie in the same component
    pub fn are_connected(&self, u: Node, v: Node) -> bool {
        self.label_of(u) == self.label_of(v)
    }

    /// Number of nodes per component
    pub fn sizes(&self) -> Vec<NumNodes> {
        let mut sizes = vec![0; self.count as usize];
        for &l in &self.labels {
            sizes[l as usize] += 1;
        }
        sizes
    }

    /// Nodes of every component in ascending order, components ordered by label
    pub fn components(&self) -> Vec<Vec<Node>> {
        let mut components = vec![Vec::new(); self.count as usize];
        for (u, &l) in self.labels.iter().enumerate() {
            components[l as usize].push(u as Node);
        }
        components
    }
}
