/*!
# Substructure Generators

Adds paths, cycles and cliques to an already existing graph. Mostly used to set up
instances with known structure for tests and benchmarks.

# Example

```rust
use walkgraphs::{prelude::*, gens::*};

let mut g = AdjArrayGraph::new(5, true);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);

assert_eq!(
    g.edges().collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 4), Edge(4, 2)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
///
/// All endpoints must be nodes of the graph; adding an edge to a non-existing node panics.
pub trait GeneratorSubstructures {
    /// Connects consecutive nodes with an edge.
    ///
    /// # Example
    /// ```rust
    /// use walkgraphs::{prelude::*, gens::*};
    ///
    /// let mut g = AdjArrayGraph::new(4, false);
    /// g.connect_path([0, 1, 2, 3]);
    ///
    /// assert!(g.has_edge(1, 0));
    /// assert!(g.has_edge(2, 3));
    /// ```
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects consecutive nodes and the last node with the first one.
    /// A single node receives a self-loop.
    ///
    /// # Example
    /// ```rust
    /// use walkgraphs::{prelude::*, gens::*};
    ///
    /// let mut g = AdjArrayGraph::new(3, true);
    /// g.connect_cycle([0, 1, 2]);
    ///
    /// assert!(g.has_edge(2, 0));
    /// assert!(!g.has_edge(0, 2));
    /// ```
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique**.
    /// Undirected graphs receive every pair once, directed graphs both orientations.
    /// If `with_loops` is `true`, each node also gets a self-loop.
    fn connect_clique(&mut self, nodes: &NodeBitSet, with_loops: bool);
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing + GraphOrientation,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur);
                prev = cur;
            }

            self.add_edge(prev, first);
        }
    }

    fn connect_clique(&mut self, nodes: &NodeBitSet, with_loops: bool) {
        let undirected = self.is_undirected();
        for u in nodes.iter_set_bits() {
            for v in nodes.iter_set_bits() {
                let e = Edge(u, v);
                if (!with_loops && e.is_loop()) || (undirected && !e.is_normalized()) {
                    continue;
                }

                self.add_edge(u, v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_connect_path() {
        let mut g = AdjArrayGraph::new(6, true);
        g.connect_path([]);
        g.connect_path([1]);
        assert_eq!(g.number_of_edges(), 0);

        g.connect_path([0, 3, 1, 4]);
        assert_eq!(
            g.edges().collect_vec(),
            vec![Edge(0, 3), Edge(3, 1), Edge(1, 4)]
        );
    }

    #[test]
    fn test_connect_cycle() {
        {
            let mut g = AdjArrayGraph::new(6, true);
            g.connect_cycle([]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjArrayGraph::new(6, true);
            g.connect_cycle([1]);
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_edge(1, 1));

            // matrices ignore the loop
            let mut m = AdjMatrixGraph::new(6, true);
            m.connect_cycle([1]);
            assert_eq!(m.number_of_edges(), 0);
        }

        {
            let mut g = AdjArrayGraph::new(6, false);
            g.connect_cycle([0, 3, 1, 4]);
            assert_eq!(
                g.edges().collect_vec(),
                vec![Edge(0, 3), Edge(3, 1), Edge(1, 4), Edge(4, 0)]
            );
            assert!(g.vertices().all(|u| g.degree_of(u) % 2 == 0));
        }
    }

    #[test]
    fn test_connect_clique() {
        let set = |nodes: &[Node]| NodeBitSet::new_with_bits_set(6, nodes.iter().copied());

        for directed in [false, true] {
            let mut g = AdjArrayGraph::new(6, directed);
            g.connect_clique(&NodeBitSet::new(6), true);
            g.connect_clique(&set(&[1]), false);
            assert_eq!(g.number_of_edges(), 0);

            g.connect_clique(&set(&[1]), true);
            assert_eq!(g.number_of_edges(), 1);
        }

        let mut g = AdjArrayGraph::new(6, false);
        g.connect_clique(&set(&[1, 2, 4]), false);
        assert_eq!(g.number_of_edges(), 3);

        let mut g = AdjArrayGraph::new(6, true);
        g.connect_clique(&set(&[1, 2, 4]), false);
        assert_eq!(g.number_of_edges(), 6);

        let mut g = AdjArrayGraph::new(6, true);
        g.connect_clique(&set(&[1, 2, 4]), true);
        assert_eq!(g.number_of_edges(), 9);
    }
}
