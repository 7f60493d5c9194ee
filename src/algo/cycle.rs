/*!
# Cycles and Topological Orders

Tri-color depth-first search: a link to a node that is still on the DFS stack
([`VisitState::InProgress`]) closes a cycle, while links to finished nodes are safe.

- In a **directed** graph every such back link is a cycle (a self-loop is a cycle of length 1).
- In an **undirected** graph the mirrored tree edge leading back to the DFS parent is skipped.
  It is identified by its edge id, so a parallel edge still closes a cycle of length 2.

The topological order is the reverse finishing order of the search and only exists for
directed acyclic graphs.
*/

use super::*;

pub trait CycleDetection: AdjacencyList + Sized {
    /// Returns the nodes of a cycle, or `None` if the graph is acyclic.
    ///
    /// The cycle starts at the ancestor that closes the back link and follows the DFS
    /// stack down to the node owning that link. Consecutive nodes (and the last and the
    /// first node) are joined by an edge in traversal direction.
    ///
    /// # Examples
    /// ```
    /// use walkgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayGraph::from_edges(4, true, [(0, 1), (1, 2), (2, 3), (3, 1)]);
    /// assert_eq!(g.detect_cycle(), Some(vec![1, 2, 3]));
    /// ```
    fn detect_cycle(&self) -> Option<Vec<Node>> {
        let directed = self.is_directed();
        let mut search = self.depth_first_events();

        while let Some(event) = search.next() {
            if let DfsEvent::NonTreeLink {
                node,
                link,
                state: VisitState::InProgress,
                to_parent,
            } = event
            {
                if !directed && to_parent {
                    continue;
                }

                trace!(node, to = link.to, "back link");
                let cycle = search.active_path_from(link.to);
                debug!(
                    nodes = self.number_of_nodes(),
                    edges = self.number_of_edges(),
                    cycle_len = cycle.as_ref().map_or(0, |c| c.len()),
                    "cycle found"
                );
                return cycle;
            }
        }

        debug!(
            nodes = self.number_of_nodes(),
            edges = self.number_of_edges(),
            "graph is acyclic"
        );
        None
    }

    /// Returns *true* if the graph contains a cycle
    fn has_cycle(&self) -> bool {
        self.detect_cycle().is_some()
    }

    /// Returns *true* if the graph contains no cycle.
    /// For undirected graphs this means that the graph is a forest.
    fn is_acyclic(&self) -> bool {
        !self.has_cycle()
    }

    /// Returns the nodes in an order such that every edge `(u, v)` has `u` before `v`,
    /// or `Ok(None)` if the graph has a cycle (no partial order is returned).
    /// Returns `Err(Orientation)` for undirected graphs.
    ///
    /// # Examples
    /// ```
    /// use walkgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayGraph::from_edges(3, true, [(2, 0), (0, 1)]);
    /// assert_eq!(g.topological_order().unwrap(), Some(vec![2, 0, 1]));
    ///
    /// let g = AdjArrayGraph::from_edges(3, true, [(2, 0), (0, 1), (1, 2)]);
    /// assert_eq!(g.topological_order().unwrap(), None);
    /// ```
    fn topological_order(&self) -> Result<Option<Vec<Node>>> {
        if self.is_undirected() {
            return Err(GraphError::Orientation {
                expected: Orientation::Directed,
            });
        }

        let mut finished = Vec::with_capacity(self.len());
        for event in self.depth_first_events() {
            match event {
                DfsEvent::Finish { node, .. } => finished.push(node),
                DfsEvent::NonTreeLink {
                    node,
                    link,
                    state: VisitState::InProgress,
                    ..
                } => {
                    debug!(node, to = link.to, "no topological order: back link");
                    return Ok(None);
                }
                _ => {}
            }
        }

        finished.reverse();
        debug!(nodes = finished.len(), "topological order computed");
        Ok(Some(finished))
    }
}

impl<G> CycleDetection for G where G: AdjacencyList + Sized {}
