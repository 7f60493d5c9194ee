/*!
# Graph Representations

A graph is a vector of per-node [`Neighborhood`]s plus the list of stored edges (indexed by
[`EdgeId`]). The neighborhood type is the only seam between representations:

- [`ArrNeighborhood`] is an adjacency list. Links keep insertion order, self-loops and
  parallel edges are stored. This is the representation for sparse graphs.
- [`MatrixNeighborhood`] is a row of an adjacency matrix. Links are enumerated in ascending
  node order, self-loops are ignored and a repeated edge collapses onto the stored one.
  This is the representation for small or dense graphs.

Directedness is passed to the constructor of [`Graph`] and never changes afterwards.
*/

use crate::*;

mod graph;
mod neighborhood;

pub use graph::*;
pub use neighborhood::*;

/// Trait for methods on the Neighborhood of a specified Node
pub trait Neighborhood: Clone {
    /// Whether links `u -> u` are kept
    const KEEPS_LOOPS: bool;

    /// Creates an empty Neighborhood for a graph with `n` nodes
    fn new(n: NumNodes) -> Self;

    /// Returns the number of links in the Neighborhood
    fn num_of_links(&self) -> NumNodes;

    type LinkIter<'a>: Iterator<Item = Link> + Clone + 'a
    where
        Self: 'a;

    /// Returns an iterator over all links in the Neighborhood
    fn links(&self) -> Self::LinkIter<'_>;

    /// Returns *true* if `v` is in the Neighborhood
    /// ** Might panic if `v >= n` **
    fn has_neighbor(&self, v: Node) -> bool {
        self.links().any(|link| link.to == v)
    }

    /// Tries to add a link to the Neighborhood.
    /// Returns *false* if the representation cannot hold another link to `link.to`.
    /// ** Might panic if `link.to >= n` **
    fn try_push_link(&mut self, link: Link) -> bool;
}
