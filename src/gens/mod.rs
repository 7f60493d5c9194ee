/*!
# Graph Generators

Builders for random edge sets and helpers that add deterministic substructures
(paths, cycles, cliques) to an existing graph.

Generators follow a builder pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`.

The [`RandomGraph`] trait wraps the generators into constructors for every graph type
implementing [`GraphFromScratch`].
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen {
    /// Set the average degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Constructors for random graphs of any representation
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph using edge probability `p`.
    /// Undirected graphs draw every unordered pair (including loops) once.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, directed: bool) -> Self
    where
        R: Rng;

    /// Creates a `G(n,p)` graph with no self-loops.
    fn gnp_no_loops<R>(rng: &mut R, n: NumNodes, p: f64, directed: bool) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, directed: bool) -> Self
    where
        R: Rng,
    {
        Self::from_edges(
            n,
            directed,
            Gnp::new().nodes(n).prob(p).directed(directed).stream(rng),
        )
    }

    fn gnp_no_loops<R>(rng: &mut R, n: NumNodes, p: f64, directed: bool) -> Self
    where
        R: Rng,
    {
        Self::from_edges(
            n,
            directed,
            Gnp::new()
                .nodes(n)
                .prob(p)
                .directed(directed)
                .loops(false)
                .stream(rng),
        )
    }
}
