/*!
`walkgraphs` is a library of traversal-based graph analyses for graphs whose nodes are
numbered `0` to `n - 1`.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`. Every stored edge is identified
by its insertion index ([`EdgeId`]) and carries a weight of either `0` or `1` ([`EdgeWeight`]).

### Directed vs Undirected

Directedness is a runtime property chosen at construction:

- In an **undirected** graph, `Edge(u, v)` is stored at both endpoints under the same id.
- In a **directed** graph, the edge is only stored at `u`.

Analyses that are only defined on undirected graphs (bipartiteness, cuts, bridges, ...)
work on the underlying undirected graph when handed a directed one.

### Available Representations

See the [`repr`] module:

- [`AdjArrayGraph`](crate::repr::AdjArrayGraph): adjacency lists, keeps loops and parallel edges
- [`AdjMatrixGraph`](crate::repr::AdjMatrixGraph): adjacency matrix, ignores loops and parallel edges

# Usage

- [`prelude`] includes definitions for nodes, edges, basic graph operations, and all representations,
- [`algo`] includes the analyses, implemented as traits on the graph itself
  (`graph.bfs(u)`, `graph.strongly_connected_components()`, `graph.compute_bridges()`, ...),
- [`gens`] includes random graph generators and deterministic substructures (paths/cycles/cliques),
- [`io`] reads and writes 1-based edge lists.

In most use-cases, `use walkgraphs::{prelude::*, algo::*};` suffices.

```
use walkgraphs::{prelude::*, algo::*};

let g = AdjArrayGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 3)]);
let path = g.shortest_path(0, 3).unwrap().unwrap();
assert_eq!(path.distance, 3);
assert_eq!(path.path, vec![0, 1, 2, 3]);
assert_eq!(g.compute_bridges(), vec![0, 1, 2]);
```

# Logging

Analyses emit [`tracing`](https://docs.rs/tracing) events (`debug` per call, `trace` for
individual steps). The library never installs a subscriber.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use error::{GraphError, Orientation};
pub use node::*;

/// `walkgraphs::prelude` includes definitions for nodes and edges, all basic graph operation
/// traits as well as all implemented representations.
pub mod prelude {
    pub use super::{
        edge::*,
        error::{GraphError, Orientation},
        node::*,
        ops::*,
        repr::*,
    };
}
