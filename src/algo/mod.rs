/*!
# Graph Algorithms

This module provides the traversal-based analyses of this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use walkgraphs::algo::*;
```
and gain access to shortest paths, bipartiteness, cycles, topological orders, components,
cuts and Eulerian circuits.

Every analysis is available as a trait method on the graph itself
(e.g. `graph.strongly_connected_components()`) and returns an owned result value.
Absent structures (no path, no order, not Eulerian, ...) are ordinary `None` results;
only malformed requests produce a [`GraphError`](crate::error::GraphError).

All depth-first analyses run on [`DepthFirstEvents`], an explicit-stack DFS, and are hence
safe on graphs whose DFS tree is as deep as the number of nodes.
*/

mod bipartite;
mod bridges;
mod connectivity;
mod cycle;
mod eulerian;
mod low_points;
mod scc;
mod shortest_path;
mod traversal;
mod vertex_cuts;

use crate::{error::*, prelude::*};
use tracing::{debug, trace};

pub use bipartite::*;
pub use bridges::*;
pub use connectivity::*;
pub use cycle::*;
pub use eulerian::*;
pub use low_points::*;
pub use scc::*;
pub use shortest_path::*;
pub use traversal::*;
pub use vertex_cuts::*;
