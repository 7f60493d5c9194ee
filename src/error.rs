//! Errors raised at the boundary of the graph API.
//!
//! Only malformed requests are errors. The absence of a requested structure
//! (no path, no order, not Eulerian, ...) is an ordinary return value.

use crate::{Node, NumNodes};

pub type Result<T> = std::result::Result<T, GraphError>;

/// Orientation a graph operation was expecting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Directed,
    Undirected,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Directed => write!(f, "directed"),
            Orientation::Undirected => write!(f, "undirected"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph with {number_of_nodes} nodes")]
    OutOfRange {
        vertex: Node,
        number_of_nodes: NumNodes,
    },

    #[error("operation requires a {expected} graph")]
    Orientation { expected: Orientation },
}

impl GraphError {
    /// Returns `Err(OutOfRange)` unless `vertex < number_of_nodes`
    pub fn check_vertex(vertex: Node, number_of_nodes: NumNodes) -> Result<()> {
        if vertex < number_of_nodes {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                vertex,
                number_of_nodes,
            })
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn out_of_range_message() {
        let err = GraphError::check_vertex(7, 5).unwrap_err();
        assert_eq!(
            err,
            GraphError::OutOfRange {
                vertex: 7,
                number_of_nodes: 5
            }
        );
        assert_eq!(
            err.to_string(),
            "vertex 7 is out of range for a graph with 5 nodes"
        );
        assert!(GraphError::check_vertex(4, 5).is_ok());
    }

    #[test]
    fn orientation_message() {
        let err = GraphError::Orientation {
            expected: Orientation::Directed,
        };
        assert_eq!(err.to_string(), "operation requires a directed graph");
    }
}
