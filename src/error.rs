//! Error types for nigh.

use std::fmt;

/// Construction-time precondition violations.
///
/// The traversal and pruning loops themselves never fail: every neighbor id
/// is validated against the row count when a graph is built, so the hot
/// paths index without re-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Graph has no nodes.
    EmptyGraph,
    /// Query or vector dimensionality differs from the store's.
    DimensionMismatch { expected: usize, actual: usize },
    /// Graph node count differs from the vector store row count.
    RowCountMismatch { graph: usize, store: usize },
    /// A neighbor id points outside the node range.
    NeighborOutOfBounds { node: u32, neighbor: u32, n_rows: usize },
    /// Invalid parameter value.
    InvalidParameter(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyGraph => write!(f, "Graph is empty"),
            ConfigError::DimensionMismatch { expected, actual } => write!(
                f,
                "Dimension mismatch: expected {expected} dimensions, got {actual}",
            ),
            ConfigError::RowCountMismatch { graph, store } => write!(
                f,
                "Row count mismatch: graph has {graph} nodes, store has {store} vectors",
            ),
            ConfigError::NeighborOutOfBounds {
                node,
                neighbor,
                n_rows,
            } => write!(
                f,
                "Node {node} lists neighbor {neighbor}, outside the {n_rows}-node range",
            ),
            ConfigError::InvalidParameter(msg) => write!(f, "Invalid parameter: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

pub type Result<T> = std::result::Result<T, ConfigError>;
