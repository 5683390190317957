//! Adjacency-list proximity graphs.

use crate::error::ConfigError;

/// A directed proximity graph: one forward neighbor list per node.
///
/// Construction validates that every listed neighbor id falls inside the
/// node range, so traversal and pruning can index rows without per-access
/// checks. Row lengths may differ across nodes; raw k-NN input rows are
/// expected to be sorted ascending by distance to their owning node, which
/// the diversifier relies on.
#[derive(Debug)]
pub struct NeighborGraph {
    rows: Vec<Vec<u32>>,
}

impl NeighborGraph {
    /// Wrap adjacency rows, validating the neighbor-id invariant once.
    pub fn new(rows: Vec<Vec<u32>>) -> Result<Self, ConfigError> {
        let n_rows = rows.len();
        for (node, row) in rows.iter().enumerate() {
            for &neighbor in row {
                if neighbor as usize >= n_rows {
                    return Err(ConfigError::NeighborOutOfBounds {
                        node: node as u32,
                        neighbor,
                        n_rows,
                    });
                }
            }
        }
        Ok(Self { rows })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Forward neighbors of `node`.
    #[inline]
    pub fn neighbors(&self, node: u32) -> &[u32] {
        &self.rows[node as usize]
    }

    /// Borrow all adjacency rows.
    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }
}
