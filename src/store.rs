//! Contiguous row-major storage for dense vectors.

use crate::distance::l2_sq;
use crate::error::ConfigError;

/// Immutable storage for `n_rows` vectors of `dim` floats each, addressable
/// by integer id in `[0, n_rows)`.
///
/// Rows live in one contiguous allocation so that sequential scans and
/// random row access both stay cache-friendly. Nothing mutates the data
/// after construction, which is what makes sharing it across concurrent
/// readers sound.
pub struct VectorStore {
    data: Vec<f32>,
    n_rows: usize,
    dim: usize,
}

impl VectorStore {
    /// Wrap a flat row-major buffer.
    ///
    /// Rejects a zero dimension and a buffer whose length is not a multiple
    /// of `dim`.
    pub fn new(data: Vec<f32>, dim: usize) -> Result<Self, ConfigError> {
        if dim == 0 {
            return Err(ConfigError::InvalidParameter(
                "vector dimension must be at least 1".to_string(),
            ));
        }
        if data.len() % dim != 0 {
            return Err(ConfigError::InvalidParameter(format!(
                "buffer of {} floats is not a whole number of {}-float rows",
                data.len(),
                dim
            )));
        }
        let n_rows = data.len() / dim;
        Ok(Self { data, n_rows, dim })
    }

    /// Build a store by flattening per-row vectors.
    ///
    /// All rows must share one dimension.
    pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self, ConfigError> {
        let dim = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * dim);
        for row in rows {
            if row.len() != dim {
                return Err(ConfigError::DimensionMismatch {
                    expected: dim,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::new(data, dim)
    }

    /// Number of stored vectors.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Dimensionality shared by all rows.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Borrow row `id`.
    ///
    /// Callers are expected to pass validated ids; the slice operation
    /// bounds-checks as usual.
    #[inline]
    pub fn get(&self, id: u32) -> &[f32] {
        let start = id as usize * self.dim;
        &self.data[start..start + self.dim]
    }

    /// Squared L2 distance between two stored rows.
    #[inline]
    pub fn dist(&self, a: u32, b: u32) -> f32 {
        l2_sq(self.get(a), self.get(b))
    }
}
