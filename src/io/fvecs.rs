//! Fixed-record float vector codec (fvecs).
//!
//! Each record is a 4-byte little-endian dimension count followed by that
//! many 4-byte little-endian floats. All records must share one dimension;
//! the row count is derived from the file size.

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use super::error::{LoadError, LoadResult};
use crate::store::VectorStore;

/// Load an fvecs file into a [`VectorStore`].
///
/// The dimension is taken from the first record. A file whose size is not a
/// whole number of records, or a record with a differing dimension, is a
/// [`LoadError::Format`].
pub fn load_fvecs(path: impl AsRef<Path>) -> LoadResult<VectorStore> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let file_size = file.metadata()?.len();
    let mut reader = BufReader::new(file);

    if file_size < 4 {
        return Err(LoadError::Format(format!(
            "'{}' is too small to hold an fvecs header",
            path.display()
        )));
    }

    let mut len_buf = [0u8; 4];
    reader.read_exact(&mut len_buf)?;
    let dim = u32::from_le_bytes(len_buf) as usize;
    if dim == 0 {
        return Err(LoadError::Format(format!(
            "'{}' declares a zero-dimensional record",
            path.display()
        )));
    }

    let record_size = 4 + 4 * dim as u64;
    if file_size % record_size != 0 {
        return Err(LoadError::Format(format!(
            "'{}' size {} is not a multiple of the {}-byte record",
            path.display(),
            file_size,
            record_size
        )));
    }
    let n_rows = (file_size / record_size) as usize;

    reader.seek(SeekFrom::Start(0))?;
    let mut data = Vec::with_capacity(n_rows * dim);
    let mut payload = vec![0u8; dim * 4];
    for row in 0..n_rows {
        reader.read_exact(&mut len_buf)?;
        let row_dim = u32::from_le_bytes(len_buf) as usize;
        if row_dim != dim {
            return Err(LoadError::Format(format!(
                "'{}' row {} has dimension {}, expected {}",
                path.display(),
                row,
                row_dim,
                dim
            )));
        }
        reader.read_exact(&mut payload)?;
        for chunk in payload.chunks_exact(4) {
            data.push(f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        }
    }

    Ok(VectorStore::new(data, dim)?)
}
