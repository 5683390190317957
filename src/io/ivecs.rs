//! Fixed- and variable-record id-list codec (ivecs).
//!
//! Each record is a 4-byte little-endian element count followed by that many
//! 4-byte little-endian unsigned ids. Two readers exist: the fixed-width
//! variant derives the row count from the file size and requires every
//! record to share one width (ground-truth neighbor files), while the
//! variable-width variant reads records until end-of-file and accepts
//! per-row lengths (diversified graphs, whose degrees differ by node).

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use super::error::{LoadError, LoadResult};

/// Load an ivecs file with per-row lengths, reading records until EOF.
///
/// Fixed-width files load identically through this reader.
pub fn load_ivecs(path: impl AsRef<Path>) -> LoadResult<Vec<Vec<u32>>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut rows = Vec::new();
    let mut len_buf = [0u8; 4];
    loop {
        match reader.read_exact(&mut len_buf) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        }
        let len = u32::from_le_bytes(len_buf) as usize;
        let mut payload = vec![0u8; len * 4];
        reader.read_exact(&mut payload).map_err(|e| {
            if e.kind() == io::ErrorKind::UnexpectedEof {
                LoadError::Format(format!(
                    "'{}' ends inside a {}-element record",
                    path.display(),
                    len
                ))
            } else {
                LoadError::Io(e)
            }
        })?;
        let mut row = Vec::with_capacity(len);
        for chunk in payload.chunks_exact(4) {
            row.push(u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Load a fixed-width ivecs file, deriving the row count from the file size.
///
/// Every record must share the width declared by the first one.
pub fn load_ivecs_fixed(path: impl AsRef<Path>) -> LoadResult<Vec<Vec<u32>>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let file_size = file.metadata()?.len();
    let mut reader = BufReader::new(file);

    if file_size < 4 {
        return Err(LoadError::Format(format!(
            "'{}' is too small to hold an ivecs header",
            path.display()
        )));
    }

    let mut len_buf = [0u8; 4];
    reader.read_exact(&mut len_buf)?;
    let width = u32::from_le_bytes(len_buf) as usize;

    let record_size = 4 + 4 * width as u64;
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
    let mut rows = Vec::with_capacity(n_rows);
    let mut payload = vec![0u8; width * 4];
    for row_idx in 0..n_rows {
        reader.read_exact(&mut len_buf)?;
        let row_width = u32::from_le_bytes(len_buf) as usize;
        if row_width != width {
            return Err(LoadError::Format(format!(
                "'{}' row {} has width {}, expected {}",
                path.display(),
                row_idx,
                row_width,
                width
            )));
        }
        reader.read_exact(&mut payload)?;
        let mut row = Vec::with_capacity(width);
        for chunk in payload.chunks_exact(4) {
            row.push(u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Write adjacency rows in the variable-width ivecs layout.
///
/// Round-trips with [`load_ivecs`].
pub fn save_ivecs(path: impl AsRef<Path>, rows: &[Vec<u32>]) -> LoadResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for row in rows {
        writer.write_all(&(row.len() as u32).to_le_bytes())?;
        for &id in row {
            writer.write_all(&id.to_le_bytes())?;
        }
    }
    writer.flush()?;
    Ok(())
}
