//! Codec round-trips for the fvecs/ivecs fixed-record layouts.

use std::io::Write;

use nigh::io::{load_fvecs, load_ivecs, load_ivecs_fixed, save_ivecs, LoadError};

fn write_bytes(path: &std::path::Path, bytes: &[u8]) {
    let mut file = std::fs::File::create(path).expect("create temp file");
    file.write_all(bytes).expect("write temp file");
}

#[test]
fn ivecs_roundtrip_variable_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("graph.ivecs");

    let rows: Vec<Vec<u32>> = vec![vec![3, 1, 4], vec![1], vec![], vec![5, 9, 2, 6, 5]];
    save_ivecs(&path, &rows).expect("save");

    let loaded = load_ivecs(&path).expect("load");
    assert_eq!(loaded, rows);
}

#[test]
fn ivecs_fixed_reads_uniform_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("gt.ivecs");

    let rows: Vec<Vec<u32>> = vec![vec![0, 1], vec![2, 3], vec![4, 5]];
    save_ivecs(&path, &rows).expect("save");

    assert_eq!(load_ivecs_fixed(&path).expect("load"), rows);
}

#[test]
fn ivecs_fixed_rejects_ragged_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("ragged.ivecs");

    save_ivecs(&path, &[vec![0, 1], vec![2]]).expect("save");

    assert!(matches!(
        load_ivecs_fixed(&path),
        Err(LoadError::Format(_))
    ));
}

#[test]
fn ivecs_rejects_truncated_record() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("truncated.ivecs");

    // Declares 3 elements but carries only 2.
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&3u32.to_le_bytes());
    bytes.extend_from_slice(&7u32.to_le_bytes());
    bytes.extend_from_slice(&8u32.to_le_bytes());
    write_bytes(&path, &bytes);

    assert!(matches!(load_ivecs(&path), Err(LoadError::Format(_))));
}

#[test]
fn fvecs_loads_fixed_records() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("base.fvecs");

    let rows: Vec<Vec<f32>> = vec![vec![1.0, 2.0, 3.0], vec![-0.5, 0.25, 8.0]];
    let mut bytes = Vec::new();
    for row in &rows {
        bytes.extend_from_slice(&(row.len() as u32).to_le_bytes());
        for &v in row {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
    }
    write_bytes(&path, &bytes);

    let store = load_fvecs(&path).expect("load");
    assert_eq!(store.n_rows(), 2);
    assert_eq!(store.dim(), 3);
    assert_eq!(store.get(0), rows[0].as_slice());
    assert_eq!(store.get(1), rows[1].as_slice());
}

#[test]
fn fvecs_rejects_inconsistent_dimension() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("mixed.fvecs");

    // A 2-float row followed by a 1-float row; sizes conspire so the file
    // length is a whole number of 2-float records.
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&2u32.to_le_bytes());
    bytes.extend_from_slice(&1.0f32.to_le_bytes());
    bytes.extend_from_slice(&2.0f32.to_le_bytes());
    bytes.extend_from_slice(&1u32.to_le_bytes());
    bytes.extend_from_slice(&3.0f32.to_le_bytes());
    bytes.extend_from_slice(&4u32.to_le_bytes());
    write_bytes(&path, &bytes);

    assert!(matches!(load_fvecs(&path), Err(LoadError::Format(_))));
}

#[test]
fn fvecs_rejects_partial_trailing_record() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("partial.fvecs");

    let mut bytes = Vec::new();
    bytes.extend_from_slice(&2u32.to_le_bytes());
    bytes.extend_from_slice(&1.0f32.to_le_bytes());
    bytes.extend_from_slice(&2.0f32.to_le_bytes());
    bytes.extend_from_slice(&2u32.to_le_bytes());
    bytes.extend_from_slice(&3.0f32.to_le_bytes());
    write_bytes(&path, &bytes);

    assert!(matches!(load_fvecs(&path), Err(LoadError::Format(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(matches!(
        load_ivecs("/nonexistent/graph.ivecs"),
        Err(LoadError::Io(_))
    ));
}
