use std::fs;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use regbench::{dataset, BenchError};

#[test]
fn write_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let records = dataset::generate(&mut rng, 120);

    let path = dataset::dataset_path(dir.path(), 120);
    dataset::write_file(&path, &records).unwrap();
    let loaded = dataset::load_file(&path, 120).unwrap();

    assert_eq!(loaded.len(), records.len());
    for (a, b) in loaded.iter().zip(&records) {
        // Field-by-field: Record equality ignores the payload fields.
        assert_eq!(a.groom_name, b.groom_name);
        assert_eq!(a.groom_birth_date, b.groom_birth_date);
        assert_eq!(a.bride_name, b.bride_name);
        assert_eq!(a.bride_birth_date, b.bride_birth_date);
        assert_eq!(a.marriage_date, b.marriage_date);
        assert_eq!(a.registry_number, b.registry_number);
    }
}

#[test]
fn dataset_path_matches_naming_scheme() {
    let path = dataset::dataset_path("data".as_ref(), 8000);
    assert!(path.ends_with("input_8000.txt"));
}

#[test]
fn loading_fewer_records_than_present_is_fine() {
    let dir = TempDir::new().unwrap();
    let mut rng = StdRng::seed_from_u64(12);
    let records = dataset::generate(&mut rng, 10);

    let path = dataset::dataset_path(dir.path(), 10);
    dataset::write_file(&path, &records).unwrap();
    // The loader reads exactly as many records as asked, in file order.
    let loaded = dataset::load_file(&path, 4).unwrap();
    assert_eq!(loaded.len(), 4);
    assert_eq!(loaded[0].groom_name, records[0].groom_name);
}

#[test]
fn truncated_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input_2.txt");
    // One full record plus a dangling field.
    fs::write(&path, "Ivan 1980-01-01 Anna 1985-05-05 2020-01-01 001 Petr\n").unwrap();

    match dataset::load_file(&path, 2) {
        Err(BenchError::TruncatedDataset {
            expected, parsed, ..
        }) => {
            assert_eq!(expected, 2);
            assert_eq!(parsed, 1);
        }
        other => panic!("expected TruncatedDataset, got {:?}", other),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dataset::dataset_path(dir.path(), 100);
    match dataset::load_file(&path, 100) {
        Err(BenchError::Io(_)) => {}
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn generated_datasets_contain_duplicate_grooms() {
    let mut rng = StdRng::seed_from_u64(13);
    let records = dataset::generate(&mut rng, 1000);
    let keys = dataset::query_keys(&records);
    // The generated key space is only a few multiples of the record count,
    // so name collisions are all but certain at this size; the fixed seed
    // makes the ones this run produces stable.
    assert!(keys.len() < records.len());
    assert!(!keys.is_empty());
}
