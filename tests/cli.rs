use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

#[test]
fn every_binary_prints_usage() {
    for bin in &["regbench", "reggen", "regsort"] {
        Command::cargo_bin(bin)
            .unwrap()
            .arg("--help")
            .assert()
            .success()
            .stdout(contains("USAGE").and(contains("--data-dir")));
    }
}

#[test]
fn generate_then_bench_one_size() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().to_str().unwrap();

    Command::cargo_bin("reggen")
        .unwrap()
        .args(&["--data-dir", data_dir, "--sizes", "100", "--seed", "7"])
        .assert()
        .success();
    assert!(dir.path().join("input_100.txt").exists());

    Command::cargo_bin("regbench")
        .unwrap()
        .args(&["--data-dir", data_dir, "--sizes", "100"])
        .assert()
        .success()
        .stdout(
            contains("Dataset size: 100")
                .and(contains("Binary Search Tree"))
                .and(contains("Chained Hash Map"))
                .and(contains("Ordered Map (BTreeMap)"))
                .and(contains("Ordered Multimap (BTreeMap)")),
        );
}

#[test]
fn bench_fails_when_every_dataset_is_missing() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("regbench")
        .unwrap()
        .args(&["--data-dir", dir.path().to_str().unwrap(), "--sizes", "100"])
        .assert()
        .failure();
}

#[test]
fn bench_skips_a_missing_size_but_measures_the_rest() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().to_str().unwrap();

    Command::cargo_bin("reggen")
        .unwrap()
        .args(&["--data-dir", data_dir, "--sizes", "100", "--seed", "7"])
        .assert()
        .success();

    // Size 500 has no file: the run reports failure but still prints the
    // measurements for size 100.
    Command::cargo_bin("regbench")
        .unwrap()
        .args(&["--data-dir", data_dir, "--sizes", "100", "--sizes", "500"])
        .assert()
        .failure()
        .stdout(contains("Dataset size: 100"));
}

#[test]
fn bench_rejects_zero_buckets() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("regbench")
        .unwrap()
        .args(&[
            "--data-dir",
            dir.path().to_str().unwrap(),
            "--sizes",
            "100",
            "--buckets",
            "0",
        ])
        .assert()
        .failure();
}

#[test]
fn sort_bench_writes_sorted_output() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().to_str().unwrap();

    Command::cargo_bin("reggen")
        .unwrap()
        .args(&["--data-dir", data_dir, "--sizes", "100", "--seed", "7"])
        .assert()
        .success();

    Command::cargo_bin("regsort")
        .unwrap()
        .args(&["--data-dir", data_dir, "--sizes", "100"])
        .assert()
        .success()
        .stdout(
            contains("Selection sort 100:")
                .and(contains("Quick sort 100:"))
                .and(contains("Shaker sort 100:")),
        );
    assert!(dir.path().join("output_100.txt").exists());
}
