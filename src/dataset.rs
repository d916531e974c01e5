//! Dataset files: loading, query-key derivation and random generation.
//!
//! A dataset is a plain text file of whitespace-separated fields, six per
//! record, in the order groom name, groom birth date, bride name, bride
//! birth date, marriage date, registry number. The file for a given size
//! is named `input_{size}.txt` inside the data directory.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::{BenchError, Record, Result};

/// Path of the dataset file holding `size` records.
pub fn dataset_path(dir: &Path, size: usize) -> PathBuf {
    dir.join(format!("input_{}.txt", size))
}

/// Loads exactly `size` records from a dataset file, in file order.
///
/// # Errors
///
/// A missing or unreadable file is an IO error. A file with fewer than
/// `size * 6` fields yields `BenchError::TruncatedDataset`. Field contents
/// are not validated.
pub fn load_file(path: &Path, size: usize) -> Result<Vec<Record>> {
    let text = fs::read_to_string(path)?;
    let mut fields = text.split_whitespace();
    let mut records = Vec::with_capacity(size);
    for parsed in 0..size {
        match next_record(&mut fields) {
            Some(record) => records.push(record),
            None => {
                return Err(BenchError::TruncatedDataset {
                    path: path.display().to_string(),
                    expected: size,
                    parsed,
                });
            }
        }
    }
    Ok(records)
}

fn next_record<'a>(fields: &mut impl Iterator<Item = &'a str>) -> Option<Record> {
    Some(Record {
        groom_name: fields.next()?.to_owned(),
        groom_birth_date: fields.next()?.to_owned(),
        bride_name: fields.next()?.to_owned(),
        bride_birth_date: fields.next()?.to_owned(),
        marriage_date: fields.next()?.to_owned(),
        registry_number: fields.next()?.to_owned(),
    })
}

/// Distinct groom names of a record set.
///
/// This is the lookup workload: the same key set is replayed against every
/// structure built from the same records, so phase timings are comparable.
/// Every key is present in the structures by construction.
pub fn query_keys(records: &[Record]) -> BTreeSet<String> {
    records
        .iter()
        .map(|record| record.groom_name.clone())
        .collect()
}

const GROOM_NAMES: &[&str] = &[
    "Ivan", "Petr", "Oleg", "Sergey", "Andrey", "Dmitry", "Nikolay", "Mikhail", "Alexey", "Pavel",
];
const BRIDE_NAMES: &[&str] = &[
    "Anna", "Maria", "Olga", "Elena", "Irina", "Natalia", "Svetlana", "Tatiana", "Ekaterina",
    "Daria",
];

/// Generates `count` random records.
///
/// Groom names combine a small base-name pool with a numeric suffix below
/// `count / 2 + 1`. The key space is a few multiples of `count`, so larger
/// datasets repeat names by chance (birthday collisions); the duplicate
/// keys exercise the collision chains and the multimap's per-key grouping.
/// Registry numbers are random rather than sequential, which keeps the
/// generated tree shape non-degenerate.
pub fn generate<R: Rng>(rng: &mut R, count: usize) -> Vec<Record> {
    let name_pool = count / 2 + 1;
    (0..count)
        .map(|_| Record {
            groom_name: random_name(rng, GROOM_NAMES, name_pool),
            groom_birth_date: random_date(rng, 1950, 2000),
            bride_name: random_name(rng, BRIDE_NAMES, name_pool),
            bride_birth_date: random_date(rng, 1950, 2000),
            marriage_date: random_date(rng, 2000, 2024),
            registry_number: format!("{:08}", rng.gen_range(0, 100_000_000u32)),
        })
        .collect()
}

fn random_name<R: Rng>(rng: &mut R, pool: &[&str], suffixes: usize) -> String {
    format!(
        "{}_{}",
        pool[rng.gen_range(0, pool.len())],
        rng.gen_range(0, suffixes)
    )
}

fn random_date<R: Rng>(rng: &mut R, from_year: u32, to_year: u32) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        rng.gen_range(from_year, to_year),
        rng.gen_range(1, 13u32),
        rng.gen_range(1, 29u32)
    )
}

/// Writes records to a dataset file, one record per line.
pub fn write_file(path: &Path, records: &[Record]) -> Result<()> {
    let mut text = String::new();
    for record in records {
        text.push_str(&format!(
            "{} {} {} {} {} {}\n",
            record.groom_name,
            record.groom_birth_date,
            record.bride_name,
            record.bride_birth_date,
            record.marriage_date,
            record.registry_number
        ));
    }
    fs::write(path, text)?;
    Ok(())
}
