//! The benchmark harness.
//!
//! For every configured dataset size the harness loads the records once,
//! derives the distinct groom names as the query workload, then builds each
//! structure from the same records and times two phases per structure: bulk
//! insertion of all records and one lookup per distinct key. One line per
//! structure is printed to stdout; lookup results themselves are discarded.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::{error, info};

use crate::dataset;
use crate::indexes::{ChainedHashMap, MultiIndex, OrderedIndex, RecordIndex, RecordTree};
use crate::{BenchError, Record, Result};

/// Dataset sizes measured when the caller does not supply a list.
pub const DEFAULT_SIZES: &[usize] = &[100, 500, 1000, 2000, 8000, 10000, 100_000];

/// Bucket count used for the chained hash map unless overridden.
pub const DEFAULT_BUCKET_COUNT: usize = 100;

/// Configuration of one benchmark run.
#[derive(Debug)]
pub struct BenchConfig {
    /// Directory holding the `input_{size}.txt` dataset files.
    pub data_dir: PathBuf,
    /// Dataset sizes to measure, in order.
    pub sizes: Vec<usize>,
    /// Bucket count for the chained hash map.
    pub bucket_count: usize,
}

/// Runs `f` and returns its result together with the elapsed wall-clock
/// time, measured with a monotonic clock bracketing the call.
pub fn timed<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Timing of one structure's insert and lookup phases.
#[derive(Debug)]
pub struct PhaseReport {
    /// Name of the measured structure.
    pub name: &'static str,
    /// Elapsed wall-clock time of the bulk insert phase.
    pub insert: Duration,
    /// Elapsed wall-clock time of the bulk lookup phase.
    pub lookup: Duration,
    /// Number of query keys the lookup phase found.
    pub hits: usize,
}

impl PhaseReport {
    /// Prints the report as one stdout line.
    pub fn print(&self) {
        println!(
            "{:<28} insert {:>12.6} s    lookup {:>12.6} s",
            self.name,
            self.insert.as_secs_f64(),
            self.lookup.as_secs_f64()
        );
    }
}

/// Populates `index` with every record, then looks up every query key,
/// timing both phases.
///
/// Hits are counted (and reported) so the lookup loop has an observable
/// result even though individual search results are thrown away.
pub fn bench_index<I: RecordIndex>(
    mut index: I,
    records: &[Record],
    keys: &BTreeSet<String>,
) -> PhaseReport {
    let (_, insert) = timed(|| {
        for record in records {
            index.insert(record.clone());
        }
    });
    let (hits, lookup) = timed(|| {
        let mut hits = 0;
        for key in keys {
            if index.search(key).is_some() {
                hits += 1;
            }
        }
        hits
    });
    PhaseReport {
        name: I::NAME,
        insert,
        lookup,
        hits,
    }
}

/// Measures every structure for a single dataset size.
///
/// # Errors
///
/// Fails when the dataset file is missing or truncated; the structures
/// themselves have no failure modes past construction.
pub fn run_size(config: &BenchConfig, size: usize) -> Result<()> {
    let path = dataset::dataset_path(&config.data_dir, size);
    let records = dataset::load_file(&path, size)?;
    let keys = dataset::query_keys(&records);
    info!(
        "loaded {} records ({} distinct groom names) from {}",
        records.len(),
        keys.len(),
        path.display()
    );

    println!("Dataset size: {}", size);
    let reports = vec![
        bench_index(RecordTree::new(), &records, &keys),
        bench_index(ChainedHashMap::new(config.bucket_count)?, &records, &keys),
        bench_index(OrderedIndex::new(), &records, &keys),
        bench_index(MultiIndex::new(), &records, &keys),
    ];
    for report in &reports {
        report.print();
        info!(
            "{}: {} of {} keys found",
            report.name,
            report.hits,
            keys.len()
        );
    }
    println!();
    Ok(())
}

/// Runs the benchmark for every configured size.
///
/// A size whose dataset cannot be loaded is logged and skipped; the
/// remaining sizes still run. The run as a whole fails if any size failed.
pub fn run(config: &BenchConfig) -> Result<()> {
    if config.bucket_count == 0 {
        return Err(BenchError::ZeroBucketCount);
    }
    let mut failed = 0;
    for &size in &config.sizes {
        if let Err(e) = run_size(config, size) {
            error!("skipping size {}: {}", size, e);
            failed += 1;
        }
    }
    if failed == 0 {
        Ok(())
    } else {
        Err(BenchError::StringError(format!(
            "{} of {} dataset sizes failed",
            failed,
            config.sizes.len()
        )))
    }
}
