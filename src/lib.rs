#![deny(missing_docs)]
//! A comparative micro-benchmark of associative search structures over
//! fixed-format registry records.
//!
//! Two hand-built structures, an unbalanced binary search tree and a
//! fixed-bucket chained hash map, are driven with the same bulk-insert and
//! keyed-lookup workloads as two `BTreeMap`-backed reference structures, so
//! their asymptotic behavior can be compared empirically across dataset
//! sizes.

pub use bench::{BenchConfig, PhaseReport, DEFAULT_BUCKET_COUNT, DEFAULT_SIZES};
pub use error::{BenchError, Result};
pub use indexes::{ChainedHashMap, MultiIndex, OrderedIndex, RecordIndex, RecordTree};
pub use record::Record;

pub mod bench;
pub mod dataset;
mod error;
pub mod indexes;
mod record;
pub mod sort;
