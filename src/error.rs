use failure::Fail;
use std::io;

/// Error type for regbench.
#[derive(Fail, Debug)]
pub enum BenchError {
    /// IO error, typically a missing or unreadable dataset file.
    #[fail(display = "IO error: {}", _0)]
    Io(#[cause] io::Error),
    /// The dataset file ran out of fields before yielding the requested
    /// number of records.
    #[fail(
        display = "truncated dataset {}: expected {} records, parsed {}",
        path, expected, parsed
    )]
    TruncatedDataset {
        /// Path of the offending dataset file.
        path: String,
        /// Number of records the caller asked for.
        expected: usize,
        /// Number of complete records actually present.
        parsed: usize,
    },
    /// A chained hash map cannot be built with zero buckets.
    #[fail(display = "bucket count must be greater than zero")]
    ZeroBucketCount,
    /// Error with a string message.
    #[fail(display = "{}", _0)]
    StringError(String),
}

impl From<io::Error> for BenchError {
    fn from(err: io::Error) -> BenchError {
        BenchError::Io(err)
    }
}

/// Result type for regbench.
pub type Result<T> = std::result::Result<T, BenchError>;
