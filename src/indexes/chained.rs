use super::RecordIndex;
use crate::{BenchError, Record, Result};

/// A hash table with a fixed number of buckets and per-bucket chains.
///
/// Keys are groom names. The bucket count is set at construction and never
/// changes: there is no resizing or rehashing, so lookup cost degrades
/// linearly with chain length as the load factor grows. That degradation is
/// part of what the benchmark is meant to expose.
#[derive(Debug)]
pub struct ChainedHashMap {
    buckets: Vec<Vec<Record>>,
    len: usize,
}

impl ChainedHashMap {
    /// Creates a table with `bucket_count` buckets.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::ZeroBucketCount` when `bucket_count` is zero,
    /// since the hash reduction would otherwise divide by zero.
    pub fn new(bucket_count: usize) -> Result<ChainedHashMap> {
        if bucket_count == 0 {
            return Err(BenchError::ZeroBucketCount);
        }
        Ok(ChainedHashMap {
            buckets: vec![Vec::new(); bucket_count],
            len: 0,
        })
    }

    /// Number of records stored across all chains.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no records have been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets the table was constructed with.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket a key hashes to.
    ///
    /// The hash is a Horner polynomial over the key's bytes, reduced modulo
    /// the bucket count at every step rather than once at the end:
    /// `h = (h * 31 + byte) % bucket_count`. It is a pure function of the
    /// key and the bucket count, so the same key always lands in the same
    /// bucket across calls and across tables of equal size.
    pub fn bucket_index(&self, key: &str) -> usize {
        let n = self.buckets.len();
        key.bytes().fold(0, |h, b| (h * 31 + b as usize) % n)
    }

    /// Appends a record to its groom name's chain.
    ///
    /// Duplicate keys are allowed; nothing is overwritten.
    pub fn insert(&mut self, record: Record) {
        let idx = self.bucket_index(&record.groom_name);
        self.buckets[idx].push(record);
        self.len += 1;
    }

    /// Scans the key's chain and returns the first record whose groom name
    /// matches, or `None` when the chain is exhausted.
    ///
    /// With duplicate keys the first inserted record wins.
    pub fn search(&self, key: &str) -> Option<&Record> {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|record| record.groom_name == key)
    }

    /// Per-bucket chain lengths, longest chains being collision hot spots.
    pub fn chain_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().map(Vec::len)
    }
}

impl RecordIndex for ChainedHashMap {
    const NAME: &'static str = "Chained Hash Map";

    fn insert(&mut self, record: Record) {
        ChainedHashMap::insert(self, record)
    }

    fn search(&self, key: &str) -> Option<&Record> {
        ChainedHashMap::search(self, key)
    }
}
