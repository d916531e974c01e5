use std::collections::BTreeMap;

use super::RecordIndex;
use crate::Record;

/// Reference ordered map keyed by groom name.
///
/// A thin wrapper over `BTreeMap<String, Record>` standing in for any
/// balanced ordered map with O(log n) insert and lookup. Keeps one record
/// per distinct groom name; inserting a duplicate key overwrites the
/// previous record (last-write-wins).
#[derive(Debug, Default)]
pub struct OrderedIndex {
    map: BTreeMap<String, Record>,
}

impl OrderedIndex {
    /// Creates an empty ordered index.
    pub fn new() -> OrderedIndex {
        OrderedIndex {
            map: BTreeMap::new(),
        }
    }

    /// Number of distinct groom names stored.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if no records have been inserted.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl RecordIndex for OrderedIndex {
    const NAME: &'static str = "Ordered Map (BTreeMap)";

    fn insert(&mut self, record: Record) {
        self.map.insert(record.groom_name.clone(), record);
    }

    fn search(&self, key: &str) -> Option<&Record> {
        self.map.get(key)
    }
}

/// Reference ordered multimap keyed by groom name.
///
/// Wraps `BTreeMap<String, Vec<Record>>`: every record is kept, grouped by
/// groom name in insertion order, mirroring a multimap's equal-range query.
#[derive(Debug, Default)]
pub struct MultiIndex {
    map: BTreeMap<String, Vec<Record>>,
    len: usize,
}

impl MultiIndex {
    /// Creates an empty multimap index.
    pub fn new() -> MultiIndex {
        MultiIndex {
            map: BTreeMap::new(),
            len: 0,
        }
    }

    /// Total number of records stored, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no records have been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All records stored under `key`, in insertion order.
    pub fn records(&self, key: &str) -> &[Record] {
        self.map.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl RecordIndex for MultiIndex {
    const NAME: &'static str = "Ordered Multimap (BTreeMap)";

    fn insert(&mut self, record: Record) {
        self.map
            .entry(record.groom_name.clone())
            .or_insert_with(Vec::new)
            .push(record);
        self.len += 1;
    }

    fn search(&self, key: &str) -> Option<&Record> {
        self.map.get(key).and_then(|records| records.first())
    }
}
