//! This module provides the search structures the benchmark compares.

use crate::Record;

/// Common interface of every structure under measurement.
///
/// All four structures are populated from the same record sequence and
/// queried with the same groom-name key set, so the harness can drive them
/// through a single generic code path.
pub trait RecordIndex {
    /// Human-readable structure name used in the timing report.
    const NAME: &'static str;

    /// Inserts a record into the structure.
    ///
    /// Duplicate handling is structure-specific: the tree and the chained
    /// hash map keep every inserted record, the ordered map keeps the last
    /// one per groom name, the multimap keeps all of them grouped by name.
    fn insert(&mut self, record: Record);

    /// Looks up a record by groom name.
    ///
    /// Returns `None` when no record is found along the structure's search
    /// path. A miss is a normal outcome, never an error.
    fn search(&self, key: &str) -> Option<&Record>;
}

mod bst;
mod chained;
mod ordered;

pub use self::bst::RecordTree;
pub use self::chained::ChainedHashMap;
pub use self::ordered::{MultiIndex, OrderedIndex};
