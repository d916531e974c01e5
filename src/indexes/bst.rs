use super::RecordIndex;
use crate::Record;

/// An unbalanced binary search tree over [`Record`]s.
///
/// Nodes live in an arena (`Vec<Node>`) and reference their children by
/// index, so the tree owns all of its nodes and releases them together when
/// it is dropped. The shape is determined entirely by insertion order and
/// the record total order. There is no rebalancing, so a monotonic
/// insertion sequence degenerates the tree into a linked list.
///
/// Insertion orders nodes by the full `(registry_number, marriage_date,
/// groom_name)` comparison, but [`RecordTree::search`] steers by groom name
/// alone. Because the two orders can disagree at any node, a search may
/// descend into the wrong subtree and report a record as absent even though
/// it was inserted. This mismatch is deliberate measured behavior, not a
/// bug to fix; `tests/indexes.rs` pins it.
#[derive(Debug, Default)]
pub struct RecordTree {
    nodes: Vec<Node>,
    root: Option<usize>,
}

#[derive(Debug)]
struct Node {
    record: Record,
    left: Option<usize>,
    right: Option<usize>,
}

impl RecordTree {
    /// Creates an empty tree.
    pub fn new() -> RecordTree {
        RecordTree {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Number of records in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree holds no records.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts a record, keeping the binary-search-tree invariant under the
    /// record total order.
    ///
    /// Records comparing less than the current node go left, everything
    /// else (including equal records) goes right, so duplicates are kept.
    pub fn insert(&mut self, record: Record) {
        let mut cur = match self.root {
            Some(root) => root,
            None => {
                self.root = Some(self.alloc(record));
                return;
            }
        };
        loop {
            let go_left = record < self.nodes[cur].record;
            let child = if go_left {
                self.nodes[cur].left
            } else {
                self.nodes[cur].right
            };
            match child {
                Some(next) => cur = next,
                None => {
                    let leaf = self.alloc(record);
                    let node = &mut self.nodes[cur];
                    if go_left {
                        node.left = Some(leaf);
                    } else {
                        node.right = Some(leaf);
                    }
                    return;
                }
            }
        }
    }

    /// Searches for a record by groom name.
    ///
    /// The descent compares `key` against each node's groom name only. When
    /// groom-name order disagrees with the insertion order at some node on
    /// the path, the search walks into the wrong subtree and returns `None`
    /// for a record that is actually present. Callers cannot distinguish
    /// such a false negative from a genuinely absent key.
    pub fn search(&self, key: &str) -> Option<&Record> {
        let mut cur = self.root;
        while let Some(i) = cur {
            let node = &self.nodes[i];
            if node.record.groom_name == key {
                return Some(&node.record);
            }
            cur = if key < node.record.groom_name.as_str() {
                node.left
            } else {
                node.right
            };
        }
        None
    }

    /// Iterates the records in non-decreasing record order.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder {
            tree: self,
            stack: Vec::new(),
            next: self.root,
        }
    }

    fn alloc(&mut self, record: Record) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(Node {
            record,
            left: None,
            right: None,
        });
        idx
    }
}

impl RecordIndex for RecordTree {
    const NAME: &'static str = "Binary Search Tree";

    fn insert(&mut self, record: Record) {
        RecordTree::insert(self, record)
    }

    fn search(&self, key: &str) -> Option<&Record> {
        RecordTree::search(self, key)
    }
}

/// In-order traversal over a [`RecordTree`].
#[derive(Debug)]
pub struct InOrder<'a> {
    tree: &'a RecordTree,
    stack: Vec<usize>,
    next: Option<usize>,
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<&'a Record> {
        while let Some(i) = self.next {
            self.stack.push(i);
            self.next = self.tree.nodes[i].left;
        }
        let i = self.stack.pop()?;
        self.next = self.tree.nodes[i].right;
        Some(&self.tree.nodes[i].record)
    }
}
