//! `NodeInterner` - maps program labels to dense node ids.
//!
//! Labels are stored once, in first-seen order, and the hash table only keeps
//! `(hash, index)` pairs pointing into that storage. This gives:
//! - **Stable ids**: interned labels are never moved or removed, so a
//!   [`NodeId`] stays valid for the lifetime of the interner.
//! - **Deterministic order**: ids are assigned `0, 1, 2, ...` in insertion
//!   order regardless of the hasher's seed.
//! - **Allocation-free lookup**: [`NodeInterner::get_id`] takes `&str`.

use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::BuildHasher;

/// Dense identifier of a node within one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn new(index: usize) -> Self {
        debug_assert!(
            u32::try_from(index).is_ok(),
            "interner index overflow: too many interned labels"
        );
        Self(index as u32)
    }

    /// Returns the underlying index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Entry in the hash table.
#[derive(Clone, Copy, Debug)]
struct Entry {
    /// Cached hash of the label to speed up probing and resizing.
    hash: u64,
    /// Index into `labels`.
    index: usize,
}

/// Label interner with insertion-ordered ids.
#[derive(Clone)]
pub struct NodeInterner {
    labels: Vec<Box<str>>,
    /// Open addressing with linear probing; size is always a power of 2.
    buckets: Vec<Option<Entry>>,
    hash_builder: RandomState,
}

impl NodeInterner {
    /// Creates a new empty interner.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an interner sized for `capacity` labels.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = (capacity.saturating_mul(4) / 3 + 1).next_power_of_two().max(4);
        Self {
            labels: Vec::with_capacity(capacity),
            buckets: vec![None; cap],
            hash_builder: RandomState::new(),
        }
    }

    /// Number of interned labels.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if nothing has been interned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Resolves an id back to its label.
    #[inline]
    pub fn resolve(&self, id: NodeId) -> Option<&str> {
        self.labels.get(id.index()).map(AsRef::as_ref)
    }

    /// Iterates over `(id, label)` pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (NodeId, &str)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| (NodeId::new(i), label.as_ref()))
    }

    /// Doubles the hash table and reinserts cached entries.
    #[allow(clippy::cast_possible_truncation)]
    fn resize(&mut self) {
        let new_cap = self.buckets.len() * 2;
        let mut new_buckets = vec![None; new_cap];
        let mask = new_cap - 1;

        for entry in self.buckets.iter().flatten() {
            let mut idx = (entry.hash as usize) & mask;
            while new_buckets[idx].is_some() {
                idx = (idx + 1) & mask;
            }
            new_buckets[idx] = Some(*entry);
        }

        self.buckets = new_buckets;
    }

    /// Returns `Ok(label index)` if present, `Err(bucket)` with the free slot otherwise.
    ///
    /// The table is kept below 75% load, so probing always reaches an empty bucket.
    fn find_slot(&self, label: &str, hash: u64) -> Result<usize, usize> {
        let mask = self.buckets.len() - 1;
        #[allow(clippy::cast_possible_truncation)]
        let mut idx = (hash as usize) & mask;

        loop {
            match self.buckets[idx] {
                None => return Err(idx),
                Some(entry) if entry.hash == hash && &*self.labels[entry.index] == label => {
                    return Ok(entry.index);
                }
                Some(_) => idx = (idx + 1) & mask,
            }
        }
    }

    fn hash_label(&self, label: &str) -> u64 {
        self.hash_builder.hash_one(label)
    }

    /// Interns `label`, returning its id and whether it was newly inserted.
    pub fn intern_full(&mut self, label: &str) -> (NodeId, bool) {
        // Keep load under 75% counting the entry about to be inserted.
        if (self.labels.len() + 1) * 4 > self.buckets.len() * 3 {
            self.resize();
        }

        let hash = self.hash_label(label);
        match self.find_slot(label, hash) {
            Ok(idx) => (NodeId::new(idx), false),
            Err(slot) => {
                let idx = self.labels.len();
                self.labels.push(label.into());
                self.buckets[slot] = Some(Entry { hash, index: idx });
                (NodeId::new(idx), true)
            }
        }
    }

    /// Interns `label`, returning its id.
    ///
    /// Existing labels return the id they were first given; new labels get the next id.
    #[inline]
    pub fn intern(&mut self, label: &str) -> NodeId {
        self.intern_full(label).0
    }

    /// Looks up a label without inserting it.
    pub fn get_id(&self, label: &str) -> Option<NodeId> {
        let hash = self.hash_label(label);
        self.find_slot(label, hash).ok().map(NodeId::new)
    }
}

impl Default for NodeInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Two interners are equal when they hold the same labels in the same order.
impl PartialEq for NodeInterner {
    fn eq(&self, other: &Self) -> bool {
        self.labels == other.labels
    }
}

impl Eq for NodeInterner {}

impl fmt::Debug for NodeInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.labels.iter()).finish()
    }
}
