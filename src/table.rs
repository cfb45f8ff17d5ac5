//! WordTable: fixed-capacity open-addressing table of word frequencies.
//!
//! Slots are a boxed slice sized once at construction. A slot is either
//! empty or owns one key and its count; occupied slots are never cleared.
//! Alongside the slots the table keeps an append-only collision history,
//! one entry per distinct key in insertion order. Each occupied slot
//! records the ordinal of its key in that history, so per-slot and
//! per-insertion views never get mixed up.

use crate::probe::{word_hash, ProbeSeq, Strategy};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug)]
struct Entry {
    key: Box<str>,
    frequency: u64,
    // position of this key in `WordTable::collisions`
    ordinal: usize,
}

/// Insertion failure. A table-full rejection leaves the table unchanged.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum InsertError {
    #[error("hash table is full: no free slot among {capacity} probes")]
    TableFull { capacity: usize },
}

/// Read-only view of one occupied slot.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EntryRef<'a> {
    pub key: &'a str,
    pub frequency: u64,
    /// Probe steps it took to place this key.
    pub collisions: usize,
}

enum Lookup {
    Found(usize),
    Vacant { index: usize, collisions: usize },
    Exhausted,
}

#[derive(Debug)]
pub struct WordTable {
    strategy: Strategy,
    slots: Box<[Option<Entry>]>,
    collisions: Vec<usize>,
}

impl WordTable {
    /// Create an empty table with exactly `capacity` slots.
    ///
    /// Double hashing only guarantees that every slot is reachable when
    /// `capacity` is prime; see `prime::smallest_prime_at_least`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, strategy: Strategy) -> Self {
        assert!(capacity > 0, "WordTable capacity must be positive");
        debug!(capacity, %strategy, "creating word table");
        Self {
            strategy,
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            collisions: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
    pub fn len(&self) -> usize {
        self.collisions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.collisions.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Collision counts of every distinct key, in insertion order.
    pub fn collisions(&self) -> &[usize] {
        &self.collisions
    }

    fn lookup(&self, key: &str) -> Lookup {
        let hash = word_hash(key);
        for (collisions, index) in ProbeSeq::new(&self.strategy, hash, self.capacity()) {
            match &self.slots[index] {
                None => return Lookup::Vacant { index, collisions },
                Some(e) if &*e.key == key => return Lookup::Found(index),
                Some(_) => {}
            }
        }
        Lookup::Exhausted
    }

    /// Count one occurrence of `key` and return its updated frequency.
    ///
    /// A new key is copied into the first empty slot of its probe sequence
    /// and starts at 1; an existing key keeps its slot and history entry.
    pub fn insert(&mut self, key: &str) -> Result<u64, InsertError> {
        match self.lookup(key) {
            Lookup::Found(index) => {
                let entry = self.slots[index]
                    .as_mut()
                    .expect("lookup must only report occupied slots as found");
                entry.frequency += 1;
                Ok(entry.frequency)
            }
            Lookup::Vacant { index, collisions } => {
                if collisions > 0 {
                    trace!(key, index, collisions, "placed after collisions");
                }
                self.slots[index] = Some(Entry {
                    key: key.into(),
                    frequency: 1,
                    ordinal: self.collisions.len(),
                });
                self.collisions.push(collisions);
                Ok(1)
            }
            Lookup::Exhausted => Err(InsertError::TableFull {
                capacity: self.capacity(),
            }),
        }
    }

    /// Slot index holding `key`, if present.
    pub fn find(&self, key: &str) -> Option<usize> {
        match self.lookup(key) {
            Lookup::Found(index) => Some(index),
            Lookup::Vacant { .. } | Lookup::Exhausted => None,
        }
    }

    /// Stored frequency of `key`, if present.
    pub fn search(&self, key: &str) -> Option<u64> {
        self.find(key)
            .and_then(|i| self.slots[i].as_ref())
            .map(|e| e.frequency)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// The slot at `index`: `None` when out of range, `Some(None)` when empty.
    pub fn slot(&self, index: usize) -> Option<Option<EntryRef<'_>>> {
        self.slots
            .get(index)
            .map(|s| s.as_ref().map(|e| self.entry_ref(e)))
    }

    fn entry_ref<'a>(&'a self, e: &'a Entry) -> EntryRef<'a> {
        EntryRef {
            key: &e.key,
            frequency: e.frequency,
            collisions: self.collisions[e.ordinal],
        }
    }

    /// Every slot in index order, empty ones included.
    pub fn slots(&self) -> Slots<'_> {
        Slots {
            table: self,
            it: self.slots.iter().enumerate(),
        }
    }

    /// Occupied slots in index order as `(key, frequency)`.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            it: self.slots.iter(),
        }
    }
}

/// Iterator over all slots of a `WordTable`.
pub struct Slots<'a> {
    table: &'a WordTable,
    it: core::iter::Enumerate<core::slice::Iter<'a, Option<Entry>>>,
}

impl<'a> Iterator for Slots<'a> {
    type Item = (usize, Option<EntryRef<'a>>);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let table = self.table;
        self.it
            .next()
            .map(|(i, s)| (i, s.as_ref().map(|e| table.entry_ref(e))))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl ExactSizeIterator for Slots<'_> {}

/// Iterator over occupied entries of a `WordTable`.
pub struct Iter<'a> {
    it: core::slice::Iter<'a, Option<Entry>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, u64);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it
            .find_map(Option::as_ref)
            .map(|e| (&*e.key, e.frequency))
    }
}

impl<'a> IntoIterator for &'a WordTable {
    type Item = (&'a str, u64);
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
