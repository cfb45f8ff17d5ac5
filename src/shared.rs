//! SharedWordTable: a `WordTable` behind one reader-writer lock.
//!
//! Inserts write the slot array and the collision history together, so
//! they take the lock exclusively. Lookups, dumps and statistics only read
//! and may overlap with each other, never with an insert.

use crate::probe::Strategy;
use crate::stats::{Snapshot, StatsReport};
use crate::table::{InsertError, WordTable};
use parking_lot::{RwLock, RwLockReadGuard};

#[derive(Debug)]
pub struct SharedWordTable {
    inner: RwLock<WordTable>,
}

impl SharedWordTable {
    pub fn new(capacity: usize, strategy: Strategy) -> Self {
        Self::from_table(WordTable::new(capacity, strategy))
    }

    pub fn from_table(table: WordTable) -> Self {
        Self {
            inner: RwLock::new(table),
        }
    }

    pub fn insert(&self, key: &str) -> Result<u64, InsertError> {
        self.inner.write().insert(key)
    }

    pub fn search(&self, key: &str) -> Option<u64> {
        self.inner.read().search(key)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn snapshots(&self, n: usize) -> Vec<Snapshot> {
        StatsReport::new(&self.inner.read(), n).snapshots()
    }

    /// Hold a read lock for a longer look, such as a full dump.
    pub fn read(&self) -> RwLockReadGuard<'_, WordTable> {
        self.inner.read()
    }

    pub fn into_inner(self) -> WordTable {
        self.inner.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    /// Invariant: concurrent inserts of overlapping words lose no counts and
    /// never place one key twice.
    #[test]
    fn concurrent_inserts_are_serialized() {
        let shared = Arc::new(SharedWordTable::new(101, Strategy::DoubleHashing));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for i in 0..250 {
                        shared.insert(&format!("w{}", i % 50)).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(shared.len(), 50);
        for i in 0..50 {
            assert_eq!(shared.search(&format!("w{i}")), Some(20));
        }
        let table = Arc::try_unwrap(shared).unwrap().into_inner();
        assert_eq!(table.collisions().len(), 50);
        assert_eq!(table.iter().map(|(_, f)| f).sum::<u64>(), 1000);
    }

    #[test]
    fn readers_see_consistent_stats() {
        let shared = SharedWordTable::new(5, Strategy::LinearProbing);
        assert!(shared.is_empty());
        for w in ["a", "b", "c", "d", "e"] {
            shared.insert(w).unwrap();
        }
        let snaps = shared.snapshots(5);
        assert_eq!(snaps.len(), 5);
        assert_eq!(shared.read().iter().count(), 5);
        assert_eq!(
            shared.insert("f"),
            Err(InsertError::TableFull { capacity: 5 })
        );
    }
}
