//! wordtable: word frequency counting over a fixed-capacity,
//! open-addressing hash table with collision instrumentation.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: count distinct words with a table whose capacity never changes,
//!   and report how well each collision strategy placed the keys.
//! - Layers:
//!   - `probe`: the 31-multiplier string hash, home slot, and the `Step`
//!     trait with `LinearStep` and `DoubleHashStep`. `ProbeSeq` is the one
//!     bounded walk both strategies share.
//!   - `WordTable`: slot array plus an append-only collision history in
//!     insertion order. Insert, search and slot iteration.
//!   - `stats`: snapshots over prefixes of the collision history and the
//!     fixed-width report.
//!   - `tokenizer`, `prime`, `report`, `counter`, `app`: reading words,
//!     sizing the table, printing, and gluing a run together.
//!   - `SharedWordTable`: the table behind one `RwLock` for callers that
//!     need to share it across threads.
//!
//! Constraints
//! - No resize and no removal. Occupied slots stay occupied, which is what
//!   lets a probe stop at the first empty slot.
//! - Every probe walk is bounded by `capacity` steps; a new key that finds
//!   no empty slot in that many steps is rejected with
//!   `InsertError::TableFull`, never dropped silently.
//! - Double hashing relies on a prime capacity to reach every slot; the
//!   command line rounds the requested size up with
//!   `prime::smallest_prime_at_least`.
//!
//! Collision history
//! - Entry `i` is the number of probe steps the i-th distinct key needed,
//!   not a property of slot `i`. Each slot keeps its key's ordinal so the
//!   raw dump can show the count for the key actually stored there.
//! - Statistics replay a prefix of that history: the row at 40% full
//!   summarizes the first `capacity * 40 / 100` keys inserted.
//!
//! Notes and non-goals
//! - Keys are owned `Box<str>` copies; frequencies are `u64`.
//! - `WordTable` itself has no interior mutability; `&mut` is the lock.

pub mod app;
pub mod config;
pub mod counter;
pub mod error;
pub mod logging;
pub mod prime;
pub mod probe;
pub mod report;
pub mod shared;
pub mod stats;
mod table;
mod table_proptest;
pub mod tokenizer;

// Public surface
pub use error::{Error, Result};
pub use probe::Strategy;
pub use shared::SharedWordTable;
pub use stats::{Snapshot, StatsReport};
pub use table::{EntryRef, InsertError, Iter, Slots, WordTable};
