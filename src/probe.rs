//! Key hashing and probe sequences.
//!
//! Every key is hashed once with a 31-multiplier polynomial over its bytes.
//! The hash picks the home slot; a `Step` implementation turns the same
//! hash into the stride used to walk away from the home slot on collision.
//! Both strategies share one probe walk (`ProbeSeq`), so the insert and
//! search loops in `table` never care which strategy is active.

use core::fmt;

/// Polynomial rolling hash: `h = h * 31 + byte`, 32-bit wraparound, seed 0.
#[inline]
pub fn word_hash(key: &str) -> u32 {
    key.bytes()
        .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(u32::from(b)))
}

/// First slot probed for `hash` in a table of `capacity` slots.
#[inline]
pub fn home_slot(hash: u32, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    hash as usize % capacity
}

/// A "next index" rule: how far to advance after a collision.
///
/// The stride must lie in `1..capacity` (or be 1 when `capacity == 1`).
/// When it is coprime with `capacity`, the walk visits every slot exactly
/// once in `capacity` probes.
pub trait Step {
    fn stride(&self, hash: u32, capacity: usize) -> usize;
}

/// Linear probing: always advance by one slot.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LinearStep;

impl Step for LinearStep {
    #[inline]
    fn stride(&self, _hash: u32, _capacity: usize) -> usize {
        1
    }
}

/// Double hashing: advance by `1 + hash mod (capacity - 1)`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct DoubleHashStep;

impl Step for DoubleHashStep {
    #[inline]
    fn stride(&self, hash: u32, capacity: usize) -> usize {
        if capacity <= 1 {
            // A single slot has nowhere else to go.
            return 1;
        }
        1 + hash as usize % (capacity - 1)
    }
}

/// Collision-resolution strategy, fixed when a table is created.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Strategy {
    #[default]
    LinearProbing,
    DoubleHashing,
}

impl Step for Strategy {
    #[inline]
    fn stride(&self, hash: u32, capacity: usize) -> usize {
        match self {
            Strategy::LinearProbing => LinearStep.stride(hash, capacity),
            Strategy::DoubleHashing => DoubleHashStep.stride(hash, capacity),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::LinearProbing => "Linear Probing",
            Strategy::DoubleHashing => "Double Hashing",
        })
    }
}

/// Bounded walk over slot indices for one key.
///
/// Yields `(collisions, index)` pairs: the home slot first with zero
/// collisions, then one stride further per step, stopping after `capacity`
/// positions.
#[derive(Clone, Debug)]
pub struct ProbeSeq {
    index: usize,
    stride: usize,
    capacity: usize,
    taken: usize,
}

impl ProbeSeq {
    pub fn new<S: Step + ?Sized>(step: &S, hash: u32, capacity: usize) -> Self {
        Self {
            index: home_slot(hash, capacity),
            stride: step.stride(hash, capacity),
            capacity,
            taken: 0,
        }
    }

    pub fn stride(&self) -> usize {
        self.stride
    }
}

impl Iterator for ProbeSeq {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.taken >= self.capacity {
            return None;
        }
        let item = (self.taken, self.index);
        self.taken += 1;
        self.index = (self.index + self.stride) % self.capacity;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.capacity - self.taken;
        (left, Some(left))
    }
}

impl ExactSizeIterator for ProbeSeq {}
