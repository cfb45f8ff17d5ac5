//! Run configuration resolved from the command line.

use crate::prime::smallest_prime_at_least;
use crate::probe::Strategy;

pub const DEFAULT_CAPACITY: usize = 113;
pub const DEFAULT_SNAPSHOTS: usize = 10;

/// Which listing goes to stdout.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Output {
    /// Word frequencies, one per occupied slot.
    #[default]
    Frequencies,
    /// Collision statistics snapshots.
    Stats,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Table capacity, already rounded to a prime when requested by size.
    pub capacity: usize,
    pub strategy: Strategy,
    /// Number of statistics snapshots; always positive.
    pub snapshots: usize,
    pub output: Output,
    /// Dump every slot to stderr before the main output.
    pub dump_table: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            strategy: Strategy::LinearProbing,
            snapshots: DEFAULT_SNAPSHOTS,
            output: Output::Frequencies,
            dump_table: false,
        }
    }
}

impl Config {
    /// Use the first prime `>= requested` as the capacity.
    pub fn with_table_size(mut self, requested: usize) -> Self {
        self.capacity = smallest_prime_at_least(requested);
        self
    }

    /// Set the snapshot count; non-positive values leave the current one.
    pub fn with_snapshots(mut self, requested: i64) -> Self {
        if let Ok(n) = usize::try_from(requested) {
            if n > 0 {
                self.snapshots = n;
            }
        }
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = Config::default();
        assert_eq!(c.capacity, 113);
        assert_eq!(c.snapshots, 10);
        assert_eq!(c.strategy, Strategy::LinearProbing);
        assert_eq!(c.output, Output::Frequencies);
        assert!(!c.dump_table);
    }

    #[test]
    fn table_size_rounds_to_prime() {
        assert_eq!(Config::default().with_table_size(10).capacity, 11);
        assert_eq!(Config::default().with_table_size(0).capacity, 2);
        assert_eq!(Config::default().with_table_size(113).capacity, 113);
    }

    /// Invariant: zero or negative snapshot counts are ignored.
    #[test]
    fn snapshots_must_be_positive() {
        assert_eq!(Config::default().with_snapshots(4).snapshots, 4);
        assert_eq!(Config::default().with_snapshots(0).snapshots, 10);
        assert_eq!(Config::default().with_snapshots(-3).snapshots, 10);
    }
}
