//! Collision statistics at regular fill levels.
//!
//! A snapshot at `percent` full looks at the first
//! `capacity * percent / 100` keys in insertion order and summarizes how
//! many probe steps they needed. This replays a prefix of the collision
//! history rather than the exact table state at that moment, which is
//! what the table's history can answer.

use crate::table::WordTable;
use core::fmt;

const RULE: &str = "------------------------------------------------------";

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub percent_full: usize,
    /// Number of history entries summarized.
    pub entries: usize,
    pub percent_at_home: f64,
    pub average_collisions: f64,
    pub max_collisions: usize,
}

impl Snapshot {
    /// Summarize the first `entries` values of `history`.
    ///
    /// Returns `None` for an empty prefix or when the history is shorter
    /// than `entries`.
    pub fn over(history: &[usize], entries: usize, percent_full: usize) -> Option<Self> {
        if entries == 0 || entries > history.len() {
            return None;
        }
        let prefix = &history[..entries];
        let at_home = prefix.iter().filter(|&&c| c == 0).count();
        let total: usize = prefix.iter().sum();
        let max_collisions = prefix.iter().copied().max().unwrap_or(0);
        Some(Self {
            percent_full,
            entries,
            percent_at_home: at_home as f64 * 100.0 / entries as f64,
            average_collisions: total as f64 / entries as f64,
            max_collisions,
        })
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>4} {:>10} {:>11.1} {:>10.2} {:>11}",
            self.percent_full,
            self.entries,
            self.percent_at_home,
            self.average_collisions,
            self.max_collisions
        )
    }
}

/// Snapshots at `100 * i / n` percent full for `i in 1..=n`, skipping
/// those whose prefix is empty or not yet filled.
pub fn snapshots(history: &[usize], capacity: usize, n: usize) -> Vec<Snapshot> {
    (1..=n)
        .filter_map(|i| {
            let percent = 100 * i / n;
            Snapshot::over(history, capacity * percent / 100, percent)
        })
        .collect()
}

/// Rendered statistics table for one `WordTable`.
pub struct StatsReport<'a> {
    table: &'a WordTable,
    snapshots: usize,
}

impl<'a> StatsReport<'a> {
    pub fn new(table: &'a WordTable, snapshots: usize) -> Self {
        Self { table, snapshots }
    }

    pub fn snapshots(&self) -> Vec<Snapshot> {
        snapshots(
            self.table.collisions(),
            self.table.capacity(),
            self.snapshots,
        )
    }
}

impl fmt::Display for StatsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n\n", self.table.strategy())?;
        writeln!(f, "Percent   Current    Percent    Average      Maximum")?;
        writeln!(f, " Full     Entries    At Home   Collisions   Collisions")?;
        writeln!(f, "{RULE}")?;
        for s in self.snapshots() {
            writeln!(f, "{s}")?;
        }
        write!(f, "{RULE}\n\n")
    }
}
