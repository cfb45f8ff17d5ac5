//! Text output: the frequency listing and the raw per-slot dump.

use crate::table::WordTable;
use std::io::{self, Write};

/// Write `"{freq:<4} {word}"` for every occupied slot, in slot order.
pub fn write_frequencies<W: Write>(table: &WordTable, out: &mut W) -> io::Result<()> {
    for (word, freq) in table {
        writeln!(out, "{freq:<4} {word}")?;
    }
    Ok(())
}

/// Write every slot with its frequency and the collision count of the key
/// stored there. Empty slots show zeros and no word.
pub fn write_table_dump<W: Write>(table: &WordTable, out: &mut W) -> io::Result<()> {
    writeln!(out, "  Pos  Freq  Stats  Word")?;
    writeln!(out, "{}", "-".repeat(40))?;
    for (pos, slot) in table.slots() {
        let (freq, stats, word) = slot
            .map(|e| (e.frequency, e.collisions, e.key))
            .unwrap_or((0, 0, ""));
        writeln!(out, "{pos:>5} {freq:>5} {stats:>5}   {word}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::Strategy;

    fn sample() -> WordTable {
        let mut t = WordTable::new(3, Strategy::LinearProbing);
        // "a" (97) and "d" (100) both home at slot 1; "d" moves to 2.
        for w in ["a", "d", "a", "a"] {
            t.insert(w).unwrap();
        }
        t
    }

    #[test]
    fn frequency_listing() {
        let mut out = Vec::new();
        write_frequencies(&sample(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "3    a\n1    d\n");
    }

    #[test]
    fn dump_layout() {
        let mut out = Vec::new();
        write_table_dump(&sample(), &mut out).unwrap();
        let expected = format!(
            "  Pos  Freq  Stats  Word\n{}\n    0     0     0   \n    1     3     0   a\n    2     1     1   d\n",
            "-".repeat(40)
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    /// Invariant: dumping twice without inserts yields identical output.
    #[test]
    fn dump_is_idempotent() {
        let t = sample();
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_table_dump(&t, &mut first).unwrap();
        write_table_dump(&t, &mut second).unwrap();
        assert_eq!(first, second);
    }
}
