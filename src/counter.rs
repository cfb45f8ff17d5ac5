//! Feeds a word stream into a `WordTable`.

use crate::error::Result;
use crate::table::{InsertError, WordTable};
use crate::tokenizer::Words;
use std::io::Read;
use tracing::{debug, warn};

/// What happened while counting one input stream.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CountSummary {
    /// Words read from the input.
    pub words: usize,
    /// Words dropped because the table had no room for a new key.
    pub rejected: usize,
}

/// Policy for words that do not fit.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum OnFull {
    /// Drop the word, log it and keep reading.
    #[default]
    Skip,
    /// Stop at the first rejected word and return the error.
    Fail,
}

/// Insert every word of `input` into `table`.
///
/// Table-full rejections are never silent: they are logged, counted in the
/// summary, and with `OnFull::Fail` returned as an error.
pub fn count_words<R: Read>(
    table: &mut WordTable,
    input: R,
    on_full: OnFull,
) -> Result<CountSummary> {
    let mut summary = CountSummary::default();
    for word in Words::new(input) {
        let word = word?;
        summary.words += 1;
        match table.insert(&word) {
            Ok(_) => {}
            Err(e @ InsertError::TableFull { capacity }) => {
                if on_full == OnFull::Fail {
                    return Err(e.into());
                }
                if summary.rejected == 0 {
                    warn!(word = %word, capacity, "table full, dropping new words");
                }
                summary.rejected += 1;
            }
        }
    }
    if summary.rejected > 0 {
        warn!(
            rejected = summary.rejected,
            capacity = table.capacity(),
            "words dropped; use a larger table size"
        );
    }
    debug!(
        words = summary.words,
        distinct = table.len(),
        capacity = table.capacity(),
        "finished counting"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::probe::Strategy;

    #[test]
    fn counts_every_word() {
        let mut t = WordTable::new(13, Strategy::LinearProbing);
        let s = count_words(&mut t, "a b a C c c".as_bytes(), OnFull::Skip).unwrap();
        assert_eq!(s, CountSummary { words: 6, rejected: 0 });
        assert_eq!(t.search("a"), Some(2));
        assert_eq!(t.search("b"), Some(1));
        assert_eq!(t.search("c"), Some(3));
        assert_eq!(t.len(), 3);
    }

    /// Invariant: with `Skip`, new words past capacity are counted as
    /// rejected while repeats of stored words keep counting.
    #[test]
    fn skip_counts_rejections() {
        let mut t = WordTable::new(2, Strategy::DoubleHashing);
        let s = count_words(&mut t, "x y z x w".as_bytes(), OnFull::Skip).unwrap();
        assert_eq!(s.words, 5);
        assert_eq!(s.rejected, 2);
        assert_eq!(t.search("x"), Some(2));
        assert!(t.is_full());
    }

    #[test]
    fn fail_stops_at_first_rejection() {
        let mut t = WordTable::new(1, Strategy::LinearProbing);
        let err = count_words(&mut t, "one two one".as_bytes(), OnFull::Fail).unwrap_err();
        assert!(matches!(
            err,
            Error::Insert(InsertError::TableFull { capacity: 1 })
        ));
        assert_eq!(t.search("one"), Some(1));
    }
}
