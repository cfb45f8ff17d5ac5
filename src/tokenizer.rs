//! Splits a byte stream into lowercase ASCII alphanumeric words.
//!
//! Rules:
//! - non-alphanumeric bytes before a word are skipped;
//! - inside a word an apostrophe is dropped and does not end the word,
//!   so `don't` reads as `dont`;
//! - any other non-alphanumeric byte ends the word and is consumed;
//! - a word stops at `max_len` bytes, and whatever follows starts the
//!   next word.

use std::io::{self, Bytes, Read};

/// Longest word produced by default.
pub const MAX_WORD_LEN: usize = 255;

/// Iterator of words read from `R`, one byte at a time. Wrap unbuffered
/// readers in a `BufReader`.
pub struct Words<R> {
    bytes: Bytes<R>,
    max_len: usize,
}

impl<R: Read> Words<R> {
    pub fn new(reader: R) -> Self {
        Self::with_max_len(reader, MAX_WORD_LEN)
    }

    /// # Panics
    ///
    /// Panics if `max_len` is zero.
    pub fn with_max_len(reader: R, max_len: usize) -> Self {
        assert!(max_len > 0, "max_len must be positive");
        Self {
            bytes: reader.bytes(),
            max_len,
        }
    }

    fn next_word(&mut self) -> io::Result<Option<String>> {
        let first = loop {
            match self.bytes.next().transpose()? {
                None => return Ok(None),
                Some(b) if b.is_ascii_alphanumeric() => break b,
                Some(_) => {}
            }
        };

        let mut word = String::with_capacity(16);
        word.push(char::from(first.to_ascii_lowercase()));
        while word.len() < self.max_len {
            match self.bytes.next().transpose()? {
                Some(b) if b.is_ascii_alphanumeric() => {
                    word.push(char::from(b.to_ascii_lowercase()))
                }
                Some(b'\'') => {}
                Some(_) | None => break,
            }
        }
        Ok(Some(word))
    }
}

impl<R: Read> Iterator for Words<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_word().transpose()
    }
}

/// Convenience wrapper: `words(reader)` == `Words::new(reader)`.
pub fn words<R: Read>(reader: R) -> Words<R> {
    Words::new(reader)
}
