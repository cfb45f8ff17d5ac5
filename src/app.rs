//! One full run: count the input, then print what the config asks for.

use crate::config::{Config, Output};
use crate::counter::{count_words, CountSummary, OnFull};
use crate::error::Result;
use crate::report::{write_frequencies, write_table_dump};
use crate::stats::StatsReport;
use crate::table::WordTable;
use std::io::{Read, Write};

/// Count `input` into a fresh table, optionally dump it to `diag`, then
/// write the frequency listing or the statistics report to `out`.
pub fn run<R, W, D>(config: &Config, input: R, out: &mut W, diag: &mut D) -> Result<CountSummary>
where
    R: Read,
    W: Write,
    D: Write,
{
    let mut table = WordTable::new(config.capacity, config.strategy);
    let summary = count_words(&mut table, input, OnFull::Skip)?;

    if config.dump_table {
        write_table_dump(&table, diag)?;
    }
    match config.output {
        Output::Stats => write!(out, "{}", StatsReport::new(&table, config.snapshots))?,
        Output::Frequencies => write_frequencies(&table, out)?,
    }
    out.flush()?;
    Ok(summary)
}
