//! wordtable: count words from stdin with a fixed-size hash table.

use clap::Parser;
use std::io::{self, BufWriter};
use wordtable::config::{Config, Output};
use wordtable::{app, logging, Strategy};

#[derive(Parser)]
#[command(name = "wordtable")]
#[command(about = "Count words read from stdin in an open-addressing hash table")]
struct Args {
    /// Use double hashing (linear probing is the default)
    #[arg(short = 'd')]
    double_hashing: bool,

    /// Display entire contents of the hash table on stderr
    #[arg(short = 'e')]
    entire_table: bool,

    /// Print stats info instead of frequencies and words
    #[arg(short = 'p')]
    print_stats: bool,

    /// Show SNAPSHOTS stats snapshots (if -p is used)
    #[arg(short = 's', value_name = "SNAPSHOTS", allow_negative_numbers = true)]
    snapshots: Option<i64>,

    /// Use the first prime >= TABLESIZE as the table size
    #[arg(short = 't', value_name = "TABLESIZE")]
    table_size: Option<usize>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(size) = self.table_size {
            config = config.with_table_size(size);
        }
        if let Some(n) = self.snapshots {
            config = config.with_snapshots(n);
        }
        if self.double_hashing {
            config = config.with_strategy(Strategy::DoubleHashing);
        }
        if self.print_stats {
            config.output = Output::Stats;
        }
        config.dump_table = self.entire_table;
        config
    }
}

fn main() {
    let args = Args::parse();
    logging::init(&args.log_level);

    if let Err(e) = run(args.config()) {
        tracing::error!(error = %e, "wordtable failed");
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::debug!(?config, "starting");
    let stdin = io::stdin().lock();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut diag = io::stderr().lock();
    app::run(&config, stdin, &mut out, &mut diag)?;
    Ok(())
}
