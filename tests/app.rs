// End-to-end runs through `app::run` with in-memory input and output.
use wordtable::app;
use wordtable::config::{Config, Output};
use wordtable::Strategy;

fn run(config: &Config, input: &str) -> (String, String) {
    let mut out = Vec::new();
    let mut diag = Vec::new();
    app::run(config, input.as_bytes(), &mut out, &mut diag).expect("run succeeds");
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(diag).unwrap(),
    )
}

#[test]
fn default_run_lists_frequencies() {
    let (out, diag) = run(&Config::default(), "It's a test. A TEST, it's only a test!");
    assert!(diag.is_empty());
    let mut lines: Vec<&str> = out.lines().collect();
    lines.sort();
    assert_eq!(lines, vec!["1    only", "2    its", "3    a", "3    test"]);
}

#[test]
fn stats_run_prints_report() {
    let config = Config {
        output: Output::Stats,
        ..Config::default()
    }
    .with_table_size(5)
    .with_snapshots(5)
    .with_strategy(Strategy::DoubleHashing);
    assert_eq!(config.capacity, 5);

    let (out, _) = run(&config, "one two three four five six");
    assert!(out.starts_with("\nDouble Hashing\n\n"));
    let rows: Vec<&str> = out
        .lines()
        .filter(|l| l.trim_start().starts_with(|c: char| c.is_ascii_digit()))
        .collect();
    // Five words fit in five slots; "six" is dropped.
    assert_eq!(rows.len(), 5);
    assert!(rows[4].starts_with(" 100          5"));
    assert!(out.ends_with("------------------------------------------------------\n\n"));
}

#[test]
fn dump_goes_to_diag() {
    let config = Config {
        dump_table: true,
        ..Config::default().with_table_size(3)
    };
    let (out, diag) = run(&config, "b b a");
    // 'a' (97) % 3 == 1, 'b' (98) % 3 == 2.
    assert_eq!(out, "1    a\n2    b\n");
    let lines: Vec<&str> = diag.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "  Pos  Freq  Stats  Word");
    assert_eq!(lines[2], "    0     0     0   ");
    assert_eq!(lines[4], "    2     2     0   b");
}

#[test]
fn empty_input() {
    let (out, _) = run(&Config::default(), "");
    assert!(out.is_empty());

    let stats = Config {
        output: Output::Stats,
        ..Config::default()
    };
    let (out, _) = run(&stats, "");
    // Header and rules only: every snapshot row is skipped.
    assert_eq!(out.lines().filter(|l| l.starts_with("---")).count(), 2);
    assert_eq!(out.lines().count(), 8);
}
