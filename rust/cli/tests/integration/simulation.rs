use crate::helpers::cli_runner::CliRunner;
use holdem_engine::history::HandRecord;
use std::fs;

fn simulated_count(stdout: &str) -> usize {
    stdout
        .lines()
        .find_map(|l| l.strip_prefix("Simulated: "))
        .and_then(|rest| rest.trim_end_matches(" hands").parse().ok())
        .expect("summary line")
}

fn standings_total(stdout: &str) -> u64 {
    stdout
        .lines()
        .filter(|l| l.starts_with('#'))
        .filter_map(|l| l.rsplit(" - ").next())
        .map(|chips| chips.parse::<u64>().unwrap())
        .sum()
}

#[test]
fn writes_one_history_line_per_hand() {
    let cli = CliRunner::new();
    let out = cli.path("logs/hands.jsonl");
    let res = cli.run(&["sim", "--hands", "25", "--bots", "3", "--seed", "42", "--output", &out]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);

    let played = simulated_count(&res.stdout);
    assert!((1..=25).contains(&played));
    assert_eq!(standings_total(&res.stdout), 4000);

    let content = fs::read_to_string(&out).unwrap();
    let records: Vec<HandRecord> = content
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid record"))
        .collect();
    assert_eq!(records.len(), played);
    for (i, r) in records.iter().enumerate() {
        assert!(r.hand_id.ends_with(&format!("-{:06}", i + 1)));
        assert_eq!(r.seed, Some(42));
        assert!(r.ts.is_some());
        assert!(r.result.as_deref().is_some_and(|s| s.contains(" wins ")));
        assert!(!r.actions.is_empty());
    }
}

#[test]
fn same_seed_same_session() {
    let cli = CliRunner::new();
    let args = ["sim", "--hands", "15", "--bots", "4", "--seed", "7", "--difficulty", "hard"];
    let a = cli.run(&args);
    let b = cli.run(&args);
    assert_eq!(a.exit_code, 0);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn saved_simulation_feeds_stats() {
    let cli = CliRunner::new();
    let save = cli.path("sim.json");
    let res = cli.run(&["sim", "--hands", "10", "--bots", "2", "--seed", "3", "--save", &save]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);

    let res = cli.run(&["stats", "--input", &save]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.starts_with("Table after "));
    assert!(res.stdout.contains("Bot 1"));
    assert!(res.stdout.contains("win%"));
}

#[test]
fn history_stats_skip_corrupt_lines() {
    let cli = CliRunner::new();
    let out = cli.path("hands.jsonl");
    let res = cli.run(&["sim", "--hands", "5", "--bots", "1", "--seed", "11", "--output", &out]);
    assert_eq!(res.exit_code, 0);
    let played = simulated_count(&res.stdout);

    let mut content = fs::read_to_string(&out).unwrap();
    content.push_str("{not json\n");
    fs::write(&out, content).unwrap();

    let res = cli.run(&["stats", "--input", &out]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains(&format!("Hands: {}", played)));
    assert!(res.stderr.contains("WARNING: line"));
}
