use crate::helpers::cli_runner::CliRunner;

fn folds(n: usize) -> String {
    "fold\n".repeat(n)
}

#[test]
fn folding_through_a_hand() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(
        &["play", "--bots", "1", "--seed", "3", "--hands", "1"],
        &folds(10),
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.starts_with("play: bots=1 difficulty=medium blinds=10/20 seed=3"));
    assert!(res.stdout.contains("Hand 1"));
    assert!(res.stdout.contains("Winner: "));
    assert!(res.stdout.contains("Hands played: 1\n"));
    assert!(res.stdout.contains("#1: "));
}

#[test]
fn quit_leaves_cleanly() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["play", "--bots", "2", "--seed", "8"], "q\n");
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("(quit)"));
}

#[test]
fn prompt_shows_a_win_estimate() {
    let res = CliRunner::new().run_with_input(&["play", "--bots", "2", "--seed", "8"], "q\n");
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    let line = res
        .stdout
        .lines()
        .find(|l| l.starts_with("Estimated win probability: "))
        .expect("estimate line");
    let pct: f64 = line
        .trim_start_matches("Estimated win probability: ")
        .trim_end_matches('%')
        .parse()
        .unwrap();
    assert!((0.0..=100.0).contains(&pct));
}

#[test]
fn end_of_input_counts_as_quit() {
    let res = CliRunner::new().run_with_input(&["play", "--bots", "1", "--seed", "1"], "");
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("(quit)"));
}

#[test]
fn bad_input_is_reported_and_reprompted() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(
        &["play", "--bots", "1", "--seed", "4"],
        "dance\nbet\nstats\nq\n",
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("Error: Unrecognized action 'dance'"));
    assert!(res.stderr.contains("Error: Bet requires an amount"));
    assert!(res.stdout.matches("Enter action (").count() >= 4);
}

#[test]
fn saved_table_resumes() {
    let cli = CliRunner::new();
    let save = cli.path("saves/table.json");
    let res = cli.run_with_input(
        &["play", "--bots", "2", "--seed", "21", "--hands", "1", "--save", &save],
        &folds(10),
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains(&format!("Saved table to {}", save)));

    let res = cli.run_with_input(
        &["play", "--load", &save, "--hands", "1"],
        &folds(10),
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.starts_with(&format!("play: resumed {} after 1 hands", save)));
    assert!(res.stdout.contains("Hand 2"));
}

#[test]
fn loading_garbage_fails() {
    let cli = CliRunner::new();
    let path = cli.path("broken.json");
    std::fs::write(&path, "{\"schema_version\": 1}").unwrap();
    let res = cli.run_with_input(&["play", "--load", &path], "q\n");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Engine error"));
}
