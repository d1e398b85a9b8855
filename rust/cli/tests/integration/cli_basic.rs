use crate::helpers::cli_runner::CliRunner;

#[test]
fn help_lists_every_command() {
    let cli = CliRunner::new();
    let res = cli.run(&["--help"]);
    assert_eq!(res.exit_code, 0);
    for cmd in ["play", "sim", "stats", "cfg"] {
        assert!(res.stdout.contains(cmd), "help is missing {cmd}");
    }
}

#[test]
fn version_exits_zero() {
    let res = CliRunner::new().run(&["--version"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.starts_with("holdem "));
}

#[test]
fn unknown_command_prints_usage_and_exits_2() {
    let res = CliRunner::new().run(&["replay"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Usage: holdem <command> [options]"));
    assert!(res.stderr.contains("For full help, run: holdem --help"));
}

#[test]
fn zero_hands_is_invalid_input() {
    let cli = CliRunner::new();
    let res = cli.run(&["sim", "--hands", "0"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Error: Invalid input: hands must be >= 1"));

    let res = cli.run(&["play", "--hands", "0"]);
    assert_eq!(res.exit_code, 2);
}

#[test]
fn stats_on_missing_file_fails() {
    let res = CliRunner::new().run(&["stats", "--input", "nope.json"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.starts_with("Error: I/O error"));
}
