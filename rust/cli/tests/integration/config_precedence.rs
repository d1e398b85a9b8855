use crate::helpers::cli_runner::CliRunner;
use serde_json::Value;
use std::fs;

fn cfg_json(res: &crate::helpers::cli_runner::CliResult) -> Value {
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    serde_json::from_str(&res.stdout).expect("cfg prints JSON")
}

#[test]
fn defaults_when_nothing_is_set() {
    let v = cfg_json(&CliRunner::new().run(&["cfg"]));
    assert_eq!(v["small_blind"]["value"], 10);
    assert_eq!(v["small_blind"]["source"], "default");
    assert_eq!(v["starting_chips"]["value"], 1000);
    assert_eq!(v["bots"]["value"], 3);
    assert_eq!(v["difficulty"]["value"], "medium");
    assert!(v["seed"]["value"].is_null());
}

#[test]
fn env_beats_file_beats_default() {
    let cli = CliRunner::new();
    let file = cli.path("holdem.toml");
    fs::write(&file, "small_blind = 50\nbots = 6\nseed = 99\n").unwrap();

    let v = cfg_json(&cli.run_with_env(
        &["cfg"],
        &[("HOLDEM_CONFIG", &file), ("HOLDEM_BOTS", "2")],
    ));
    assert_eq!(v["small_blind"]["value"], 50);
    assert_eq!(v["small_blind"]["source"], "file");
    assert_eq!(v["big_blind"]["value"], 100);
    assert_eq!(v["seed"]["value"], 99);
    assert_eq!(v["bots"]["value"], 2);
    assert_eq!(v["bots"]["source"], "env");
    assert_eq!(v["starting_chips"]["source"], "default");
}

#[test]
fn invalid_env_value_is_a_config_error() {
    let res = CliRunner::new().run_with_env(&["cfg"], &[("HOLDEM_BOTS", "9")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Configuration error"));
    assert!(res.stderr.contains("bots must be 1-7"));
}

#[test]
fn flags_override_config() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(
        &["sim", "--hands", "1", "--bots", "2", "--seed", "5", "--difficulty", "easy"],
        &[("HOLDEM_BOTS", "6"), ("HOLDEM_DIFFICULTY", "hard")],
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.starts_with("sim: seats=3 hands=1 difficulty=easy blinds=10/20 seed=5"));
}

#[test]
fn out_of_range_flag_is_rejected() {
    let res = CliRunner::new().run(&["sim", "--hands", "1", "--small-blind", "1000"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("small_blind must be 5-100"));
}
