//! Shared test helpers.
//!
//! - `cli_runner`: `CliRunner` spawns the `holdem` binary inside a scratch
//!   directory with a clean `HOLDEM_*` environment and captures its output.
pub mod cli_runner;
