//! # holdem CLI Library
//!
//! Command-line front end for the Hold'em engine: play against bots, run
//! bot-only simulations, inspect statistics and show configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments and dispatches to a subcommand. [`run_with_input`]
//! does the same with an explicit input stream, which is how the `play`
//! command is driven from tests.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["holdem", "play", "--bots", "3", "--hands", "10"];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play hands against bots from the terminal
//! - `sim`: Let bots play each other and write a JSONL hand history
//! - `stats`: Show statistics from a save file or a hand history
//! - `cfg`: Display the resolved configuration with value sources

use clap::Parser;
use std::io::{BufRead, Write};
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::{handle_cfg_command, handle_play_command, handle_sim_command, handle_stats_command};

pub use error::CliError;

/// Installs the stderr `tracing` subscriber. `RUST_LOG` selects the filter,
/// defaulting to `warn`. Safe to call more than once.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["holdem", "cfg"];
/// let mut out = Vec::new();
/// let code = holdem_cli::run(args, &mut out, &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// [`run`] with player input read from `input` instead of stdin.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "stats", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout with a zero exit
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write_usage(err, &e.to_string(), COMMANDS);
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Play {
            table,
            name,
            hands,
            save,
            load,
        } => handle_play_command(&table, &name, hands, save, load, input, out, err),
        Commands::Sim {
            table,
            hands,
            output,
            save,
        } => handle_sim_command(&table, hands, output, save, out, err),
        Commands::Stats { input } => handle_stats_command(&input, out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn write_usage(err: &mut dyn Write, clap_message: &str, commands: &[&str]) -> std::io::Result<()> {
    writeln!(err, "{}", clap_message)?;
    writeln!(err)?;
    writeln!(err, "Hold'em CLI")?;
    writeln!(err, "Usage: holdem <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in commands {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: holdem --help")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_args(args: &[&str]) -> (i32, String, String) {
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run_with_input(args.iter().copied(), &mut input, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn help_goes_to_stdout() {
        let (code, out, _) = run_args(&["holdem", "--help"]);
        assert_eq!(code, 0);
        assert!(out.contains("play"));
        assert!(out.contains("sim"));
    }

    #[test]
    fn unknown_command_prints_usage() {
        let (code, _, err) = run_args(&["holdem", "deal"]);
        assert_eq!(code, 2);
        assert!(err.contains("Usage: holdem <command> [options]"));
        assert!(err.contains("  stats"));
    }

    #[test]
    fn bad_difficulty_is_a_parse_error() {
        let (code, _, err) = run_args(&["holdem", "sim", "--hands", "1", "--difficulty", "brutal"]);
        assert_eq!(code, 2);
        assert!(err.contains("brutal"));
    }

    #[test]
    fn command_errors_are_prefixed() {
        let (code, _, err) = run_args(&["holdem", "stats", "--input", "/nonexistent/save.json"]);
        assert_eq!(code, 2);
        assert!(err.starts_with("Error: "));
    }
}
