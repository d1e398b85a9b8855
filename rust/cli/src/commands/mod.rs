//! Command handler modules for the holdem CLI.
//!
//! Each command lives in its own file and exposes
//! `handle_COMMAND_command(...) -> Result<(), CliError>`. Output streams are
//! passed in so the handlers run the same way under tests.

pub mod cfg;
pub mod play;
pub mod sim;
pub mod stats;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;

use crate::cli::TableArgs;
use crate::config::{self, Config};
use crate::error::CliError;
use tracing::info;

/// Resolves config plus flags, drawing a seed when none is configured.
pub(crate) fn resolve_table(args: &TableArgs) -> Result<(Config, u64), CliError> {
    let resolved = config::load_with_sources()?;
    let cfg = resolved.config.with_overrides(args)?;
    let seed = match cfg.seed {
        Some(seed) => seed,
        None => {
            let seed = rand::random();
            info!(seed, "no seed configured, drew one");
            seed
        }
    };
    Ok((cfg, seed))
}
