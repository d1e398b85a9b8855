//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use holdem_ai::roster::Difficulty;

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    version,
    about = "Texas Hold'em against bots in the terminal"
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Table settings shared by `play` and `sim`. Anything left unset falls back
/// to the resolved configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct TableArgs {
    /// Number of bot opponents (1-7)
    #[arg(long)]
    pub bots: Option<usize>,
    /// Bot difficulty: easy, medium or hard
    #[arg(long)]
    pub difficulty: Option<Difficulty>,
    /// Starting chips per seat (1000-10000)
    #[arg(long)]
    pub chips: Option<u32>,
    /// Small blind (5-100); the big blind is twice this
    #[arg(long)]
    pub small_blind: Option<u32>,
    /// Seed for the deck and the bots
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play against bots, entering actions on stdin
    Play {
        #[command(flatten)]
        table: TableArgs,
        /// Your seat name
        #[arg(long, default_value = "You")]
        name: String,
        /// Stop after this many hands
        #[arg(long)]
        hands: Option<u32>,
        /// Write the table to this file when the session ends
        #[arg(long)]
        save: Option<String>,
        /// Resume a saved table instead of seating a new one
        #[arg(long)]
        load: Option<String>,
    },
    /// Let bots play each other and record the hands
    Sim {
        #[command(flatten)]
        table: TableArgs,
        /// Number of hands to deal
        #[arg(long)]
        hands: u32,
        /// Hand history destination (JSONL)
        #[arg(long)]
        output: Option<String>,
        /// Write the final table and statistics to this file
        #[arg(long)]
        save: Option<String>,
    },
    /// Show statistics from a save file or a hand history
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}
