//! Simulation command handler.
//!
//! Seats one more bot than the configured opponent count, so a simulated
//! table has the same size as a `play` table, and lets them play `--hands`
//! hands. Each finished hand can be appended to a JSONL hand history, and
//! the final table with its statistics can be written to a save file.

use crate::cli::TableArgs;
use crate::commands::resolve_table;
use crate::error::CliError;
use crate::formatters::format_standings;
use crate::ui;
use holdem_ai::AgentDriver;
use holdem_ai::roster::create_agents;
use holdem_engine::errors::GameError;
use holdem_engine::game::Game;
use holdem_engine::history::{HandLogger, HandRecord};
use holdem_engine::snapshot::{self, GameSnapshot};
use holdem_engine::stats::StatsBook;
use std::io::Write;
use tracing::{debug, info};

/// Handle the sim command.
///
/// # Arguments
///
/// * `table` - Table flags; unset values come from the configuration
/// * `hands` - Hands to deal (must be >= 1); stops early once one seat holds every chip
/// * `output` - JSONL hand history destination
/// * `save` - Save file for the final table and statistics
/// * `out` - Output stream for progress and the summary
/// * `err` - Output stream for warnings
pub fn handle_sim_command(
    table: &TableArgs,
    hands: u32,
    output: Option<String>,
    save: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let (cfg, seed) = resolve_table(table)?;
    let seats = cfg.bots + 1;
    let players = create_agents(seats, cfg.starting_chips, cfg.difficulty, seed);
    let mut game = Game::new(players, cfg.small_blind, cfg.big_blind(), Some(seed))?;
    let driver = AgentDriver::new(cfg.bot_timeout());

    let mut logger = match output.as_deref() {
        Some(path) => Some(HandLogger::create(path)?),
        None => None,
    };

    writeln!(
        out,
        "sim: seats={} hands={} difficulty={} blinds={}/{} seed={}",
        seats,
        hands,
        cfg.difficulty,
        cfg.small_blind,
        cfg.big_blind(),
        seed
    )?;

    let expected_chips = game.total_chips();
    let mut stats = StatsBook::new();
    let mut played = 0u32;
    for _ in 0..hands {
        match game.start_new_hand() {
            Ok(()) => {}
            Err(GameError::NotEnoughPlayers { .. }) => {
                ui::display_warning(
                    err,
                    &format!("stopped after {} hands: one seat holds every chip", played),
                )?;
                break;
            }
            Err(e) => return Err(e.into()),
        }

        let mut actions = Vec::new();
        while !game.is_hand_over() {
            let rec = driver.act(&mut game).ok_or_else(|| {
                CliError::Engine(format!("seat {} could not act", game.current_player()))
            })?;
            stats.observe_action(&rec);
            actions.push(rec);
        }
        stats.observe_hand(&game);
        played += 1;

        if game.total_chips() != expected_chips {
            return Err(CliError::Engine(format!(
                "chip total changed from {} to {} in hand {}",
                expected_chips,
                game.total_chips(),
                game.hand_number()
            )));
        }
        if let Some(logger) = logger.as_mut() {
            let id = logger.next_id();
            logger.write(&HandRecord::from_game(id, Some(seed), actions, &game))?;
        }
        debug!(hand = game.hand_number(), winner = game.winner().unwrap_or("-"), "simulated hand");
    }

    if let Some(path) = save.as_deref() {
        snapshot::save(path, &GameSnapshot::new(&game, Some(stats)))?;
        info!(path, "simulation saved");
    }

    writeln!(out, "Simulated: {} hands", played)?;
    write!(out, "{}", format_standings(game.players()))?;
    Ok(())
}
