//! # Play Command
//!
//! Interactive play against bot seats. The human always sits in the first
//! seat of a new table; a loaded table keeps whatever seat its human had.
//!
//! Actions are read one line at a time from the input stream. `stats` shows
//! the session statistics, and `q` (or end of input) leaves the table. The
//! table can be written to a save file on the way out and resumed later with
//! `--load`, including in the middle of a hand.

use crate::cli::TableArgs;
use crate::commands::resolve_table;
use crate::error::CliError;
use crate::formatters::{
    format_action, format_board, format_legal, format_seats, format_standings, format_stats_table,
};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};
use holdem_ai::AgentDriver;
use holdem_ai::roster::create_agents;
use holdem_engine::equity::{self, DEFAULT_SAMPLES};
use holdem_engine::errors::GameError;
use holdem_engine::game::{ActionRecord, Game};
use holdem_engine::player::Player;
use holdem_engine::rng::SeededRng;
use holdem_engine::snapshot::{self, GameSnapshot};
use holdem_engine::stats::StatsBook;
use std::io::{BufRead, Write};
use tracing::{info, warn};

enum HandEnd {
    Finished,
    Quit,
}

/// Handle the play command: interactive poker against bots.
///
/// # Arguments
///
/// * `table` - Table flags; unset values come from the configuration
/// * `name` - Name of the human seat at a new table
/// * `hands` - Stop after this many hands (must be >= 1 when given)
/// * `save` - Save file written when the session ends
/// * `load` - Save file to resume instead of seating a new table
/// * `input` - Player input, one action per line
/// * `out` - Output stream for game display
/// * `err` - Error stream for rejected input
///
/// # Errors
///
/// `CliError::InvalidInput` for `--hands 0` or a save without a human seat,
/// `CliError::Config` for invalid settings, `CliError::Engine` for unusable
/// save files, and `CliError::Io` when output or saving fails.
#[allow(clippy::too_many_arguments)]
pub fn handle_play_command(
    table: &TableArgs,
    name: &str,
    hands: Option<u32>,
    save: Option<String>,
    load: Option<String>,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == Some(0) {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let (cfg, seed) = resolve_table(table)?;

    let (mut game, mut stats) = match load.as_deref() {
        Some(path) => {
            let snap = snapshot::load(path)?;
            let game = Game::restore(snap.table)?;
            writeln!(
                out,
                "play: resumed {} after {} hands blinds={}/{}",
                path,
                game.hand_number(),
                game.small_blind(),
                game.big_blind()
            )?;
            (game, snap.stats.unwrap_or_default())
        }
        None => {
            let mut players = vec![Player::human(name, cfg.starting_chips)];
            players.extend(create_agents(
                cfg.bots,
                cfg.starting_chips,
                cfg.difficulty,
                seed,
            ));
            let game = Game::new(players, cfg.small_blind, cfg.big_blind(), Some(seed))?;
            writeln!(
                out,
                "play: bots={} difficulty={} blinds={}/{} seed={}",
                cfg.bots,
                cfg.difficulty,
                cfg.small_blind,
                cfg.big_blind(),
                seed
            )?;
            (game, StatsBook::new())
        }
    };

    let human = game
        .players()
        .iter()
        .position(Player::is_human)
        .ok_or_else(|| CliError::InvalidInput("the table has no human seat".to_string()))?;
    let driver = AgentDriver::new(cfg.bot_timeout());
    // separate stream so the hint never disturbs the deal
    let mut odds_rng = SeededRng::from_seed_u64(seed);

    let mut played = 0u32;
    let mut quit = false;
    loop {
        if game.is_hand_over() {
            if hands.is_some_and(|h| played >= h) {
                break;
            }
            if game.player(human).is_none_or(|p| p.chips() == 0) {
                writeln!(out, "You are out of chips.")?;
                break;
            }
            match game.start_new_hand() {
                Ok(()) => {}
                Err(GameError::NotEnoughPlayers { .. }) => {
                    writeln!(out, "Every opponent is out of chips.")?;
                    break;
                }
                Err(e) => return Err(e.into()),
            }
            writeln!(out, "\nHand {}", game.hand_number())?;
            writeln!(out, "Blinds: SB={} BB={}", game.small_blind(), game.big_blind())?;
        }

        match play_hand(&mut game, human, &driver, &mut stats, &mut odds_rng, input, out, err)? {
            HandEnd::Finished => {
                played += 1;
                stats.observe_hand(&game);
                report_hand(&game, out)?;
            }
            HandEnd::Quit => {
                quit = true;
                break;
            }
        }
    }

    if let Some(path) = save.as_deref() {
        snapshot::save(path, &GameSnapshot::new(&game, Some(stats.clone())))?;
        info!(path, hand = game.hand_number(), "table saved");
        writeln!(out, "Saved table to {}", path)?;
    }

    writeln!(out, "\nFinal standings:")?;
    write!(out, "{}", format_standings(game.players()))?;
    writeln!(out, "\nSession statistics:")?;
    write!(out, "{}", format_stats_table(&stats))?;
    writeln!(
        out,
        "Hands played: {}{}",
        played,
        if quit { " (quit)" } else { "" }
    )?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn play_hand(
    game: &mut Game,
    human: usize,
    driver: &AgentDriver,
    stats: &mut StatsBook,
    odds_rng: &mut SeededRng,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<HandEnd, CliError> {
    while !game.is_hand_over() {
        let board_before = game.community_cards().len();
        let seat = game.current_player();
        let rec = if seat == human {
            match human_turn(game, seat, stats, odds_rng, input, out, err)? {
                Some(rec) => rec,
                None => return Ok(HandEnd::Quit),
            }
        } else {
            driver
                .act(game)
                .ok_or_else(|| CliError::Engine(format!("seat {} could not act", seat)))?
        };
        stats.observe_action(&rec);
        writeln!(out, "{}: {}", rec.player, format_action(&rec.action))?;
        if game.community_cards().len() > board_before {
            writeln!(out, "Board: {}", format_board(game.community_cards()))?;
        }
    }
    Ok(HandEnd::Finished)
}

/// Prompts until the human enters an action the game accepts. `None` means
/// the player quit.
fn human_turn(
    game: &mut Game,
    seat: usize,
    stats: &StatsBook,
    odds_rng: &mut SeededRng,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Option<ActionRecord>, CliError> {
    write!(out, "{}", format_seats(game.players(), game.dealer(), Some(seat)))?;
    let hole = game.player(seat).map(|p| format_board(p.hand())).unwrap_or_default();
    writeln!(
        out,
        "Board: {}  Pot: {}  Your cards: {}",
        format_board(game.community_cards()),
        game.pot(),
        hole
    )?;
    write_win_estimate(game, seat, odds_rng, out)?;

    loop {
        let legal = game.legal_actions();
        ui::prompt(
            out,
            &format!("Enter action ({}/stats/q): ", format_legal(&legal)),
        )?;
        let Some(line) = read_stdin_line(input) else {
            return Ok(None);
        };
        match parse_player_action(&line) {
            ParseResult::Action(action) => match game.apply(action) {
                Some(rec) => return Ok(Some(rec)),
                None => ui::write_error(
                    err,
                    &format!("{} is not allowed now", format_action(&action)),
                )?,
            },
            ParseResult::Stats => write!(out, "{}", format_stats_table(stats))?,
            ParseResult::Quit => return Ok(None),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
}

fn write_win_estimate(
    game: &Game,
    seat: usize,
    rng: &mut SeededRng,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let opponents = game
        .players()
        .iter()
        .enumerate()
        .filter(|(i, p)| *i != seat && !p.is_folded())
        .count();
    let Some(hole) = game.player(seat).map(Player::hand) else {
        return Ok(());
    };
    if opponents == 0 {
        return Ok(());
    }
    match equity::estimate(hole, game.community_cards(), opponents, DEFAULT_SAMPLES, rng) {
        Ok(eq) => writeln!(out, "Estimated win probability: {:.1}%", eq.equity() * 100.0)?,
        Err(e) => warn!(error = %e, "win estimate unavailable"),
    }
    Ok(())
}

fn report_hand(game: &Game, out: &mut dyn Write) -> Result<(), CliError> {
    let Some(outcome) = game.outcome() else {
        return Ok(());
    };
    for entry in &outcome.showdown {
        if let Some(p) = game.player(entry.seat) {
            writeln!(
                out,
                "  {} shows {} ({})",
                p.name(),
                format_board(p.hand()),
                entry.rank.label()
            )?;
        }
    }
    writeln!(
        out,
        "Winner: {} (pot {})",
        game.winner().unwrap_or("-"),
        outcome.pot
    )?;
    Ok(())
}
