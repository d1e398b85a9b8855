use std::fs;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::SnapshotError;
use crate::game::{ActionRecord, Game, HandOutcome, Phase};
use crate::player::Player;
use crate::stats::StatsBook;

pub const SCHEMA_VERSION: u32 = 1;

/// Complete table state, deck and RNG positions included, so a restored game
/// continues exactly as the saved one would have.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub players: Vec<Player>,
    pub deck: Deck,
    pub community: Vec<Card>,
    pub pot: u32,
    pub current_bet: u32,
    pub min_bet: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub dealer: usize,
    pub actor: usize,
    pub last_aggressor: Option<usize>,
    pub phase: Phase,
    pub hand_over: bool,
    pub hand_number: u32,
    pub acted: Vec<bool>,
    pub round_actions: Vec<ActionRecord>,
    pub winner: Option<String>,
    pub outcome: Option<HandOutcome>,
}

/// Versioned save file contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub schema_version: u32,
    #[serde(default)]
    pub saved_at: Option<String>,
    pub table: TableSnapshot,
    #[serde(default)]
    pub stats: Option<StatsBook>,
}

impl GameSnapshot {
    pub fn new(game: &Game, stats: Option<StatsBook>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            saved_at: None,
            table: game.snapshot(),
            stats,
        }
    }
}

impl Game {
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            players: self.players.clone(),
            deck: self.deck.clone(),
            community: self.community.clone(),
            pot: self.pot,
            current_bet: self.current_bet,
            min_bet: self.min_bet,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            dealer: self.dealer,
            actor: self.actor,
            last_aggressor: self.last_aggressor,
            phase: self.phase,
            hand_over: self.hand_over,
            hand_number: self.hand_number,
            acted: self.acted.clone(),
            round_actions: self.round_actions.clone(),
            winner: self.winner.clone(),
            outcome: self.outcome.clone(),
        }
    }

    /// Rebuilds a game from a snapshot, rejecting seat indices that point
    /// outside the table.
    pub fn restore(s: TableSnapshot) -> Result<Game, SnapshotError> {
        let n = s.players.len();
        if n < 2 {
            return Err(SnapshotError::Inconsistent(format!("{n} players")));
        }
        if s.acted.len() != n {
            return Err(SnapshotError::Inconsistent(format!(
                "{} action flags for {n} players",
                s.acted.len()
            )));
        }
        let out_of_range = [Some(s.dealer), Some(s.actor), s.last_aggressor]
            .into_iter()
            .flatten()
            .any(|i| i >= n);
        if out_of_range {
            return Err(SnapshotError::Inconsistent("seat index out of range".into()));
        }
        Ok(Game {
            players: s.players,
            deck: s.deck,
            community: s.community,
            pot: s.pot,
            current_bet: s.current_bet,
            min_bet: s.min_bet,
            small_blind: s.small_blind,
            big_blind: s.big_blind,
            dealer: s.dealer,
            actor: s.actor,
            last_aggressor: s.last_aggressor,
            phase: s.phase,
            hand_over: s.hand_over,
            hand_number: s.hand_number,
            acted: s.acted,
            round_actions: s.round_actions,
            winner: s.winner,
            outcome: s.outcome,
        })
    }
}

#[derive(Deserialize)]
struct VersionHeader {
    schema_version: u32,
}

/// Writes `snap` as pretty JSON, stamping `saved_at` when unset.
pub fn save<P: AsRef<Path>>(path: P, snap: &GameSnapshot) -> Result<(), SnapshotError> {
    let mut snap = snap.clone();
    if snap.saved_at.is_none() {
        snap.saved_at = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
    }
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let body = serde_json::to_string_pretty(&snap)?;
    fs::write(path, body)?;
    Ok(())
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<GameSnapshot, SnapshotError> {
    let body = fs::read_to_string(path)?;
    let header: VersionHeader = serde_json::from_str(&body)?;
    if header.schema_version != SCHEMA_VERSION {
        return Err(SnapshotError::UnsupportedVersion {
            found: header.schema_version,
            expected: SCHEMA_VERSION,
        });
    }
    Ok(serde_json::from_str(&body)?)
}
