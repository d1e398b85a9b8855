use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::{ActionRecord, Game};

/// One finished hand, serialized as a single JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Format: YYYYMMDD-NNNNNN
    pub hand_id: String,
    /// Table seed the session was started with, when known.
    pub seed: Option<u64>,
    /// Every applied action in the hand, in order.
    pub actions: Vec<ActionRecord>,
    pub board: Vec<Card>,
    /// Winner name(s) and pot, e.g. "Bot 1 wins 120".
    pub result: Option<String>,
    /// RFC3339, filled in on write when missing
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

/// Hands revealed at showdown; absent when the hand ended on a fold.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    pub winners: Vec<usize>,
    /// Hand label per revealed seat, e.g. "Bot 2: Flush".
    #[serde(default)]
    pub hands: Vec<String>,
}

impl HandRecord {
    /// Builds the record for the hand `game` just finished.
    pub fn from_game(hand_id: String, seed: Option<u64>, actions: Vec<ActionRecord>, game: &Game) -> Self {
        let outcome = game.outcome();
        let result = match (game.winner(), outcome) {
            (Some(w), Some(o)) => Some(format!("{} wins {}", w, o.pot)),
            _ => None,
        };
        let showdown = outcome.filter(|o| !o.showdown.is_empty()).map(|o| ShowdownInfo {
            winners: o.winners.clone(),
            hands: o
                .showdown
                .iter()
                .map(|e| {
                    let name = game.player(e.seat).map_or("?", |p| p.name());
                    format!("{}: {}", name, e.rank.label())
                })
                .collect(),
        });
        Self {
            hand_id,
            seed,
            actions,
            board: game.community_cards().to_vec(),
            result,
            ts: None,
            showdown,
        }
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends hand records to a JSONL file.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger that numbers hands but writes nowhere.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
