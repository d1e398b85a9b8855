//! Statistics command handler.
//!
//! Reads either a save file (the statistics book stored with the table) or a
//! `.jsonl` hand history, where only action counts can be rebuilt.

use crate::error::CliError;
use crate::formatters::{format_standings, format_stats_table};
use crate::io_utils::read_text;
use crate::ui;
use holdem_engine::history::HandRecord;
use holdem_engine::snapshot;
use holdem_engine::stats::StatsBook;
use std::io::Write;
use std::path::Path;

pub fn handle_stats_command(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(input);
    if path.extension().is_some_and(|e| e == "jsonl") {
        history_stats(path, out, err)
    } else {
        save_stats(path, out)
    }
}

fn save_stats(path: &Path, out: &mut dyn Write) -> Result<(), CliError> {
    let snap = snapshot::load(path)?;
    writeln!(
        out,
        "Table after {} hands (saved {})",
        snap.table.hand_number,
        snap.saved_at.as_deref().unwrap_or("unknown")
    )?;
    write!(out, "{}", format_standings(&snap.table.players))?;
    writeln!(out)?;
    write!(out, "{}", format_stats_table(&snap.stats.unwrap_or_default()))?;
    Ok(())
}

fn history_stats(path: &Path, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let content = read_text(path)?;
    let mut book = StatsBook::new();
    let mut hands = 0u32;
    let mut showdowns = 0u32;
    let mut skipped = 0u32;

    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<HandRecord>(line) {
            Ok(record) => {
                hands += 1;
                if record.showdown.is_some() {
                    showdowns += 1;
                }
                for action in &record.actions {
                    book.observe_action(action);
                }
            }
            Err(e) => {
                skipped += 1;
                ui::display_warning(err, &format!("line {} skipped: {}", i + 1, e))?;
            }
        }
    }

    if hands == 0 && skipped > 0 {
        return Err(CliError::InvalidInput(format!(
            "no valid hand records in {}",
            path.display()
        )));
    }

    writeln!(out, "Hands: {}", hands)?;
    writeln!(out, "Showdowns: {}", showdowns)?;
    writeln!(
        out,
        "{:<12} {:>7} {:>6} {:>6} {:>6} {:>6} {:>6} {:>7} {:>7}",
        "player", "actions", "folds", "checks", "calls", "bets", "raises", "all-ins", "fold%"
    )?;
    for (name, st) in book.iter() {
        writeln!(
            out,
            "{:<12} {:>7} {:>6} {:>6} {:>6} {:>6} {:>6} {:>7} {:>6.1}%",
            name,
            st.total_actions(),
            st.folds,
            st.checks,
            st.calls,
            st.bets,
            st.raises,
            st.all_ins,
            st.fold_percentage()
        )?;
    }
    Ok(())
}
