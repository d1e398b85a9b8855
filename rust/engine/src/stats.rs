use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::game::{ActionRecord, Game};
use crate::hand::{compare_hands, HandRank};
use crate::player::PlayerAction;

/// Running per-player counters across a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub hands_played: u32,
    pub hands_won: u32,
    /// Chips received from pots.
    pub chips_won: u64,
    /// Chips committed to pots, won or not.
    pub chips_lost: u64,
    pub biggest_pot_won: u32,
    pub best_hand: Option<HandRank>,
    pub folds: u32,
    pub checks: u32,
    pub calls: u32,
    pub bets: u32,
    pub raises: u32,
    pub all_ins: u32,
}

impl PlayerStats {
    pub fn record_action(&mut self, rec: &ActionRecord) {
        match rec.action {
            PlayerAction::Fold => self.folds += 1,
            PlayerAction::Check => self.checks += 1,
            PlayerAction::Call(_) => self.calls += 1,
            PlayerAction::Bet(_) => self.bets += 1,
            PlayerAction::Raise(_) => self.raises += 1,
        }
        if rec.all_in {
            self.all_ins += 1;
        }
    }

    pub fn total_actions(&self) -> u32 {
        self.folds + self.checks + self.calls + self.bets + self.raises
    }

    /// Share of actions that were folds, 0-100.
    pub fn fold_percentage(&self) -> f64 {
        match self.total_actions() {
            0 => 0.0,
            n => self.folds as f64 * 100.0 / n as f64,
        }
    }

    pub fn win_percentage(&self) -> f64 {
        match self.hands_played {
            0 => 0.0,
            n => self.hands_won as f64 * 100.0 / n as f64,
        }
    }

    pub fn net_profit(&self) -> i64 {
        self.chips_won as i64 - self.chips_lost as i64
    }

    fn offer_hand(&mut self, rank: &HandRank) {
        let better = self
            .best_hand
            .as_ref()
            .is_none_or(|best| compare_hands(rank, best).is_gt());
        if better {
            self.best_hand = Some(rank.clone());
        }
    }
}

/// Stats for every player seen, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsBook {
    players: BTreeMap<String, PlayerStats>,
}

impl StatsBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&PlayerStats> {
        self.players.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlayerStats)> {
        self.players.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn observe_action(&mut self, rec: &ActionRecord) {
        self.players
            .entry(rec.player.clone())
            .or_default()
            .record_action(rec);
    }

    /// Folds a finished hand into the book. Call once per hand, after it ends.
    pub fn observe_hand(&mut self, game: &Game) {
        let Some(outcome) = game.outcome() else {
            return;
        };
        for (seat, p) in game.players().iter().enumerate() {
            // seats that sat the hand out were dealt nothing
            if p.hand().is_empty() {
                continue;
            }
            let stats = self.players.entry(p.name().to_string()).or_default();
            stats.hands_played += 1;
            stats.chips_lost += p.total_committed() as u64;
            let payout = outcome.payout(seat);
            if outcome.winners.contains(&seat) {
                stats.hands_won += 1;
                stats.chips_won += payout as u64;
                stats.biggest_pot_won = stats.biggest_pot_won.max(outcome.pot);
            }
            if let Some(entry) = outcome.entry(seat) {
                stats.offer_hand(&entry.rank);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Phase;

    fn rec(action: PlayerAction, all_in: bool) -> ActionRecord {
        ActionRecord {
            seat: 0,
            player: "Ann".into(),
            phase: Phase::Flop,
            action,
            all_in,
        }
    }

    #[test]
    fn counts_actions_and_percentages() {
        let mut book = StatsBook::new();
        book.observe_action(&rec(PlayerAction::Fold, false));
        book.observe_action(&rec(PlayerAction::Call(20), false));
        book.observe_action(&rec(PlayerAction::Raise(200), true));
        book.observe_action(&rec(PlayerAction::Check, false));

        let s = book.get("Ann").unwrap();
        assert_eq!(s.total_actions(), 4);
        assert_eq!(s.all_ins, 1);
        assert!((s.fold_percentage() - 25.0).abs() < 1e-9);
        assert_eq!(s.win_percentage(), 0.0);
    }
}
