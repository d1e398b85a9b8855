use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{compare_hands, evaluate_hand, HandRank};
use crate::player::{Player, PlayerAction};
use crate::rules::{legal_actions, LegalActions};

/// Seats at one table. Two hole cards each plus the board must fit in a deck.
pub const MAX_SEATS: usize = 10;

const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// Betting streets of a hand, in order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Hole cards dealt, blinds posted
    Preflop,
    /// Three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth community card
    River,
    /// Hands revealed and the pot awarded
    Showdown,
}

impl Phase {
    fn next(self) -> Phase {
        match self {
            Phase::Preflop => Phase::Flop,
            Phase::Flop => Phase::Turn,
            Phase::Turn => Phase::River,
            Phase::River | Phase::Showdown => Phase::Showdown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Preflop => "preflop",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
            Phase::Showdown => "showdown",
        }
    }
}

/// One applied action, with the chips it actually moved.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: usize,
    pub player: String,
    pub phase: Phase,
    pub action: PlayerAction,
    /// The action emptied the player's stack.
    #[serde(default)]
    pub all_in: bool,
}

/// A player's evaluated cards at showdown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownEntry {
    pub seat: usize,
    pub rank: HandRank,
}

/// How a finished hand was resolved.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandOutcome {
    pub pot: u32,
    /// Winning seats, first seat to the dealer's left first.
    pub winners: Vec<usize>,
    /// (seat, chips received)
    pub payouts: Vec<(usize, u32)>,
    /// Empty when everybody else folded.
    pub showdown: Vec<ShowdownEntry>,
}

impl HandOutcome {
    pub fn entry(&self, seat: usize) -> Option<&ShowdownEntry> {
        self.showdown.iter().find(|e| e.seat == seat)
    }

    pub fn payout(&self, seat: usize) -> u32 {
        self.payouts
            .iter()
            .find(|(s, _)| *s == seat)
            .map_or(0, |(_, amount)| *amount)
    }
}

/// Public table state an automated seat decides from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub phase: Phase,
    pub community_cards: Vec<Card>,
    pub pot: u32,
    pub current_bet: u32,
    pub min_bet: u32,
}

/// Betting state machine for one table.
///
/// Owns the deck, the seats and the board. Every action method applies to the
/// seat returned by [`Game::current_player`] and silently does nothing when
/// the action is not legal at that moment.
///
/// # Examples
///
/// ```
/// use holdem_engine::game::{Game, Phase};
/// use holdem_engine::player::Player;
///
/// let players = vec![Player::human("Ann", 1000), Player::human("Bob", 1000)];
/// let mut game = Game::new(players, 5, 10, Some(7)).unwrap();
/// game.start_new_hand().unwrap();
/// assert_eq!(game.phase(), Phase::Preflop);
/// assert_eq!(game.pot(), 15);
///
/// game.call();
/// assert_eq!(game.phase(), Phase::Flop);
/// assert_eq!(game.community_cards().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) players: Vec<Player>,
    pub(crate) deck: Deck,
    pub(crate) community: Vec<Card>,
    pub(crate) pot: u32,
    pub(crate) current_bet: u32,
    pub(crate) min_bet: u32,
    pub(crate) small_blind: u32,
    pub(crate) big_blind: u32,
    pub(crate) dealer: usize,
    pub(crate) actor: usize,
    pub(crate) last_aggressor: Option<usize>,
    pub(crate) phase: Phase,
    pub(crate) hand_over: bool,
    pub(crate) hand_number: u32,
    // seats that acted since the last street began
    pub(crate) acted: Vec<bool>,
    pub(crate) round_actions: Vec<ActionRecord>,
    pub(crate) winner: Option<String>,
    pub(crate) outcome: Option<HandOutcome>,
}

impl Game {
    pub fn new(
        players: Vec<Player>,
        small_blind: u32,
        big_blind: u32,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        if players.len() < 2 {
            return Err(GameError::NotEnoughPlayers {
                funded: players.len(),
            });
        }
        if players.len() > MAX_SEATS {
            return Err(GameError::TooManyPlayers {
                count: players.len(),
                max: MAX_SEATS,
            });
        }
        if small_blind == 0 || big_blind < small_blind {
            return Err(GameError::InvalidBlinds {
                small: small_blind,
                big: big_blind,
            });
        }
        let n = players.len();
        Ok(Self {
            players,
            deck: Deck::new_with_seed(seed.unwrap_or(DEFAULT_SEED)),
            community: Vec::with_capacity(5),
            pot: 0,
            current_bet: 0,
            min_bet: big_blind,
            small_blind,
            big_blind,
            dealer: 0,
            actor: 0,
            last_aggressor: None,
            phase: Phase::Preflop,
            hand_over: true,
            hand_number: 0,
            acted: vec![false; n],
            round_actions: Vec::new(),
            winner: None,
            outcome: None,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }
    /// Mutable seat access for decision drivers (agent RNG state lives on the seat).
    pub fn player_mut(&mut self, seat: usize) -> Option<&mut Player> {
        self.players.get_mut(seat)
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn min_bet(&self) -> u32 {
        self.min_bet
    }
    pub fn small_blind(&self) -> u32 {
        self.small_blind
    }
    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn current_player(&self) -> usize {
        self.actor
    }
    pub fn last_aggressor(&self) -> Option<usize> {
        self.last_aggressor
    }
    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }
    pub fn is_hand_over(&self) -> bool {
        self.hand_over
    }
    pub fn hand_number(&self) -> u32 {
        self.hand_number
    }
    /// Winner name(s), comma-joined on a split pot.
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }
    pub fn outcome(&self) -> Option<&HandOutcome> {
        self.outcome.as_ref()
    }
    /// Actions taken on the current street.
    pub fn round_actions(&self) -> &[ActionRecord] {
        &self.round_actions
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Chips needed for the acting seat to match the table bet.
    pub fn to_call(&self) -> u32 {
        self.players
            .get(self.actor)
            .map_or(0, |p| self.current_bet.saturating_sub(p.current_bet()))
    }

    pub fn legal_actions(&self) -> LegalActions {
        match self.players.get(self.actor) {
            Some(p) if !self.hand_over => legal_actions(p, self.current_bet, self.min_bet),
            _ => LegalActions {
                kinds: Vec::new(),
                to_call: 0,
                min_bet: self.min_bet,
                min_raise_total: self.min_bet * 2,
            },
        }
    }

    pub fn view(&self) -> TableView {
        TableView {
            phase: self.phase,
            community_cards: self.community.clone(),
            pot: self.pot,
            current_bet: self.current_bet,
            min_bet: self.min_bet,
        }
    }

    /// Chips on the table: every stack plus the pot.
    pub fn total_chips(&self) -> u64 {
        self.players.iter().map(|p| p.chips() as u64).sum::<u64>() + self.pot as u64
    }

    /// Shuffles a fresh deck and starts the next hand.
    pub fn start_new_hand(&mut self) -> Result<(), GameError> {
        self.deck.reset();
        self.deck.shuffle();
        self.begin_hand()
    }

    /// Starts the next hand dealing from a pre-arranged deck.
    pub fn start_new_hand_with_deck(&mut self, deck: Deck) -> Result<(), GameError> {
        let funded = self.funded_count();
        let needed = funded * 2 + 5;
        if deck.remaining() < needed {
            return Err(GameError::DeckExhausted {
                requested: needed,
                remaining: deck.remaining(),
            });
        }
        self.deck = deck;
        self.begin_hand()
    }

    fn funded_count(&self) -> usize {
        self.players.iter().filter(|p| p.chips() > 0).count()
    }

    fn begin_hand(&mut self) -> Result<(), GameError> {
        let funded = self.funded_count();
        if funded < 2 {
            return Err(GameError::NotEnoughPlayers { funded });
        }

        self.community.clear();
        self.pot = 0;
        self.current_bet = 0;
        self.hand_over = false;
        self.winner = None;
        self.outcome = None;
        self.phase = Phase::Preflop;
        self.round_actions.clear();
        self.acted = vec![false; self.players.len()];
        for p in &mut self.players {
            p.clear_hand();
            // busted seats sit out
            if p.chips() == 0 {
                p.fold();
            }
        }

        self.dealer = self.next_funded(self.dealer);
        let sb = self.next_funded(self.dealer);
        let bb = self.next_funded(sb);

        let sb_amount = self.small_blind.min(self.players[sb].chips());
        self.pot += self.players[sb].place_bet(sb_amount);
        let bb_amount = self.big_blind.min(self.players[bb].chips());
        self.pot += self.players[bb].place_bet(bb_amount);
        self.current_bet = bb_amount.max(sb_amount);

        for _ in 0..2 {
            for i in 0..self.players.len() {
                if self.players[i].is_folded() {
                    continue;
                }
                let c = self.deck.deal_card()?;
                self.players[i].receive_card(c);
            }
        }

        self.hand_number += 1;
        info!(
            hand = self.hand_number,
            dealer = self.dealer,
            small_blind = sb,
            big_blind = bb,
            pot = self.pot,
            "hand started"
        );

        self.last_aggressor = Some(bb);
        self.actor = bb;
        self.next_player();
        Ok(())
    }

    fn next_funded(&self, from: usize) -> usize {
        let n = self.players.len();
        (1..=n)
            .map(|step| (from + step) % n)
            .find(|&i| !self.players[i].is_folded())
            .unwrap_or((from + 1) % n)
    }

    fn active_count(&self) -> usize {
        self.players.iter().filter(|p| !p.is_folded()).count()
    }

    fn can_current_act(&self) -> bool {
        !self.hand_over && self.players.get(self.actor).is_some_and(Player::can_act)
    }

    fn ignored(&self, action: &str) -> Option<ActionRecord> {
        debug!(seat = self.actor, action, "ignoring illegal action");
        None
    }

    fn record(&mut self, seat: usize, action: PlayerAction) -> ActionRecord {
        self.acted[seat] = true;
        let p = &self.players[seat];
        let rec = ActionRecord {
            seat,
            player: p.name().to_string(),
            phase: self.phase,
            action,
            all_in: p.is_all_in() && p.chips() == 0 && !matches!(action, PlayerAction::Fold),
        };
        debug!(seat, action = action.kind(), pot = self.pot, "action applied");
        self.round_actions.push(rec.clone());
        rec
    }

    /// Applies `action` for the acting seat. Returns the logged record, or
    /// `None` when the action had no effect.
    pub fn apply(&mut self, action: PlayerAction) -> Option<ActionRecord> {
        match action {
            PlayerAction::Fold => self.fold(),
            PlayerAction::Check => self.check(),
            PlayerAction::Call(_) => self.call(),
            PlayerAction::Bet(amount) => self.bet(amount),
            PlayerAction::Raise(amount) => self.raise_bet(amount),
        }
    }

    pub fn fold(&mut self) -> Option<ActionRecord> {
        if !self.can_current_act() {
            return self.ignored("fold");
        }
        let seat = self.actor;
        self.players[seat].fold();
        let rec = self.record(seat, PlayerAction::Fold);
        if self.active_count() == 1 {
            self.end_hand();
        } else {
            self.next_player();
        }
        Some(rec)
    }

    pub fn check(&mut self) -> Option<ActionRecord> {
        if !self.can_current_act() || self.players[self.actor].current_bet() < self.current_bet {
            return self.ignored("check");
        }
        let rec = self.record(self.actor, PlayerAction::Check);
        self.next_player();
        Some(rec)
    }

    pub fn call(&mut self) -> Option<ActionRecord> {
        if !self.can_current_act() {
            return self.ignored("call");
        }
        let owed = self.to_call();
        if owed == 0 {
            return self.check();
        }
        let seat = self.actor;
        let moved = self.players[seat].place_bet(owed);
        self.pot += moved;
        let rec = self.record(seat, PlayerAction::Call(moved));
        self.next_player();
        Some(rec)
    }

    /// Opens the betting; ignored once a bet exists on this street.
    pub fn bet(&mut self, amount: u32) -> Option<ActionRecord> {
        if !self.can_current_act() || self.current_bet > 0 {
            return self.ignored("bet");
        }
        let seat = self.actor;
        let moved = self.players[seat].place_bet(amount.max(self.min_bet));
        self.pot += moved;
        self.current_bet = self.players[seat].current_bet();
        self.last_aggressor = Some(seat);
        let rec = self.record(seat, PlayerAction::Bet(moved));
        self.next_player();
        Some(rec)
    }

    /// Calls and raises by `amount`, committing at least twice the minimum
    /// bet unless the stack is shorter.
    ///
    /// Ignored on an unopened street (that is a bet) and when the stack does
    /// not cover more than the call.
    pub fn raise_bet(&mut self, amount: u32) -> Option<ActionRecord> {
        if !self.can_current_act()
            || self.current_bet == 0
            || self.players[self.actor].chips() <= self.to_call()
        {
            return self.ignored("raise");
        }
        let seat = self.actor;
        let total = self.to_call().saturating_add(amount).max(self.min_bet * 2);
        let moved = self.players[seat].place_bet(total);
        self.pot += moved;
        let committed = self.players[seat].current_bet();
        // an all-in for less never lowers the price for everyone else
        if committed > self.current_bet {
            self.current_bet = committed;
            self.last_aggressor = Some(seat);
        }
        let rec = self.record(seat, PlayerAction::Raise(moved));
        self.next_player();
        Some(rec)
    }

    fn round_settled(&self) -> bool {
        self.players.iter().zip(&self.acted).all(|(p, &acted)| {
            p.is_folded() || !p.can_act() || (acted && p.current_bet() == self.current_bet)
        })
    }

    fn next_player(&mut self) {
        let n = self.players.len();
        for _ in 0..n {
            self.actor = (self.actor + 1) % n;
            if Some(self.actor) == self.last_aggressor
                || self.active_count() <= 1
                || self.round_settled()
            {
                self.next_phase();
                return;
            }
            if self.players[self.actor].can_act() {
                return;
            }
        }
        self.next_phase();
    }

    fn next_phase(&mut self) {
        loop {
            if self.phase == Phase::Showdown || self.active_count() <= 1 {
                self.end_hand();
                return;
            }
            self.phase = self.phase.next();
            match self.phase {
                Phase::Flop => self.reveal(3),
                Phase::Turn | Phase::River => self.reveal(1),
                Phase::Preflop | Phase::Showdown => {}
            }

            for p in &mut self.players {
                p.reset_round();
            }
            self.current_bet = 0;
            self.last_aggressor = None;
            self.round_actions.clear();
            self.acted.iter_mut().for_each(|a| *a = false);
            info!(phase = self.phase.as_str(), pot = self.pot, "phase started");

            if self.phase == Phase::Showdown {
                self.end_hand();
                return;
            }

            let n = self.players.len();
            let capable = self.players.iter().filter(|p| p.can_act()).count();
            let first = (1..=n)
                .map(|step| (self.dealer + step) % n)
                .find(|&i| self.players[i].can_act());
            // with fewer than two seats able to bet, run the board out
            if let (Some(seat), true) = (first, capable >= 2) {
                self.actor = seat;
                return;
            }
        }
    }

    fn reveal(&mut self, n: usize) {
        match self.deck.deal(n) {
            Ok(cards) => self.community.extend(cards),
            Err(e) => error!(error = %e, "could not deal community cards"),
        }
    }

    fn seats_from_dealer_left(&self) -> impl Iterator<Item = usize> + '_ {
        let n = self.players.len();
        (1..=n).map(move |step| (self.dealer + step) % n)
    }

    fn end_hand(&mut self) {
        if self.hand_over {
            return;
        }
        self.hand_over = true;

        let active: Vec<usize> = self
            .seats_from_dealer_left()
            .filter(|&i| !self.players[i].is_folded())
            .collect();

        let (winners, showdown) = if active.len() == 1 {
            (active, Vec::new())
        } else {
            let showdown = self.evaluate_active(&active);
            let winners = match showdown
                .iter()
                .max_by(|a, b| compare_hands(&a.rank, &b.rank))
            {
                Some(best) => showdown
                    .iter()
                    .filter(|e| compare_hands(&e.rank, &best.rank).is_eq())
                    .map(|e| e.seat)
                    .collect(),
                None => Vec::new(),
            };
            (winners, showdown)
        };

        if winners.is_empty() {
            error!(pot = self.pot, "hand ended without a winner");
            return;
        }

        let pot = self.pot;
        let share = pot / winners.len() as u32;
        let remainder = pot % winners.len() as u32;
        let mut payouts = Vec::with_capacity(winners.len());
        for (i, &seat) in winners.iter().enumerate() {
            let amount = if i == 0 { share + remainder } else { share };
            self.players[seat].add_chips(amount);
            payouts.push((seat, amount));
        }
        self.pot = 0;

        let names: Vec<&str> = winners.iter().map(|&s| self.players[s].name()).collect();
        let winner = names.join(", ");
        info!(hand = self.hand_number, winner = %winner, pot, "hand finished");
        self.winner = Some(winner);
        self.outcome = Some(HandOutcome {
            pot,
            winners,
            payouts,
            showdown,
        });
    }

    // each seat is evaluated exactly once per showdown
    fn evaluate_active(&self, seats: &[usize]) -> Vec<ShowdownEntry> {
        seats
            .iter()
            .filter_map(|&seat| {
                let mut cards = self.players[seat].hand().to_vec();
                cards.extend_from_slice(&self.community);
                match evaluate_hand(&cards) {
                    Ok(rank) => Some(ShowdownEntry { seat, rank }),
                    Err(e) => {
                        error!(seat, error = %e, "showdown evaluation failed");
                        None
                    }
                }
            })
            .collect()
    }
}
