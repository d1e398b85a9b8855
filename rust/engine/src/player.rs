use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::rng::SeededRng;

/// Represents a player action during a betting round.
/// Amounts on `Bet`/`Raise` are requests; the game clamps them to legal sizes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "amount", rename_all = "lowercase")]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid with nothing to call)
    Check,
    /// Call the current bet; the amount is the cost seen when deciding
    Call(u32),
    /// Open the betting with the given amount
    Bet(u32),
    /// Raise by the given amount on top of the call
    Raise(u32),
}

impl PlayerAction {
    pub fn kind(&self) -> &'static str {
        match self {
            PlayerAction::Fold => "fold",
            PlayerAction::Check => "check",
            PlayerAction::Call(_) => "call",
            PlayerAction::Bet(_) => "bet",
            PlayerAction::Raise(_) => "raise",
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionStyle {
    Conservative,
    Aggressive,
    Balanced,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    Tight,
    Loose,
    Unpredictable,
}

/// Traits of an automated seat. They steer its decisions only; the rules of
/// the hand are the same for every seat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub style: DecisionStyle,
    pub personality: Personality,
    pub aggression: f64,
    /// Probability of ignoring hand strength and betting anyway.
    pub bluff_tendency: f64,
    pub rng: SeededRng,
}

/// Who decides for a seat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Seat {
    /// Actions come from outside the engine.
    Human,
    Agent(AgentProfile),
}

/// A seat at the table: chips, hole cards and per-hand betting state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    chips: u32,
    hand: Vec<Card>,
    current_bet: u32,
    total_committed: u32,
    folded: bool,
    all_in: bool,
    seat: Seat,
}

impl Player {
    pub fn human(name: impl Into<String>, chips: u32) -> Self {
        Self::new(name, chips, Seat::Human)
    }

    pub fn agent(name: impl Into<String>, chips: u32, profile: AgentProfile) -> Self {
        Self::new(name, chips, Seat::Agent(profile))
    }

    pub fn new(name: impl Into<String>, chips: u32, seat: Seat) -> Self {
        Self {
            name: name.into(),
            chips,
            hand: Vec::with_capacity(2),
            current_bet: 0,
            total_committed: 0,
            folded: false,
            all_in: false,
            seat,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn total_committed(&self) -> u32 {
        self.total_committed
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }
    pub fn seat(&self) -> &Seat {
        &self.seat
    }
    pub fn is_human(&self) -> bool {
        matches!(self.seat, Seat::Human)
    }

    pub fn profile(&self) -> Option<&AgentProfile> {
        match &self.seat {
            Seat::Agent(p) => Some(p),
            Seat::Human => None,
        }
    }

    pub fn profile_mut(&mut self) -> Option<&mut AgentProfile> {
        match &mut self.seat {
            Seat::Agent(p) => Some(p),
            Seat::Human => None,
        }
    }

    pub fn receive_card(&mut self, c: Card) {
        self.hand.push(c);
    }

    /// Clears cards and every per-hand flag.
    pub fn clear_hand(&mut self) {
        self.hand.clear();
        self.current_bet = 0;
        self.total_committed = 0;
        self.folded = false;
        self.all_in = false;
    }

    pub(crate) fn reset_round(&mut self) {
        self.current_bet = 0;
    }

    /// Moves up to `amount` chips from the stack into this round's bet.
    ///
    /// Returns the chips actually moved. Asking for the whole stack or more
    /// puts the player all-in.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_engine::player::Player;
    ///
    /// let mut p = Player::human("Ann", 30);
    /// assert_eq!(p.place_bet(50), 30);
    /// assert_eq!(p.chips(), 0);
    /// assert!(p.is_all_in());
    /// ```
    pub fn place_bet(&mut self, amount: u32) -> u32 {
        let amount = amount.min(self.chips);
        if amount == self.chips && amount > 0 {
            self.all_in = true;
        }
        self.chips -= amount;
        self.current_bet += amount;
        self.total_committed += amount;
        amount
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    pub fn fold(&mut self) {
        self.folded = true;
    }

    /// A seat can act while it is in the hand with chips behind.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in && self.chips > 0
    }
}
