//! Action selection for automated seats.
//!
//! A bluff roll comes first; otherwise the seat's decision style picks the
//! action from its hand strength and the price of staying in.

use holdem_engine::player::{AgentProfile, DecisionStyle, PlayerAction};
use rand::Rng;

/// What the policy sees at decision time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Situation {
    /// Estimated hand strength in [0, 1]
    pub strength: f64,
    pub cost_to_call: u32,
    pub chips: u32,
    pub min_bet: u32,
}

impl Situation {
    // floored at the table minimum after capping at the stack
    fn size(&self, amount: f64) -> u32 {
        (amount.max(0.0) as u32).min(self.chips).max(self.min_bet)
    }

    fn stack_share(&self, share: f64) -> f64 {
        self.chips as f64 * share
    }

    fn call(&self) -> PlayerAction {
        PlayerAction::Call(self.cost_to_call)
    }
}

/// Picks one action for the seat described by `profile`.
pub fn choose(profile: &mut AgentProfile, s: &Situation) -> PlayerAction {
    if let Some(action) = bluff(profile, s) {
        return action;
    }
    let rng = &mut profile.rng;
    match profile.style {
        DecisionStyle::Conservative => conservative(rng, s),
        DecisionStyle::Aggressive => aggressive(rng, s),
        DecisionStyle::Balanced => balanced(rng, s),
    }
}

fn bluff(profile: &mut AgentProfile, s: &Situation) -> Option<PlayerAction> {
    let rng = &mut profile.rng;
    if rng.random::<f64>() >= profile.bluff_tendency {
        return None;
    }
    if s.cost_to_call == 0 {
        let amount = s.stack_share(rng.random_range(0.1..=0.3));
        return Some(PlayerAction::Bet(s.size(amount)));
    }
    if rng.random_bool(0.5) {
        let amount = s.cost_to_call as f64 + s.stack_share(rng.random_range(0.1..=0.3));
        return Some(PlayerAction::Raise(s.size(amount)));
    }
    // a failed bluff roll falls through to the style
    None
}

/// Plays only strong hands.
fn conservative(rng: &mut impl Rng, s: &Situation) -> PlayerAction {
    let st = s.strength;
    if s.cost_to_call == 0 {
        if st > 0.5 {
            return PlayerAction::Bet(s.size(s.stack_share(st * 0.2)));
        }
        return PlayerAction::Check;
    }
    if st < 0.4 {
        return PlayerAction::Fold;
    }
    if st > 0.7 && rng.random::<f64>() < 0.3 {
        let amount = s.cost_to_call as f64 + s.stack_share(st * 0.3);
        return PlayerAction::Raise(s.size(amount));
    }
    if (s.cost_to_call as f64) < s.stack_share(0.2) || st > 0.5 {
        return s.call();
    }
    PlayerAction::Fold
}

/// Bets most of the time and raises light.
fn aggressive(rng: &mut impl Rng, s: &Situation) -> PlayerAction {
    let st = s.strength;
    if s.cost_to_call == 0 {
        if rng.random::<f64>() < 0.7 {
            return PlayerAction::Bet(s.size(s.stack_share(st * 0.5 + 0.1)));
        }
        return PlayerAction::Check;
    }
    if st < 0.2 && s.cost_to_call as f64 > s.stack_share(0.3) {
        return PlayerAction::Fold;
    }
    if st > 0.5 || rng.random::<f64>() < 0.4 {
        let amount = s.cost_to_call as f64 + s.stack_share(st * 0.6 + 0.1);
        return PlayerAction::Raise(s.size(amount));
    }
    s.call()
}

fn balanced(rng: &mut impl Rng, s: &Situation) -> PlayerAction {
    let st = s.strength;
    if s.cost_to_call == 0 {
        if rng.random::<f64>() < st + 0.2 {
            return PlayerAction::Bet(s.size(s.stack_share(st * 0.3)));
        }
        return PlayerAction::Check;
    }
    if st < 0.3 && s.cost_to_call as f64 > s.stack_share(0.2) {
        return PlayerAction::Fold;
    }
    if st > 0.6 && rng.random::<f64>() < 0.5 {
        let amount = s.cost_to_call as f64 + s.stack_share(st * 0.4);
        return PlayerAction::Raise(s.size(amount));
    }
    if (s.cost_to_call as f64) < s.stack_share(0.3) || st > 0.4 {
        return s.call();
    }
    PlayerAction::Fold
}
