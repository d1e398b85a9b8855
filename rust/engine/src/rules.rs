use serde::{Deserialize, Serialize};

use crate::player::{Player, PlayerAction};

/// Action kinds without amounts, as offered to a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

impl From<&PlayerAction> for ActionKind {
    fn from(a: &PlayerAction) -> Self {
        match a {
            PlayerAction::Fold => ActionKind::Fold,
            PlayerAction::Check => ActionKind::Check,
            PlayerAction::Call(_) => ActionKind::Call,
            PlayerAction::Bet(_) => ActionKind::Bet,
            PlayerAction::Raise(_) => ActionKind::Raise,
        }
    }
}

/// What the acting seat may do, with the sizes the game will enforce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalActions {
    pub kinds: Vec<ActionKind>,
    /// Chips needed to match the table bet (before clamping to the stack).
    pub to_call: u32,
    /// Smallest opening bet.
    pub min_bet: u32,
    /// Smallest total commitment for a raise.
    pub min_raise_total: u32,
}

impl LegalActions {
    pub fn allows(&self, kind: ActionKind) -> bool {
        self.kinds.contains(&kind)
    }
}

pub fn to_call(player: &Player, table_bet: u32) -> u32 {
    table_bet.saturating_sub(player.current_bet())
}

/// Lists the actions that would have an effect for `player`.
///
/// Anything not listed is ignored by the game rather than rejected.
///
/// # Examples
///
/// ```
/// use holdem_engine::player::Player;
/// use holdem_engine::rules::{legal_actions, ActionKind};
///
/// let p = Player::human("Ann", 1000);
/// let legal = legal_actions(&p, 0, 10);
/// assert!(legal.allows(ActionKind::Check));
/// assert!(legal.allows(ActionKind::Bet));
/// assert!(!legal.allows(ActionKind::Call));
///
/// let facing = legal_actions(&p, 40, 10);
/// assert_eq!(facing.to_call, 40);
/// assert!(!facing.allows(ActionKind::Check));
/// ```
pub fn legal_actions(player: &Player, table_bet: u32, min_bet: u32) -> LegalActions {
    let to_call = to_call(player, table_bet);
    let mut kinds = Vec::new();
    if player.can_act() {
        kinds.push(ActionKind::Fold);
        if to_call == 0 {
            kinds.push(ActionKind::Check);
        } else {
            kinds.push(ActionKind::Call);
        }
        if table_bet == 0 {
            kinds.push(ActionKind::Bet);
        } else if player.chips() > to_call {
            kinds.push(ActionKind::Raise);
        }
    }
    LegalActions {
        kinds,
        to_call,
        min_bet,
        min_raise_total: min_bet.saturating_mul(2).max(to_call),
    }
}
