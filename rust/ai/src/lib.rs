//! # holdem-ai: Automated Opponents for Texas Hold'em
//!
//! Decision policy for agent seats, plus the driver that runs it under a
//! deadline and applies the result to a [`Game`](holdem_engine::game::Game).
//!
//! ## Core Components
//!
//! - [`DecisionPolicy`] - Trait seam between the driver and a policy
//! - [`decide_action`] - The profile-driven policy every bot seat uses
//! - [`driver`] - Deadline and failure fallbacks around a policy
//! - [`roster`] - Bot seat generation by difficulty
//! - [`strength`] / [`policy`] - Hand-strength estimate and action selection
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::roster::{create_agents, Difficulty};
//! use holdem_ai::AgentDriver;
//! use holdem_engine::game::Game;
//! use std::time::Duration;
//!
//! let bots = create_agents(3, 1000, Difficulty::Medium, 42);
//! let mut game = Game::new(bots, 5, 10, Some(42)).unwrap();
//! game.start_new_hand().unwrap();
//!
//! let driver = AgentDriver::new(Duration::from_secs(1));
//! while !game.is_hand_over() {
//!     driver.act(&mut game);
//! }
//! assert!(game.winner().is_some());
//! ```

use holdem_engine::errors::GameError;
use holdem_engine::game::TableView;
use holdem_engine::player::{Player, PlayerAction};
use thiserror::Error;

pub mod driver;
pub mod policy;
pub mod roster;
pub mod strength;

pub use driver::AgentDriver;

/// Failures inside a decision. The driver recovers from all of them with a
/// fixed fallback action.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("decision exceeded its deadline")]
    Timeout,
    #[error("agent failure: {0}")]
    Internal(String),
    #[error("hand evaluation failed: {0}")]
    Evaluation(#[from] GameError),
    #[error("unknown difficulty {0:?} (expected easy, medium or hard)")]
    UnknownDifficulty(String),
}

/// Interface between the driver and whatever chooses actions for a seat.
///
/// # Example Implementation
///
/// ```rust
/// use holdem_ai::{AgentError, DecisionPolicy};
/// use holdem_engine::game::TableView;
/// use holdem_engine::player::{Player, PlayerAction};
///
/// struct AlwaysCall;
///
/// impl DecisionPolicy for AlwaysCall {
///     fn decide(&self, player: &mut Player, view: &TableView)
///         -> Result<Option<PlayerAction>, AgentError> {
///         let cost = view.current_bet.saturating_sub(player.current_bet());
///         Ok(player.can_act().then_some(PlayerAction::Call(cost)))
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysCall"
///     }
/// }
/// ```
pub trait DecisionPolicy {
    /// Chooses an action for `player`, or `None` when it cannot act.
    fn decide(
        &self,
        player: &mut Player,
        view: &TableView,
    ) -> Result<Option<PlayerAction>, AgentError>;

    fn name(&self) -> &str;
}

/// The trait-driven policy: strength estimate, bluff roll, then style branch.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfilePolicy;

impl DecisionPolicy for ProfilePolicy {
    fn decide(
        &self,
        player: &mut Player,
        view: &TableView,
    ) -> Result<Option<PlayerAction>, AgentError> {
        decide_action(player, view)
    }

    fn name(&self) -> &str {
        "ProfilePolicy"
    }
}

/// Decides for an agent seat from its profile and the public table state.
///
/// Returns `Ok(None)` for human seats and for seats that cannot act
/// (folded, all-in or out of chips).
///
/// # Errors
///
/// [`AgentError::Internal`] when the seat does not hold two hole cards, and
/// [`AgentError::Evaluation`] if the board cannot be evaluated.
pub fn decide_action(
    player: &mut Player,
    view: &TableView,
) -> Result<Option<PlayerAction>, AgentError> {
    if !player.can_act() {
        return Ok(None);
    }
    let hole = player.hand().to_vec();
    let chips = player.chips();
    let cost_to_call = view.current_bet.saturating_sub(player.current_bet());
    let Some(profile) = player.profile_mut() else {
        return Ok(None);
    };
    if hole.len() != 2 {
        return Err(AgentError::Internal(format!(
            "expected 2 hole cards, holding {}",
            hole.len()
        )));
    }

    let strength = strength::estimate(&hole, &view.community_cards, profile)?;
    let situation = policy::Situation {
        strength,
        cost_to_call,
        chips,
        min_bet: view.min_bet,
    };
    Ok(Some(policy::choose(profile, &situation)))
}
