//! Runs a [`DecisionPolicy`] as a blocking call with a deadline.
//!
//! Late answers are replaced by a check (nothing to call) or a fold, and any
//! failure, panics included, becomes a fold. The chosen action always goes
//! through [`Game::apply`], the same entry point human input uses.

use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use holdem_engine::game::{ActionRecord, Game, TableView};
use holdem_engine::player::{Player, PlayerAction};
use holdem_engine::rules::ActionKind;
use tracing::{debug, warn};

use crate::{AgentError, DecisionPolicy, ProfilePolicy};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct AgentDriver<P = ProfilePolicy> {
    policy: P,
    timeout: Duration,
}

impl AgentDriver<ProfilePolicy> {
    pub fn new(timeout: Duration) -> Self {
        Self::with_policy(ProfilePolicy, timeout)
    }
}

impl Default for AgentDriver<ProfilePolicy> {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl<P: DecisionPolicy> AgentDriver<P> {
    pub fn with_policy(policy: P, timeout: Duration) -> Self {
        Self { policy, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Decides for the acting seat and applies the action.
    ///
    /// Returns `None` when the acting seat is human or the hand is over.
    pub fn act(&self, game: &mut Game) -> Option<ActionRecord> {
        if game.is_hand_over() {
            return None;
        }
        let seat = game.current_player();
        let view = game.view();
        let player = game.player_mut(seat)?;
        if player.is_human() {
            return None;
        }
        let fallback = safe_default(player, &view);
        let mut action = self.decide(player, &view)?;
        // a stack that only covers the call goes all-in calling
        if matches!(action, PlayerAction::Raise(_)) && !game.legal_actions().allows(ActionKind::Raise) {
            action = PlayerAction::Call(0);
        }

        game.apply(action).or_else(|| {
            warn!(seat, action = action.kind(), "agent chose an ignored action, using fallback");
            game.apply(fallback)
        })
    }

    /// Runs the policy for `player`, substituting the fallback on timeout or
    /// failure. `None` means the seat cannot act.
    pub fn decide(&self, player: &mut Player, view: &TableView) -> Option<PlayerAction> {
        let fallback = safe_default(player, view);
        let started = Instant::now();
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.policy.decide(player, view)))
            .unwrap_or_else(|_| Err(AgentError::Internal("decision panicked".into())));
        let elapsed = started.elapsed();

        let result = match result {
            Ok(Some(_)) if elapsed > self.timeout => Err(AgentError::Timeout),
            other => other,
        };

        match result {
            Ok(decision) => {
                if let Some(a) = decision {
                    debug!(policy = self.policy.name(), action = a.kind(), ?elapsed, "agent decided");
                }
                decision
            }
            Err(AgentError::Timeout) => {
                warn!(
                    policy = self.policy.name(),
                    ?elapsed,
                    timeout = ?self.timeout,
                    fallback = fallback.kind(),
                    "agent decision timed out"
                );
                Some(fallback)
            }
            Err(e) => {
                warn!(policy = self.policy.name(), error = %e, "agent decision failed, folding");
                Some(PlayerAction::Fold)
            }
        }
    }
}

// check when it costs nothing, otherwise fold
fn safe_default(player: &Player, view: &TableView) -> PlayerAction {
    if view.current_bet <= player.current_bet() {
        PlayerAction::Check
    } else {
        PlayerAction::Fold
    }
}
