//! Hand-strength estimate used by automated seats.
//!
//! Produces a noisy scalar in [0, 1]. Before the flop it looks only at the
//! hole cards; afterwards it maps the evaluated category through a fixed
//! table and reshapes the result by the seat's personality.

use holdem_engine::cards::{Card, Rank};
use holdem_engine::errors::GameError;
use holdem_engine::hand::{evaluate_hand, Category};
use holdem_engine::player::{AgentProfile, Personality};
use rand::Rng;

/// Base strength per evaluated category.
pub fn category_strength(category: Category) -> f64 {
    match category {
        Category::HighCard => 0.1,
        Category::OnePair => 0.3,
        Category::TwoPair => 0.5,
        Category::ThreeOfAKind => 0.6,
        Category::Straight => 0.7,
        Category::Flush => 0.8,
        Category::FullHouse => 0.85,
        Category::FourOfAKind => 0.9,
        Category::StraightFlush => 0.95,
        Category::RoyalFlush => 1.0,
    }
}

/// Estimates how strong `hole` is given the `board` seen so far.
///
/// # Arguments
///
/// * `hole` - The seat's two hole cards
/// * `board` - Community cards, empty before the flop
/// * `profile` - Supplies the personality and the random jitter
///
/// # Errors
///
/// Propagates evaluator errors when fewer than five cards are known
/// postflop, which the state machine never produces.
pub fn estimate(hole: &[Card], board: &[Card], profile: &mut AgentProfile) -> Result<f64, GameError> {
    if board.is_empty() {
        return Ok(preflop(hole, profile));
    }

    let mut cards = hole.to_vec();
    cards.extend_from_slice(board);
    let rank = evaluate_hand(&cards)?;
    let rng = &mut profile.rng;
    let s = category_strength(rank.category) + rng.random_range(-0.1..=0.1);

    let s = match profile.personality {
        // tight compresses toward the bottom, loose toward the middle
        Personality::Tight => s * 0.8 + 0.1,
        Personality::Loose => s * 0.6 + 0.3,
        Personality::Unpredictable => s * 0.5 + rng.random_range(0.0..=0.5),
    };
    Ok(s.clamp(0.1, 1.0))
}

fn preflop(hole: &[Card], profile: &mut AgentProfile) -> f64 {
    let rng = &mut profile.rng;
    let [a, b] = match hole {
        [a, b] => [*a, *b],
        _ => return 0.2 + rng.random_range(0.0..=0.3),
    };

    if a.rank == b.rank {
        return 0.8 + rng.random_range(0.0..=0.2);
    }
    // zero-indexed value 10 and up: queen or better
    if a.value().max(b.value()) >= Rank::Queen.value() {
        return 0.6 + rng.random_range(0.0..=0.2);
    }
    if a.suit == b.suit {
        return 0.5 + rng.random_range(0.0..=0.2);
    }
    if a.value().abs_diff(b.value()) <= 2 {
        return 0.4 + rng.random_range(0.0..=0.2);
    }
    0.2 + rng.random_range(0.0..=0.3)
}
