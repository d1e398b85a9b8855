//! Monte Carlo win-probability estimate for one seat's hole cards.
//!
//! Each sample completes the board and deals random hands to the opponents
//! from the cards nobody can see, then scores the showdown with
//! [`evaluate_hand`]. A tied showdown credits each best hand an equal share.

use std::cmp::Ordering;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;
use crate::hand::{compare_hands, evaluate_hand, HandRank};

/// Sample count used for the interactive hint.
pub const DEFAULT_SAMPLES: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equity {
    pub wins: u32,
    /// Sum of split-pot shares.
    pub ties: f64,
    pub samples: u32,
}

impl Equity {
    /// Expected share of the pot in `0.0..=1.0`.
    pub fn equity(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        (f64::from(self.wins) + self.ties) / f64::from(self.samples)
    }

    pub fn win_rate(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(self.samples)
    }
}

/// Estimates how often `hole` wins against `opponents` random hands.
///
/// # Errors
///
/// `InvalidCard` unless there are exactly two hole cards and at most five
/// board cards, `DuplicateCard` when a card is repeated, and `DeckExhausted`
/// when the unseen cards cannot cover the runout and every opponent.
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::equity::estimate;
/// use holdem_engine::rng::SeededRng;
///
/// let hole = parse_cards("Ah Kh").unwrap();
/// let board = parse_cards("Qh Jh 10h").unwrap();
/// let mut rng = SeededRng::from_seed_u64(1);
/// let eq = estimate(&hole, &board, 3, 100, &mut rng).unwrap();
/// assert_eq!(eq.equity(), 1.0);
/// ```
pub fn estimate(
    hole: &[Card],
    board: &[Card],
    opponents: usize,
    samples: u32,
    rng: &mut impl Rng,
) -> Result<Equity, GameError> {
    if hole.len() != 2 || board.len() > 5 {
        return Err(GameError::InvalidCard(format!(
            "equity needs 2 hole cards and at most 5 board cards, got {} and {}",
            hole.len(),
            board.len()
        )));
    }
    let known: Vec<Card> = hole.iter().chain(board).copied().collect();
    for (i, c) in known.iter().enumerate() {
        if known[..i].contains(c) {
            return Err(GameError::DuplicateCard(*c));
        }
    }
    let mut unseen: Vec<Card> = full_deck().into_iter().filter(|c| !known.contains(c)).collect();
    let runout = 5 - board.len();
    let needed = runout + 2 * opponents;
    if needed > unseen.len() {
        return Err(GameError::DeckExhausted {
            requested: needed,
            remaining: unseen.len(),
        });
    }

    let mut result = Equity {
        wins: 0,
        ties: 0.0,
        samples,
    };
    let mut seven = Vec::with_capacity(7);
    for _ in 0..samples {
        let (drawn, _) = unseen.partial_shuffle(rng, needed);
        let (extra, holes) = drawn.split_at(runout);

        seven.clear();
        seven.extend_from_slice(hole);
        seven.extend_from_slice(board);
        seven.extend_from_slice(extra);
        let hero = evaluate_hand(&seven)?;

        let mut best: HandRank = hero;
        let mut best_count = 1u32;
        let mut hero_best = true;
        for pair in holes.chunks_exact(2) {
            seven.clear();
            seven.extend_from_slice(pair);
            seven.extend_from_slice(board);
            seven.extend_from_slice(extra);
            let rank = evaluate_hand(&seven)?;
            match compare_hands(&rank, &best) {
                Ordering::Greater => {
                    best = rank;
                    best_count = 1;
                    hero_best = false;
                }
                Ordering::Equal => best_count += 1,
                Ordering::Less => {}
            }
        }

        if hero_best {
            if best_count == 1 {
                result.wins += 1;
            } else {
                result.ties += 1.0 / f64::from(best_count);
            }
        }
    }
    Ok(result)
}
