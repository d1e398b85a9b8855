use std::collections::HashSet;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card};
use crate::errors::GameError;
use crate::rng::SeededRng;

/// A stack of unique cards dealt from the top, with its own seeded RNG.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    // top of the deck is the end of the vec
    cards: Vec<Card>,
    rng: SeededRng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        // Keep canonical order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng: SeededRng::from_seed_u64(seed),
        }
    }

    /// Builds a pre-arranged deck that deals `order[0]` first.
    pub fn from_order(order: Vec<Card>, seed: u64) -> Result<Self, GameError> {
        let mut seen = HashSet::with_capacity(order.len());
        for c in &order {
            if !seen.insert(*c) {
                return Err(GameError::DuplicateCard(*c));
            }
        }
        let mut cards = order;
        cards.reverse();
        Ok(Self {
            cards,
            rng: SeededRng::from_seed_u64(seed),
        })
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Repopulates all 52 cards in canonical order.
    pub fn reset(&mut self) {
        self.cards = full_deck();
    }

    pub fn deal_card(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::DeckExhausted {
            requested: 1,
            remaining: 0,
        })
    }

    /// Removes exactly `n` cards from the top, or none at all.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::DeckExhausted {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        let at = self.cards.len() - n;
        let mut dealt = self.cards.split_off(at);
        dealt.reverse();
        Ok(dealt)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Remaining cards in dealing order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn deal_takes_from_top_in_order() {
        let order = vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Two, Suit::Clubs),
        ];
        let mut deck = Deck::from_order(order.clone(), 1).unwrap();
        assert_eq!(deck.deal(2).unwrap(), order[..2].to_vec());
        assert_eq!(deck.deal_card().unwrap(), order[2]);
    }

    #[test]
    fn failed_deal_leaves_deck_untouched() {
        let mut deck = Deck::new_with_seed(3);
        deck.deal(50).unwrap();
        let err = deck.deal(3).unwrap_err();
        assert_eq!(
            err,
            GameError::DeckExhausted {
                requested: 3,
                remaining: 2
            }
        );
        assert_eq!(deck.remaining(), 2);
    }

    #[test]
    fn from_order_rejects_duplicates() {
        let c = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(
            Deck::from_order(vec![c, c], 0).unwrap_err(),
            GameError::DuplicateCard(c)
        );
    }
}
