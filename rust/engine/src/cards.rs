use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Represents one of the four suits in a standard 52-card deck.
/// Suits only matter for flush matching; they never break ties.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// [`Rank::value`] maps the ranks onto `0..=12` for hand evaluation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Zero-based value: Two is 0, Ace is 12.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(v: u8) -> Result<Rank, GameError> {
        all_ranks()
            .get(v as usize)
            .copied()
            .ok_or_else(|| GameError::InvalidCard(format!("rank value {v} out of range")))
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// Represents a single playing card with a suit and rank.
/// Only the 52 canonical combinations exist since both parts are closed enums.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// Parses `"As"`, `"10h"`, `"Td"`, `"K♦"` style notation.
impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit_char = chars
            .next_back()
            .ok_or_else(|| GameError::InvalidCard("empty card".into()))?;
        let rank_part = chars.as_str();
        let suit = match suit_char.to_ascii_lowercase() {
            'h' | '♥' => Suit::Hearts,
            'd' | '♦' => Suit::Diamonds,
            'c' | '♣' => Suit::Clubs,
            's' | '♠' => Suit::Spades,
            other => return Err(GameError::InvalidCard(format!("invalid suit '{other}'"))),
        };
        let rank = match rank_part.to_ascii_uppercase().as_str() {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            other => return Err(GameError::InvalidCard(format!("invalid rank '{other}'"))),
        };
        Ok(Card { rank, suit })
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}

/// Parses a whitespace separated list of cards, e.g. `"As Kd 10h"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, GameError> {
    s.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ascii_and_unicode_notation() {
        assert_eq!("As".parse::<Card>().unwrap(), Card::new(Rank::Ace, Suit::Spades));
        assert_eq!("10h".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Hearts));
        assert_eq!("Td".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
        assert_eq!("K♦".parse::<Card>().unwrap(), Card::new(Rank::King, Suit::Diamonds));
    }

    #[test]
    fn rejects_non_canonical_cards() {
        assert!(matches!("1s".parse::<Card>(), Err(GameError::InvalidCard(_))));
        assert!(matches!("Ax".parse::<Card>(), Err(GameError::InvalidCard(_))));
        assert!(matches!("".parse::<Card>(), Err(GameError::InvalidCard(_))));
        assert!(Rank::from_value(13).is_err());
    }

    #[test]
    fn rank_values_are_zero_indexed() {
        assert_eq!(Rank::Two.value(), 0);
        assert_eq!(Rank::Five.value(), 3);
        assert_eq!(Rank::Ace.value(), 12);
        assert_eq!(Rank::from_value(9).unwrap(), Rank::Jack);
    }

    #[test]
    fn display_uses_suit_symbols() {
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10♥");
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A♠");
    }
}
