use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// Hand categories, declared weakest to strongest so the derived `Ord` agrees
/// with poker ranking. [`Category::index`] gives the conventional 0 = best
/// numbering.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    /// 0 for a royal flush down to 9 for high card.
    pub fn index(self) -> u8 {
        Category::RoyalFlush as u8 - self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

/// Best five-card hand found in a 5-7 card set.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRank {
    pub category: Category,
    // compared lexicographically, higher is better
    pub tie_breakers: Vec<u8>,
    /// The winning five cards, highest value first.
    pub best_five: Vec<Card>,
}

impl HandRank {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }
}

/// Orders two hands by category, then tie-breakers. `Greater` means `a` wins.
/// The chosen cards themselves never break a tie.
pub fn compare_hands(a: &HandRank, b: &HandRank) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.tie_breakers.cmp(&b.tie_breakers),
        ord => ord,
    }
}

/// Evaluates every five-card combination of `cards` and keeps the strongest.
///
/// The input is put into a canonical order first, so the result does not
/// depend on the order the cards were supplied in.
///
/// # Errors
///
/// [`GameError::NotEnoughCards`] when fewer than five cards are given.
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::hand::{evaluate_hand, Category};
///
/// let cards = parse_cards("Ah Kh Qh Jh 10h 2c 3d").unwrap();
/// let rank = evaluate_hand(&cards).unwrap();
/// assert_eq!(rank.category, Category::RoyalFlush);
/// assert_eq!(rank.tie_breakers, vec![14]);
/// ```
pub fn evaluate_hand(cards: &[Card]) -> Result<HandRank, GameError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(GameError::NotEnoughCards { count: cards.len() });
    }
    let mut sorted = cards.to_vec();
    sorted.sort_unstable_by(|a, b| b.value().cmp(&a.value()).then(a.suit.cmp(&b.suit)));

    let mut best: Option<HandRank> = None;
    for idx in five_card_combinations(sorted.len()) {
        let five = idx.map(|i| sorted[i]);
        let (category, tie_breakers) = classify(&five);
        let better = match &best {
            None => true,
            Some(b) => {
                category > b.category || (category == b.category && tie_breakers > b.tie_breakers)
            }
        };
        if better {
            best = Some(HandRank {
                category,
                tie_breakers,
                best_five: five.to_vec(),
            });
        }
    }
    best.ok_or(GameError::NotEnoughCards { count: cards.len() })
}

fn five_card_combinations(n: usize) -> Vec<[usize; 5]> {
    let mut out = Vec::new();
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        out.push([a, b, c, d, e]);
                    }
                }
            }
        }
    }
    out
}

// `five` must be sorted by value, highest first.
fn classify(five: &[Card; 5]) -> (Category, Vec<u8>) {
    let values = five.map(|c| c.value());
    let flush = five.iter().all(|c| c.suit == five[0].suit);
    let straight_high = straight_high(&values);

    if let (true, Some(high)) = (flush, straight_high) {
        return if high == 12 {
            (Category::RoyalFlush, vec![14])
        } else {
            (Category::StraightFlush, vec![high])
        };
    }

    // (count, value) groups, largest group first, then highest value
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for &v in &values {
        match groups.iter_mut().find(|g| g.1 == v) {
            Some(g) => g.0 += 1,
            None => groups.push((1, v)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));
    let grouped: Vec<u8> = groups.iter().map(|g| g.1).collect();

    match (groups[0].0, groups.get(1).map(|g| g.0)) {
        (4, _) => (Category::FourOfAKind, grouped),
        (3, Some(2)) => (Category::FullHouse, grouped),
        _ if flush => (Category::Flush, values.to_vec()),
        _ if straight_high.is_some() => (Category::Straight, straight_high.into_iter().collect()),
        (3, _) => (Category::ThreeOfAKind, grouped),
        (2, Some(2)) => (Category::TwoPair, grouped),
        (2, _) => (Category::OnePair, grouped),
        _ => (Category::HighCard, values.to_vec()),
    }
}

fn straight_high(values: &[u8; 5]) -> Option<u8> {
    // wheel: A-5-4-3-2 plays as five-high
    if *values == [12, 3, 2, 1, 0] {
        return Some(3);
    }
    let distinct = values.windows(2).all(|w| w[0] != w[1]);
    if distinct && values[0] - values[4] == 4 {
        Some(values[0])
    } else {
        None
    }
}
