use std::collections::HashSet;

use holdem_engine::cards::Card;
use holdem_engine::deck::Deck;

#[test]
fn deck_reset_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.shuffle();
    deck.deal(17).unwrap();
    deck.reset();
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal_card().expect("should have 52 cards");
        assert!(set.insert(c), "card {c:?} duplicated at position {i}");
    }
    assert!(deck.deal_card().is_err(), "after 52 cards, deck should be empty");
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = d1.deal(10).unwrap();
    let b: Vec<Card> = d2.deal(10).unwrap();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    assert_ne!(d1.deal(10).unwrap(), d2.deal(10).unwrap());
}

#[test]
fn successive_shuffles_continue_the_stream() {
    let mut deck = Deck::new_with_seed(7);
    deck.shuffle();
    let first: Vec<Card> = deck.cards().copied().collect();
    deck.reset();
    deck.shuffle();
    let second: Vec<Card> = deck.cards().copied().collect();
    assert_ne!(first, second);
}
