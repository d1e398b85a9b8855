//! # holdem-engine: Texas Hold'em Table Core
//!
//! A deterministic no-limit Texas Hold'em table for two to ten seats. Provides
//! the betting state machine, hand evaluation, session statistics and
//! save/restore, with seeded RNG so every deal can be reproduced.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and parsing
//! - [`deck`] - Seeded shuffling and all-or-nothing dealing
//! - [`equity`] - Monte Carlo win-probability estimate
//! - [`game`] - Betting rounds, phase transitions and showdown
//! - [`hand`] - Best-of-seven hand evaluation and comparison
//! - [`player`] - Seats, stacks, actions and agent profiles
//! - [`rules`] - Legal action listing for the acting seat
//! - [`stats`] - Per-player session statistics
//! - [`snapshot`] - Versioned JSON save files
//! - [`history`] - JSONL hand history
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::hand::{evaluate_hand, Category};
//!
//! let cards = parse_cards("As Ks Qs Js 10s 2c 3d").unwrap();
//! let rank = evaluate_hand(&cards).unwrap();
//! assert_eq!(rank.category, Category::RoyalFlush);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(42);
//! let mut b = Deck::new_with_seed(42);
//! a.shuffle();
//! b.shuffle();
//! assert_eq!(a.deal(5).unwrap(), b.deal(5).unwrap());
//! ```

pub mod cards;
pub mod deck;
pub mod equity;
pub mod errors;
pub mod game;
pub mod hand;
pub mod history;
pub mod player;
pub mod rng;
pub mod rules;
pub mod snapshot;
pub mod stats;
