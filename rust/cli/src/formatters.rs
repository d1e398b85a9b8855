//! Card, board, action and statistics formatters for terminal display.
//!
//! Suits render as ♥ ♦ ♣ ♠ where the terminal is expected to cope with them
//! and as h d c s otherwise.
//!
//! ## Example
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let board = vec![ace_spades];
//! assert!(format_board(&board).starts_with("[A"));
//! ```

use holdem_engine::cards::{Card, Suit};
use holdem_engine::player::{Player, PlayerAction};
use holdem_engine::rules::{ActionKind, LegalActions};
use holdem_engine::stats::StatsBook;
use std::fmt::Write as _;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Card as rank label plus suit, e.g. "10♥" or "10h".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.label(), format_suit(&card.suit))
}

/// Format a board (list of cards) as a string in bracket notation.
///
/// # Example
///
/// ```rust
/// use holdem_engine::cards::parse_cards;
/// # use holdem_cli::formatters::format_board;
///
/// let flop = parse_cards("As Kh Qd").unwrap();
/// let formatted = format_board(&flop);
/// assert!(formatted.starts_with("[A"));
/// assert!(formatted.ends_with("]"));
/// assert_eq!(format_board(&[]), "[]");
/// ```
pub fn format_board(cards: &[Card]) -> String {
    let formatted_cards: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted_cards.join(" "))
}

/// Format a PlayerAction as a human-readable string.
///
/// ```rust
/// use holdem_engine::player::PlayerAction;
/// # use holdem_cli::formatters::format_action;
///
/// assert_eq!(format_action(&PlayerAction::Fold), "fold");
/// assert_eq!(format_action(&PlayerAction::Call(20)), "call 20");
/// assert_eq!(format_action(&PlayerAction::Bet(100)), "bet 100");
/// ```
pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Check => "check".to_string(),
        PlayerAction::Call(amount) => format!("call {}", amount),
        PlayerAction::Bet(amount) => format!("bet {}", amount),
        PlayerAction::Raise(amount) => format!("raise {}", amount),
    }
}

/// The prompt hint for the acting seat, e.g. "fold/call 20/raise".
pub fn format_legal(legal: &LegalActions) -> String {
    legal
        .kinds
        .iter()
        .map(|k| match k {
            ActionKind::Fold => "fold".to_string(),
            ActionKind::Check => "check".to_string(),
            ActionKind::Call => format!("call {}", legal.to_call),
            ActionKind::Bet => format!("bet <{}+>", legal.min_bet),
            ActionKind::Raise => "raise <amount>".to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// One line per seat: name, stack and round bet, with status markers.
pub fn format_seats(players: &[Player], dealer: usize, actor: Option<usize>) -> String {
    let mut s = String::new();
    for (seat, p) in players.iter().enumerate() {
        let mut tags = Vec::new();
        if seat == dealer {
            tags.push("D");
        }
        if p.is_folded() {
            tags.push("folded");
        }
        if p.is_all_in() {
            tags.push("all-in");
        }
        let marker = if Some(seat) == actor { ">" } else { " " };
        let _ = write!(s, "{} {:<10} chips={:<6} bet={:<5}", marker, p.name(), p.chips(), p.current_bet());
        if !tags.is_empty() {
            let _ = write!(s, " ({})", tags.join(", "));
        }
        s.push('\n');
    }
    s
}

/// Final standings, richest first.
pub fn format_standings(players: &[Player]) -> String {
    let mut order: Vec<&Player> = players.iter().collect();
    order.sort_by(|a, b| b.chips().cmp(&a.chips()));
    let mut s = String::new();
    for (i, p) in order.iter().enumerate() {
        let _ = writeln!(s, "#{}: {} - {}", i + 1, p.name(), p.chips());
    }
    s
}

/// Tabulates every player in the book.
///
/// ```rust
/// use holdem_engine::stats::StatsBook;
/// # use holdem_cli::formatters::format_stats_table;
///
/// assert_eq!(format_stats_table(&StatsBook::new()), "No statistics recorded.\n");
/// ```
pub fn format_stats_table(book: &StatsBook) -> String {
    if book.is_empty() {
        return "No statistics recorded.\n".to_string();
    }
    let mut s = String::new();
    let _ = writeln!(
        s,
        "{:<12} {:>6} {:>6} {:>7} {:>8} {:>6} {:>7}  {}",
        "player", "hands", "won", "win%", "net", "fold%", "bigpot", "best hand"
    );
    for (name, st) in book.iter() {
        let best = st.best_hand.as_ref().map_or("-", |h| h.label());
        let _ = writeln!(
            s,
            "{:<12} {:>6} {:>6} {:>6.1}% {:>8} {:>5.1}% {:>7}  {}",
            name,
            st.hands_played,
            st.hands_won,
            st.win_percentage(),
            st.net_profit(),
            st.fold_percentage(),
            st.biggest_pot_won,
            best
        );
    }
    s
}
