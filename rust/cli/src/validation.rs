//! Parsing of interactive player input.

use holdem_engine::player::PlayerAction;

/// Outcome of parsing one line typed at the action prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action parsed from input
    Action(PlayerAction),
    /// Show the session statistics
    Stats,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a PlayerAction or special commands.
///
/// Accepts the following input formats (case-insensitive):
/// - "f" or "fold" → Fold
/// - "c" or "check" → Check
/// - "call" → Call (the game works out the amount)
/// - "bet X" → Bet with amount X
/// - "raise X" → Raise by X on top of the call
/// - "s" or "stats" → show statistics
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use holdem_cli::validation::{parse_player_action, ParseResult};
/// use holdem_engine::player::PlayerAction;
///
/// assert_eq!(
///     parse_player_action("fold"),
///     ParseResult::Action(PlayerAction::Fold)
/// );
/// assert_eq!(
///     parse_player_action("bet 100"),
///     ParseResult::Action(PlayerAction::Bet(100))
/// );
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("shove") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&head) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match head {
        "q" | "quit" => ParseResult::Quit,
        "s" | "stats" => ParseResult::Stats,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "c" => ParseResult::Action(PlayerAction::Check),
        "call" => ParseResult::Action(PlayerAction::Call(0)),
        "bet" => parse_amount(parts.get(1), "Bet", "bet 100").map_or_else(ParseResult::Invalid, |a| {
            ParseResult::Action(PlayerAction::Bet(a))
        }),
        "raise" => parse_amount(parts.get(1), "Raise", "raise 50").map_or_else(ParseResult::Invalid, |a| {
            ParseResult::Action(PlayerAction::Raise(a))
        }),
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, bet <amount>, raise <amount>, stats, q",
            head
        )),
    }
}

fn parse_amount(raw: Option<&&str>, verb: &str, example: &str) -> Result<u32, String> {
    let Some(raw) = raw else {
        return Err(format!("{verb} requires an amount (e.g., '{example}')"));
    };
    match raw.parse::<u32>() {
        Ok(amount) if amount > 0 => Ok(amount),
        Ok(_) => Err(format!("{verb} amount must be positive")),
        Err(_) => Err(format!("Invalid {} amount", verb.to_lowercase())),
    }
}
