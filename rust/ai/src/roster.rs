//! Bot seat generation.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use holdem_engine::player::{AgentProfile, DecisionStyle, Personality, Player};
use holdem_engine::rng::SeededRng;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::AgentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

struct TraitRanges {
    aggression: RangeInclusive<f64>,
    bluff: RangeInclusive<f64>,
    styles: &'static [DecisionStyle],
    personalities: &'static [Personality],
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    fn ranges(self) -> TraitRanges {
        use DecisionStyle::*;
        use Personality::*;
        match self {
            Difficulty::Easy => TraitRanges {
                aggression: 0.1..=0.5,
                bluff: 0.0..=0.1,
                styles: &[Conservative, Balanced],
                personalities: &[Tight, Loose],
            },
            Difficulty::Medium => TraitRanges {
                aggression: 0.3..=0.7,
                bluff: 0.1..=0.2,
                styles: &[Conservative, Aggressive, Balanced],
                personalities: &[Tight, Loose, Unpredictable],
            },
            Difficulty::Hard => TraitRanges {
                aggression: 0.5..=0.9,
                bluff: 0.2..=0.3,
                styles: &[Aggressive, Balanced],
                personalities: &[Tight, Unpredictable],
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(AgentError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Builds `count` bot seats named "Bot 1", "Bot 2", ... with traits drawn
/// for `difficulty`. The same seed always produces the same roster.
pub fn create_agents(count: usize, chips: u32, difficulty: Difficulty, seed: u64) -> Vec<Player> {
    let mut rng = SeededRng::from_seed_u64(seed);
    let ranges = difficulty.ranges();
    (1..=count)
        .map(|i| {
            let style = *ranges.styles.choose(&mut rng).unwrap_or(&DecisionStyle::Balanced);
            let personality = *ranges
                .personalities
                .choose(&mut rng)
                .unwrap_or(&Personality::Tight);
            let profile = AgentProfile {
                style,
                personality,
                aggression: rng.random_range(ranges.aggression.clone()),
                bluff_tendency: rng.random_range(ranges.bluff.clone()),
                rng: rng.fork(),
            };
            Player::agent(format!("Bot {i}"), chips, profile)
        })
        .collect()
}
