//! Layered configuration: built-in defaults, then the TOML file named by
//! `HOLDEM_CONFIG`, then `HOLDEM_*` environment variables. Command-line flags
//! are applied last by [`Config::with_overrides`].

use holdem_ai::roster::Difficulty;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::time::Duration;
use thiserror::Error;

use crate::cli::TableArgs;

pub const CONFIG_ENV: &str = "HOLDEM_CONFIG";

pub const SMALL_BLIND_RANGE: RangeInclusive<u32> = 5..=100;
pub const STARTING_CHIPS_RANGE: RangeInclusive<u32> = 1000..=10_000;
pub const BOTS_RANGE: RangeInclusive<usize> = 1..=7;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub small_blind: u32,
    pub starting_chips: u32,
    pub bots: usize,
    pub difficulty: Difficulty,
    pub bot_timeout_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub small_blind: ValueSource,
    pub starting_chips: ValueSource,
    pub bots: ValueSource,
    pub difficulty: ValueSource,
    pub bot_timeout_ms: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            small_blind: ValueSource::Default,
            starting_chips: ValueSource::Default,
            bots: ValueSource::Default,
            difficulty: ValueSource::Default,
            bot_timeout_ms: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            small_blind: 10,
            starting_chips: 1000,
            bots: 3,
            difficulty: Difficulty::Medium,
            bot_timeout_ms: 2000,
        }
    }
}

impl Config {
    pub fn big_blind(&self) -> u32 {
        self.small_blind * 2
    }

    pub fn bot_timeout(&self) -> Duration {
        Duration::from_millis(self.bot_timeout_ms)
    }

    /// Applies command-line flags on top of the resolved values and checks
    /// the result again.
    pub fn with_overrides(mut self, args: &TableArgs) -> Result<Config, ConfigError> {
        if let Some(v) = args.bots {
            self.bots = v;
        }
        if let Some(v) = args.difficulty {
            self.difficulty = v;
        }
        if let Some(v) = args.chips {
            self.starting_chips = v;
        }
        if let Some(v) = args.small_blind {
            self.small_blind = v;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        validate(&self)?;
        Ok(self)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Resolves the configuration with `env` standing in for the process
/// environment.
pub fn load_from(env: impl Fn(&str) -> Option<String>) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    let var = |key: &str| env(key).filter(|v| !v.is_empty());

    if let Some(path) = var(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.starting_chips {
            cfg.starting_chips = v;
            sources.starting_chips = ValueSource::File;
        }
        if let Some(v) = f.bots {
            cfg.bots = v;
            sources.bots = ValueSource::File;
        }
        if let Some(v) = f.difficulty {
            cfg.difficulty = parse_difficulty(&v)?;
            sources.difficulty = ValueSource::File;
        }
        if let Some(v) = f.bot_timeout_ms {
            cfg.bot_timeout_ms = v;
            sources.bot_timeout_ms = ValueSource::File;
        }
    }

    if let Some(seed) = var("HOLDEM_SEED") {
        cfg.seed = Some(parse_number(&seed, "seed")?);
        sources.seed = ValueSource::Env;
    }
    if let Some(sb) = var("HOLDEM_SMALL_BLIND") {
        cfg.small_blind = parse_number(&sb, "small_blind")?;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(chips) = var("HOLDEM_STARTING_CHIPS") {
        cfg.starting_chips = parse_number(&chips, "starting_chips")?;
        sources.starting_chips = ValueSource::Env;
    }
    if let Some(bots) = var("HOLDEM_BOTS") {
        cfg.bots = parse_number(&bots, "bots")?;
        sources.bots = ValueSource::Env;
    }
    if let Some(d) = var("HOLDEM_DIFFICULTY") {
        cfg.difficulty = parse_difficulty(&d)?;
        sources.difficulty = ValueSource::Env;
    }
    if let Some(ms) = var("HOLDEM_BOT_TIMEOUT_MS") {
        cfg.bot_timeout_ms = parse_number(&ms, "bot_timeout_ms")?;
        sources.bot_timeout_ms = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    starting_chips: Option<u32>,
    #[serde(default)]
    bots: Option<usize>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    bot_timeout_ms: Option<u64>,
}

fn parse_number<T: std::str::FromStr>(raw: &str, key: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {key}: {raw:?}")))
}

fn parse_difficulty(raw: &str) -> Result<Difficulty, ConfigError> {
    raw.parse()
        .map_err(|e: holdem_ai::AgentError| ConfigError::Invalid(e.to_string()))
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !SMALL_BLIND_RANGE.contains(&cfg.small_blind) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: small_blind must be {}-{}, got {}",
            SMALL_BLIND_RANGE.start(),
            SMALL_BLIND_RANGE.end(),
            cfg.small_blind
        )));
    }
    if !STARTING_CHIPS_RANGE.contains(&cfg.starting_chips) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: starting_chips must be {}-{}, got {}",
            STARTING_CHIPS_RANGE.start(),
            STARTING_CHIPS_RANGE.end(),
            cfg.starting_chips
        )));
    }
    if !BOTS_RANGE.contains(&cfg.bots) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: bots must be {}-{}, got {}",
            BOTS_RANGE.start(),
            BOTS_RANGE.end(),
            cfg.bots
        )));
    }
    if cfg.bot_timeout_ms == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: bot_timeout_ms must be >0".into(),
        ));
    }
    Ok(())
}
