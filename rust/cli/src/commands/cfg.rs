//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, each key carrying its value and
//! where it came from:
//!
//! ```json
//! {
//!   "small_blind": {
//!     "value": 10,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config::{self, ConfigResolved};
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, _err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;
    write_resolved(&resolved, out)
}

fn write_resolved(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "small_blind": {
            "value": config.small_blind,
            "source": sources.small_blind,
        },
        "big_blind": {
            "value": config.big_blind(),
            "source": sources.small_blind,
        },
        "starting_chips": {
            "value": config.starting_chips,
            "source": sources.starting_chips,
        },
        "bots": {
            "value": config.bots,
            "source": sources.bots,
        },
        "difficulty": {
            "value": config.difficulty.as_str(),
            "source": sources.difficulty,
        },
        "bot_timeout_ms": {
            "value": config.bot_timeout_ms,
            "source": sources.bot_timeout_ms,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_values_with_sources() {
        let resolved = config::load_from(|k| (k == "HOLDEM_BOTS").then(|| "5".to_string())).unwrap();
        let mut out = Vec::new();
        write_resolved(&resolved, &mut out).unwrap();

        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["bots"]["value"], 5);
        assert_eq!(v["bots"]["source"], "env");
        assert_eq!(v["difficulty"]["value"], "medium");
        assert_eq!(v["big_blind"]["value"], 20);
        assert_eq!(v["seed"]["source"], "default");
    }
}
