use std::{fs, path::Path};

use anyhow::Context;
use mines_core::{CellCount, Credits, GameConfig};

/// Command line values that take precedence over the config file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub bomb_count: Option<CellCount>,
    pub bet: Option<Credits>,
    pub credits: Option<Credits>,
}

impl Overrides {
    fn apply(self, config: &mut GameConfig) {
        if let Some(bomb_count) = self.bomb_count {
            config.bomb_count = bomb_count;
        }
        if let Some(bet) = self.bet {
            config.default_bet = bet;
        }
        if let Some(credits) = self.credits {
            config.starting_credits = credits;
        }
    }
}

pub fn parse_config(text: &str) -> anyhow::Result<GameConfig> {
    serde_json::from_str(text).context("malformed game config")
}

/// Reads the optional JSON config, applies overrides, and validates the result.
pub fn load_config(path: Option<&Path>, overrides: Overrides) -> anyhow::Result<GameConfig> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("could not read config {}", path.display()))?;
            parse_config(&text).with_context(|| format!("in {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    overrides.apply(&mut config);
    config.validate().context("invalid game config")?;
    log::debug!("Using {config:?}");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_over_defaults() {
        let overrides = Overrides {
            bomb_count: Some(3),
            bet: None,
            credits: Some(200),
        };

        let config = load_config(None, overrides).unwrap();

        assert_eq!(config.bomb_count, 3);
        assert_eq!(config.default_bet, 50);
        assert_eq!(config.starting_credits, 200);
    }

    #[test]
    fn invalid_override_is_reported() {
        let overrides = Overrides {
            bomb_count: Some(40),
            ..Default::default()
        };

        assert!(load_config(None, overrides).is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = parse_config(r#"{ "default_bet": 25 }"#).unwrap();

        assert_eq!(config.default_bet, 25);
        assert_eq!(config.bomb_count, 5);
    }

    #[test]
    fn missing_file_is_an_error() {
        let missing = Path::new("/definitely/not/here/mines.json");

        assert!(load_config(Some(missing), Overrides::default()).is_err());
    }
}
