#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use round::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod round;
mod snapshot;
mod types;

/// Session settings, loadable from any serde format.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub bomb_count: CellCount,
    pub starting_credits: Credits,
    pub default_bet: Credits,
}

impl GameConfig {
    pub const DEFAULT_BOMB_COUNT: CellCount = 5;
    pub const DEFAULT_STARTING_CREDITS: Credits = 1000;
    pub const DEFAULT_BET: Credits = 50;

    pub fn new(
        bomb_count: CellCount,
        starting_credits: Credits,
        default_bet: Credits,
    ) -> Result<Self> {
        let config = Self {
            bomb_count,
            starting_credits,
            default_bet,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_bomb_count(self.bomb_count)?;
        check_bet(self.default_bet)?;
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bomb_count: Self::DEFAULT_BOMB_COUNT,
            starting_credits: Self::DEFAULT_STARTING_CREDITS,
            default_bet: Self::DEFAULT_BET,
        }
    }
}

/// Rejects bets that would make a round free.
pub fn check_bet(bet: Credits) -> Result<Credits> {
    if bet == 0 {
        Err(GameError::InvalidBet)
    } else {
        Ok(bet)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    NoChange,
    Paid(u32),
    HitBomb,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Paid(_) => true,
            HitBomb => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CashOutOutcome {
    NoChange,
    CashedOut,
}

impl CashOutOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::CashedOut => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_house_rules() {
        let config = GameConfig::default();

        assert_eq!(config.bomb_count, 5);
        assert_eq!(config.starting_credits, 1000);
        assert_eq!(config.default_bet, 50);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn config_rejects_overfull_board_and_free_bets() {
        assert!(matches!(
            GameConfig::new(26, 1000, 50),
            Err(GameError::TooManyBombs { requested: 26, .. })
        ));
        assert_eq!(GameConfig::new(5, 1000, 0), Err(GameError::InvalidBet));
    }

    #[test]
    fn config_fills_missing_fields_from_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "bomb_count": 8 }"#).unwrap();

        assert_eq!(config.bomb_count, 8);
        assert_eq!(config.starting_credits, 1000);
        assert_eq!(config.default_bet, 50);
    }
}
