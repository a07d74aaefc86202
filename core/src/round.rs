use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    #[default]
    Playing,
    Busted,
    CashedOut,
}

impl RoundState {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Busted | Self::CashedOut)
    }
}

/// Last outcome worth telling the player about. Purely informational.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundMessage {
    #[default]
    Empty,
    Won {
        value: u32,
    },
    Busted,
    CashedOut,
    InsufficientCredits {
        bet: Credits,
        credits: Credits,
    },
}

impl fmt::Display for RoundMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Won { value } => write!(f, "You won {value} credits! Keep going or cash out."),
            Self::Busted => f.write_str("BOOM! You hit a bomb and lost the round."),
            Self::CashedOut => f.write_str("You cashed out your winnings!"),
            Self::InsufficientCredits { .. } => f.write_str("Insufficient credits!"),
        }
    }
}

/// Owns one session: the credit balance, the bet, and the board of the current round.
///
/// Credits are paid out the moment a cash cell is revealed, so cashing out only freezes the round.
#[derive(Clone, Debug)]
pub struct RoundController<G> {
    generator: G,
    board: Board,
    credits: Credits,
    bet: Credits,
    bomb_count: CellCount,
    state: RoundState,
    message: RoundMessage,
}

impl RoundController<RandomBoardGenerator> {
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomBoardGenerator::new(seed))
    }
}

impl<G: BoardGenerator> RoundController<G> {
    /// Starts a session already in play on a fresh board; no bet is taken for this first board.
    pub fn new(config: GameConfig, mut generator: G) -> Result<Self> {
        config.validate()?;
        let board = generator.generate(config.bomb_count)?;
        log::info!(
            "Session started with {} credits, bet {}, {} bombs",
            config.starting_credits,
            config.default_bet,
            config.bomb_count
        );

        Ok(Self {
            generator,
            board,
            credits: config.starting_credits,
            bet: config.default_bet,
            bomb_count: config.bomb_count,
            state: Default::default(),
            message: Default::default(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn credits(&self) -> Credits {
        self.credits
    }

    pub fn bet(&self) -> Credits {
        self.bet
    }

    pub fn bomb_count(&self) -> CellCount {
        self.bomb_count
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn message(&self) -> RoundMessage {
        self.message
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::from_controller(self)
    }

    /// Reveals one cell. Revealing after the round ended or revealing twice is ignored.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.state.is_over() || self.board[coords].is_revealed() {
            return Ok(RevealOutcome::NoChange);
        }

        let board = self.board.with_revealed(coords);
        let cell = board[coords];
        self.board = board;

        Ok(match cell.payout() {
            None => {
                self.state = RoundState::Busted;
                self.message = RoundMessage::Busted;
                log::info!("Bomb at {coords:?}, round lost with {} credits", self.credits);
                RevealOutcome::HitBomb
            }
            Some(value) => {
                self.credits = self.credits.saturating_add(value.into());
                self.message = RoundMessage::Won { value };
                log::debug!("Cash {value} at {coords:?}, credits now {}", self.credits);
                RevealOutcome::Paid(value)
            }
        })
    }

    /// Takes `bet` up front and deals a new board.
    ///
    /// An unaffordable bet leaves everything but the message untouched. A zero bet is a free round.
    pub fn start_new_round(&mut self, bet: Credits) -> Result<()> {
        if bet > self.credits {
            log::warn!("Refused bet {bet} with only {} credits", self.credits);
            self.message = RoundMessage::InsufficientCredits {
                bet,
                credits: self.credits,
            };
            return Err(GameError::InsufficientCredits {
                bet,
                credits: self.credits,
            });
        }

        let board = self.generator.generate(self.bomb_count)?;
        self.credits -= bet;
        self.board = board;
        self.state = RoundState::Playing;
        self.message = RoundMessage::Empty;
        log::info!("New round, bet {bet}, {} credits left", self.credits);
        Ok(())
    }

    /// Starts a new round with the current bet.
    pub fn restart(&mut self) -> Result<()> {
        self.start_new_round(self.bet)
    }

    pub fn cash_out(&mut self) -> CashOutOutcome {
        if self.state.is_over() {
            return CashOutOutcome::NoChange;
        }

        self.state = RoundState::CashedOut;
        self.message = RoundMessage::CashedOut;
        log::info!("Cashed out with {} credits", self.credits);
        CashOutOutcome::CashedOut
    }

    /// Changes the bet used by [`Self::restart`].
    pub fn set_bet(&mut self, bet: Credits) -> Result<()> {
        self.bet = check_bet(bet)?;
        log::debug!("Bet set to {bet}");
        Ok(())
    }

    /// Changes the bomb count of every board generated from now on.
    pub fn set_bomb_count(&mut self, bomb_count: CellCount) -> Result<()> {
        self.bomb_count = check_bomb_count(bomb_count)?;
        log::debug!("Bomb count set to {bomb_count}");
        Ok(())
    }
}
