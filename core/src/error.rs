use thiserror::Error;

use crate::{CellCount, Credits};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Too many bombs, requested {requested} but the board only fits {capacity}")]
    TooManyBombs {
        requested: CellCount,
        capacity: CellCount,
    },
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Board holds {actual} bombs but {requested} were requested")]
    BombCountMismatch {
        requested: CellCount,
        actual: CellCount,
    },
    #[error("Bet must be at least one credit")]
    InvalidBet,
    #[error("Insufficient credits, bet {bet} but only {credits} available")]
    InsufficientCredits { bet: Credits, credits: Credits },
}

pub type Result<T> = core::result::Result<T, GameError>;
