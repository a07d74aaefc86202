use crate::*;
pub use random::*;
pub use scripted::*;

mod random;
mod scripted;

/// Source of fresh boards, one per round.
pub trait BoardGenerator {
    /// Produces a new `BOARD_SIZE` board holding exactly `bomb_count` bombs.
    fn generate(&mut self, bomb_count: CellCount) -> Result<Board>;
}

/// Rejects bomb counts that cannot fit on the board.
pub fn check_bomb_count(bomb_count: CellCount) -> Result<CellCount> {
    let capacity = mult(BOARD_SIZE.0, BOARD_SIZE.1);
    if bomb_count > capacity {
        Err(GameError::TooManyBombs {
            requested: bomb_count,
            capacity,
        })
    } else {
        Ok(bomb_count)
    }
}
