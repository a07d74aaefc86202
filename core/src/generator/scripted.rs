use alloc::collections::VecDeque;

use super::*;

/// Hands out prepared boards in order, repeating the last one once the queue runs dry.
///
/// Lets a host or a test replay an exact sequence of rounds. A board whose bomb count differs from
/// the requested one is refused and stays queued.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedBoardGenerator {
    queue: VecDeque<Board>,
    last: Board,
}

impl ScriptedBoardGenerator {
    pub fn new(first: Board) -> Self {
        Self {
            queue: VecDeque::new(),
            last: first.clone(),
        }
        .then(first)
    }

    pub fn then(mut self, board: Board) -> Self {
        self.queue.push_back(board);
        self
    }
}

impl BoardGenerator for ScriptedBoardGenerator {
    fn generate(&mut self, bomb_count: CellCount) -> Result<Board> {
        check_bomb_count(bomb_count)?;

        let next = self.queue.front().unwrap_or(&self.last);
        if next.bomb_count() != bomb_count {
            log::warn!(
                "Scripted board holds {} bombs, requested {}",
                next.bomb_count(),
                bomb_count
            );
            return Err(GameError::BombCountMismatch {
                requested: bomb_count,
                actual: next.bomb_count(),
            });
        }

        if let Some(board) = self.queue.pop_front() {
            self.last = board;
        }
        Ok(self.last.clone())
    }
}
