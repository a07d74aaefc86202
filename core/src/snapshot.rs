use alloc::string::{String, ToString};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a player is allowed to see of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Cash {
        value: u32,
        tier: CashTier,
    },
    Bomb,
}

impl From<Cell> for CellView {
    fn from(cell: Cell) -> Self {
        if !cell.is_revealed() {
            return Self::Hidden;
        }
        match cell.payout() {
            Some(value) => Self::Cash {
                value,
                tier: cell.tier(),
            },
            None => Self::Bomb,
        }
    }
}

/// Everything a view layer needs to draw the session, without leaking hidden bombs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub size: Coord2,
    pub credits: Credits,
    pub bet: Credits,
    pub bomb_count: CellCount,
    pub state: RoundState,
    pub game_over: bool,
    pub message: String,
    pub cells: Array2<CellView>,
}

impl RoundSnapshot {
    pub fn from_controller<G: BoardGenerator>(controller: &RoundController<G>) -> Self {
        let board = controller.board();
        let size = board.size();
        let mut cells = Array2::from_elem(size.to_nd_index(), CellView::Hidden);
        for (coords, cell) in board.iter() {
            cells[coords.to_nd_index()] = cell.into();
        }

        Self {
            size,
            credits: controller.credits(),
            bet: controller.bet(),
            bomb_count: controller.bomb_count(),
            state: controller.state(),
            game_over: controller.is_game_over(),
            message: controller.message().to_string(),
            cells,
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.cells[coords.to_nd_index()]
    }
}
