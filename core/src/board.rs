use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The arrangement of cells for one round.
///
/// A board is never mutated in place once handed out: revealing a cell produces a new board
/// (see [`Board::with_revealed`]) so observers can detect changes by comparing values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    bomb_count: CellCount,
}

impl Board {
    /// Wraps generated cells, counting the bombs they hold. Only `BOARD_SIZE` grids are accepted.
    pub fn from_cells(cells: Array2<Cell>) -> Result<Self> {
        if cells.dim() != (usize::from(BOARD_SIZE.0), usize::from(BOARD_SIZE.1)) {
            return Err(GameError::InvalidBoardShape);
        }

        let bomb_count = cells
            .iter()
            .filter(|cell| cell.is_bomb())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX);
        Ok(Self { cells, bomb_count })
    }

    /// Builds a board from explicit cash values and bomb positions, mostly useful to script rounds.
    ///
    /// Duplicate bomb positions are counted once.
    pub fn from_parts(values: Array2<u32>, bomb_coords: &[Coord2]) -> Result<Self> {
        if values.dim() != (usize::from(BOARD_SIZE.0), usize::from(BOARD_SIZE.1)) {
            return Err(GameError::InvalidBoardShape);
        }

        let mut cells = values.mapv(Cell::cash);
        let (rows, cols) = cells.dim();

        for &coords in bomb_coords {
            if usize::from(coords.0) >= rows || usize::from(coords.1) >= cols {
                return Err(GameError::InvalidCoords);
            }
            cells[coords.to_nd_index()].arm();
        }

        Self::from_cells(cells)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (
            rows.try_into().unwrap_or(Coord::MAX),
            cols.try_into().unwrap_or(Coord::MAX),
        )
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn bomb_count(&self) -> CellCount {
        self.bomb_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.bomb_count)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_revealed())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self[coords]
    }

    /// Row-major iteration over every cell with its coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        iter_coords(self.size()).map(|coords| (coords, self[coords]))
    }

    /// Copy of this board with the cell at `coords` revealed.
    pub(crate) fn with_revealed(&self, coords: Coord2) -> Self {
        let mut next = self.clone();
        next.cells[coords.to_nd_index()].reveal();
        next
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn values() -> Array2<u32> {
        Array2::from_elem(BOARD_SIZE.to_nd_index(), 20)
    }

    #[test]
    fn from_parts_counts_unique_bombs() {
        let board = Board::from_parts(values(), &[(0, 0), (4, 4), (0, 0)]).unwrap();

        assert_eq!(board.bomb_count(), 2);
        assert_eq!(board.safe_cell_count(), 23);
        assert!(board[(4, 4)].is_bomb());
        assert!(!board[(2, 2)].is_bomb());
    }

    #[test]
    fn from_parts_rejects_out_of_bounds_bomb() {
        assert_eq!(
            Board::from_parts(values(), &[(5, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn rejects_grids_other_than_five_by_five() {
        assert_eq!(
            Board::from_parts(Array2::from_elem([3, 7], 20), &[]),
            Err(GameError::InvalidBoardShape)
        );
        assert_eq!(
            Board::from_cells(Array2::from_elem([300, 300], Cell::cash(20))),
            Err(GameError::InvalidBoardShape)
        );
        assert_eq!(
            Board::from_parts(Array2::from_elem([5, 4], 20), &[(0, 0)]),
            Err(GameError::InvalidBoardShape)
        );
    }

    #[test]
    fn full_board_has_no_safe_cells() {
        let all: Vec<Coord2> = iter_coords(BOARD_SIZE).collect();
        let board = Board::from_parts(values(), &all).unwrap();

        assert_eq!(board.bomb_count(), 25);
        assert_eq!(board.safe_cell_count(), 0);
    }

    #[test]
    fn with_revealed_leaves_original_untouched() {
        let board = Board::from_parts(values(), &[(1, 1)]).unwrap();

        let next = board.with_revealed((1, 1));

        assert!(!board[(1, 1)].is_revealed());
        assert!(next[(1, 1)].is_revealed());
        assert_eq!(next.revealed_count(), 1);
        assert_ne!(board, next);
    }

    #[test]
    fn validate_coords_checks_both_axes() {
        let board = Board::from_parts(values(), &[]).unwrap();

        assert_eq!(board.validate_coords((4, 4)), Ok((4, 4)));
        assert_eq!(board.validate_coords((4, 5)), Err(GameError::InvalidCoords));
        assert_eq!(board.validate_coords((5, 4)), Err(GameError::InvalidCoords));
    }
}
