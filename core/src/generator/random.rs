use alloc::vec::Vec;
use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Uniform generation: every cell draws its own cash value and bombs land on a shuffled prefix of
/// all positions, so placement is always a single pass over the board.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator {
    rng: SmallRng,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(&mut self, bomb_count: CellCount) -> Result<Board> {
        let bomb_count = check_bomb_count(bomb_count)?;

        let rng = &mut self.rng;
        let mut cells: Array2<Cell> =
            Array2::from_shape_simple_fn(BOARD_SIZE.to_nd_index(), || {
                Cell::cash(rng.random_range(CELL_VALUE_RANGE))
            });

        let mut positions: Vec<Coord2> = iter_coords(BOARD_SIZE).collect();
        positions.shuffle(rng);
        for &coords in positions.iter().take(bomb_count.into()) {
            cells[coords.to_nd_index()].arm();
        }

        let board = Board::from_cells(cells)?;

        // double check bomb count
        if board.bomb_count() != bomb_count {
            log::warn!(
                "Generated board count mismatch, actual: {}, requested: {}",
                board.bomb_count(),
                bomb_count
            );
        }
        log::debug!("Generated board with {} bombs", board.bomb_count());
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exactly_the_requested_bombs_for_every_count() {
        let mut generator = RandomBoardGenerator::new(7);

        for bomb_count in 0..=25 {
            let board = generator.generate(bomb_count).unwrap();

            let bombs = board.iter().filter(|(_, cell)| cell.is_bomb()).count();
            assert_eq!(bombs, usize::from(bomb_count));
            assert_eq!(board.bomb_count(), bomb_count);
            assert_eq!(board.size(), BOARD_SIZE);
        }
    }

    #[test]
    fn values_stay_in_range_and_cells_start_hidden() {
        let mut generator = RandomBoardGenerator::new(42);

        for _ in 0..50 {
            let board = generator.generate(5).unwrap();
            for (_, cell) in board.iter() {
                assert!(CELL_VALUE_RANGE.contains(&cell.value()));
                assert!(!cell.is_revealed());
            }
        }
    }

    #[test]
    fn rejects_more_bombs_than_cells() {
        let mut generator = RandomBoardGenerator::new(1);

        assert_eq!(
            generator.generate(26),
            Err(GameError::TooManyBombs {
                requested: 26,
                capacity: 25
            })
        );
    }

    #[test]
    fn same_seed_same_board() {
        let board_a = RandomBoardGenerator::new(99).generate(5).unwrap();
        let board_b = RandomBoardGenerator::new(99).generate(5).unwrap();

        assert_eq!(board_a, board_b);
    }
}
