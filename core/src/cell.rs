use serde::{Deserialize, Serialize};

/// Cash values above this are shown as diamonds rather than coins.
pub const DIAMOND_THRESHOLD: u32 = 50;

/// One grid position: either a bomb or a cash prize, hidden until revealed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    is_bomb: bool,
    revealed: bool,
    value: u32,
}

impl Cell {
    pub const fn cash(value: u32) -> Self {
        Self {
            is_bomb: false,
            revealed: false,
            value,
        }
    }

    pub const fn is_bomb(self) -> bool {
        self.is_bomb
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Payout for this cell, `None` for bombs.
    pub const fn payout(self) -> Option<u32> {
        if self.is_bomb {
            None
        } else {
            Some(self.value)
        }
    }

    /// Raw value drawn at generation, also present (and never paid) on bombs.
    pub const fn value(self) -> u32 {
        self.value
    }

    pub const fn tier(self) -> CashTier {
        CashTier::of(self.value)
    }

    pub(crate) fn arm(&mut self) {
        self.is_bomb = true;
    }

    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CashTier {
    Coin,
    Diamond,
}

impl CashTier {
    pub const fn of(value: u32) -> Self {
        if value > DIAMOND_THRESHOLD {
            Self::Diamond
        } else {
            Self::Coin
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armed_cell_has_no_payout() {
        let mut cell = Cell::cash(80);
        cell.arm();

        assert!(cell.is_bomb());
        assert_eq!(cell.payout(), None);
        assert_eq!(cell.value(), 80);
    }

    #[test]
    fn tier_splits_above_fifty() {
        assert_eq!(Cell::cash(50).tier(), CashTier::Coin);
        assert_eq!(Cell::cash(51).tier(), CashTier::Diamond);
    }
}
