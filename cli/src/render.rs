use std::fmt;

use mines_core::{CashTier, CellView, RoundSnapshot};

fn glyph(view: CellView) -> char {
    match view {
        CellView::Hidden => '·',
        CellView::Cash {
            tier: CashTier::Coin,
            ..
        } => '$',
        CellView::Cash {
            tier: CashTier::Diamond,
            ..
        } => '◆',
        CellView::Bomb => '*',
    }
}

/// Text rendering of a whole snapshot: status line, grid, then the latest message.
pub struct Screen<'a>(pub &'a RoundSnapshot);

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;
        let (rows, cols) = snapshot.size;

        writeln!(
            f,
            "Credits: {}  Bet: {}  Bombs: {}",
            snapshot.credits, snapshot.bet, snapshot.bomb_count
        )?;

        write!(f, "   ")?;
        for col in 0..cols {
            write!(f, " {col}")?;
        }
        writeln!(f)?;

        for row in 0..rows {
            write!(f, "{row:>2} ")?;
            for col in 0..cols {
                write!(f, " {}", glyph(snapshot.cell_at((row, col))))?;
            }
            writeln!(f)?;
        }

        if !snapshot.message.is_empty() {
            writeln!(f, "{}", snapshot.message)?;
        }
        if snapshot.game_over {
            writeln!(f, "Round over, type `new` to play again.")?;
        }
        Ok(())
    }
}
