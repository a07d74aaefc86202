use mines_core::{BoardGenerator, RoundController};

use crate::command::Command;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Feeds one player command to the controller.
pub fn apply<G: BoardGenerator>(
    game: &mut RoundController<G>,
    command: Command,
) -> mines_core::Result<Flow> {
    log::trace!("Applying {command:?}");

    match command {
        Command::Reveal { row, col } => {
            let outcome = game.reveal((row, col))?;
            if !outcome.has_update() {
                log::debug!("Reveal at ({row}, {col}) ignored");
            }
        }
        Command::New { bet: Some(bet) } => game.start_new_round(bet)?,
        Command::New { bet: None } => game.restart()?,
        Command::Cash => {
            if !game.cash_out().has_update() {
                log::debug!("Nothing to cash out, round already over");
            }
        }
        Command::Bet { amount } => game.set_bet(amount)?,
        Command::Bombs { count } => game.set_bomb_count(count)?,
        Command::Show => {}
        Command::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}
