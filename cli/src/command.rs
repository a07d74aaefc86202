use clap::{Parser, Subcommand};
use mines_core::{CellCount, Coord, Credits};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

/// One line typed by the player.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Reveal the cell at ROW COL
    #[command(visible_alias = "r")]
    Reveal { row: Coord, col: Coord },
    /// Start a new round, with the current bet unless one is given
    #[command(visible_alias = "n")]
    New { bet: Option<Credits> },
    /// Stop the round and keep what was won
    #[command(visible_alias = "c")]
    Cash,
    /// Change the bet used by `new`
    Bet { amount: Credits },
    /// Change how many bombs the next board holds
    Bombs { count: CellCount },
    /// Draw the board again
    Show,
    /// Leave the game
    #[command(visible_alias = "q")]
    Quit,
}

impl Command {
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        Line::try_parse_from(line.split_whitespace()).map(|line| line.command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases_and_arguments() {
        assert_eq!(
            Command::parse_line("r 2 3").unwrap(),
            Command::Reveal { row: 2, col: 3 }
        );
        assert_eq!(
            Command::parse_line("new 100").unwrap(),
            Command::New { bet: Some(100) }
        );
        assert_eq!(Command::parse_line("n").unwrap(), Command::New { bet: None });
        assert_eq!(Command::parse_line("  cash ").unwrap(), Command::Cash);
        assert_eq!(
            Command::parse_line("bombs 7").unwrap(),
            Command::Bombs { count: 7 }
        );
        assert_eq!(Command::parse_line("q").unwrap(), Command::Quit);
    }

    #[test]
    fn rejects_garbage() {
        assert!(Command::parse_line("reveal 1").is_err());
        assert!(Command::parse_line("bet -5").is_err());
        assert!(Command::parse_line("dance").is_err());
    }
}
