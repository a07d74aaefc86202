use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use flexi_logger::Logger;
use mines_core::{CellCount, Credits, RoundController};

use command::Command;
use config::{Overrides, load_config};
use render::Screen;
use session::{Flow, apply};

mod command;
mod config;
mod render;
mod session;

#[derive(Parser, Debug)]
#[command(version, about = "Reveal cash, dodge bombs", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with game settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bombs per board
    #[arg(long)]
    bombs: Option<CellCount>,

    /// Bet taken at the start of each round
    #[arg(long)]
    bet: Option<Credits>,

    /// Credits to start the session with
    #[arg(long)]
    credits: Option<Credits>,
}

/// Fresh session seed from the thread-local, OS-seeded generator.
fn random_seed() -> u64 {
    use rand::prelude::*;

    rand::rng().random()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let _logger = Logger::try_with_str(args.verbose.log_level_filter().to_string())
        .context("invalid log level")?
        .start()
        .context("could not start logger")?;

    let overrides = Overrides {
        bomb_count: args.bombs,
        bet: args.bet,
        credits: args.credits,
    };
    let config = load_config(args.config.as_deref(), overrides)?;

    let seed = args.seed.unwrap_or_else(random_seed);
    log::debug!("seed: {seed}");

    let mut game = RoundController::with_seed(config, seed)?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", Screen(&game.snapshot()))?;
    stdout.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line.context("could not read input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match Command::parse_line(line) {
            Ok(command) => match apply(&mut game, command) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(err) => writeln!(stdout, "error: {err}")?,
            },
            Err(err) => {
                // also covers `help`
                write!(stdout, "{err}")?;
                stdout.flush()?;
                continue;
            }
        }

        write!(stdout, "{}", Screen(&game.snapshot()))?;
        stdout.flush()?;
    }

    log::info!("Leaving with {} credits", game.credits());
    Ok(())
}
