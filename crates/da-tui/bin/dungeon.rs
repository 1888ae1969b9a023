//! Dungeon adventure
//!
//! Find the key and get out of the dungeon.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event;
use tracing::info;

use da_core::dungeon::KeyPlacement;
use da_core::{GameOptions, GameState, STARTING_HEALTH};
use da_tui::terminal::{self, Tui};
use da_tui::{App, TuiError, logging};

/// Dungeon adventure in the terminal
#[derive(Parser, Debug)]
#[command(name = "dungeon")]
#[command(author, version, about = "Find the key and get out of the dungeon!", long_about = None)]
struct Args {
    /// Seed for the random number generator
    #[arg(long)]
    seed: Option<u64>,

    /// Randomize the key without asking
    #[arg(long, conflicts_with = "fixed_key")]
    random_key: bool,

    /// Leave the key in the jailer's barracks without asking
    #[arg(long)]
    fixed_key: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn options(&self) -> GameOptions {
        let key_placement = if self.random_key {
            Some(KeyPlacement::Random)
        } else if self.fixed_key {
            Some(KeyPlacement::Fixed)
        } else {
            None
        };
        GameOptions {
            seed: self.seed,
            key_placement,
            starting_health: STARTING_HEALTH,
        }
    }
}

fn main() -> Result<(), TuiError> {
    // Parse command-line arguments before terminal setup
    let args = Args::parse();
    logging::init(args.log_file.as_deref())?;

    let state = GameState::from_options(&args.options())?;
    info!(seed = state.rng.seed(), "dungeon starting");

    let mut terminal = terminal::init()?;
    let result = run(&mut terminal, App::new(state));
    terminal::restore(&mut terminal)?;
    result
}

/// Main loop
fn run(terminal: &mut Tui, mut app: App) -> Result<(), TuiError> {
    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            if let Some(command) = app.handle_event(event::read()?)? {
                app.execute(command);
            }
        }
    }
    Ok(())
}
