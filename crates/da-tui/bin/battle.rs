//! Battle demo
//!
//! Fight waves of monsters until you fall.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event;
use tracing::info;

use da_core::GameRng;
use da_core::battle::Battle;
use da_tui::terminal::{self, Tui};
use da_tui::{BattleApp, TuiError, logging};

/// Turn-based battle demo in the terminal
#[derive(Parser, Debug)]
#[command(name = "battle")]
#[command(author, version, about = "Fight waves of monsters!", long_about = None)]
struct Args {
    /// Seed for the random number generator
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), TuiError> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref())?;

    let rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!(seed = rng.seed(), "battle starting");
    let app = BattleApp::new(Battle::new(rng))?;

    let mut terminal = terminal::init()?;
    let result = run(&mut terminal, app);
    terminal::restore(&mut terminal)?;
    result
}

/// Main loop
fn run(terminal: &mut Tui, mut app: BattleApp) -> Result<(), TuiError> {
    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            app.handle_event(event::read()?)?;
        }
    }
    Ok(())
}
