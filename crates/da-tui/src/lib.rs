//! da-tui: Terminal UI layer using ratatui
//!
//! Provides the terminal interface for the dungeon and the battle demo.

pub mod app;
pub mod battle_app;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod widgets;

mod error;

pub use app::App;
pub use battle_app::BattleApp;
pub use error::TuiError;
