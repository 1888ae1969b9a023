//! da-core: Core game logic for the dungeon adventure and battle demo
//!
//! This crate contains all game rules with no I/O dependencies.
//! It is designed to be pure and testable.

pub mod action;
pub mod battle;
pub mod dungeon;
pub mod player;

mod consts;
mod gameloop;
mod rng;

pub use consts::*;
pub use gameloop::{GameLoop, GameLoopResult, GameOptions, GameState, is_not_done};
pub use rng::GameRng;
