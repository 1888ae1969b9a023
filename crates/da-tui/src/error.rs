//! Front-end errors

use thiserror::Error;

use da_core::battle::BattleError;
use da_core::dungeon::MapError;

#[derive(Debug, Error)]
pub enum TuiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Invalid dungeon: {0}")]
    Map(#[from] MapError),

    #[error("Battle error: {0}")]
    Battle(#[from] BattleError),
}
