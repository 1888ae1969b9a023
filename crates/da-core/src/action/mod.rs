//! Player action system
//!
//! Commands the front-end can issue and the directions they carry.

pub mod movement;

use strum::{Display, EnumIter};

pub use movement::{MoveOutcome, traverse};

/// Player command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Try to walk through a door
    Move(Direction),
    /// Leave the game
    Quit,
}

/// Movement directions
///
/// `None` stands for input that is not a direction; it never matches a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum Direction {
    #[strum(to_string = "north")]
    North,
    #[strum(to_string = "south")]
    South,
    #[strum(to_string = "east")]
    East,
    #[strum(to_string = "west")]
    West,
    #[strum(to_string = "nowhere")]
    None,
}

impl Direction {
    /// Map a typed character to a direction (w/a/s/d).
    pub const fn from_key(c: char) -> Self {
        match c {
            'w' => Direction::North,
            'a' => Direction::West,
            's' => Direction::South,
            'd' => Direction::East,
            _ => Direction::None,
        }
    }

    /// Check if this is a real compass direction
    pub const fn is_cardinal(&self) -> bool {
        !matches!(self, Direction::None)
    }
}
