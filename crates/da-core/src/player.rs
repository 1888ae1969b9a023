//! Player state in the dungeon

use crate::STARTING_HEALTH;
use crate::dungeon::RoomName;

/// The adventurer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Room the player stands in
    pub current_room: RoomName,
    /// Remaining health; the game ends when it reaches zero
    pub health: i32,
    /// Whether the key has been picked up
    pub has_key: bool,
}

impl Player {
    pub fn new(health: i32) -> Self {
        Self {
            current_room: RoomName::Cell,
            health,
            has_key: false,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Standing in the exit with the key
    pub fn has_escaped(&self) -> bool {
        self.current_room == RoomName::Exit && self.has_key
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(STARTING_HEALTH)
    }
}
