//! Dungeon layout: rooms, doors and the key

mod map;
mod room;

pub use map::{DungeonMap, KeyPlacement, MapError};
pub use room::{Room, RoomName};
