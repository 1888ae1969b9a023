//! The fixed five-room dungeon and key placement

use strum::{EnumCount, IntoEnumIterator};
use thiserror::Error;
use tracing::debug;

use crate::FIXED_KEY_ROOM_INDEX;
use crate::action::Direction;
use crate::dungeon::room::{Room, RoomName};
use crate::rng::GameRng;

/// Key placement invariant violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("expected {expected} room(s) holding the key, found {found}")]
    KeyCount { expected: usize, found: usize },

    #[error("the key cannot lie in the {0}")]
    KeyOutOfReach(RoomName),
}

/// How the key is placed at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyPlacement {
    /// Always the jailer's barracks
    #[default]
    Fixed,
    /// Uniformly among the four rooms other than the exit
    Random,
}

impl KeyPlacement {
    /// Interpret the answer to the randomize prompt: only 'y' randomizes.
    pub const fn from_answer(c: char) -> Self {
        if c == 'y' {
            KeyPlacement::Random
        } else {
            KeyPlacement::Fixed
        }
    }
}

/// All rooms of the dungeon, indexed by [`RoomName`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DungeonMap {
    rooms: Vec<Room>,
}

impl DungeonMap {
    /// Build the fixed room table. No key is placed yet.
    pub fn build() -> Self {
        let rooms = vec![
            Room::new(
                RoomName::Cell,
                "A small, dark prison cell with doors South and East.",
                [
                    (Direction::South, RoomName::Armory),
                    (Direction::East, RoomName::Gate),
                ],
            ),
            Room::new(
                RoomName::Gate,
                "A large, torchlit room with doors West, South, and East. \n There is daylight entering under the door to the East.",
                [
                    (Direction::West, RoomName::Cell),
                    (Direction::South, RoomName::Jailers),
                    (Direction::East, RoomName::Exit),
                ],
            ),
            Room::new(
                RoomName::Armory,
                "A store room with doors North and East.",
                [
                    (Direction::North, RoomName::Cell),
                    (Direction::East, RoomName::Jailers),
                ],
            ),
            Room::new(
                RoomName::Jailers,
                "A jailer's barracks with doors West and North.",
                [
                    (Direction::West, RoomName::Armory),
                    (Direction::North, RoomName::Gate),
                ],
            ),
            Room::new(RoomName::Exit, "YOU FOUND THE KEY AND ESCAPED!", []),
        ];
        debug_assert_eq!(rooms.len(), RoomName::COUNT);
        Self { rooms }
    }

    pub fn room(&self, name: RoomName) -> &Room {
        &self.rooms[name.index()]
    }

    pub fn room_mut(&mut self, name: RoomName) -> &mut Room {
        &mut self.rooms[name.index()]
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Room currently holding the key, if it is still lying somewhere
    pub fn key_room(&self) -> Option<RoomName> {
        self.rooms.iter().find(|r| r.has_key).map(|r| r.name)
    }

    /// Put the key in exactly one room, clearing every other room's flag.
    ///
    /// Returns the room that now holds the key.
    pub fn place_key(&mut self, placement: KeyPlacement, rng: &mut GameRng) -> RoomName {
        let target = match placement {
            KeyPlacement::Fixed => RoomName::from_index(FIXED_KEY_ROOM_INDEX),
            KeyPlacement::Random => {
                let candidates: Vec<_> = RoomName::iter().filter(|r| r.can_hold_key()).collect();
                rng.choose(&candidates).copied()
            }
        }
        .unwrap_or(RoomName::Jailers);

        for room in &mut self.rooms {
            room.has_key = room.name == target;
        }
        debug!(?placement, room = %target, "key placed");
        target
    }

    /// Pick the key up from `name`. Returns whether there was a key to take.
    pub fn take_key(&mut self, name: RoomName) -> bool {
        let room = self.room_mut(name);
        std::mem::replace(&mut room.has_key, false)
    }

    /// Check the key invariant: one room holds it until it is carried, then none.
    pub fn validate(&self, key_carried: bool) -> Result<(), MapError> {
        let holders: Vec<_> = self.rooms.iter().filter(|r| r.has_key).collect();
        let expected = usize::from(!key_carried);
        if holders.len() != expected {
            return Err(MapError::KeyCount {
                expected,
                found: holders.len(),
            });
        }
        match holders.first() {
            Some(room) if !room.name.can_hold_key() => Err(MapError::KeyOutOfReach(room.name)),
            _ => Ok(()),
        }
    }
}

impl Default for DungeonMap {
    fn default() -> Self {
        Self::build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_table() {
        let map = DungeonMap::build();
        assert_eq!(map.rooms().len(), 5);
        for (i, room) in map.rooms().iter().enumerate() {
            assert_eq!(room.name.index(), i);
            assert!(!room.has_key);
        }

        let cell = map.room(RoomName::Cell);
        assert_eq!(cell.door(Direction::South), Some(RoomName::Armory));
        assert_eq!(cell.door(Direction::East), Some(RoomName::Gate));
        assert_eq!(cell.doors.len(), 2);

        let gate = map.room(RoomName::Gate);
        assert_eq!(gate.door(Direction::West), Some(RoomName::Cell));
        assert_eq!(gate.door(Direction::South), Some(RoomName::Jailers));
        assert_eq!(gate.door(Direction::East), Some(RoomName::Exit));
        assert_eq!(gate.doors.len(), 3);

        let armory = map.room(RoomName::Armory);
        assert_eq!(armory.door(Direction::North), Some(RoomName::Cell));
        assert_eq!(armory.door(Direction::East), Some(RoomName::Jailers));
        assert_eq!(armory.doors.len(), 2);

        let jailers = map.room(RoomName::Jailers);
        assert_eq!(jailers.door(Direction::West), Some(RoomName::Armory));
        assert_eq!(jailers.door(Direction::North), Some(RoomName::Gate));
        assert_eq!(jailers.doors.len(), 2);

        assert!(map.room(RoomName::Exit).doors.is_empty());
    }

    #[test]
    fn test_messages_verbatim() {
        let map = DungeonMap::build();
        assert_eq!(
            map.room(RoomName::Cell).message,
            "A small, dark prison cell with doors South and East."
        );
        assert_eq!(
            map.room(RoomName::Gate).message,
            "A large, torchlit room with doors West, South, and East. \n There is daylight entering under the door to the East."
        );
        assert_eq!(map.room(RoomName::Exit).message, "YOU FOUND THE KEY AND ESCAPED!");
    }

    #[test]
    fn test_unplaced_key_fails_validation() {
        let map = DungeonMap::build();
        assert_eq!(
            map.validate(false),
            Err(MapError::KeyCount { expected: 1, found: 0 })
        );
    }

    #[test]
    fn test_fixed_placement() {
        let mut map = DungeonMap::build();
        let mut rng = GameRng::new(1);
        assert_eq!(map.place_key(KeyPlacement::Fixed, &mut rng), RoomName::Jailers);
        assert_eq!(map.key_room(), Some(RoomName::Jailers));
        assert!(map.validate(false).is_ok());
    }

    #[test]
    fn test_random_placement_sets_exactly_one() {
        let mut map = DungeonMap::build();
        let mut rng = GameRng::new(99);
        for _ in 0..200 {
            let room = map.place_key(KeyPlacement::Random, &mut rng);
            assert!(room.can_hold_key());
            assert_eq!(map.rooms().iter().filter(|r| r.has_key).count(), 1);
            assert_eq!(map.key_room(), Some(room));
            assert!(map.validate(false).is_ok());
        }
    }

    #[test]
    fn test_take_key() {
        let mut map = DungeonMap::build();
        let mut rng = GameRng::new(1);
        map.place_key(KeyPlacement::Fixed, &mut rng);

        assert!(!map.take_key(RoomName::Cell));
        assert!(map.take_key(RoomName::Jailers));
        assert!(!map.take_key(RoomName::Jailers));
        assert_eq!(map.key_room(), None);
        assert!(map.validate(true).is_ok());
        assert!(map.validate(false).is_err());
    }

    #[test]
    fn test_key_in_exit_is_invalid() {
        let mut map = DungeonMap::build();
        map.room_mut(RoomName::Exit).has_key = true;
        assert_eq!(
            map.validate(false),
            Err(MapError::KeyOutOfReach(RoomName::Exit))
        );
    }

    #[test]
    fn test_answer_parsing() {
        assert_eq!(KeyPlacement::from_answer('y'), KeyPlacement::Random);
        assert_eq!(KeyPlacement::from_answer('n'), KeyPlacement::Fixed);
        assert_eq!(KeyPlacement::from_answer('Y'), KeyPlacement::Fixed);
        assert_eq!(KeyPlacement::from_answer('x'), KeyPlacement::Fixed);
    }
}
