//! Rooms and the doors between them

use std::collections::BTreeMap;

use strum::{Display, EnumCount, EnumIter, EnumString, FromRepr};

use crate::action::Direction;

/// Identity of a room in the dungeon
///
/// The discriminant is the room's index in the map.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    FromRepr,
)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum RoomName {
    Cell = 0,
    Gate = 1,
    Armory = 2,
    Jailers = 3,
    Exit = 4,
}

impl RoomName {
    /// Index of this room in the map
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Room at the given index, if any
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    /// Whether the key may be placed here
    pub const fn can_hold_key(self) -> bool {
        !matches!(self, RoomName::Exit)
    }
}

/// A single room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: RoomName,
    /// Shown while the player stands here
    pub message: &'static str,
    /// Door direction -> room the door leads to
    pub doors: BTreeMap<Direction, RoomName>,
    /// Whether the key is lying here
    pub has_key: bool,
}

impl Room {
    pub fn new(
        name: RoomName,
        message: &'static str,
        doors: impl IntoIterator<Item = (Direction, RoomName)>,
    ) -> Self {
        Self {
            name,
            message,
            doors: doors.into_iter().collect(),
            has_key: false,
        }
    }

    /// Room reached through the door in `direction`, if there is one
    pub fn door(&self, direction: Direction) -> Option<RoomName> {
        self.doors.get(&direction).copied()
    }
}
