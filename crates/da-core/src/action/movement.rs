//! Movement between rooms
//!
//! One traversal step resolves a direction against the doors of the room the
//! player stands in. A successful move costs one point of health; a rejected
//! one costs nothing.

use tracing::debug;

use crate::action::Direction;
use crate::dungeon::{DungeonMap, RoomName};
use crate::player::Player;
use crate::{LOCKED_EXIT_MESSAGE, MOVE_COST, WALL_MESSAGE};

/// Result of a traversal step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Walked through a door into the given room
    Moved(RoomName),
    /// No door that way
    Wall,
    /// The door leads out but the player has no key
    Locked,
}

impl MoveOutcome {
    pub const fn is_legal(&self) -> bool {
        matches!(self, MoveOutcome::Moved(_))
    }

    /// Text shown for a rejected move
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            MoveOutcome::Moved(_) => None,
            MoveOutcome::Wall => Some(WALL_MESSAGE),
            MoveOutcome::Locked => Some(LOCKED_EXIT_MESSAGE),
        }
    }
}

/// Apply one step in `direction`.
///
/// The turn cost is charged up front and the key is picked up if it lies in
/// the current room, even when the move itself is then refused.
pub fn traverse(player: &mut Player, map: &mut DungeonMap, direction: Direction) -> MoveOutcome {
    player.health -= MOVE_COST;

    if map.take_key(player.current_room) {
        debug!(room = %player.current_room, "picked up the key");
        player.has_key = true;
    }

    let door = if direction.is_cardinal() {
        map.room(player.current_room).door(direction)
    } else {
        None
    };
    let outcome = match door {
        None => MoveOutcome::Wall,
        Some(RoomName::Exit) if !player.has_key => MoveOutcome::Locked,
        Some(destination) => MoveOutcome::Moved(destination),
    };

    match outcome {
        MoveOutcome::Moved(destination) => player.current_room = destination,
        MoveOutcome::Wall | MoveOutcome::Locked => player.health += MOVE_COST,
    }
    debug_assert!(player.health >= 0, "health went negative: {}", player.health);

    debug!(%direction, ?outcome, health = player.health, "traversal step");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::KeyPlacement;
    use crate::rng::GameRng;

    fn make_map() -> DungeonMap {
        let mut map = DungeonMap::build();
        map.place_key(KeyPlacement::Fixed, &mut GameRng::new(0));
        map
    }

    #[test]
    fn test_successful_move_costs_one() {
        let mut map = make_map();
        let mut player = Player::default();

        let outcome = traverse(&mut player, &mut map, Direction::South);
        assert_eq!(outcome, MoveOutcome::Moved(RoomName::Armory));
        assert_eq!(player.current_room, RoomName::Armory);
        assert_eq!(player.health, 9);
    }

    #[test]
    fn test_wall_is_free() {
        let mut map = make_map();
        let mut player = Player::default();

        let outcome = traverse(&mut player, &mut map, Direction::North);
        assert_eq!(outcome, MoveOutcome::Wall);
        assert_eq!(outcome.message(), Some(WALL_MESSAGE));
        assert_eq!(player.current_room, RoomName::Cell);
        assert_eq!(player.health, 10);
    }

    #[test]
    fn test_unrecognized_input_is_a_wall() {
        let mut map = make_map();
        let mut player = Player::default();

        assert_eq!(traverse(&mut player, &mut map, Direction::None), MoveOutcome::Wall);
        assert_eq!(player.health, 10);

        // Even a door recorded under `None` is never walked through
        map.room_mut(RoomName::Cell)
            .doors
            .insert(Direction::None, RoomName::Gate);
        assert_eq!(traverse(&mut player, &mut map, Direction::None), MoveOutcome::Wall);
        assert_eq!(player.current_room, RoomName::Cell);
    }

    #[test]
    fn test_exit_locked_without_key() {
        let mut map = make_map();
        let mut player = Player {
            current_room: RoomName::Gate,
            health: 5,
            has_key: false,
        };

        let outcome = traverse(&mut player, &mut map, Direction::East);
        assert_eq!(outcome, MoveOutcome::Locked);
        assert_eq!(outcome.message(), Some(LOCKED_EXIT_MESSAGE));
        assert_eq!(player.current_room, RoomName::Gate);
        assert_eq!(player.health, 5);
    }

    #[test]
    fn test_exit_open_with_key() {
        let mut map = make_map();
        let mut player = Player {
            current_room: RoomName::Gate,
            health: 5,
            has_key: true,
        };

        let outcome = traverse(&mut player, &mut map, Direction::East);
        assert_eq!(outcome, MoveOutcome::Moved(RoomName::Exit));
        assert!(outcome.is_legal());
        assert!(player.has_escaped());
        assert_eq!(player.health, 4);
    }

    #[test]
    fn test_key_picked_up_on_rejected_move() {
        let mut map = make_map();
        let mut player = Player {
            current_room: RoomName::Jailers,
            ..Player::default()
        };

        // Jailers has no east door
        assert_eq!(traverse(&mut player, &mut map, Direction::East), MoveOutcome::Wall);
        assert!(player.has_key);
        assert_eq!(map.key_room(), None);
        assert_eq!(player.health, 10);
    }

    #[test]
    fn test_key_picked_up_when_leaving_room() {
        let mut map = make_map();
        let mut player = Player {
            current_room: RoomName::Jailers,
            ..Player::default()
        };

        traverse(&mut player, &mut map, Direction::North);
        assert!(player.has_key);
        assert_eq!(player.current_room, RoomName::Gate);

        assert_eq!(
            traverse(&mut player, &mut map, Direction::East),
            MoveOutcome::Moved(RoomName::Exit)
        );
        assert_eq!(player.health, 8);
    }

    #[test]
    fn test_key_not_picked_up_elsewhere() {
        let mut map = make_map();
        let mut player = Player::default();

        traverse(&mut player, &mut map, Direction::East);
        assert!(!player.has_key);
        assert_eq!(map.key_room(), Some(RoomName::Jailers));
    }
}
