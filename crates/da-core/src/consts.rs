//! Game constants and fixed message text

/// Health the player starts the dungeon with
pub const STARTING_HEALTH: i32 = 10;

/// Health spent on every successful move
pub const MOVE_COST: i32 = 1;

/// Room that holds the key when placement is not randomized (jailers)
pub const FIXED_KEY_ROOM_INDEX: usize = 3;

pub const RANDOMIZE_KEY_PROMPT: &str = "Would you like to randomize the key? (y or n)";
pub const DIRECTION_PROMPT: &str = "Where would you like to go?";

pub const LOCKED_EXIT_MESSAGE: &str =
    "You pat your pockets for a key, there is not one, its probably around here somewhere...";
pub const WALL_MESSAGE: &str = "There is a wall, thus no door, thus cannot go that way.";

pub const DEATH_MESSAGE: &str =
    "There is a trail of blood behind you, you fall to your knees, the world fades... \nYOU HAVE DIED";

/// Probability (in percent) that a monster attacks on its turn
pub const MONSTER_ATTACK_PERCENT: u32 = 75;

pub const BATTLE_PROMPT: &str = "What do you do? (a)ttack (h)eal ";
pub const TARGET_PROMPT: &str = "Which Monster: ";
pub const BAD_COMMAND_MESSAGE: &str = "please enter a or h";
