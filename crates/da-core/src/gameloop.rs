//! Main game loop

use tracing::info;

use crate::action::{Command, MoveOutcome, traverse};
use crate::dungeon::{DungeonMap, KeyPlacement, MapError, Room};
use crate::player::Player;
use crate::rng::GameRng;
use crate::{DEATH_MESSAGE, STARTING_HEALTH};

/// Result of a game loop tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// The move was refused; the message explains why
    IllegalMove(String),
    /// Player ran out of health
    PlayerDied(String),
    /// Player left through the exit with the key
    PlayerEscaped(String),
    /// Player quit
    PlayerQuit,
}

/// Settings fixed at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Seed for the RNG; drawn from entropy when absent
    pub seed: Option<u64>,
    /// Key placement decided ahead of time; the front-end asks when absent
    pub key_placement: Option<KeyPlacement>,
    pub starting_health: i32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            seed: None,
            key_placement: None,
            starting_health: STARTING_HEALTH,
        }
    }
}

/// Whether the game should keep going.
///
/// Stops once health is gone or the player stands in the exit holding the
/// key. Standing in the exit without the key keeps the game running.
pub fn is_not_done(player: &Player) -> bool {
    if player.is_dead() {
        return false;
    }
    if player.has_escaped() {
        return false;
    }
    true
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub map: DungeonMap,
    pub player: Player,
    pub rng: GameRng,
    /// Successful moves so far
    pub turns: u64,
    /// Messages for the current turn
    pub messages: Vec<String>,
    key_placed: bool,
}

impl GameState {
    /// Create a new game with the given RNG. The key is not placed yet.
    pub fn new(rng: GameRng) -> Self {
        Self::with_health(rng, STARTING_HEALTH)
    }

    pub fn with_health(rng: GameRng, health: i32) -> Self {
        Self {
            map: DungeonMap::build(),
            player: Player::new(health),
            rng,
            turns: 0,
            messages: Vec::new(),
            key_placed: false,
        }
    }

    /// Build a game from startup options, placing the key if they decide it.
    pub fn from_options(options: &GameOptions) -> Result<Self, MapError> {
        let rng = options.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut state = Self::with_health(rng, options.starting_health);
        if let Some(placement) = options.key_placement {
            state.place_key(placement)?;
        }
        Ok(state)
    }

    /// Place the key and check the result.
    pub fn place_key(&mut self, placement: KeyPlacement) -> Result<(), MapError> {
        self.map.place_key(placement, &mut self.rng);
        self.map.validate(self.player.has_key)?;
        self.key_placed = true;
        info!(seed = self.rng.seed(), ?placement, "game started");
        Ok(())
    }

    pub fn key_placed(&self) -> bool {
        self.key_placed
    }

    pub fn current_room(&self) -> &Room {
        self.map.room(self.player.current_room)
    }

    pub fn is_not_done(&self) -> bool {
        is_not_done(&self.player)
    }

    /// Add a message
    pub fn message(&mut self, msg: impl Into<String>) {
        self.messages.push(msg.into());
    }

    /// Clear messages
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }
}

/// Game loop controller
pub struct GameLoop {
    state: GameState,
}

impl GameLoop {
    /// Create a new game loop with the given state
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Consume the game loop and return the owned game state
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Execute a single game tick
    pub fn tick(&mut self, command: Command) -> GameLoopResult {
        self.state.clear_messages();

        let direction = match command {
            Command::Quit => return GameLoopResult::PlayerQuit,
            Command::Move(direction) => direction,
        };

        if let Some(result) = self.finished() {
            return result;
        }

        let state = &mut self.state;
        let outcome = traverse(&mut state.player, &mut state.map, direction);
        match outcome {
            MoveOutcome::Moved(_) => state.turns += 1,
            MoveOutcome::Wall | MoveOutcome::Locked => {
                let msg = outcome.message().unwrap_or_default();
                state.message(msg);
                return GameLoopResult::IllegalMove(msg.to_string());
            }
        }

        self.finished().unwrap_or(GameLoopResult::Continue)
    }

    /// End-of-game result, if the termination check says stop.
    ///
    /// Reaching the exit on the last point of health reports both endings.
    fn finished(&mut self) -> Option<GameLoopResult> {
        if self.state.is_not_done() {
            return None;
        }
        let state = &mut self.state;
        let mut lines = Vec::with_capacity(2);
        if state.player.has_escaped() {
            lines.push(state.current_room().message);
            info!(turns = state.turns, health = state.player.health, "player escaped");
        }
        if state.player.is_dead() {
            lines.push(DEATH_MESSAGE);
            info!(turns = state.turns, room = %state.player.current_room, "player died");
        }
        for line in &lines {
            state.message(*line);
        }

        let msg = lines.join("\n");
        if state.player.has_escaped() {
            Some(GameLoopResult::PlayerEscaped(msg))
        } else {
            Some(GameLoopResult::PlayerDied(msg))
        }
    }
}
