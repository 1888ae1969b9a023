//! Input handling - convert key events to commands

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use da_core::action::{Command, Direction};

/// Esc or Ctrl-C
pub fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// The character typed, ignoring releases and control chords
pub fn key_char(key: &KeyEvent) -> Option<char> {
    if key.kind == KeyEventKind::Release || key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => Some(c),
        _ => None,
    }
}

/// Convert a key event to a game command
///
/// Every typed character is a move attempt; only w/a/s/d name a door.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    if is_quit(&key) {
        return Some(Command::Quit);
    }
    key_char(&key).map(|c| Command::Move(Direction::from_key(c)))
}
