//! Dungeon application state and main UI controller

use crossterm::event::{Event, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use tracing::info;

use da_core::action::Command;
use da_core::dungeon::KeyPlacement;
use da_core::{DIRECTION_PROMPT, GameLoop, GameLoopResult, GameState, RANDOMIZE_KEY_PROMPT};

use crate::TuiError;
use crate::input::{is_quit, key_char, key_to_command};
use crate::widgets::{MessagesWidget, RoomWidget, SplashWidget, centered_rect};

/// UI mode - what the app is currently displaying/waiting for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMode {
    /// Title screen
    Splash,
    /// Waiting for the y/n answer about the key
    AskRandomKey,
    /// Normal gameplay
    Normal,
    /// A refused move; any key continues
    IllegalMove(String),
    /// Final message; any key leaves
    GameOver(String),
}

/// Application state
pub struct App {
    /// Game loop controller
    game_loop: GameLoop,

    /// Should quit
    should_quit: bool,

    /// Current UI mode
    mode: UiMode,
}

impl App {
    /// Create a new application, starting on the title screen
    pub fn new(state: GameState) -> Self {
        Self {
            game_loop: GameLoop::new(state),
            should_quit: false,
            mode: UiMode::Splash,
        }
    }

    /// Get game state
    pub fn state(&self) -> &GameState {
        self.game_loop.state()
    }

    pub fn mode(&self) -> &UiMode {
        &self.mode
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle input event - returns a command if one should be executed
    pub fn handle_event(&mut self, event: Event) -> Result<Option<Command>, TuiError> {
        let Event::Key(key) = event else {
            return Ok(None);
        };

        if key.kind == KeyEventKind::Release {
            return Ok(None);
        }
        // During play quitting goes through the game loop as a command
        if is_quit(&key) && self.mode != UiMode::Normal {
            self.should_quit = true;
            return Ok(None);
        }

        match self.mode {
            UiMode::Splash => {
                self.mode = if self.state().key_placed() {
                    UiMode::Normal
                } else {
                    UiMode::AskRandomKey
                };
                Ok(None)
            }
            UiMode::AskRandomKey => {
                let Some(c) = key_char(&key) else {
                    return Ok(None);
                };
                let placement = KeyPlacement::from_answer(c);
                self.game_loop.state_mut().place_key(placement)?;
                self.mode = UiMode::Normal;
                Ok(None)
            }
            UiMode::Normal => Ok(key_to_command(key)),
            UiMode::IllegalMove(_) => {
                self.game_loop.state_mut().clear_messages();
                self.mode = UiMode::Normal;
                Ok(None)
            }
            UiMode::GameOver(_) => {
                self.should_quit = true;
                Ok(None)
            }
        }
    }

    /// Run a command through the game loop and switch mode on the result
    pub fn execute(&mut self, command: Command) -> GameLoopResult {
        let result = self.game_loop.tick(command);
        match &result {
            GameLoopResult::Continue => {}
            GameLoopResult::IllegalMove(msg) => self.mode = UiMode::IllegalMove(msg.clone()),
            GameLoopResult::PlayerDied(msg) | GameLoopResult::PlayerEscaped(msg) => {
                info!(turns = self.state().turns, "game over");
                self.mode = UiMode::GameOver(msg.clone());
            }
            GameLoopResult::PlayerQuit => self.should_quit = true,
        }
        result
    }

    /// Render the whole UI
    pub fn render(&self, frame: &mut Frame) {
        if self.mode == UiMode::Splash {
            frame.render_widget(SplashWidget, frame.area());
            return;
        }

        // Layout: room at top, prompt in middle, messages at bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),    // Room + status
                Constraint::Length(1), // Prompt
                Constraint::Length(4), // Messages
            ])
            .split(frame.area());

        frame.render_widget(RoomWidget::new(self.state()), chunks[0]);

        let prompt = match self.mode {
            UiMode::AskRandomKey => RANDOMIZE_KEY_PROMPT,
            UiMode::Normal => DIRECTION_PROMPT,
            _ => "Press any key to continue...",
        };
        frame.render_widget(
            Paragraph::new(prompt).style(Style::default().fg(Color::Yellow)),
            chunks[1],
        );

        frame.render_widget(MessagesWidget::new(&self.state().messages), chunks[2]);

        match &self.mode {
            UiMode::IllegalMove(msg) => self.render_popup(frame, " Can't go that way ", msg, Color::Yellow),
            UiMode::GameOver(msg) => self.render_popup(frame, " Game over ", msg, Color::Red),
            _ => {}
        }
    }

    /// Render a message overlay
    fn render_popup(&self, frame: &mut Frame, title: &str, msg: &str, color: Color) {
        let area = centered_rect(70, 40, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        let paragraph = Paragraph::new(msg)
            .block(block)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use da_core::dungeon::RoomName;
    use da_core::{GameRng, LOCKED_EXIT_MESSAGE, WALL_MESSAGE};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    /// Feed a key and execute whatever command it produces
    fn press(app: &mut App, c: char) -> Option<GameLoopResult> {
        app.handle_event(key(c)).unwrap().map(|command| app.execute(command))
    }

    fn started_app() -> App {
        let mut app = App::new(GameState::new(GameRng::new(8)));
        press(&mut app, ' ');
        press(&mut app, 'n');
        app
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_startup_flow() {
        let mut app = App::new(GameState::new(GameRng::new(8)));
        assert_eq!(app.mode(), &UiMode::Splash);

        assert_eq!(press(&mut app, 'x'), None);
        assert_eq!(app.mode(), &UiMode::AskRandomKey);

        assert_eq!(press(&mut app, 'n'), None);
        assert_eq!(app.mode(), &UiMode::Normal);
        assert_eq!(app.state().map.key_room(), Some(RoomName::Jailers));
    }

    #[test]
    fn test_preset_key_skips_prompt() {
        let mut state = GameState::new(GameRng::new(8));
        state.place_key(KeyPlacement::Random).unwrap();
        let mut app = App::new(state);
        press(&mut app, ' ');
        assert_eq!(app.mode(), &UiMode::Normal);
    }

    #[test]
    fn test_illegal_move_pauses() {
        let mut app = started_app();

        let result = press(&mut app, 'q');
        assert_eq!(result, Some(GameLoopResult::IllegalMove(WALL_MESSAGE.to_string())));
        assert_eq!(app.mode(), &UiMode::IllegalMove(WALL_MESSAGE.to_string()));

        // Any key dismisses without moving
        assert_eq!(press(&mut app, 'd'), None);
        assert_eq!(app.mode(), &UiMode::Normal);
        assert_eq!(app.state().player.current_room, RoomName::Cell);
    }

    #[test]
    fn test_locked_exit_message() {
        let mut app = started_app();
        press(&mut app, 'd');
        let result = press(&mut app, 'd');
        assert_eq!(result, Some(GameLoopResult::IllegalMove(LOCKED_EXIT_MESSAGE.to_string())));
        assert_eq!(app.state().player.health, 9);
    }

    #[test]
    fn test_escape_and_quit() {
        let mut app = started_app();
        for c in ['s', 'd', 'w'] {
            assert_eq!(press(&mut app, c), Some(GameLoopResult::Continue));
        }
        let result = press(&mut app, 'd');
        assert!(matches!(result, Some(GameLoopResult::PlayerEscaped(_))));
        assert!(matches!(app.mode(), UiMode::GameOver(_)));
        assert!(screen_text(&app).contains("YOU FOUND THE KEY AND ESCAPED!"));

        assert!(!app.should_quit());
        press(&mut app, ' ');
        assert!(app.should_quit());
    }

    #[test]
    fn test_any_key_leaves_splash() {
        let mut app = App::new(GameState::new(GameRng::new(8)));
        let enter = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.handle_event(enter.clone()).unwrap(), None);
        assert_eq!(app.mode(), &UiMode::AskRandomKey);

        // The y/n question needs a character
        assert_eq!(app.handle_event(enter).unwrap(), None);
        assert_eq!(app.mode(), &UiMode::AskRandomKey);
        press(&mut app, 'y');
        assert_eq!(app.mode(), &UiMode::Normal);
        assert!(app.state().map.key_room().is_some());
    }

    #[test]
    fn test_esc_quits_through_game_loop() {
        let mut app = started_app();
        let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        let command = app.handle_event(esc).unwrap();
        assert_eq!(command, Some(Command::Quit));
        assert!(!app.should_quit());

        assert_eq!(app.execute(Command::Quit), GameLoopResult::PlayerQuit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_esc_on_splash_quits_directly() {
        let mut app = App::new(GameState::new(GameRng::new(8)));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(app.handle_event(ctrl_c).unwrap(), None);
        assert!(app.should_quit());
    }

    #[test]
    fn test_render_status() {
        let mut app = started_app();
        press(&mut app, 's');
        let text = screen_text(&app);
        assert!(text.contains("View:A store room with doors North and East."));
        assert!(text.contains("Health: 9"));
        assert!(text.contains("Equip:"));
        assert!(text.contains(DIRECTION_PROMPT));
    }

    #[test]
    fn test_render_splash_and_prompt() {
        let mut app = App::new(GameState::new(GameRng::new(8)));
        assert!(screen_text(&app).contains("DUNGEON ADVENTURE"));
        press(&mut app, ' ');
        assert!(screen_text(&app).contains(RANDOMIZE_KEY_PROMPT));
    }
}
