//! Battle demo application state and UI controller

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use tracing::info;

use da_core::battle::{Battle, BattleCommand, BattleError, RoundResult};
use da_core::{BATTLE_PROMPT, TARGET_PROMPT};

use crate::TuiError;
use crate::input::{is_quit, key_char};
use crate::widgets::{BattlefieldWidget, MessagesWidget};

/// What the battle screen is waiting for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleMode {
    /// Level-up and wave announcement; any key starts the fight
    WaveIntro,
    /// (a)ttack or (h)eal
    Command,
    /// Typing a monster number, confirmed with Enter
    ChooseTarget { input: String },
    /// Round messages; any key continues
    RoundReport(RoundResult),
    /// Closing lines; any key leaves
    GameOver,
}

/// Application state
pub struct BattleApp {
    battle: Battle,
    mode: BattleMode,
    should_quit: bool,
    /// Shown under the prompt until the next key
    notice: Option<String>,
}

impl BattleApp {
    /// Start the first wave
    pub fn new(mut battle: Battle) -> Result<Self, TuiError> {
        battle.start_wave()?;
        Ok(Self {
            battle,
            mode: BattleMode::WaveIntro,
            should_quit: false,
            notice: None,
        })
    }

    pub fn battle(&self) -> &Battle {
        &self.battle
    }

    pub fn mode(&self) -> &BattleMode {
        &self.mode
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle input event
    pub fn handle_event(&mut self, event: Event) -> Result<(), TuiError> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind == KeyEventKind::Release {
            return Ok(());
        }
        if is_quit(&key) {
            self.should_quit = true;
            return Ok(());
        }
        self.notice = None;

        match &mut self.mode {
            BattleMode::WaveIntro => self.mode = BattleMode::Command,
            BattleMode::Command => {
                if let Some(c) = key_char(&key) {
                    match BattleCommand::from_key(c) {
                        None => {
                            self.mode = BattleMode::ChooseTarget {
                                input: String::new(),
                            }
                        }
                        Some(command) => self.play(command)?,
                    }
                }
            }
            BattleMode::ChooseTarget { input } => match key.code {
                KeyCode::Char(c) if c.is_ascii_digit() => input.push(c),
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Enter => {
                    let target = input.parse().unwrap_or(0);
                    match self.battle.check_target(target) {
                        Ok(_) => self.play(BattleCommand::Attack(target))?,
                        Err(e @ BattleError::NoSuchMonster { .. }) => {
                            self.notice = Some(e.to_string());
                            input.clear();
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
                _ => {}
            },
            BattleMode::RoundReport(result) => match *result {
                RoundResult::Continue => self.mode = BattleMode::Command,
                RoundResult::WaveCleared => {
                    self.battle.start_wave()?;
                    self.mode = BattleMode::WaveIntro;
                }
                RoundResult::PlayerDied => {
                    info!(waves = self.battle.wave, "battle over");
                    self.mode = BattleMode::GameOver;
                }
            },
            BattleMode::GameOver => self.should_quit = true,
        }
        Ok(())
    }

    fn play(&mut self, command: BattleCommand) -> Result<(), TuiError> {
        let result = self.battle.play_round(command)?;
        self.mode = BattleMode::RoundReport(result);
        Ok(())
    }

    fn prompt(&self) -> String {
        match &self.mode {
            BattleMode::Command => BATTLE_PROMPT.to_string(),
            BattleMode::ChooseTarget { input } => format!("{TARGET_PROMPT}{input}"),
            BattleMode::GameOver => "Press any key to leave...".to_string(),
            BattleMode::WaveIntro | BattleMode::RoundReport(_) => {
                "Press any key to continue...".to_string()
            }
        }
    }

    /// Render the whole UI
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),     // Roster
                Constraint::Length(2),  // Prompt + notice
                Constraint::Length(12), // Messages
            ])
            .split(frame.area());

        frame.render_widget(BattlefieldWidget::new(&self.battle), chunks[0]);

        let mut prompt = vec![Line::styled(self.prompt(), Style::default().fg(Color::Yellow))];
        if let Some(notice) = &self.notice {
            prompt.push(Line::styled(notice.as_str(), Style::default().fg(Color::Red)));
        }
        frame.render_widget(Paragraph::new(prompt), chunks[1]);

        let messages: Vec<String> = if self.mode == BattleMode::GameOver {
            self.battle.summary().into_iter().map(String::from).collect()
        } else {
            self.battle.messages.clone()
        };
        frame.render_widget(MessagesWidget::new(&messages), chunks[2]);
    }
}
