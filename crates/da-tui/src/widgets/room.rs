//! Current room and player status

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use da_core::GameState;

/// Shows the room description, health and equipment. Never mutates the game.
pub struct RoomWidget<'a> {
    state: &'a GameState,
}

impl<'a> RoomWidget<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    /// The status lines as plain text
    pub fn lines(&self) -> Vec<String> {
        let player = &self.state.player;
        let mut lines: Vec<String> = self
            .state
            .current_room()
            .message
            .split('\n')
            .enumerate()
            .map(|(i, part)| if i == 0 { format!("View:{part}") } else { part.to_string() })
            .collect();
        lines.push(format!("Health: {}", player.health));
        lines.push(if player.has_key {
            "Equip: Key".to_string()
        } else {
            "Equip: ".to_string()
        });
        lines
    }
}

impl Widget for RoomWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let health_style = if self.state.player.health <= 3 {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::White)
        };
        let lines = self.lines();
        let count = lines.len();
        let text: Vec<Line> = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                // health is second to last
                if i + 2 == count {
                    Line::styled(line, health_style)
                } else {
                    Line::raw(line)
                }
            })
            .collect();

        Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title(" Dungeon "))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
