//! Message display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

/// Widget for rendering messages, one per line
pub struct MessagesWidget<'a> {
    messages: &'a [String],
}

impl<'a> MessagesWidget<'a> {
    pub fn new(messages: &'a [String]) -> Self {
        Self { messages }
    }
}

impl Widget for MessagesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .messages
            .iter()
            .flat_map(|m| m.lines())
            .map(Line::raw)
            .collect();

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::TOP))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
