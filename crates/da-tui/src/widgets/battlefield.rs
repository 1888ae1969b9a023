//! Battle roster widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

use da_core::battle::Battle;

/// Player with equipment, then the numbered monsters
pub struct BattlefieldWidget<'a> {
    battle: &'a Battle,
}

impl<'a> BattlefieldWidget<'a> {
    pub fn new(battle: &'a Battle) -> Self {
        Self { battle }
    }

    pub fn lines(&self) -> Vec<String> {
        let player = &self.battle.player;
        let mut lines = vec![format!("{player} h:{}", player.health)];
        lines.extend(player.inventory.values().map(|item| format!("  {item}")));
        lines.extend(
            self.battle
                .monsters
                .iter()
                .enumerate()
                .map(|(i, monster)| format!("   {}. {monster} h:{}", i + 1, monster.health)),
        );
        lines
    }
}

impl Widget for BattlefieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Wave {} ", self.battle.wave);
        let items: Vec<ListItem> = self
            .lines()
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let style = if i == 0 {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(Span::styled(line, style)))
            })
            .collect();

        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
        Widget::render(list, area, buf);
    }
}
