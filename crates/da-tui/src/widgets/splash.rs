//! Title screen widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const SPLASH: &str = r#"DUNGEON ADVENTURE

INSTRUCTIONS:

Find the key and get out of the dungeon!

        (North)
           w
           |
(West) a --+-- d (East)
           |
           s
        (South)

Press any key to continue..."#;

/// Title and instructions shown before the game starts
pub struct SplashWidget;

impl Widget for SplashWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(SPLASH)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White))
            .render(area, buf);
    }
}
