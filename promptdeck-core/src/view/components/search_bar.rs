//! src/view/components/search_bar.rs
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::view::theme::Palette;

const PLACEHOLDER: &str = "Search prompts... (press / to type)";

pub struct SearchBar<'a> {
    palette: &'a Palette,
}

impl<'a> SearchBar<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    pub fn render(&self, frame: &mut Frame<'_>, query: &str, focused: bool, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(if focused {
                self.palette.focused_border()
            } else {
                self.palette.border()
            });

        let text = if query.is_empty() && !focused {
            Line::from(Span::styled(PLACEHOLDER, self.palette.muted()))
        } else {
            Line::from(query.to_string())
        };

        let inner = block.inner(area);
        frame.render_widget(
            Paragraph::new(text).block(block).style(self.palette.base()),
            area,
        );

        if focused && inner.width > 0 {
            let offset = (query.chars().count() as u16).min(inner.width.saturating_sub(1));
            frame.set_cursor_position(Position::new(inner.x + offset, inner.y));
        }
    }
}
