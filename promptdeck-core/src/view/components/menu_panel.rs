//! Menu panel shown while the menu toggle is expanded
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::view::theme::Palette;

const BINDINGS: &[(&str, &str)] = &[
    ("↑/↓ or k/j", "Move focus"),
    ("Enter", "Open link / copy prompt"),
    ("/", "Search prompts"),
    ("c", "Copy selected prompt"),
    ("Tab", "Prompts / quick links"),
    ("Esc, b", "Back to homepage"),
    ("m", "Toggle this menu"),
    ("q, Ctrl-C", "Quit"),
];

pub struct MenuPanel<'a> {
    palette: &'a Palette,
}

impl<'a> MenuPanel<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    pub fn render(&self, frame: &mut Frame<'_>, source: &str, area: Rect) {
        frame.render_widget(Clear, area);

        let mut lines: Vec<Line<'_>> = BINDINGS
            .iter()
            .map(|(keys, what)| {
                Line::from(vec![
                    Span::styled(format!("{keys:>12}  "), self.palette.link()),
                    Span::raw(*what),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Prompts from ", self.palette.muted()),
            Span::styled(source.to_string(), self.palette.muted()),
        ]));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Menu ")
            .title_alignment(Alignment::Center)
            .border_style(self.palette.focused_border())
            .style(self.palette.base());

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }
}
