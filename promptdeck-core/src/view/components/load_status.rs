//! src/view/components/load_status.rs
//! ============================================================
//! Placeholder painted in the main area before the catalog is usable:
//! a loading line, or the static error message once the load failed.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::operators::catalog_loader::LOAD_ERROR_MESSAGE;
use crate::view::theme::Palette;

pub const LOADING_MESSAGE: &str = "Loading prompts...";

pub struct LoadStatus<'a> {
    palette: &'a Palette,
}

impl<'a> LoadStatus<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    pub fn render_loading(&self, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .title(" Loading… ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.warning));

        frame.render_widget(
            Paragraph::new(LOADING_MESSAGE)
                .block(block)
                .style(self.palette.base())
                .alignment(Alignment::Center),
            area,
        );
    }

    pub fn render_failed(&self, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .title(" Error ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.error));

        frame.render_widget(
            Paragraph::new(Span::styled(
                LOAD_ERROR_MESSAGE,
                Style::default().fg(self.palette.error),
            ))
            .block(block)
            .style(self.palette.base())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
            area,
        );
    }
}
