//! src/view/components/status_bar.rs - one-line status bar
//!
//! Left side: key hints for the current input context, including the back
//! control while the detail view is shown. Right side: catalog summary and
//! clipboard backend.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Widget},
};

use crate::{controller::key_map::KeyContext, model::catalog::Catalog, view::theme::Palette};

pub struct StatusBar<'a> {
    palette: &'a Palette,
}

impl<'a> StatusBar<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    pub fn hints(context: KeyContext) -> &'static str {
        match context {
            KeyContext::Loading => "q quit",
            KeyContext::Alert => "any key: dismiss",
            KeyContext::Menu => "m/Esc close menu | q quit",
            KeyContext::SearchInput => "type to search | Backspace delete | Ctrl-U clear | Esc/Enter done",
            KeyContext::Homepage => "↑/↓ move | Enter open | / search | m menu | q quit",
            KeyContext::Detail => "← Esc/b back | ↑/↓ move | c copy | Tab sidebar | m menu | q quit",
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        context: KeyContext,
        catalog: Option<&Catalog>,
        clipboard_backend: Option<&str>,
        area: Rect,
    ) {
        let right_text = match catalog {
            Some(catalog) => format!(
                "Categories: {} | Prompts: {} | Clipboard: {}",
                catalog.category_count(),
                catalog.prompt_count(),
                clipboard_backend.unwrap_or("-"),
            ),
            None => String::new(),
        };

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(area);

        Paragraph::new(Self::hints(context))
            .style(Style::default().fg(self.palette.foreground).bg(self.palette.surface))
            .alignment(Alignment::Left)
            .render(left, frame.buffer_mut());

        Paragraph::new(right_text)
            .style(Style::default().fg(self.palette.comment).bg(self.palette.surface))
            .alignment(Alignment::Right)
            .render(right, frame.buffer_mut());
    }
}
