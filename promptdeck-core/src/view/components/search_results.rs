//! src/view/components/search_results.rs
//! ============================================================
//! Search-results region. Each preview is three lines: title,
//! provenance (`Category > Sub-category`) and truncated content.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use tracing::instrument;

use crate::view::{snapshots::SearchSnapshot, theme::Palette};

pub struct SearchResultsView<'a> {
    palette: &'a Palette,
}

impl<'a> SearchResultsView<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    #[instrument(level = "trace", skip_all, fields(results = snapshot.len()))]
    pub fn render(&self, frame: &mut Frame<'_>, snapshot: &SearchSnapshot, selected: usize, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Results ({}) ", snapshot.len()))
            .border_style(self.palette.border());

        let previews = match snapshot {
            SearchSnapshot::NoResults { message } => {
                frame.render_widget(
                    Paragraph::new(Span::styled(*message, self.palette.muted()))
                        .block(block)
                        .alignment(Alignment::Center)
                        .wrap(Wrap { trim: true }),
                    area,
                );
                return;
            }
            SearchSnapshot::Results(previews) => previews,
        };

        let items: Vec<ListItem<'_>> = previews
            .iter()
            .map(|p| {
                ListItem::new(vec![
                    Line::from(Span::styled(p.title.as_str(), self.palette.heading())),
                    Line::from(Span::styled(p.provenance.as_str(), self.palette.muted())),
                    Line::from(p.preview.as_str()),
                    Line::default(),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .style(self.palette.base())
            .highlight_style(self.palette.highlight())
            .highlight_symbol("› ");

        let mut state = ListState::default().with_selected(Some(selected));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
