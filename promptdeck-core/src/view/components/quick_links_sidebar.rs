//! src/view/components/quick_links_sidebar.rs
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::view::{snapshots::Sidebar, theme::Palette};

/// Every category with all of its sub-categories; the entry for the
/// detail view on screen is marked active.
pub struct QuickLinksSidebar<'a> {
    palette: &'a Palette,
}

impl<'a> QuickLinksSidebar<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        sidebar: &Sidebar,
        cursor: usize,
        focused: bool,
        area: Rect,
    ) {
        let mut items = Vec::new();
        // List row of each entry, skipping section headers
        let mut entry_rows = Vec::new();

        for section in &sidebar.sections {
            items.push(ListItem::new(Line::from(Span::styled(
                section.heading.as_str(),
                self.palette.heading(),
            ))));
            for entry in &section.entries {
                entry_rows.push(items.len());
                let (marker, style) = if entry.active {
                    ("● ", self.palette.link().add_modifier(Modifier::BOLD))
                } else {
                    ("  ", self.palette.link())
                };
                items.push(ListItem::new(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(marker, style),
                    Span::styled(entry.label.as_str(), style),
                ])));
            }
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Quick links ")
            .border_style(if focused {
                self.palette.focused_border()
            } else {
                self.palette.border()
            });

        let list = List::new(items)
            .block(block)
            .style(self.palette.base())
            .highlight_style(self.palette.highlight());

        let selected = if focused {
            entry_rows.get(cursor).copied()
        } else {
            None
        };
        let mut state = ListState::default().with_selected(selected);
        frame.render_stateful_widget(list, area, &mut state);
    }
}
