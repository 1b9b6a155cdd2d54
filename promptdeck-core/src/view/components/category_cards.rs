//! src/view/components/category_cards.rs
//! ============================================================
//! Homepage card region: one bordered card per category with its
//! sub-category links and the "see all" action. The focus cursor
//! indexes `HomepageSnapshot::focus_targets()`.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use tracing::{instrument, trace};

use crate::view::{snapshots::HomepageSnapshot, theme::Palette};

pub struct CategoryCards<'a> {
    palette: &'a Palette,
}

impl<'a> CategoryCards<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    #[instrument(level = "trace", skip_all, fields(cards = home.cards.len(), selected = selected))]
    pub fn render(&self, frame: &mut Frame<'_>, home: &HomepageSnapshot, selected: usize, area: Rect) {
        let offsets = home.card_offsets();
        // Borders plus the see-all row. Kept in usize: a card may be taller
        // than any terminal.
        let heights: Vec<usize> = home.cards.iter().map(|card| card.links.len() + 3).collect();

        // Drop leading cards until the one holding the cursor fits.
        let selected_card = offsets
            .iter()
            .rposition(|&start| start <= selected)
            .unwrap_or(0);
        let mut first = 0;
        while first < selected_card
            && heights[first..=selected_card].iter().sum::<usize>() > usize::from(area.height)
        {
            first += 1;
        }
        trace!(first, selected_card, "card window");

        let mut y = area.y;
        for (idx, card) in home.cards.iter().enumerate().skip(first) {
            let remaining = area.bottom().saturating_sub(y);
            let height = u16::try_from(heights[idx]).map_or(remaining, |h| h.min(remaining));
            if height == 0 {
                break;
            }
            let rect = Rect::new(area.x, y, area.width, height);
            y += height;

            let start = offsets[idx];
            let has_cursor = (start..start + card.links.len() + 1).contains(&selected);

            let mut lines: Vec<Line<'_>> = card
                .links
                .iter()
                .enumerate()
                .map(|(i, link)| self.item(&link.label, start + i == selected, self.palette.link()))
                .collect();
            lines.push(self.item(
                card.see_all.label,
                start + card.links.len() == selected,
                self.palette.muted(),
            ));

            let block = Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(format!(" {} ", card.heading), self.palette.heading()))
                .border_style(if has_cursor {
                    self.palette.focused_border()
                } else {
                    self.palette.border()
                });

            frame.render_widget(
                Paragraph::new(lines).block(block).style(self.palette.base()),
                rect,
            );
        }
    }

    fn item(&self, label: &str, selected: bool, style: Style) -> Line<'static> {
        if selected {
            Line::from(Span::styled(format!("› {label}"), self.palette.highlight()))
        } else {
            Line::from(Span::styled(format!("  {label}"), style))
        }
    }
}
