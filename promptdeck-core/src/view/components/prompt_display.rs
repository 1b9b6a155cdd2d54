//! src/view/components/prompt_display.rs
//! ============================================================
//! Prompt display of the detail view. Blocks are drawn starting at the
//! selected one, so a fresh detail render (selection 0) always shows
//! the top of the list.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::{instrument, trace};

use crate::view::{
    snapshots::{DetailSnapshot, PromptBlock},
    theme::Palette,
};

pub struct PromptDisplay<'a> {
    palette: &'a Palette,
}

impl<'a> PromptDisplay<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    #[instrument(level = "trace", skip_all, fields(blocks = detail.blocks.len(), selected = selected))]
    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        detail: &DetailSnapshot,
        selected: usize,
        focused: bool,
        area: Rect,
    ) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(format!(" {} ", detail.heading), self.palette.heading()))
            .border_style(if focused {
                self.palette.focused_border()
            } else {
                self.palette.border()
            })
            .style(self.palette.base());
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let mut y = inner.y;
        for block in detail.blocks.iter().skip(selected) {
            if y >= inner.bottom() {
                break;
            }
            let wanted = self.block_height(block, inner.width);
            let height = wanted.min(inner.bottom() - y);
            let rect = Rect::new(inner.x, y, inner.width, height);
            y += height;

            self.render_block(frame, block, block.index == selected && focused, rect);
        }
        trace!(used = y - inner.y, available = inner.height, "prompt blocks painted");
    }

    fn render_block(&self, frame: &mut Frame<'_>, block: &PromptBlock, selected: bool, area: Rect) {
        let copy = Span::styled(
            format!(" [{}] ", block.copy.label),
            self.palette.copy_control(block.copy.disabled),
        );

        let chrome = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(format!(" {} ", block.title), self.palette.heading()))
            .title_bottom(Line::from(copy).right_aligned())
            .border_style(if selected {
                self.palette.focused_border()
            } else {
                self.palette.muted()
            });

        frame.render_widget(
            Paragraph::new(block.content.as_str())
                .block(chrome)
                .wrap(Wrap { trim: false }),
            area,
        );
    }

    /// Borders plus a rough line count of the wrapped content
    fn block_height(&self, block: &PromptBlock, width: u16) -> u16 {
        let text_width = width.saturating_sub(2).max(1) as usize;
        let lines: usize = block
            .content
            .lines()
            .map(|line| line.chars().count().div_ceil(text_width).max(1))
            .sum();
        (lines.max(1) + 2).min(u16::MAX as usize) as u16
    }
}
