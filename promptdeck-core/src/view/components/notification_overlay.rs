//! src/view/components/notification_overlay.rs
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tracing::{instrument, trace};

use crate::model::ui_state::{Alert, Notification, NotificationLevel};
use crate::view::theme::Palette;

pub struct NotificationOverlay<'a> {
    palette: &'a Palette,
}

impl<'a> NotificationOverlay<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    /// Transient toast, removed by the tick once expired
    #[instrument(
        level = "trace",
        skip_all,
        fields(
            marker = "NOTIFICATION_DISPLAYED",
            operation_type = "notification_render",
            level = ?notification.level,
        )
    )]
    pub fn render_notification(&self, frame: &mut Frame<'_>, notification: &Notification, area: Rect) {
        frame.render_widget(Clear, area);

        let (color, title, icon) = match notification.level {
            NotificationLevel::Warning => (self.palette.warning, "Warning", "⚠"),
            NotificationLevel::Error => (self.palette.error, "Error", "✕"),
        };
        trace!(title, "notification style selected");

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {icon} {title} "))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(color))
            .style(self.palette.base());

        frame.render_widget(
            Paragraph::new(notification.message.as_str())
                .block(block)
                .wrap(Wrap { trim: true }),
            area,
        );
    }

    /// Blocking alert; input is swallowed until it is dismissed
    pub fn render_alert(&self, frame: &mut Frame<'_>, alert: &Alert, area: Rect) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Alert ")
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(self.palette.error))
            .style(self.palette.base());

        let [message, hint] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(block.inner(area));
        frame.render_widget(block, area);

        frame.render_widget(
            Paragraph::new(alert.message.as_str())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            message,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Press any key to dismiss",
                self.palette.muted().add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center),
            hint,
        );
    }
}
