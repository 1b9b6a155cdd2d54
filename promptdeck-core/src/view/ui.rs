//! src/view/ui.rs
//! ============================================================
//! Frame renderer. Paints the snapshots held by the controller; it
//! never looks at the catalog except for the status-bar summary.

use std::time::{Duration, Instant};

use ratatui::prelude::*;
use tracing::{instrument, warn};

use crate::{
    controller::navigation::NavigationController,
    model::{
        app_state::{AppState, LoadPhase},
        ui_state::DetailFocus,
    },
    view::{
        components::{
            category_cards::CategoryCards, load_status::LoadStatus, menu_panel::MenuPanel,
            notification_overlay::NotificationOverlay, prompt_display::PromptDisplay,
            quick_links_sidebar::QuickLinksSidebar, search_bar::SearchBar,
            search_results::SearchResultsView, status_bar::StatusBar,
        },
        theme::Palette,
    },
};

pub struct UIRenderer {
    palette: Palette,
    stats: RenderStats,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RenderStats {
    pub frames: u64,
    pub slow: u64,
    pub total: Duration,
}

impl RenderStats {
    pub fn fps(&self) -> f64 {
        if self.frames > 0 && !self.total.is_zero() {
            self.frames as f64 / self.total.as_secs_f64()
        } else {
            0.0
        }
    }
}

impl UIRenderer {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            stats: RenderStats::default(),
        }
    }

    pub fn get_stats(&self) -> RenderStats {
        self.stats
    }

    #[instrument(level = "trace", skip_all)]
    pub fn render(&mut self, frame: &mut Frame<'_>, state: &AppState) {
        let start = Instant::now();
        let screen = frame.area();

        let [main, status] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(screen);

        match &state.phase {
            LoadPhase::Loading => LoadStatus::new(&self.palette).render_loading(frame, main),
            LoadPhase::Failed { .. } => LoadStatus::new(&self.palette).render_failed(frame, main),
            LoadPhase::Ready(controller) => self.draw_main(frame, controller, main),
        }

        let controller = state.controller();
        StatusBar::new(&self.palette).render(
            frame,
            state.key_context(),
            controller.map(NavigationController::catalog),
            controller.map(NavigationController::clipboard_backend),
            status,
        );

        self.draw_overlays(frame, state, screen);

        let elapsed = start.elapsed();
        self.stats.total += elapsed;
        self.stats.frames += 1;
        if elapsed.as_millis() > 16 {
            self.stats.slow += 1;
            warn!("Slow render: {}ms (target: <16ms)", elapsed.as_millis());
        }
    }

    fn draw_main(&self, frame: &mut Frame<'_>, controller: &NavigationController, area: Rect) {
        let regions = controller.regions();
        let ui = controller.ui();

        if regions.homepage {
            let [search, body] =
                Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(area);
            SearchBar::new(&self.palette).render(frame, &ui.search_query, ui.search_focused, search);

            match controller.search_results() {
                Some(results) if regions.search_results => SearchResultsView::new(&self.palette)
                    .render(frame, results, ui.search_selection, body),
                _ => CategoryCards::new(&self.palette).render(
                    frame,
                    controller.homepage(),
                    ui.home_selection,
                    body,
                ),
            }
        } else if let Some(detail) = controller.detail() {
            let [prompts, sidebar] =
                Layout::horizontal([Constraint::Percentage(68), Constraint::Percentage(32)])
                    .areas(area);

            PromptDisplay::new(&self.palette).render(
                frame,
                detail,
                ui.prompt_selection,
                ui.detail_focus == DetailFocus::Prompts,
                prompts,
            );
            QuickLinksSidebar::new(&self.palette).render(
                frame,
                &detail.sidebar,
                ui.sidebar_selection,
                ui.detail_focus == DetailFocus::Sidebar,
                sidebar,
            );
        }
    }

    fn draw_overlays(&self, frame: &mut Frame<'_>, state: &AppState, screen: Rect) {
        if state.menu.expanded {
            let source = state.config.catalog_source.to_string();
            MenuPanel::new(&self.palette).render(frame, &source, centered(screen, 60, 60));
        }

        let Some(controller) = state.controller() else {
            return;
        };
        let overlay = NotificationOverlay::new(&self.palette);

        if let Some(notification) = &controller.ui().notification {
            overlay.render_notification(frame, notification, toast_rect(screen));
        }
        if let Some(alert) = &controller.ui().alert {
            overlay.render_alert(frame, alert, alert_rect(screen));
        }
    }
}

/// `pct` percent of `len`, widened so large terminals cannot overflow
fn percent_of(len: u16, pct: u16) -> u16 {
    let scaled = u32::from(len) * u32::from(pct.min(100)) / 100;
    u16::try_from(scaled).unwrap_or(len)
}

fn centered(r: Rect, w_pct: u16, h_pct: u16) -> Rect {
    let w = percent_of(r.width, w_pct);
    let h = percent_of(r.height, h_pct);
    Rect {
        x: r.x + (r.width - w) / 2,
        y: r.y + (r.height - h) / 2,
        width: w,
        height: h,
    }
}

fn toast_rect(scr: Rect) -> Rect {
    let w = percent_of(scr.width, 60);
    Rect {
        x: scr.x + (scr.width - w) / 2,
        y: scr.y + 1,
        width: w,
        height: 3.min(scr.height),
    }
}

fn alert_rect(scr: Rect) -> Rect {
    let w = (scr.width / 2).max(30).min(scr.width);
    let h = 5.min(scr.height);
    Rect {
        x: scr.x + (scr.width - w) / 2,
        y: scr.y + (scr.height - h) / 2,
        width: w,
        height: h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::controller::{
        action_dispatcher::ActionDispatcher, actions::Action, navigation::COPY_FAILED_MESSAGE,
    };
    use crate::error::AppError;
    use crate::model::catalog::fixtures::sample_catalog;
    use crate::operators::catalog_loader::LOAD_ERROR_MESSAGE;
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn app_state() -> AppState {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut config = Config::default();
        config.clipboard.use_system_clipboard = false;
        AppState::new(Arc::new(config), tx)
    }

    fn ready_state() -> AppState {
        let mut state = app_state();
        ActionDispatcher::new().handle(
            &mut state,
            Action::CatalogLoaded(Ok(Arc::new(sample_catalog()))),
        );
        state
    }

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut renderer = UIRenderer::new(Palette::default());
        terminal.draw(|f| renderer.render(f, state)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_loading_then_failure_message() {
        let mut state = app_state();
        assert!(draw(&state).contains("Loading prompts..."));

        ActionDispatcher::new().handle(
            &mut state,
            Action::CatalogLoaded(Err(AppError::MissingPromptData)),
        );
        let screen = draw(&state);
        assert!(screen.contains(LOAD_ERROR_MESSAGE));
        assert!(!screen.contains("Prompts for"));
    }

    #[test]
    fn test_homepage_cards() {
        let screen = draw(&ready_state());

        assert!(screen.contains("Gemini Prompts for Writing"));
        assert!(screen.contains("Gemini Prompts for Coding"));
        assert!(screen.contains("→ Essays"));
        assert!(screen.contains("See all prompts →"));
    }

    #[test]
    fn test_search_replaces_cards() {
        let mut state = ready_state();
        state.controller_mut().unwrap().set_search_query("zzzzz");

        let screen = draw(&state);
        assert!(screen.contains("No prompts found."));
        assert!(!screen.contains("Prompts for Writing"));

        state.controller_mut().unwrap().set_search_query("essay");
        let screen = draw(&state);
        assert!(screen.contains("Writing > Essays"));
    }

    #[tokio::test]
    async fn test_detail_shows_copied_label() {
        let mut state = ready_state();
        let controller = state.controller_mut().unwrap();
        controller.see_all("Writing").unwrap();

        let screen = draw(&state);
        assert!(screen.contains("Gemini Prompts for Essays"));
        assert!(screen.contains("Quick links"));
        assert!(screen.contains("Gemini Prompts for Coding"));
        assert!(screen.contains("[Copy]"));

        state
            .controller_mut()
            .unwrap()
            .handle(Action::CopySelected)
            .unwrap();
        assert!(draw(&state).contains("[Copied!]"));
    }

    #[test]
    fn test_alert_and_menu_overlays() {
        let mut state = ready_state();
        state
            .controller_mut()
            .unwrap()
            .ui_mut()
            .show_alert(COPY_FAILED_MESSAGE);
        state.toggle_menu();

        let screen = draw(&state);
        assert!(screen.contains(COPY_FAILED_MESSAGE));
        assert!(screen.contains("Menu"));
    }

    #[test]
    fn test_overlay_rects_on_very_wide_terminal() {
        let screen = Rect::new(0, 0, 4000, 2000);

        let menu = centered(screen, 60, 60);
        assert_eq!((menu.width, menu.height), (2400, 1200));
        assert_eq!((menu.x, menu.y), (800, 400));

        let toast = toast_rect(screen);
        assert_eq!(toast.width, 2400);
        assert_eq!(toast.x, 800);
    }
}
