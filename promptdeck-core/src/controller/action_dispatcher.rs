//! ActionDispatcher: applies named actions to the [`AppState`].
//!
//! App-level actions (quit, menu, load outcome, resize, tick) are handled
//! here; everything else is forwarded to the [`NavigationController`] once
//! the catalog is ready. Errors never escape: they are logged and surfaced
//! as a notification, a warning for unknown navigation targets and an
//! error for anything else, leaving state unchanged.

use std::sync::Arc;
use std::time::Instant;

use clipr::Clipboard;
use tracing::{debug, error, info, warn};

use crate::controller::{
    actions::Action,
    key_map::map_key,
    navigation::NavigationController,
};
use crate::error::AppError;
use crate::model::{
    app_state::{AppState, LoadPhase},
    catalog::Catalog,
    ui_state::RedrawFlag,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DispatcherStats {
    pub total_actions: u64,
    pub navigation_errors: u64,
}

#[derive(Debug, Default)]
pub struct ActionDispatcher {
    stats: DispatcherStats,
}

impl ActionDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_stats(&self) -> DispatcherStats {
        self.stats
    }

    pub fn handle(&mut self, state: &mut AppState, action: Action) -> DispatchResult {
        self.stats.total_actions += 1;

        match action {
            Action::Quit => return DispatchResult::Quit,

            Action::Key(key) => {
                let context = state.key_context();
                return match map_key(key, context) {
                    Some(mapped) => {
                        debug!(?context, action = ?mapped, "Key mapped");
                        self.handle(state, mapped)
                    }
                    None => DispatchResult::Continue,
                };
            }

            Action::CatalogLoaded(result) => self.on_catalog_loaded(state, result),

            Action::ToggleMenu => {
                let expanded = state.toggle_menu();
                info!(marker = "MENU_TOGGLED", expanded, "Menu toggled");
            }

            Action::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                state.request_redraw(RedrawFlag::All);
            }

            Action::Tick => {
                if let Some(controller) = state.controller_mut() {
                    controller.ui_mut().expire_notification(Instant::now());
                }
            }

            Action::NoOp => {}

            other => {
                let Some(controller) = state.controller_mut() else {
                    debug!("Ignoring {:?} before catalog is ready", other);
                    return DispatchResult::Continue;
                };

                match controller.handle(other) {
                    Ok(()) => {}
                    Err(e) if e.is_navigation_error() => {
                        self.stats.navigation_errors += 1;
                        warn!(
                            marker = "NAVIGATION_FAILED",
                            operation_type = "navigation",
                            error = %e,
                            "Navigation request rejected"
                        );
                        controller.ui_mut().show_warning(e.to_string());
                    }
                    Err(e) => {
                        error!(
                            marker = "ACTION_FAILED",
                            operation_type = "dispatch",
                            error = %e,
                            "Action failed"
                        );
                        controller.ui_mut().show_error(e.to_string());
                    }
                }
            }
        }

        DispatchResult::Continue
    }

    fn on_catalog_loaded(
        &mut self,
        state: &mut AppState,
        result: Result<Arc<Catalog>, AppError>,
    ) {
        if !state.phase.is_loading() {
            warn!("Duplicate catalog load result ignored");
            return;
        }

        match result {
            Ok(catalog) => {
                let config = Arc::clone(&state.config);
                let controller = NavigationController::new(
                    catalog,
                    &config.search,
                    Clipboard::from_config(&config.clipboard),
                    config.clipboard.feedback_duration,
                    state.action_tx.clone(),
                );
                state.set_phase(LoadPhase::Ready(Box::new(controller)));
            }
            Err(e) => {
                state.set_phase(LoadPhase::Failed {
                    detail: e.to_string(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::catalog::fixtures::sample_catalog;
    use crate::model::ui_state::NotificationLevel;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc;

    fn app_state() -> AppState {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut config = Config::default();
        config.clipboard.use_system_clipboard = false;
        AppState::new(Arc::new(config), tx)
    }

    fn key(code: KeyCode) -> Action {
        Action::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn loaded() -> (ActionDispatcher, AppState) {
        let mut dispatcher = ActionDispatcher::new();
        let mut state = app_state();
        dispatcher.handle(&mut state, Action::CatalogLoaded(Ok(Arc::new(sample_catalog()))));
        (dispatcher, state)
    }

    #[test]
    fn test_catalog_loaded_builds_homepage() {
        let (_, state) = loaded();

        let controller = state.controller().expect("ready");
        assert!(controller.nav().is_homepage());
        assert_eq!(controller.homepage().cards.len(), 2);
    }

    #[test]
    fn test_load_failure_is_terminal() {
        let mut dispatcher = ActionDispatcher::new();
        let mut state = app_state();

        dispatcher.handle(
            &mut state,
            Action::CatalogLoaded(Err(AppError::http_status("http://x/prompts.json", 500))),
        );
        assert!(state.phase.is_failed());

        assert_eq!(dispatcher.handle(&mut state, key(KeyCode::Enter)), DispatchResult::Continue);
        assert_eq!(
            dispatcher.handle(&mut state, Action::SeeAll("Writing".into())),
            DispatchResult::Continue
        );
        assert!(state.phase.is_failed());

        assert_eq!(
            dispatcher.handle(&mut state, key(KeyCode::Char('q'))),
            DispatchResult::Quit
        );
    }

    #[test]
    fn test_keys_drive_search_and_navigation() {
        let (mut dispatcher, mut state) = loaded();

        dispatcher.handle(&mut state, key(KeyCode::Char('/')));
        for c in "essay".chars() {
            dispatcher.handle(&mut state, key(KeyCode::Char(c)));
        }
        dispatcher.handle(&mut state, key(KeyCode::Enter));
        dispatcher.handle(&mut state, key(KeyCode::Enter));

        let controller = state.controller().unwrap();
        assert_eq!(controller.ui().search_query, "essay");
        assert_eq!(controller.nav().active(), Some(("Writing", "Essays")));

        dispatcher.handle(&mut state, key(KeyCode::Char('b')));
        assert!(state.controller().unwrap().nav().is_homepage());
    }

    #[test]
    fn test_unknown_target_surfaces_notification() {
        let (mut dispatcher, mut state) = loaded();

        dispatcher.handle(
            &mut state,
            Action::OpenSubCategory {
                category: "Writing".into(),
                sub_category: "Limericks".into(),
            },
        );

        let controller = state.controller().unwrap();
        assert!(controller.nav().is_homepage());
        let notification = controller.ui().notification.as_ref().expect("notification");
        assert_eq!(notification.level, NotificationLevel::Warning);
        assert!(notification.message.contains("Limericks"));
        assert_eq!(dispatcher.get_stats().navigation_errors, 1);
    }

    #[test]
    fn test_menu_captures_keys_until_closed() {
        let (mut dispatcher, mut state) = loaded();

        dispatcher.handle(&mut state, key(KeyCode::Char('m')));
        assert!(state.menu.expanded);

        dispatcher.handle(&mut state, key(KeyCode::Enter));
        assert!(state.controller().unwrap().nav().is_homepage());

        dispatcher.handle(&mut state, key(KeyCode::Esc));
        assert!(!state.menu.expanded);
    }
}
