//! src/controller/navigation.rs
//! ============================================================================
//! # NavigationController
//!
//! Owns the navigation state machine (`Homepage` / `Detail`), the search
//! toggle layered over the homepage, and the current region snapshots.
//! Constructed only once the catalog has loaded; the catalog is injected
//! and never mutated.
//!
//! Transitions:
//! - `Homepage -> Detail(c, s)`: sub-category link, search result, or
//!   "see all" (first sub-category of `c`)
//! - `Detail -> Detail(c2, s2)`: sidebar entry, re-rendered in place
//! - `Detail -> Homepage`: back
//!
//! The search query survives every transition.

use std::{sync::Arc, time::Duration};

use clipr::{Clipboard, ClipboardStats};
use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};
use tracing::{debug, info, instrument, warn};

use crate::config::SearchConfig;
use crate::controller::actions::Action;
use crate::error::AppError;
use crate::model::{
    catalog::Catalog,
    navigation::{NavigationState, RegionVisibility},
    ui_state::{DetailFocus, PromptKey, RedrawFlag, UIState},
};
use crate::operators::search_engine::SearchEngine;
use crate::view::{
    render::{render_detail_view, render_homepage, render_search_results},
    snapshots::{DetailSnapshot, HomeTarget, HomepageSnapshot, NavTarget, SearchSnapshot},
};

pub const COPY_FAILED_MESSAGE: &str = "Failed to copy text.";

pub struct NavigationController {
    catalog: Arc<Catalog>,
    engine: SearchEngine,
    preview_chars: usize,

    nav: NavigationState,
    ui: UIState,

    homepage: HomepageSnapshot,
    detail: Option<DetailSnapshot>,
    search: Option<SearchSnapshot>,

    clipboard: Clipboard,
    action_tx: UnboundedSender<Action>,
}

impl NavigationController {
    /// Build the controller and perform the initial homepage render.
    pub fn new(
        catalog: Arc<Catalog>,
        search: &SearchConfig,
        clipboard: Clipboard,
        copy_feedback: Duration,
        action_tx: UnboundedSender<Action>,
    ) -> Self {
        let homepage = render_homepage(&catalog);
        info!(
            marker = "HOMEPAGE_READY",
            operation_type = "navigation",
            cards = homepage.cards.len(),
            clipboard = clipboard.backend_name(),
            "Initial homepage rendered"
        );

        Self {
            engine: SearchEngine::new(Arc::clone(&catalog), search.min_query_chars),
            preview_chars: search.preview_chars,
            catalog,
            nav: NavigationState::Homepage,
            ui: UIState::new(copy_feedback),
            homepage,
            detail: None,
            search: None,
            clipboard,
            action_tx,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn clipboard_backend(&self) -> &'static str {
        self.clipboard.backend_name()
    }

    pub fn clipboard_stats(&self) -> ClipboardStats {
        self.clipboard.stats()
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn ui(&self) -> &UIState {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut UIState {
        &mut self.ui
    }

    pub fn homepage(&self) -> &HomepageSnapshot {
        &self.homepage
    }

    pub fn detail(&self) -> Option<&DetailSnapshot> {
        self.detail.as_ref()
    }

    /// Current search snapshot; `None` while the query is inactive
    pub fn search_results(&self) -> Option<&SearchSnapshot> {
        self.search.as_ref()
    }

    pub fn search_active(&self) -> bool {
        self.search.is_some()
    }

    pub fn regions(&self) -> RegionVisibility {
        RegionVisibility::compute(&self.nav, self.search_active())
    }

    /// Command dispatch for the named UI events this controller owns.
    pub fn handle(&mut self, action: Action) -> Result<(), AppError> {
        match action {
            Action::OpenSubCategory {
                category,
                sub_category,
            } => self.show_detail_view(&category, &sub_category),
            Action::SeeAll(category) => self.see_all(&category),
            Action::SidebarSelect {
                category,
                sub_category,
            } => self.select_sidebar(&category, &sub_category),
            Action::Back => {
                self.show_homepage();
                Ok(())
            }
            Action::FocusSearch => {
                self.set_search_focus(true);
                Ok(())
            }
            Action::BlurSearch => {
                self.set_search_focus(false);
                Ok(())
            }
            Action::SearchInput(c) => {
                let mut query = std::mem::take(&mut self.ui.search_query);
                query.push(c);
                self.set_search_query(query);
                Ok(())
            }
            Action::SearchBackspace => {
                let mut query = std::mem::take(&mut self.ui.search_query);
                query.pop();
                self.set_search_query(query);
                Ok(())
            }
            Action::SearchClear => {
                self.set_search_query(String::new());
                Ok(())
            }
            Action::MoveSelectionUp => {
                self.move_selection(-1);
                Ok(())
            }
            Action::MoveSelectionDown => {
                self.move_selection(1);
                Ok(())
            }
            Action::ToggleDetailFocus => {
                self.toggle_detail_focus();
                Ok(())
            }
            Action::ActivateSelected => self.activate_selected(),
            Action::CopySelected => self.copy_selected().map(|_| ()),
            Action::CopyFeedbackExpired(key) => {
                self.expire_copy_feedback(&key);
                Ok(())
            }
            Action::DismissAlert => {
                self.ui.dismiss_alert();
                Ok(())
            }
            other => {
                debug!("NavigationController ignoring {:?}", other);
                Ok(())
            }
        }
    }

    /// `Homepage -> Detail(c, s)` or, from the detail view, an in-place
    /// re-render. Resets the prompt display to the top.
    #[instrument(level = "debug", skip(self))]
    pub fn show_detail_view(&mut self, category: &str, sub_category: &str) -> Result<(), AppError> {
        let snapshot =
            render_detail_view(&self.catalog, category, sub_category, &self.ui.copy_feedback)?;

        let from_homepage = self.nav.is_homepage();
        self.nav = NavigationState::detail(category, sub_category);
        self.detail = Some(snapshot);
        self.ui.reset_detail_position();
        self.ui.search_focused = false;
        self.ui.request_redraw(RedrawFlag::All);

        info!(
            marker = "NAVIGATE_DETAIL",
            operation_type = "navigation",
            category,
            sub_category,
            from_homepage,
            "Showing detail view"
        );
        Ok(())
    }

    /// "See all" resolves to the first sub-category in catalog order
    pub fn see_all(&mut self, category: &str) -> Result<(), AppError> {
        let first = self.catalog.first_sub_category(category)?.to_string();
        self.show_detail_view(category, &first)
    }

    /// Sidebar navigation while in the detail view
    pub fn select_sidebar(&mut self, category: &str, sub_category: &str) -> Result<(), AppError> {
        self.show_detail_view(category, sub_category)?;
        if let Some(active) = self.detail.as_ref().and_then(|d| d.sidebar.active_index()) {
            self.ui.sidebar_selection = active;
        }
        Ok(())
    }

    /// `Detail -> Homepage`. The search query and its results stay as they
    /// were.
    pub fn show_homepage(&mut self) {
        if self.nav.is_homepage() {
            return;
        }
        self.nav = NavigationState::Homepage;
        self.detail = None;
        self.ui.request_redraw(RedrawFlag::All);
        info!(
            marker = "NAVIGATE_HOMEPAGE",
            operation_type = "navigation",
            "Back to homepage"
        );
    }

    pub fn set_search_focus(&mut self, focused: bool) {
        if !self.nav.is_homepage() {
            return;
        }
        self.ui.search_focused = focused;
        self.ui.request_redraw(RedrawFlag::Main);
    }

    /// Live search: below the threshold the card region comes back,
    /// otherwise the results region is rebuilt from scratch.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.ui.search_query = query.into();
        self.ui.search_selection = 0;

        if self.engine.is_active_query(&self.ui.search_query) {
            let results = self.engine.search(&self.ui.search_query);
            self.search = Some(render_search_results(&results, self.preview_chars));
        } else {
            self.search = None;
        }
        self.ui.request_redraw(RedrawFlag::Main);
    }

    fn toggle_detail_focus(&mut self) {
        let Some(detail) = &self.detail else {
            return;
        };
        self.ui.detail_focus = self.ui.detail_focus.toggled();
        if self.ui.detail_focus == DetailFocus::Sidebar {
            self.ui.sidebar_selection = detail.sidebar.active_index().unwrap_or(0);
        }
        self.ui.request_redraw(RedrawFlag::Main);
    }

    fn move_selection(&mut self, delta: isize) {
        let (selection, len) = match (&self.nav, &self.detail) {
            (NavigationState::Detail { .. }, Some(detail)) => match self.ui.detail_focus {
                DetailFocus::Prompts => (&mut self.ui.prompt_selection, detail.blocks.len()),
                DetailFocus::Sidebar => (
                    &mut self.ui.sidebar_selection,
                    detail.sidebar.entries().count(),
                ),
            },
            _ => match &self.search {
                Some(search) => (&mut self.ui.search_selection, search.len()),
                None => (
                    &mut self.ui.home_selection,
                    self.homepage.focus_targets().len(),
                ),
            },
        };

        if len == 0 {
            return;
        }
        *selection = selection.saturating_add_signed(delta).min(len - 1);
        self.ui.request_redraw(RedrawFlag::Main);
    }

    fn activate_selected(&mut self) -> Result<(), AppError> {
        if let Some(detail) = &self.detail {
            return match self.ui.detail_focus {
                DetailFocus::Prompts => self.copy_selected().map(|_| ()),
                DetailFocus::Sidebar => {
                    let Some(entry) = detail.sidebar.entries().nth(self.ui.sidebar_selection)
                    else {
                        return Ok(());
                    };
                    let NavTarget {
                        category,
                        sub_category,
                    } = entry.target.clone();
                    self.select_sidebar(&category, &sub_category)
                }
            };
        }

        if let Some(search) = &self.search {
            let Some(NavTarget {
                category,
                sub_category,
            }) = search.target(self.ui.search_selection).cloned()
            else {
                return Ok(());
            };
            return self.show_detail_view(&category, &sub_category);
        }

        match self.homepage.focus_targets().into_iter().nth(self.ui.home_selection) {
            Some(HomeTarget::Link(target)) => {
                self.show_detail_view(&target.category, &target.sub_category)
            }
            Some(HomeTarget::SeeAll(category)) => self.see_all(&category),
            None => Ok(()),
        }
    }

    fn copy_selected(&mut self) -> Result<bool, AppError> {
        let Some((category, sub_category)) = self.nav.active() else {
            return Ok(false);
        };
        let key = PromptKey::new(category, sub_category, self.ui.prompt_selection);
        self.copy_prompt(key)
    }

    /// Copy one prompt's content. On success the control shows "Copied!"
    /// and is disabled until its revert timer fires; on failure a blocking
    /// alert is raised and the control is left as it was. Returns whether
    /// text reached the clipboard.
    #[instrument(level = "debug", skip(self))]
    pub fn copy_prompt(&mut self, key: PromptKey) -> Result<bool, AppError> {
        if self.ui.copy_feedback.is_disabled(&key) {
            debug!("Copy control still disabled, ignoring");
            return Ok(false);
        }

        let content = self
            .catalog
            .prompt(&key.category, &key.sub_category, key.index)?
            .content
            .clone();

        match self.clipboard.copy_text(&content) {
            Ok(()) => {
                self.ui.copy_feedback.begin(key.clone());
                schedule_copy_revert(
                    self.action_tx.clone(),
                    key,
                    self.ui.copy_feedback.duration(),
                );
                self.refresh_detail()?;
                Ok(true)
            }
            Err(e) => {
                warn!(
                    marker = "COPY_FAILED",
                    operation_type = "clipboard",
                    error = %e,
                    "Failed to copy text"
                );
                self.ui.show_alert(COPY_FAILED_MESSAGE);
                Ok(false)
            }
        }
    }

    pub fn expire_copy_feedback(&mut self, key: &PromptKey) {
        if !self.ui.copy_feedback.revert(key) {
            return;
        }
        let showing = self
            .nav
            .active()
            .is_some_and(|(c, s)| c == key.category && s == key.sub_category);
        if showing {
            // Target was valid when the copy started and the catalog is immutable.
            if let Err(e) = self.refresh_detail() {
                warn!("Failed to refresh detail view after copy revert: {}", e);
            }
        }
    }

    fn refresh_detail(&mut self) -> Result<(), AppError> {
        if let Some((category, sub_category)) = self.nav.active() {
            self.detail = Some(render_detail_view(
                &self.catalog,
                category,
                sub_category,
                &self.ui.copy_feedback,
            )?);
            self.ui.request_redraw(RedrawFlag::Main);
        }
        Ok(())
    }
}

/// Fire [`Action::CopyFeedbackExpired`] after `duration`
pub fn schedule_copy_revert(
    action_tx: UnboundedSender<Action>,
    key: PromptKey,
    duration: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(duration).await;
        let _ = action_tx.send(Action::CopyFeedbackExpired(key));
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::fixtures::sample_catalog;
    use clipr::{ClipError, MemoryClipboard, COPIED_LABEL, COPY_LABEL};
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    fn controller_with(clipboard: Clipboard) -> (NavigationController, UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = NavigationController::new(
            Arc::new(sample_catalog()),
            &SearchConfig::default(),
            clipboard,
            Duration::from_millis(2000),
            tx,
        );
        (controller, rx)
    }

    fn controller() -> NavigationController {
        controller_with(Clipboard::default()).0
    }

    #[test]
    fn test_initial_state_is_homepage_with_cards() {
        let controller = controller();

        assert!(controller.nav().is_homepage());
        assert_eq!(controller.homepage().cards.len(), 2);
        let regions = controller.regions();
        assert!(regions.homepage && regions.category_cards);
        assert!(!regions.detail && !regions.search_results);
    }

    #[test]
    fn test_see_all_opens_first_sub_category() {
        let mut controller = controller();

        controller.handle(Action::SeeAll("Writing".into())).unwrap();

        assert_eq!(controller.nav(), &NavigationState::detail("Writing", "Essays"));
        assert!(controller.regions().detail);
        assert!(!controller.regions().homepage);
    }

    #[test]
    fn test_sidebar_rerenders_in_place() {
        let mut controller = controller();
        controller.show_detail_view("Writing", "Essays").unwrap();
        controller.ui_mut().prompt_selection = 1;

        controller
            .handle(Action::SidebarSelect {
                category: "Coding".into(),
                sub_category: "Rust".into(),
            })
            .unwrap();

        let detail = controller.detail().unwrap();
        assert_eq!(detail.heading, "Gemini Prompts for Rust");
        assert_eq!(detail.blocks.len(), 1);
        assert_eq!(controller.ui().prompt_selection, 0);
        assert_eq!(controller.ui().sidebar_selection, 2);
    }

    #[test]
    fn test_back_returns_home_and_keeps_search() {
        let mut controller = controller();
        controller.set_search_query("essay");
        controller.show_detail_view("Writing", "Essays").unwrap();

        controller.handle(Action::Back).unwrap();

        assert!(controller.nav().is_homepage());
        assert_eq!(controller.ui().search_query, "essay");
        assert!(controller.regions().search_results);
    }

    #[test]
    fn test_unknown_target_is_checked_and_state_unchanged() {
        let mut controller = controller();

        let err = controller.handle(Action::SeeAll("Cooking".into())).unwrap_err();

        assert!(matches!(err, AppError::UnknownCategory(_)));
        assert!(controller.nav().is_homepage());
        assert!(controller.detail().is_none());
    }

    #[test]
    fn test_short_query_restores_cards() {
        let mut controller = controller();

        controller.set_search_query("essay");
        assert!(controller.regions().search_results);

        controller.handle(Action::SearchBackspace).unwrap();
        controller.set_search_query("e");
        assert!(controller.search_results().is_none());
        assert!(controller.regions().category_cards);
        assert!(!controller.regions().search_results);
    }

    #[test]
    fn test_no_match_shows_no_results_and_hides_cards() {
        let mut controller = controller();

        controller.set_search_query("zzzzz");

        assert_eq!(
            controller.search_results(),
            Some(&SearchSnapshot::NoResults {
                message: "No prompts found."
            })
        );
        assert!(!controller.regions().category_cards);
    }

    #[test]
    fn test_typing_builds_query_live() {
        let mut controller = controller();
        controller.handle(Action::FocusSearch).unwrap();

        for c in "ess".chars() {
            controller.handle(Action::SearchInput(c)).unwrap();
        }

        assert_eq!(controller.ui().search_query, "ess");
        assert_eq!(controller.search_results().map(SearchSnapshot::len), Some(1));
    }

    #[test]
    fn test_activate_search_result_navigates() {
        let mut controller = controller();
        controller.set_search_query("haiku");

        controller.handle(Action::ActivateSelected).unwrap();

        assert_eq!(controller.nav(), &NavigationState::detail("Writing", "Poems"));
    }

    #[test]
    fn test_homepage_cursor_reaches_see_all() {
        let mut controller = controller();

        // Essays, Poems, See all
        controller.handle(Action::MoveSelectionDown).unwrap();
        controller.handle(Action::MoveSelectionDown).unwrap();
        controller.handle(Action::ActivateSelected).unwrap();

        assert_eq!(controller.nav(), &NavigationState::detail("Writing", "Essays"));
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut controller = controller();
        controller.show_detail_view("Writing", "Essays").unwrap();

        for _ in 0..5 {
            controller.handle(Action::MoveSelectionDown).unwrap();
        }
        assert_eq!(controller.ui().prompt_selection, 1);

        for _ in 0..5 {
            controller.handle(Action::MoveSelectionUp).unwrap();
        }
        assert_eq!(controller.ui().prompt_selection, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_feedback_reverts_after_interval() {
        let memory = MemoryClipboard::new();
        let (mut controller, mut rx) = controller_with(Clipboard::new(Box::new(memory.clone())));
        controller.show_detail_view("Writing", "Essays").unwrap();

        controller.handle(Action::CopySelected).unwrap();

        assert_eq!(memory.contents().as_deref(), Some("Write an essay about X"));
        let copy = &controller.detail().unwrap().blocks[0].copy;
        assert_eq!(copy.label, COPIED_LABEL);
        assert!(copy.disabled);

        // Still disabled: a second copy is ignored
        assert!(!controller.copy_prompt(PromptKey::new("Writing", "Essays", 0)).unwrap());

        let started = tokio::time::Instant::now();
        let Some(Action::CopyFeedbackExpired(key)) = rx.recv().await else {
            panic!("expected revert action");
        };
        assert!(started.elapsed() >= Duration::from_millis(2000));

        controller.handle(Action::CopyFeedbackExpired(key)).unwrap();
        let copy = &controller.detail().unwrap().blocks[0].copy;
        assert_eq!(copy.label, COPY_LABEL);
        assert!(!copy.disabled);
        assert_eq!(controller.clipboard_stats().copies, 1);
    }

    #[tokio::test]
    async fn test_copy_failure_raises_alert_and_leaves_control() {
        let failing = MemoryClipboard::failing(ClipError::unavailable("no display"));
        let (mut controller, _rx) = controller_with(Clipboard::new(Box::new(failing)));
        controller.show_detail_view("Writing", "Essays").unwrap();

        controller.handle(Action::CopySelected).unwrap();

        assert_eq!(
            controller.ui().alert.as_ref().map(|a| a.message.as_str()),
            Some(COPY_FAILED_MESSAGE)
        );
        let copy = &controller.detail().unwrap().blocks[0].copy;
        assert_eq!(copy.label, COPY_LABEL);
        assert!(!copy.disabled);

        controller.handle(Action::DismissAlert).unwrap();
        assert!(controller.ui().alert.is_none());
        assert_eq!(controller.clipboard_stats().failures, 1);
    }
}
