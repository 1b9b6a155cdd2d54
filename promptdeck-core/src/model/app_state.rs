// promptdeck-core/src/model/app_state.rs
// Application-level state: load phase, menu panel, redraw bookkeeping

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

use crate::config::Config;
use crate::controller::{actions::Action, key_map::KeyContext, navigation::NavigationController};
use crate::model::ui_state::RedrawFlag;

/// Lifecycle of the one-shot catalog load
pub enum LoadPhase {
    Loading,
    /// Terminal for the session; `detail` is only logged
    Failed { detail: String },
    Ready(Box<NavigationController>),
}

impl LoadPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl std::fmt::Debug for LoadPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => f.write_str("Loading"),
            Self::Failed { detail } => f.debug_struct("Failed").field("detail", detail).finish(),
            Self::Ready(controller) => f
                .debug_tuple("Ready")
                .field(&controller.nav())
                .finish(),
        }
    }
}

/// Menu toggle; `expanded` mirrors whether the panel is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub expanded: bool,
}

impl MenuState {
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }
}

pub struct AppState {
    pub config: Arc<Config>,
    pub phase: LoadPhase,
    pub menu: MenuState,
    pub action_tx: UnboundedSender<Action>,
    pub started_at: Instant,
    redraw: u8,
}

impl AppState {
    pub fn new(config: Arc<Config>, action_tx: UnboundedSender<Action>) -> Self {
        info!(
            catalog_source = %config.catalog_source,
            "AppState created"
        );
        Self {
            config,
            phase: LoadPhase::Loading,
            menu: MenuState::default(),
            action_tx,
            started_at: Instant::now(),
            redraw: RedrawFlag::All.bits(),
        }
    }

    pub fn controller(&self) -> Option<&NavigationController> {
        match &self.phase {
            LoadPhase::Ready(controller) => Some(&**controller),
            _ => None,
        }
    }

    pub fn controller_mut(&mut self) -> Option<&mut NavigationController> {
        match &mut self.phase {
            LoadPhase::Ready(controller) => Some(&mut **controller),
            _ => None,
        }
    }

    pub fn set_phase(&mut self, phase: LoadPhase) {
        debug!(?phase, "Load phase changed");
        self.phase = phase;
        self.request_redraw(RedrawFlag::All);
    }

    pub fn toggle_menu(&mut self) -> bool {
        let expanded = self.menu.toggle();
        self.request_redraw(RedrawFlag::All);
        expanded
    }

    /// Routing context for the next key press
    pub fn key_context(&self) -> KeyContext {
        let Some(controller) = self.controller() else {
            return KeyContext::Loading;
        };

        if controller.ui().alert.is_some() {
            KeyContext::Alert
        } else if self.menu.expanded {
            KeyContext::Menu
        } else if controller.nav().is_detail() {
            KeyContext::Detail
        } else if controller.ui().search_focused {
            KeyContext::SearchInput
        } else {
            KeyContext::Homepage
        }
    }

    #[inline]
    pub fn request_redraw(&mut self, flag: RedrawFlag) {
        self.redraw |= flag.bits();
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw != 0 || self.controller().is_some_and(|c| c.ui().needs_redraw())
    }

    pub fn clear_redraw(&mut self) {
        self.redraw = 0;
        if let Some(controller) = self.controller_mut() {
            controller.ui_mut().clear_redraw();
        }
    }
}
