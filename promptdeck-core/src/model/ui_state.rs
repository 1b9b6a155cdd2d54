//! UI state for the loaded catalog: search input, selections, copy
//! feedback, notifications and the blocking alert.

use std::time::{Duration, Instant};

use clipr::CopyFeedback;
use compact_str::CompactString;

/// Redraw flags for partial UI updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RedrawFlag {
    Main = 1,
    StatusBar = 2,
    Overlay = 4,
    All = 7,
}

impl RedrawFlag {
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Positional identity of a prompt
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PromptKey {
    pub category: String,
    pub sub_category: String,
    pub index: usize,
}

impl PromptKey {
    pub fn new(category: impl Into<String>, sub_category: impl Into<String>, index: usize) -> Self {
        Self {
            category: category.into(),
            sub_category: sub_category.into(),
            index,
        }
    }
}

/// Focus inside the detail view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailFocus {
    #[default]
    Prompts,
    Sidebar,
}

impl DetailFocus {
    pub fn toggled(self) -> Self {
        match self {
            Self::Prompts => Self::Sidebar,
            Self::Sidebar => Self::Prompts,
        }
    }
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NotificationLevel {
    Warning = 0,
    Error = 1,
}

/// Compact notification with timestamp
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: CompactString,
    pub level: NotificationLevel,
    pub timestamp: Instant,
    pub auto_dismiss_ms: Option<u32>,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        self.auto_dismiss_ms.is_some_and(|ms| {
            now.saturating_duration_since(self.timestamp) >= Duration::from_millis(ms.into())
        })
    }
}

/// Modal message that swallows all input until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: CompactString,
}

#[derive(Debug)]
pub struct UIState {
    redraw_flags: u8,

    pub search_query: String,
    pub search_focused: bool,

    /// Cursor over homepage card links and see-all actions
    pub home_selection: usize,
    /// Cursor over search result previews
    pub search_selection: usize,

    pub detail_focus: DetailFocus,
    /// Selected prompt block; also the first block drawn, so resetting it
    /// scrolls the prompt display to the top
    pub prompt_selection: usize,
    pub sidebar_selection: usize,

    pub copy_feedback: CopyFeedback<PromptKey>,

    pub notification: Option<Notification>,
    pub alert: Option<Alert>,
}

impl UIState {
    pub fn new(copy_feedback_duration: Duration) -> Self {
        Self {
            redraw_flags: RedrawFlag::All.bits(),
            search_query: String::new(),
            search_focused: false,
            home_selection: 0,
            search_selection: 0,
            detail_focus: DetailFocus::Prompts,
            prompt_selection: 0,
            sidebar_selection: 0,
            copy_feedback: CopyFeedback::new(copy_feedback_duration),
            notification: None,
            alert: None,
        }
    }

    #[inline]
    pub fn request_redraw(&mut self, flag: RedrawFlag) {
        self.redraw_flags |= flag.bits();
    }

    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.redraw_flags != 0
    }

    #[inline]
    pub fn clear_redraw(&mut self) {
        self.redraw_flags = 0;
    }

    pub fn show_notification(&mut self, message: impl Into<CompactString>, level: NotificationLevel) {
        self.notification = Some(Notification {
            message: message.into(),
            level,
            timestamp: Instant::now(),
            auto_dismiss_ms: Some(3000),
        });
        self.request_redraw(RedrawFlag::Overlay);
    }

    pub fn show_warning(&mut self, message: impl Into<CompactString>) {
        self.show_notification(message, NotificationLevel::Warning);
    }

    pub fn show_error(&mut self, message: impl Into<CompactString>) {
        self.show_notification(message, NotificationLevel::Error);
    }

    pub fn show_alert(&mut self, message: impl Into<CompactString>) {
        self.alert = Some(Alert {
            message: message.into(),
        });
        self.request_redraw(RedrawFlag::Overlay);
    }

    pub fn dismiss_alert(&mut self) -> bool {
        let had_alert = self.alert.take().is_some();
        if had_alert {
            self.request_redraw(RedrawFlag::All);
        }
        had_alert
    }

    /// Drop an expired notification; returns whether something changed
    pub fn expire_notification(&mut self, now: Instant) -> bool {
        if self.notification.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notification = None;
            self.request_redraw(RedrawFlag::All);
            true
        } else {
            false
        }
    }

    /// Reset the detail view to its top, used on every detail render
    pub fn reset_detail_position(&mut self) {
        self.prompt_selection = 0;
        self.detail_focus = DetailFocus::Prompts;
    }
}

impl Default for UIState {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}
