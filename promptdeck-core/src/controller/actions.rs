//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Named UI Events
//!
//! Every terminal event and internal notification is turned into one of
//! these before anything changes. Handlers never look at raw key codes.

use std::sync::Arc;

use crossterm::event::KeyEvent;

use crate::error::AppError;
use crate::model::catalog::Catalog;
use crate::model::ui_state::PromptKey;

#[derive(Debug)]
pub enum Action {
    /// Outcome of the one-shot catalog load.
    CatalogLoaded(Result<Arc<Catalog>, AppError>),

    /// Activate whichever element currently has focus.
    ActivateSelected,

    /// Leave the detail view.
    Back,

    /// Put the search input out of focus, keeping its query.
    BlurSearch,

    /// Revert a copy control once its feedback interval is over.
    CopyFeedbackExpired(PromptKey),

    /// Copy the selected prompt in the detail view.
    CopySelected,

    /// Dismiss the blocking alert.
    DismissAlert,

    /// Give the search input focus.
    FocusSearch,

    /// A raw keyboard event, mapped later against the current context.
    Key(KeyEvent),

    /// Move selection down.
    MoveSelectionDown,

    /// Move selection up.
    MoveSelectionUp,

    /// No operation. Used when an event is consumed but no state change is needed.
    NoOp,

    /// Navigate to a sub-category (homepage link or search result).
    OpenSubCategory {
        category: String,
        sub_category: String,
    },

    /// Quit the application.
    Quit,

    /// A terminal resize event.
    Resize(u16, u16),

    /// Remove the last character of the query.
    SearchBackspace,

    /// Clear the whole query.
    SearchClear,

    /// Append a character to the query.
    SearchInput(char),

    /// Navigate to a category's first sub-category.
    SeeAll(String),

    /// Re-render the detail view for another sidebar entry.
    SidebarSelect {
        category: String,
        sub_category: String,
    },

    /// An internal tick event for periodic updates.
    Tick,

    /// Switch focus between prompt list and sidebar.
    ToggleDetailFocus,

    /// Open or close the menu panel.
    ToggleMenu,
}
