//! src/controller/key_map.rs
//! ============================================================================
//! # Key mapping
//!
//! Turns raw crossterm key events into named [`Action`]s. The mapping
//! depends on where input currently lands, so callers describe that with a
//! [`KeyContext`] first.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::controller::actions::Action;

/// Where a key press is routed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Catalog still loading, or the load failed
    Loading,
    /// A blocking alert is up
    Alert,
    /// The menu panel is open
    Menu,
    SearchInput,
    Homepage,
    Detail,
}

/// Map `key` in `context` to an action, or `None` when the key is unbound
pub fn map_key(key: KeyEvent, context: KeyContext) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl(&key, 'c') {
        return Some(Action::Quit);
    }

    match context {
        KeyContext::Alert => Some(Action::DismissAlert),
        KeyContext::SearchInput => map_search_input(key),
        _ if key.code == KeyCode::Char('q') && no_modifiers(&key) => Some(Action::Quit),
        KeyContext::Loading => None,
        KeyContext::Menu => match key.code {
            KeyCode::Char('m') | KeyCode::Esc => Some(Action::ToggleMenu),
            _ => None,
        },
        KeyContext::Homepage => map_homepage(key),
        KeyContext::Detail => map_detail(key),
    }
}

fn map_search_input(key: KeyEvent) -> Option<Action> {
    if is_ctrl(&key, 'u') {
        return Some(Action::SearchClear);
    }

    match key.code {
        KeyCode::Esc | KeyCode::Enter => Some(Action::BlurSearch),
        KeyCode::Backspace => Some(Action::SearchBackspace),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Action::SearchInput(c))
        }
        _ => None,
    }
}

fn map_homepage(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveSelectionUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveSelectionDown),
        KeyCode::Enter => Some(Action::ActivateSelected),
        KeyCode::Char('/') => Some(Action::FocusSearch),
        KeyCode::Char('m') => Some(Action::ToggleMenu),
        _ => None,
    }
}

fn map_detail(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveSelectionUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveSelectionDown),
        KeyCode::Enter => Some(Action::ActivateSelected),
        KeyCode::Char('c') => Some(Action::CopySelected),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::ToggleDetailFocus),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(Action::Back),
        KeyCode::Char('m') => Some(Action::ToggleMenu),
        _ => None,
    }
}

#[inline]
fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

#[inline]
fn no_modifiers(key: &KeyEvent) -> bool {
    key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_quit_everywhere_but_search_input() {
        assert!(matches!(
            map_key(press(KeyCode::Char('q')), KeyContext::Homepage),
            Some(Action::Quit)
        ));
        assert!(matches!(
            map_key(press(KeyCode::Char('q')), KeyContext::Loading),
            Some(Action::Quit)
        ));
        assert!(matches!(
            map_key(press(KeyCode::Char('q')), KeyContext::SearchInput),
            Some(Action::SearchInput('q'))
        ));
        assert!(matches!(
            map_key(ctrl('c'), KeyContext::SearchInput),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn test_any_key_dismisses_alert() {
        for code in [KeyCode::Enter, KeyCode::Char('x'), KeyCode::Esc] {
            assert!(matches!(
                map_key(press(code), KeyContext::Alert),
                Some(Action::DismissAlert)
            ));
        }
    }

    #[test]
    fn test_search_input_editing() {
        assert!(matches!(
            map_key(press(KeyCode::Backspace), KeyContext::SearchInput),
            Some(Action::SearchBackspace)
        ));
        assert!(matches!(
            map_key(ctrl('u'), KeyContext::SearchInput),
            Some(Action::SearchClear)
        ));
        assert!(matches!(
            map_key(press(KeyCode::Esc), KeyContext::SearchInput),
            Some(Action::BlurSearch)
        ));
        assert!(matches!(
            map_key(
                KeyEvent::new(KeyCode::Char('E'), KeyModifiers::SHIFT),
                KeyContext::SearchInput
            ),
            Some(Action::SearchInput('E'))
        ));
    }

    #[test]
    fn test_detail_bindings() {
        assert!(matches!(
            map_key(press(KeyCode::Char('c')), KeyContext::Detail),
            Some(Action::CopySelected)
        ));
        assert!(matches!(
            map_key(press(KeyCode::Char('b')), KeyContext::Detail),
            Some(Action::Back)
        ));
        assert!(matches!(
            map_key(press(KeyCode::Tab), KeyContext::Detail),
            Some(Action::ToggleDetailFocus)
        ));
        // Homepage has no copy binding
        assert!(map_key(press(KeyCode::Char('c')), KeyContext::Homepage).is_none());
    }

    #[test]
    fn test_loading_ignores_navigation() {
        assert!(map_key(press(KeyCode::Down), KeyContext::Loading).is_none());
        assert!(map_key(press(KeyCode::Char('/')), KeyContext::Loading).is_none());
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert!(map_key(key, KeyContext::Homepage).is_none());
    }
}
