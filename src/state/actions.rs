//! Action Resolver - Key names to symbolic widget actions
//!
//! Pure mapping from (key, open state, alt modifier) to the symbolic action
//! the navigation engine executes. Decoupling the resolution from the state
//! mutation keeps the keymap testable in isolation and lets hosts log or
//! replay user intents.

use super::keyboard::typeahead_char;

// =============================================================================
// ACTION ENUM
// =============================================================================

/// Symbolic actions dispatched to the navigation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No action to take; the key is not ours.
    None,
    /// Open the list without highlighting anything.
    Open,
    /// Open the list with the first item highlighted.
    OpenFirst,
    /// Open the list with the currently selected value highlighted.
    OpenCurrent,
    /// Open the list with the last item highlighted.
    OpenLast,
    /// Open the list and seed the typeahead with the pressed character.
    OpenWithTypeahead,
    /// Commit the highlighted item and close.
    Select,
    /// Move the highlight up one item.
    Previous,
    /// Move the highlight down one item.
    Next,
    /// Highlight the first item.
    First,
    /// Highlight the last item.
    Last,
    /// Jump the highlight up a page.
    PageUp,
    /// Jump the highlight down a page.
    PageDown,
    /// Feed the pressed character to the typeahead matcher.
    Typeahead,
    /// Close without committing.
    Close,
    /// Commit the highlighted item (if any) and close; used for dismissal
    /// keys that should not discard a highlight (Tab, Alt+ArrowUp).
    CloseSelect,
}

impl Action {
    /// Whether the host should suppress the key's default platform behavior.
    ///
    /// Every action the widget acts on claims the key; only `None` lets it
    /// propagate.
    pub fn prevents_default(self) -> bool {
        self != Action::None
    }
}

// =============================================================================
// RESOLUTION
// =============================================================================

/// Resolve a key press to an [`Action`].
///
/// Pure and side-effect free: the same inputs always yield the same action.
/// `is_open` selects between the closed-state keymap (every action opens or
/// is `None`) and the open-state keymap (navigation and dismissal).
pub fn resolve(key: &str, is_open: bool, alt: bool) -> Action {
    if is_open {
        resolve_open(key, alt)
    } else {
        resolve_closed(key, alt)
    }
}

fn resolve_closed(key: &str, alt: bool) -> Action {
    match key {
        "Enter" | " " | "ArrowDown" => Action::Open,
        "ArrowUp" => {
            if alt {
                Action::Open
            } else {
                Action::OpenFirst
            }
        }
        "Home" => Action::OpenFirst,
        "End" => Action::OpenLast,
        _ => {
            if typeahead_char(key).is_some() {
                Action::OpenWithTypeahead
            } else {
                Action::None
            }
        }
    }
}

fn resolve_open(key: &str, alt: bool) -> Action {
    match key {
        "ArrowUp" => {
            if alt {
                Action::CloseSelect
            } else {
                Action::Previous
            }
        }
        "ArrowDown" => Action::Next,
        "Enter" | " " => Action::Select,
        "Tab" => Action::CloseSelect,
        "Escape" => Action::Close,
        "PageUp" => Action::PageUp,
        "PageDown" => Action::PageDown,
        "Home" => Action::First,
        "End" => Action::Last,
        _ => {
            if typeahead_char(key).is_some() {
                Action::Typeahead
            } else {
                Action::None
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
