//! Keyboard Module - Key event model
//!
//! The event shape the engine consumes: a DOM-style key name plus modifier
//! flags. The host layer produces these (see [`crate::state::input`] for the
//! crossterm bridge) and feeds them to a single per-widget
//! `key_down` entry point; there is no global handler registry.
//!
//! # Example
//!
//! ```ignore
//! use spark_select::state::keyboard::{KeyboardEvent, Modifiers};
//!
//! let plain = KeyboardEvent::new("ArrowDown");
//! let alt_up = KeyboardEvent::with_modifiers("ArrowUp", Modifiers::alt());
//! ```

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    /// Create modifiers with alt
    pub fn alt() -> Self {
        Self { alt: true, ..Self::default() }
    }

    /// Create modifiers with shift
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Enter", "ArrowUp")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Check if this event should drive the widget.
    ///
    /// Press and Repeat both count (a held ArrowDown keeps moving the
    /// cursor); Release never does.
    pub fn is_press(&self) -> bool {
        self.state != KeyState::Release
    }
}

// =============================================================================
// PRINTABLE KEY CLASSIFICATION
// =============================================================================

/// Extract the typeahead character from a key name, if any.
///
/// A key participates in typeahead when it is a single printable character:
/// letters, digits, or space. Named keys ("Enter", "ArrowUp", "F1") and
/// multi-codepoint input never match.
pub fn typeahead_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if ch.is_ascii_alphanumeric() || ch == ' ' {
        Some(ch)
    } else {
        None
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_constructors() {
        let event = KeyboardEvent::new("Enter");
        assert_eq!(event.key, "Enter");
        assert_eq!(event.modifiers, Modifiers::none());
        assert_eq!(event.state, KeyState::Press);

        let event = KeyboardEvent::with_modifiers("ArrowUp", Modifiers::alt());
        assert!(event.modifiers.alt);
        assert!(!event.modifiers.ctrl);
    }

    #[test]
    fn test_is_press() {
        let mut event = KeyboardEvent::new("a");
        assert!(event.is_press());

        event.state = KeyState::Repeat;
        assert!(event.is_press());

        event.state = KeyState::Release;
        assert!(!event.is_press());
    }

    #[test]
    fn test_typeahead_char_printable() {
        assert_eq!(typeahead_char("a"), Some('a'));
        assert_eq!(typeahead_char("Z"), Some('Z'));
        assert_eq!(typeahead_char("7"), Some('7'));
        assert_eq!(typeahead_char(" "), Some(' '));
    }

    #[test]
    fn test_typeahead_char_named_keys() {
        assert_eq!(typeahead_char("Enter"), None);
        assert_eq!(typeahead_char("ArrowDown"), None);
        assert_eq!(typeahead_char("F1"), None);
        assert_eq!(typeahead_char(""), None);
    }

    #[test]
    fn test_typeahead_char_non_ascii() {
        assert_eq!(typeahead_char("é"), None);
        assert_eq!(typeahead_char("-"), None);
        assert_eq!(typeahead_char("."), None);
    }
}
