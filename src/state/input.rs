//! Input Module - Crossterm event conversion
//!
//! Bridges crossterm's key events to the engine's keyboard model. Hosts
//! poll crossterm themselves and hand each key event through
//! [`convert_key_event`] before feeding the widget's `key_down` entry point.
//!
//! # Example
//!
//! ```ignore
//! use spark_select::state::input::convert_key_event;
//!
//! if let Event::Key(key) = crossterm::event::read()? {
//!     let event = convert_key_event(key);
//!     if event.is_press() {
//!         select.key_down(&event);
//!     }
//! }
//! ```

use crossterm::event::{KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers};

use super::keyboard::{KeyState, KeyboardEvent, Modifiers};

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert a crossterm KeyEvent to the engine's KeyboardEvent.
///
/// Key names follow the DOM convention ("ArrowDown", "Enter", " ") so the
/// action resolver sees the same vocabulary regardless of the event source.
/// Keys the widget never consumes map to an empty name and resolve to no
/// action.
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => String::new(),
    };

    let state = match event.kind {
        KeyEventKind::Press => KeyState::Press,
        KeyEventKind::Repeat => KeyState::Repeat,
        KeyEventKind::Release => KeyState::Release,
    };

    let mut modifiers = convert_modifiers(event.modifiers);
    // Shift+Tab arrives as BackTab without the modifier flag on some
    // terminals; normalize it.
    if event.code == KeyCode::BackTab {
        modifiers.shift = true;
    }

    KeyboardEvent {
        key,
        modifiers,
        state,
    }
}

/// Convert crossterm modifier flags to our Modifiers.
pub fn convert_modifiers(modifiers: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: modifiers.contains(KeyModifiers::CONTROL),
        alt: modifiers.contains(KeyModifiers::ALT),
        shift: modifiers.contains(KeyModifiers::SHIFT),
        meta: modifiers.contains(KeyModifiers::SUPER),
    }
}

// =============================================================================
// TESTS
// =============================================================================
