//! Typeahead Matcher - Resolve typed characters to item positions
//!
//! Accumulates printable keystrokes into a query buffer and resolves it
//! against the item registry: case-insensitive prefix match over each item's
//! display text, searched in registration order starting just after the
//! cursor and wrapping around. When the accumulated buffer matches nothing,
//! the matcher retries with only the most recent character, so fast
//! re-presses of one letter cycle through the items sharing that initial.
//!
//! The buffer expires after an idle window. Expiry is checked lazily against
//! the previous keystroke's timestamp, so no scheduled callback exists to
//! outlive the widget.

use std::time::{Duration, Instant};

use crate::engine::ItemRegistry;

// =============================================================================
// MATCHER
// =============================================================================

#[derive(Debug)]
pub struct TypeaheadMatcher {
    query: String,
    last_keystroke: Option<Instant>,
    timeout: Duration,
}

impl TypeaheadMatcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            query: String::new(),
            last_keystroke: None,
            timeout,
        }
    }

    /// The in-progress query buffer; empty when idle.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Discard the buffer, e.g. when the widget closes.
    pub fn clear(&mut self) {
        self.query.clear();
        self.last_keystroke = None;
    }

    /// Feed one character and resolve it to an item position.
    ///
    /// `cursor` is the currently highlighted position (`-1` for none); the
    /// search starts just after it and wraps. Returns the matched position,
    /// or `None` when nothing matches (the buffer still accumulates until
    /// the idle window expires).
    pub fn push(&mut self, ch: char, cursor: i32, registry: &ItemRegistry) -> Option<usize> {
        let now = Instant::now();
        if let Some(last) = self.last_keystroke {
            if now.duration_since(last) > self.timeout {
                self.query.clear();
            }
        }
        self.last_keystroke = Some(now);
        self.query.push(ch);

        if let Some(pos) = find_from(registry, cursor, &self.query) {
            return Some(pos);
        }

        // No match for the accumulated buffer: retry with just the latest
        // character, which becomes the new buffer either way.
        if self.query.chars().count() > 1 {
            self.query = ch.to_string();
            return find_from(registry, cursor, &self.query);
        }
        None
    }
}

/// First item whose display text starts with `prefix` (case-insensitive),
/// searching in registration order from just after `cursor` with wrap.
fn find_from(registry: &ItemRegistry, cursor: i32, prefix: &str) -> Option<usize> {
    let len = registry.len();
    if len == 0 {
        return None;
    }
    let prefix = prefix.to_lowercase();
    let start = (cursor + 1).max(0) as usize;

    (0..len)
        .map(|offset| (start + offset) % len)
        .find(|&pos| {
            registry
                .get(pos)
                .is_some_and(|item| item.text_value.to_lowercase().starts_with(&prefix))
        })
}

// =============================================================================
// TESTS
// =============================================================================
