//! # spark-select
//!
//! Headless interaction engine for an accessible single-select widget (the
//! listbox / combobox pattern).
//!
//! Given a stream of keyboard and pointer events and a registry of
//! selectable items, the engine decides what the widget's open state,
//! highlighted item, selected value, and scroll position should be. It
//! renders nothing: visual output, overlay mounting, and focus management
//! belong to the host layer, which consumes the computed state and the
//! side-effect requests (bring-into-view) the engine emits.
//!
//! ## Architecture
//!
//! State flows one way:
//! ```text
//! raw key event → action resolver → navigation engine
//!              → cursor / typeahead / open / value mutations
//!              → scroll-into-view requests → scroll controller → viewport
//! ```
//!
//! Everything is instance-scoped: a [`Select`] handle owns one widget's
//! state and is threaded explicitly to whoever needs it - there is no
//! ambient context to be "inside" of. Per-option [`OptionHandle`]s hold a
//! weak reference back and surface [`SelectError::ContextMissing`] when
//! used after teardown.
//!
//! ## Modules
//!
//! - [`types`] - Core types (ItemData, SelectConfig, SelectSnapshot)
//! - [`state`] - Key events, action resolution, typeahead, scrolling
//! - [`engine`] - Item registry and the select state machine
//! - [`error`] - Error taxonomy

pub mod engine;
pub mod error;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use engine::{
    Controllable, ItemRegistry, OptionHandle, Select, SelectCore, SelectProps,
};

pub use error::{Result, SelectError};

pub use state::{
    // Actions
    resolve, Action,
    // Keyboard
    convert_key_event, convert_modifiers, typeahead_char,
    KeyState, KeyboardEvent, Modifiers,
    // Scrolling
    ScrollController, ScrollDirection, Viewport,
    // Typeahead
    TypeaheadMatcher,
};
