//! State modules: key event model, action resolution, typeahead, and
//! viewport scrolling.

pub mod actions;
pub mod input;
pub mod keyboard;
pub mod scroll;
pub mod typeahead;

pub use actions::{resolve, Action};
pub use input::{convert_key_event, convert_modifiers};
pub use keyboard::{typeahead_char, KeyState, KeyboardEvent, Modifiers};
pub use scroll::{ScrollController, ScrollDirection, Viewport};
pub use typeahead::TypeaheadMatcher;
