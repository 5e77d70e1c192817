//! Navigation Engine - The select state machine
//!
//! Orchestrates everything: resolved actions drive the cursor, the typeahead
//! matcher, and the open/value state, and every cursor move emits a
//! bring-into-view request for the host's scroll controller.
//!
//! There is no ambient context: state lives in a [`SelectCore`] constructed
//! per widget, and everything that needs it holds a handle. [`Select`] is
//! the shared-ownership wrapper hosts keep; [`OptionHandle`] is the weak
//! per-option view used to report hover and click, which fails with
//! [`SelectError::ContextMissing`] once the widget is gone.
//!
//! # Example
//!
//! ```ignore
//! use spark_select::engine::Select;
//! use spark_select::state::keyboard::KeyboardEvent;
//!
//! let select = Select::new();
//! let apple = select.register_option("apple", Some("Apple".into()), None);
//!
//! select.key_down(&KeyboardEvent::new("ArrowDown")); // opens
//! select.key_down(&KeyboardEvent::new("ArrowDown")); // highlights Apple
//! select.key_down(&KeyboardEvent::new("Enter"));     // commits + closes
//! assert_eq!(select.snapshot().value, "apple");
//! ```

pub mod registry;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub use registry::ItemRegistry;

use crate::error::{Result, SelectError};
use crate::state::actions::{resolve, Action};
use crate::state::keyboard::{typeahead_char, KeyboardEvent};
use crate::state::typeahead::TypeaheadMatcher;
use crate::types::{SelectConfig, SelectSnapshot, NO_CURSOR};

// =============================================================================
// Controllable State
// =============================================================================

/// Change notification callback.
pub type ChangeCallback<T> = Box<dyn Fn(&T)>;

/// A state cell that is either owned by the widget (uncontrolled) or by the
/// host (controlled).
///
/// The engine never assumes ownership: it computes the next value and hands
/// it to [`set`](Controllable::set), which always notifies the change
/// callback and stores only in the uncontrolled case. Controlled hosts feed
/// the authoritative value back through [`sync`](Controllable::sync).
pub struct Controllable<T> {
    value: T,
    controlled: bool,
    on_change: Option<ChangeCallback<T>>,
}

impl<T> Controllable<T> {
    pub fn uncontrolled(initial: T) -> Self {
        Self {
            value: initial,
            controlled: false,
            on_change: None,
        }
    }

    pub fn controlled(initial: T) -> Self {
        Self {
            value: initial,
            controlled: true,
            on_change: None,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Register the change callback, replacing any previous one.
    pub fn on_change(&mut self, callback: ChangeCallback<T>) {
        self.on_change = Some(callback);
    }

    /// Deliver a computed next value: notify, then store when uncontrolled.
    pub fn set(&mut self, next: T) {
        if let Some(callback) = &self.on_change {
            callback(&next);
        }
        if !self.controlled {
            self.value = next;
        }
    }

    /// Host-supplied authoritative value (controlled mode). No notification.
    pub fn sync(&mut self, value: T) {
        self.value = value;
    }
}

// =============================================================================
// Instance Ids
// =============================================================================

thread_local! {
    /// Counter for per-instance accessible-id namespaces.
    static INSTANCE_COUNTER: Cell<usize> = const { Cell::new(0) };
}

fn next_instance() -> usize {
    INSTANCE_COUNTER.with(|counter| {
        let id = counter.get();
        counter.set(id + 1);
        id
    })
}

// =============================================================================
// Construction Props
// =============================================================================

/// Construction-time options for a select widget.
#[derive(Default)]
pub struct SelectProps {
    pub config: SelectConfig,
    /// Initial selected value ("" for none).
    pub default_value: String,
    /// Initial open state.
    pub default_open: bool,
    /// Host owns the selected value and syncs it back on change.
    pub controlled_value: bool,
    /// Host owns the open state and syncs it back on change.
    pub controlled_open: bool,
}

// =============================================================================
// Select Core
// =============================================================================

/// Per-widget state machine: open/value state, cursor, item registry, and
/// typeahead, mutated only through actions and the imperative surface.
pub struct SelectCore {
    instance: usize,
    config: SelectConfig,
    items: ItemRegistry,
    typeahead: TypeaheadMatcher,
    open: Controllable<bool>,
    value: Controllable<String>,
    cursor: i32,
    on_scroll_request: Option<Box<dyn Fn(usize)>>,
}

impl SelectCore {
    pub fn new(props: SelectProps) -> Self {
        let open = if props.controlled_open {
            Controllable::controlled(props.default_open)
        } else {
            Controllable::uncontrolled(props.default_open)
        };
        let value = if props.controlled_value {
            Controllable::controlled(props.default_value)
        } else {
            Controllable::uncontrolled(props.default_value)
        };
        Self {
            instance: next_instance(),
            typeahead: TypeaheadMatcher::new(props.config.typeahead_timeout),
            config: props.config,
            items: ItemRegistry::new(),
            open,
            value,
            cursor: NO_CURSOR,
            on_scroll_request: None,
        }
    }

    // -------------------------------------------------------------------------
    // State queries
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        *self.open.get()
    }

    pub fn value(&self) -> &str {
        self.value.get()
    }

    pub fn cursor(&self) -> i32 {
        self.cursor
    }

    pub fn items(&self) -> &ItemRegistry {
        &self.items
    }

    pub fn snapshot(&self) -> SelectSnapshot {
        SelectSnapshot {
            open: self.is_open(),
            value: self.value.get().clone(),
            cursor: self.cursor,
            query: self.typeahead.query().to_string(),
        }
    }

    /// An item is selected when its value equals the committed value.
    pub fn is_selected(&self, value: &str) -> bool {
        !value.is_empty() && value == self.value.get()
    }

    /// An item is highlighted when its live position equals the cursor.
    pub fn is_highlighted(&self, position: usize) -> bool {
        position as i32 == self.cursor
    }

    fn is_value_highlighted(&self, value: &str) -> bool {
        self.items
            .position(value)
            .is_some_and(|pos| self.is_highlighted(pos))
    }

    // -------------------------------------------------------------------------
    // Callbacks
    // -------------------------------------------------------------------------

    pub fn on_value_change(&mut self, callback: ChangeCallback<String>) {
        self.value.on_change(callback);
    }

    pub fn on_open_change(&mut self, callback: ChangeCallback<bool>) {
        self.open.on_change(callback);
    }

    /// Register the bring-into-view sink; called with the target position on
    /// every cursor-moving transition.
    pub fn on_scroll_request(&mut self, callback: Box<dyn Fn(usize)>) {
        self.on_scroll_request = Some(callback);
    }

    // -------------------------------------------------------------------------
    // Entry points
    // -------------------------------------------------------------------------

    /// Single keyboard entry point the host attaches to the interactive root.
    ///
    /// Returns `true` when the key was consumed and its platform default
    /// should be suppressed.
    pub fn key_down(&mut self, event: &KeyboardEvent) -> bool {
        if !event.is_press() {
            return false;
        }
        let action = resolve(&event.key, self.is_open(), event.modifiers.alt);
        self.apply(action, typeahead_char(&event.key));
        action.prevents_default()
    }

    /// Execute one resolved action.
    ///
    /// `ch` carries the pressed character for the typeahead actions; it is
    /// ignored by every other action.
    pub fn apply(&mut self, action: Action, ch: Option<char>) {
        #[cfg(feature = "tracing")]
        tracing::trace!(?action, cursor = self.cursor, "select action");

        match action {
            Action::None => {}
            Action::Open => {
                self.open.set(true);
                self.cursor = NO_CURSOR;
            }
            Action::OpenFirst => {
                self.open.set(true);
                self.highlight(0);
            }
            Action::OpenLast => {
                self.open.set(true);
                self.highlight(self.items.last_position());
            }
            Action::OpenCurrent => {
                self.open.set(true);
                if let Some(pos) = self.items.position(self.value.get()) {
                    self.highlight(pos as i32);
                }
            }
            Action::OpenWithTypeahead => {
                self.open.set(true);
                if let Some(ch) = ch {
                    self.typeahead_step(ch);
                }
            }
            Action::Previous => {
                if self.cursor > 0 {
                    self.highlight(self.cursor - 1);
                }
            }
            Action::Next => {
                if self.cursor < self.items.last_position() {
                    self.highlight(self.cursor + 1);
                }
            }
            Action::First => self.highlight(0),
            Action::Last => self.highlight(self.items.last_position()),
            Action::PageUp => self.page(-1),
            Action::PageDown => self.page(1),
            Action::Select | Action::CloseSelect => {
                self.commit_cursor();
                self.close();
            }
            Action::Close => self.close(),
            Action::Typeahead => {
                if let Some(ch) = ch {
                    self.typeahead_step(ch);
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Imperative surface
    // -------------------------------------------------------------------------

    /// Move the cursor to `position` (`-1` clears the highlight).
    ///
    /// Out-of-range positions are a no-op so keyboard navigation stays
    /// robust against races with registration.
    pub fn move_cursor(&mut self, position: i32) {
        if position == NO_CURSOR {
            self.cursor = NO_CURSOR;
            return;
        }
        self.highlight(position);
    }

    /// Commit a value directly (pointer path, host imperative). Does not
    /// close the list.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value.set(value.into());
    }

    /// Host-authoritative value for controlled instances.
    pub fn sync_value(&mut self, value: impl Into<String>) {
        self.value.sync(value.into());
    }

    /// Open or close imperatively. Closing resets cursor and typeahead as
    /// the keyboard paths do.
    pub fn set_open(&mut self, open: bool) {
        if open == self.is_open() {
            return;
        }
        if open {
            self.open.set(true);
        } else {
            self.close();
        }
    }

    /// Host-authoritative open state for controlled instances.
    pub fn sync_open(&mut self, open: bool) {
        self.open.sync(open);
        if !open {
            self.cursor = NO_CURSOR;
            self.typeahead.clear();
        }
    }

    /// Open with the currently selected value highlighted and scrolled into
    /// view.
    pub fn open_current(&mut self) {
        self.apply(Action::OpenCurrent, None);
    }

    // -------------------------------------------------------------------------
    // Option lifecycle & pointer reporting
    // -------------------------------------------------------------------------

    /// Register an option at the end of the display order; returns its live
    /// position.
    pub fn register_option(
        &mut self,
        value: impl Into<String>,
        text_value: Option<String>,
        index_hint: Option<usize>,
    ) -> usize {
        self.items.add(value, text_value, index_hint)
    }

    /// Unregister by value. Keeps the cursor inside `[-1, len)`.
    pub fn unregister_option(&mut self, value: &str) -> bool {
        let removed = self.items.remove(value);
        if removed && self.cursor >= self.items.len() as i32 {
            self.cursor = NO_CURSOR;
        }
        removed
    }

    /// Pointer entered an option: highlight it without scrolling.
    pub fn pointer_enter(&mut self, value: &str) {
        if let Some(pos) = self.items.position(value) {
            self.cursor = pos as i32;
        }
    }

    /// Pointer left an option: clear the highlight if it still owns it.
    pub fn pointer_leave(&mut self, value: &str) {
        if self.is_value_highlighted(value) {
            self.cursor = NO_CURSOR;
        }
    }

    /// Pointer clicked an option: commit (when selectable) and close.
    pub fn click(&mut self, value: &str) {
        let selectable = self
            .items
            .position(value)
            .and_then(|pos| self.items.get(pos))
            .is_some_and(|item| item.is_selectable());
        if selectable {
            self.value.set(value.to_string());
        }
        self.close();
    }

    // -------------------------------------------------------------------------
    // Value display
    // -------------------------------------------------------------------------

    /// Resolve the trigger's display label.
    ///
    /// Priority: explicit override, the matched item's display text, the raw
    /// value, then the placeholder when nothing is selected.
    pub fn display_value(&self, label_override: Option<&str>, placeholder: &str) -> String {
        if let Some(label) = label_override {
            return label.to_string();
        }
        let value = self.value.get();
        if value.is_empty() {
            return placeholder.to_string();
        }
        match self.items.position(value).and_then(|pos| self.items.get(pos)) {
            Some(item) => item.text_value.clone(),
            None => value.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Accessible id namespace
    // -------------------------------------------------------------------------

    pub fn trigger_id(&self) -> String {
        format!("spark-select-{}-trigger", self.instance)
    }

    pub fn listbox_id(&self) -> String {
        format!("spark-select-{}-listbox", self.instance)
    }

    pub fn option_id(&self, position: usize) -> String {
        format!("spark-select-{}-option-{}", self.instance, position)
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    fn highlight(&mut self, position: i32) {
        if position < 0 || position > self.items.last_position() {
            return;
        }
        self.cursor = position;
        self.request_scroll(position as usize);
    }

    fn page(&mut self, direction: i32) {
        let last = self.items.last_position();
        if last < 0 {
            return;
        }
        let target = (self.cursor + direction * self.config.page_size).clamp(0, last);
        self.highlight(target);
    }

    fn commit_cursor(&mut self) {
        let Some(item) = usize::try_from(self.cursor)
            .ok()
            .and_then(|pos| self.items.get(pos))
        else {
            return;
        };
        if !item.is_selectable() {
            return;
        }
        let next = item.value.clone();
        #[cfg(feature = "tracing")]
        tracing::trace!(value = %next, "commit selection");
        self.value.set(next);
    }

    fn close(&mut self) {
        self.open.set(false);
        self.cursor = NO_CURSOR;
        self.typeahead.clear();
    }

    fn typeahead_step(&mut self, ch: char) {
        if let Some(pos) = self.typeahead.push(ch, self.cursor, &self.items) {
            self.cursor = pos as i32;
            self.request_scroll(pos);
        }
    }

    fn request_scroll(&self, position: usize) {
        if let Some(callback) = &self.on_scroll_request {
            callback(position);
        }
    }
}

// =============================================================================
// Shared Handle
// =============================================================================

/// Shared-ownership handle to one select widget.
///
/// Clones share the same state; dropping the last clone tears the widget
/// down and invalidates every [`OptionHandle`].
#[derive(Clone)]
pub struct Select {
    core: Rc<RefCell<SelectCore>>,
}

impl Select {
    /// Uncontrolled widget with default configuration.
    pub fn new() -> Self {
        Self::with_props(SelectProps::default())
    }

    pub fn with_props(props: SelectProps) -> Self {
        Self {
            core: Rc::new(RefCell::new(SelectCore::new(props))),
        }
    }

    /// Register an option; the returned handle reports hover/click for it.
    pub fn register_option(
        &self,
        value: impl Into<String>,
        text_value: Option<String>,
        index_hint: Option<usize>,
    ) -> OptionHandle {
        let value = value.into();
        self.core
            .borrow_mut()
            .register_option(value.clone(), text_value, index_hint);
        OptionHandle {
            core: Rc::downgrade(&self.core),
            value,
        }
    }

    pub fn key_down(&self, event: &KeyboardEvent) -> bool {
        self.core.borrow_mut().key_down(event)
    }

    pub fn snapshot(&self) -> SelectSnapshot {
        self.core.borrow().snapshot()
    }

    pub fn is_open(&self) -> bool {
        self.core.borrow().is_open()
    }

    pub fn value(&self) -> String {
        self.core.borrow().value().to_string()
    }

    pub fn move_cursor(&self, position: i32) {
        self.core.borrow_mut().move_cursor(position);
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.core.borrow_mut().set_value(value);
    }

    pub fn sync_value(&self, value: impl Into<String>) {
        self.core.borrow_mut().sync_value(value);
    }

    pub fn set_open(&self, open: bool) {
        self.core.borrow_mut().set_open(open);
    }

    pub fn sync_open(&self, open: bool) {
        self.core.borrow_mut().sync_open(open);
    }

    pub fn open_current(&self) {
        self.core.borrow_mut().open_current();
    }

    /// Selection change notifications. Callbacks must not call back into
    /// this instance synchronously.
    pub fn on_value_change(&self, callback: impl Fn(&str) + 'static) {
        self.core
            .borrow_mut()
            .on_value_change(Box::new(move |value: &String| callback(value)));
    }

    /// Open-state change notifications.
    pub fn on_open_change(&self, callback: impl Fn(bool) + 'static) {
        self.core
            .borrow_mut()
            .on_open_change(Box::new(move |open: &bool| callback(*open)));
    }

    /// Bring-into-view requests; wire this to a
    /// [`ScrollController`](crate::state::scroll::ScrollController).
    pub fn on_scroll_request(&self, callback: impl Fn(usize) + 'static) {
        self.core.borrow_mut().on_scroll_request(Box::new(callback));
    }

    pub fn display_value(&self, label_override: Option<&str>, placeholder: &str) -> String {
        self.core.borrow().display_value(label_override, placeholder)
    }

    pub fn trigger_id(&self) -> String {
        self.core.borrow().trigger_id()
    }

    pub fn listbox_id(&self) -> String {
        self.core.borrow().listbox_id()
    }

    pub fn option_id(&self, position: usize) -> String {
        self.core.borrow().option_id(position)
    }
}

impl Default for Select {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Option Handle
// =============================================================================

/// Weak per-option view of a widget instance.
///
/// Options hold this to report pointer interaction and read their derived
/// state. Every operation fails with [`SelectError::ContextMissing`] once
/// the owning [`Select`] has been dropped - a wiring defect the host should
/// treat as fatal.
pub struct OptionHandle {
    core: Weak<RefCell<SelectCore>>,
    value: String,
}

impl OptionHandle {
    pub fn value(&self) -> &str {
        &self.value
    }

    fn with_core<R>(&self, f: impl FnOnce(&mut SelectCore) -> R) -> Result<R> {
        match self.core.upgrade() {
            Some(core) => Ok(f(&mut core.borrow_mut())),
            None => Err(SelectError::ContextMissing {
                value: self.value.clone(),
            }),
        }
    }

    /// Pointer entered: highlight this option.
    pub fn pointer_enter(&self) -> Result<()> {
        self.with_core(|core| core.pointer_enter(&self.value))
    }

    /// Pointer left: clear the highlight if this option still owns it.
    pub fn pointer_leave(&self) -> Result<()> {
        self.with_core(|core| core.pointer_leave(&self.value))
    }

    /// Click: commit this option (when selectable) and close the list.
    pub fn click(&self) -> Result<()> {
        self.with_core(|core| core.click(&self.value))
    }

    pub fn is_selected(&self) -> Result<bool> {
        self.with_core(|core| core.is_selected(&self.value))
    }

    pub fn is_highlighted(&self) -> Result<bool> {
        self.with_core(|core| core.is_value_highlighted(&self.value))
    }

    /// Remove this option from the registry, consuming the handle.
    pub fn unregister(self) -> Result<()> {
        self.with_core(|core| {
            core.unregister_option(&self.value);
        })
    }
}


// =============================================================================
// Tests
// =============================================================================
