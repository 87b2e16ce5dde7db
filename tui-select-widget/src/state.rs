//! Dropdown interaction state machine
//!
//! Two states, `Closed` (initial) and `Open`, plus a pseudo-focus index that
//! only means something while open. Every transition is a total function:
//! indices clamp instead of wrapping and commands that do not apply are
//! silently ignored.
//!
//! | Input | Closed | Open |
//! |---|---|---|
//! | toggle (pointer on control) | open, no focus | close, no focus |
//! | blur / close | - | close, no focus |
//! | navigate next | open, no focus | focus + 1, clamped to last |
//! | navigate previous | - | focus - 1, clamped to first |
//! | commit focused | - | commit focused name, stays open |
//! | commit pointer | commit + toggle | commit + toggle |
//!
//! The keyboard commit leaves the popup open while the pointer commit
//! closes it. Both paths are kept exactly that way.

use crate::option::OptionList;

/// Interaction state owned by one dropdown instance
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropdownState {
    is_open: bool,
    /// Pseudo-focused row; `None` until the user navigates
    focus_index: Option<usize>,
    /// Default label until something is committed
    selected_value: String,
    has_selection: bool,
}

impl DropdownState {
    /// Closed, nothing focused, showing the default label
    pub fn new(default_label: impl Into<String>) -> Self {
        Self {
            is_open: false,
            focus_index: None,
            selected_value: default_label.into(),
            has_selection: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn focus_index(&self) -> Option<usize> {
        self.focus_index
    }

    /// The toggle label: the default label or the last committed name
    pub fn selected_value(&self) -> &str {
        &self.selected_value
    }

    /// Whether the user has committed an option at least once
    pub fn has_selection(&self) -> bool {
        self.has_selection
    }

    /// Pointer activation of the toggle control
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
        self.focus_index = None;
    }

    /// Blur or Escape. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        let changed = self.is_open || self.focus_index.is_some();
        self.is_open = false;
        self.focus_index = None;
        changed
    }

    /// Down arrow. Opens a closed dropdown without moving focus on the same
    /// keystroke; otherwise advances, stopping at the last of `len` rows.
    pub fn navigate_next(&mut self, len: usize) -> bool {
        if !self.is_open {
            self.is_open = true;
            self.focus_index = None;
            return true;
        }
        let Some(last) = len.checked_sub(1) else {
            return false;
        };
        let next = self.focus_index.map_or(0, |i| (i + 1).min(last));
        self.set_focus(next)
    }

    /// Up arrow. Stops at the first row; ignored while closed.
    pub fn navigate_previous(&mut self, len: usize) -> bool {
        if !self.is_open || len == 0 {
            return false;
        }
        let previous = self.focus_index.map_or(0, |i| i.saturating_sub(1));
        self.set_focus(previous)
    }

    fn set_focus(&mut self, index: usize) -> bool {
        let changed = self.focus_index != Some(index);
        self.focus_index = Some(index);
        changed
    }

    /// Enter or Space. Commits the pseudo-focused option and leaves the popup
    /// open. Inert while closed or before any navigation.
    pub fn commit_focused(&mut self, options: &OptionList) -> Option<&str> {
        if !self.is_open {
            return None;
        }
        let index = self.focus_index?;
        self.commit(options, index)
    }

    /// Pointer press on option row `index`: commit, then toggle.
    pub fn commit_pointer(&mut self, options: &OptionList, index: usize) -> Option<&str> {
        options.get(index)?;
        self.toggle();
        self.commit(options, index)
    }

    fn commit(&mut self, options: &OptionList, index: usize) -> Option<&str> {
        let name = options.name_at(index)?;
        self.selected_value.clear();
        self.selected_value.push_str(name);
        self.has_selection = true;
        Some(&self.selected_value)
    }

    /// Forget a focus index that no longer points into a list of `len` rows
    /// (the option source replaced the list with a shorter one).
    pub fn sync_len(&mut self, len: usize) {
        if self.focus_index.is_some_and(|i| i >= len) {
            self.focus_index = None;
        }
    }
}
