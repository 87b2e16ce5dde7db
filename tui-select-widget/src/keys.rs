//! Logical dropdown keys and their default bindings

use tui_select_core::{BindingAction, Keybindings};

/// What a keystroke means to the dropdown
///
/// Raw keys are resolved through a [`Keybindings<DropdownKey>`] table at the
/// input boundary; the widget only ever matches on these variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DropdownKey {
    /// Move the pseudo-focus up one row
    NavigatePrevious,
    /// Open, or move the pseudo-focus down one row
    NavigateNext,
    /// Commit the pseudo-focused row
    Commit,
    /// Close the popup
    Close,
}

impl BindingAction for DropdownKey {
    fn name(&self) -> &'static str {
        match self {
            DropdownKey::NavigatePrevious => "navigate_previous",
            DropdownKey::NavigateNext => "navigate_next",
            DropdownKey::Commit => "commit",
            DropdownKey::Close => "close",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }

    fn all() -> &'static [Self] {
        &[
            DropdownKey::NavigatePrevious,
            DropdownKey::NavigateNext,
            DropdownKey::Commit,
            DropdownKey::Close,
        ]
    }
}

/// Up / Down / Enter or Space / Esc
pub fn default_keybindings() -> Keybindings<DropdownKey> {
    Keybindings::new()
        .with(DropdownKey::NavigatePrevious, &["up"])
        .with(DropdownKey::NavigateNext, &["down"])
        .with(DropdownKey::Commit, &["enter", "space"])
        .with(DropdownKey::Close, &["esc"])
}
