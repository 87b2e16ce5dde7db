//! Accessible dropdown select component for tui-select
//!
//! A toggle button that opens a popup list of options. The component owns
//! its interaction state (open/closed, pseudo-focused row, committed value)
//! and exposes the committed value through [`Dropdown::value`]. Hosts that
//! want an action on every commit pass `on_commit` through the props.
//!
//! # Modules
//!
//! - [`OptionList`] - Ordered option records keyed by stable id
//! - [`DropdownState`] - The open/close and pseudo-focus state machine
//! - [`DropdownKey`] - Logical keys, resolved through [`Keybindings`](tui_select_core::Keybindings)
//! - [`DropdownSemantics`] - ARIA-style attributes derived from state
//! - [`Dropdown`] - The component itself
//!
//! # Example
//!
//! ```ignore
//! use tui_select_widget::{Dropdown, DropdownProps};
//!
//! let mut fruit = Dropdown::new("Choose a fruit");
//!
//! // In your event handler:
//! let actions = fruit.handle_event(&event, DropdownProps {
//!     options: &state.options,
//!     is_focused: state.focus == Field::Fruit,
//!     on_commit: None,
//! });
//!
//! // In your render function:
//! fruit.render(frame, area, DropdownProps {
//!     options: &state.options,
//!     is_focused: state.focus == Field::Fruit,
//!     on_commit: None,
//! });
//!
//! // At submit time:
//! let chosen = fruit.value();
//! ```

mod dropdown;
mod keys;
mod option;
pub mod semantics;
mod state;

pub use dropdown::{Dropdown, DropdownProps, MAX_VISIBLE_ROWS};
pub use keys::{default_keybindings, DropdownKey};
pub use option::{DuplicateOptionId, OptionList, SelectOption};
pub use semantics::DropdownSemantics;
pub use state::DropdownState;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        default_keybindings, Dropdown, DropdownKey, DropdownProps, DropdownSemantics,
        DropdownState, OptionList, SelectOption,
    };
}
