//! Accessibility semantics for the dropdown
//!
//! The terminal has no DOM, so the attributes a screen reader or an
//! end-to-end test would look for are derived here as plain values and
//! collected into a serializable tree. Every function is pure: same state in,
//! same identifiers out.

use serde::Serialize;

use crate::option::OptionList;
use crate::state::DropdownState;

/// Identifier of the popup list, referenced by the toggle's `aria-controls`
/// and `aria-owns`
pub const LIST_ID: &str = "select-list";

/// Style hook on the container while the popup is open
pub const OPEN_MODIFIER: &str = "open";

/// Style hook on the pseudo-focused option row
pub const FOCUSED_MODIFIER: &str = "focused";

const OPTION_ID_PREFIX: &str = "select-option-";

/// `"open"` while open, nothing otherwise
pub fn container_modifier(is_open: bool) -> Option<&'static str> {
    is_open.then_some(OPEN_MODIFIER)
}

/// `"focused"` for the row at the focus index, nothing for every other row
pub fn option_modifier(index: usize, focus_index: Option<usize>) -> Option<&'static str> {
    (focus_index == Some(index)).then_some(FOCUSED_MODIFIER)
}

/// Stable element id of the option row at `index`
///
/// Derived from the display position, not the record id, so the focused
/// row and its id always agree.
pub fn option_element_id(index: usize) -> String {
    format!("{OPTION_ID_PREFIX}{index}")
}

/// `aria-activedescendant` value: absent while nothing is pseudo-focused
pub fn active_descendant_id(focus_index: Option<usize>) -> Option<String> {
    focus_index.map(option_element_id)
}

/// ARIA role of a node
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Toggle plus popup list
    Combobox,
    Button,
    Listbox,
    Option,
}

/// Full semantic snapshot of one dropdown
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DropdownSemantics {
    pub role: Role,
    pub modifier: Option<&'static str>,
    pub toggle: ToggleSemantics,
    pub list: ListSemantics,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ToggleSemantics {
    pub role: Role,
    /// Visible text: the default label or the committed value
    pub label: String,
    #[serde(rename = "aria-expanded")]
    pub expanded: bool,
    #[serde(rename = "aria-controls")]
    pub controls: &'static str,
    #[serde(rename = "aria-owns")]
    pub owns: &'static str,
    #[serde(
        rename = "aria-activedescendant",
        skip_serializing_if = "Option::is_none"
    )]
    pub active_descendant: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListSemantics {
    pub role: Role,
    pub id: &'static str,
    /// Rows are always present; only visibility follows the open state
    pub hidden: bool,
    pub options: Vec<OptionSemantics>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptionSemantics {
    pub role: Role,
    pub id: String,
    pub label: String,
    pub modifier: Option<&'static str>,
}

impl DropdownSemantics {
    pub fn new(state: &DropdownState, options: &OptionList) -> Self {
        let focus = state.focus_index();

        let options = options
            .iter()
            .enumerate()
            .map(|(index, option)| OptionSemantics {
                role: Role::Option,
                id: option_element_id(index),
                label: option.name.clone(),
                modifier: option_modifier(index, focus),
            })
            .collect();

        Self {
            role: Role::Combobox,
            modifier: container_modifier(state.is_open()),
            toggle: ToggleSemantics {
                role: Role::Button,
                label: state.selected_value().to_string(),
                expanded: state.is_open(),
                controls: LIST_ID,
                owns: LIST_ID,
                active_descendant: active_descendant_id(focus),
            },
            list: ListSemantics {
                role: Role::Listbox,
                id: LIST_ID,
                hidden: !state.is_open(),
                options,
            },
        }
    }

    /// The option node currently referenced by `aria-activedescendant`
    pub fn active_option(&self) -> Option<&OptionSemantics> {
        let id = self.toggle.active_descendant.as_deref()?;
        self.list.options.iter().find(|option| option.id == id)
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
