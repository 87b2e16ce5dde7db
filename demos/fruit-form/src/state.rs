//! Form state - single source of truth for the host
//!
//! The dropdown's own interaction state (open, pseudo-focus, committed value)
//! lives inside the widget. This struct only holds what the form owns.

use tui_select_widget::OptionList;

/// Focusable fields, in Tab order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Fruit,
    Submit,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Fruit => Field::Submit,
            Field::Submit => Field::Fruit,
        }
    }

    pub fn prev(self) -> Self {
        // Two fields: both directions land on the other one
        self.next()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    /// Loaded options (None = not yet loaded)
    pub options: Option<OptionList>,

    /// A load is in flight
    pub is_loading: bool,

    /// Message from the last failed load
    pub error: Option<String>,

    /// Field holding keyboard focus
    pub focus: Field,

    /// Status line after the last submission
    pub last_submission: Option<String>,
}

impl FormState {
    /// Options ready to show, or None while the placeholder is due
    pub fn visible_options(&self) -> Option<&OptionList> {
        self.options.as_ref().filter(|options| !options.is_empty())
    }
}
