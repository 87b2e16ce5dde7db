//! Actions with inferred categories
//!
//! The prefix names the category: `OptionsFetch` and `OptionsDidLoad` both
//! land in `"options"`. `Did` marks the result of an async request.

use tui_select::ActionSummary;
use tui_select_widget::OptionList;

use crate::state::Field;

/// Everything that can happen to the form
///
/// # Categories (inferred from naming):
/// - `options`: OptionsFetch, OptionsDidLoad, OptionsDidError
/// - `form`: FormFocusNext, FormFocusPrev, FormFocus, FormSubmit
/// - `uncategorized`: Quit
#[derive(tui_select::Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum Action {
    // ===== Options category =====
    /// Intent: load the fruit list (triggers async task)
    OptionsFetch,

    /// Result: fruit list arrived
    OptionsDidLoad(OptionList),

    /// Result: the option source failed
    OptionsDidError(String),

    // ===== Form category =====
    FormFocusNext,

    FormFocusPrev,

    /// Focus a field directly (mouse press)
    FormFocus(Field),

    /// Submit with the dropdown's committed value, if any
    FormSubmit(Option<String>),

    // ===== Uncategorized =====
    Quit,
}

impl ActionSummary for Action {
    fn summary(&self) -> String {
        match self {
            Action::OptionsDidLoad(options) => {
                format!("OptionsDidLoad {{ count: {} }}", options.len())
            }
            Action::OptionsDidError(e) => {
                let msg = if e.chars().count() > 40 {
                    format!("{}...", e.chars().take(37).collect::<String>())
                } else {
                    e.clone()
                };
                format!("OptionsDidError({:?})", msg)
            }
            _ => format!("{:?}", self),
        }
    }
}
