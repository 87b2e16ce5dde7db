//! Action traits for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to the store
///
/// Actions represent intents to change state. They should be:
/// - Clone: Actions may be logged or sent to multiple handlers
/// - Debug: For debugging and logging
/// - Send + 'static: For async dispatch across threads
///
/// Use `#[derive(Action)]` from `tui-select-macros` to auto-implement this trait.
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;
}

/// Actions grouped into categories by naming convention
///
/// Generated by `#[derive(Action)]` together with `#[action(infer_categories)]`:
/// `OptionsFetch` and `OptionsDidLoad` both land in the `"options"` category.
pub trait ActionCategory: Action {
    /// Generated category enum
    type Category: Copy + Eq + Debug;

    /// Category name, `None` for uncategorized actions
    fn category(&self) -> Option<&'static str>;

    /// Category as the generated enum
    fn category_enum(&self) -> Self::Category;
}

/// Short, human-readable form of an action for log lines
///
/// The default is the `Debug` output. Override it for actions carrying
/// large payloads (e.g. a freshly loaded option list).
pub trait ActionSummary: Action {
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}
