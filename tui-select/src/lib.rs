//! tui-select: an accessible dropdown and the plumbing around it
//!
//! Components render from props and emit actions; hosts keep their own
//! state in an effect store and react to dispatched actions. The dropdown
//! widget itself lives in `tui-select-widget`.
//!
//! # Example
//! ```ignore
//! use tui_select::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! #[action(infer_categories)]
//! enum FormAction {
//!     OptionsFetch,
//!     FormSubmit(String),
//! }
//!
//! #[derive(BindingAction, Clone, Copy, PartialEq, Eq, Hash, Debug)]
//! enum FormKey {
//!     FocusNext,
//!     Submit,
//! }
//! ```

// Re-export everything from core
pub use tui_select_core::*;

// Re-export derive macros
pub use tui_select_macros::{Action, BindingAction};

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use tui_select_core::{Action, ActionCategory, ActionSummary, BindingAction, Component};

    // Event system
    pub use tui_select_core::{process_raw_event, spawn_event_poller, EventKind, RawEvent};

    // Keybindings
    pub use tui_select_core::{format_key_for_display, parse_key_string, Keybindings};

    // Store
    pub use tui_select_core::{
        DispatchResult, EffectStore, EffectStoreWithMiddleware, LoggingMiddleware, Middleware,
    };

    // Derive macros
    pub use tui_select_macros::{Action, BindingAction};

    // Ratatui re-exports
    pub use tui_select_core::{Color, Frame, Line, Modifier, Rect, Span, Style, Text};
}
