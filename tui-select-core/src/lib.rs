//! Core traits and types for tui-select
//!
//! This crate provides the plumbing the dropdown widget and its hosts are
//! built on, following a Redux/Elm-inspired architecture.
//!
//! # Core Concepts
//!
//! - **Action**: Events that describe host state changes
//! - **EffectStore**: State container whose reducer also declares side effects
//! - **Component**: UI elements that render from props and emit actions
//! - **Keybindings**: Logical key actions mapped from configurable key strings
//!
//! # Basic Example
//!
//! ```ignore
//! use tui_select_core::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! enum FormAction {
//!     OptionsFetch,
//!     FormSubmit(String),
//! }
//!
//! enum Effect {
//!     LoadOptions,
//!     Announce(String),
//! }
//!
//! fn reducer(state: &mut FormState, action: FormAction) -> DispatchResult<Effect> {
//!     match action {
//!         FormAction::OptionsFetch => DispatchResult::changed_with(Effect::LoadOptions),
//!         FormAction::FormSubmit(value) => DispatchResult::effect(Effect::Announce(value)),
//!     }
//! }
//!
//! let mut store = EffectStore::new(FormState::default(), reducer);
//! let result = store.dispatch(FormAction::OptionsFetch);
//! ```
//!
//! # Async Pattern
//!
//! Intent actions (`OptionsFetch`) make the reducer emit an effect; the host
//! loop spawns the work and sends a result action (`OptionsDidLoad`,
//! `OptionsDidError`) back through the action channel. The `Did*` naming
//! convention marks result actions, and `#[action(infer_categories)]` groups
//! both halves under the same category (`"options"`).

pub mod action;
pub mod bus;
pub mod component;
pub mod effect;
pub mod event;
pub mod keybindings;
pub mod middleware;
pub mod testing;

// Core trait exports
pub use action::{Action, ActionCategory, ActionSummary};
pub use component::Component;

// Event system exports
pub use bus::{process_raw_event, spawn_event_poller, RawEvent};
pub use event::{EventKind, EventType};

// Keybindings exports
pub use keybindings::{format_key_for_display, parse_key_string, BindingAction, Keybindings};

// Store exports
pub use effect::{DispatchResult, EffectReducer, EffectStore, EffectStoreWithMiddleware};
pub use middleware::{LoggingMiddleware, Middleware};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

// Testing exports
pub use testing::{
    buffer_line, buffer_to_string_plain, ctrl_key, key, keys, mouse_down, mouse_up,
    RenderHarness, TestHarness,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, ActionCategory, ActionSummary};
    pub use crate::bus::{process_raw_event, spawn_event_poller, RawEvent};
    pub use crate::component::Component;
    pub use crate::effect::{
        DispatchResult, EffectReducer, EffectStore, EffectStoreWithMiddleware,
    };
    pub use crate::event::{EventKind, EventType};
    pub use crate::keybindings::{
        format_key_for_display, parse_key_string, BindingAction, Keybindings,
    };
    pub use crate::middleware::{LoggingMiddleware, Middleware};

    // Re-export ratatui types
    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
