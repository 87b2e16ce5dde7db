//! Reducer - (state, action) -> changed flag plus effects
//!
//! All host state mutations happen here. Async work and logging are only
//! declared as effects.

use tui_select::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::FormState;

pub fn reducer(state: &mut FormState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Options =====
        Action::OptionsFetch => {
            if state.is_loading {
                // One load at a time
                return DispatchResult::unchanged();
            }
            state.is_loading = true;
            state.error = None;
            DispatchResult::changed_with(Effect::LoadOptions)
        }

        Action::OptionsDidLoad(options) => {
            state.options = Some(options);
            state.is_loading = false;
            state.error = None;
            DispatchResult::changed()
        }

        Action::OptionsDidError(msg) => {
            state.is_loading = false;
            state.error = Some(msg);
            DispatchResult::changed()
        }

        // ===== Form =====
        Action::FormFocusNext => {
            state.focus = state.focus.next();
            DispatchResult::changed()
        }

        Action::FormFocusPrev => {
            state.focus = state.focus.prev();
            DispatchResult::changed()
        }

        Action::FormFocus(field) => {
            if state.focus == field {
                return DispatchResult::unchanged();
            }
            state.focus = field;
            DispatchResult::changed()
        }

        Action::FormSubmit(choice) => {
            let message = match choice {
                Some(fruit) => format!("Enjoy your {fruit}!"),
                None => "Nothing chosen yet".to_string(),
            };
            state.last_submission = Some(message.clone());
            DispatchResult::changed_with(Effect::Announce(message))
        }

        // Handled in the main loop
        Action::Quit => DispatchResult::unchanged(),
    }
}
