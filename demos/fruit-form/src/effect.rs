//! Effects - side effects declared by the reducer
//!
//! Effects are returned from the reducer and handled by the main loop.
//! This keeps the reducer pure while making async operations explicit.

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the option source for the fruit list
    LoadOptions,
    /// Report a submission (logged at info level)
    Announce(String),
}
