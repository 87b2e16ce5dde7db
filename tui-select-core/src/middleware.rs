//! Middleware hooks around dispatch

use crate::Action;

/// Sees every action on its way into and out of the reducer
///
/// Used by [`EffectStoreWithMiddleware`](crate::EffectStoreWithMiddleware).
pub trait Middleware<A: Action> {
    fn before(&mut self, action: &A);

    fn after(&mut self, action: &A, state_changed: bool);
}

/// Logs each dispatch through `tracing`
///
/// Entry is logged at trace level, the outcome at debug level, both tagged
/// with a running sequence number so the two lines of one dispatch pair up.
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    seq: u64,
}

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of dispatches seen so far
    pub fn dispatched(&self) -> u64 {
        self.seq
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        self.seq += 1;
        tracing::trace!(seq = self.seq, action = action.name(), "dispatch");
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        tracing::debug!(
            seq = self.seq,
            action = action.name(),
            changed = state_changed,
            "reduced"
        );
    }
}
