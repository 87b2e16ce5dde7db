//! Test utilities for tui-select components and hosts
//!
//! - [`key`]: Create `KeyEvent` from string (e.g., `key("ctrl+p")`)
//! - [`mouse_down`] / [`mouse_up`]: Left-button mouse events at a cell
//! - [`RenderHarness`]: Render into an in-memory buffer and read it back
//! - [`TestHarness`]: Action channel for capturing emitted actions
//! - Assertion macros for verifying emitted actions
//!
//! # Example
//!
//! ```ignore
//! use tui_select::testing::{key, RenderHarness};
//!
//! let mut render = RenderHarness::new(30, 10);
//! let output = render.render_to_string_plain(|frame| {
//!     dropdown.render(frame, frame.area(), props);
//! });
//! assert!(output.contains("Choose a fruit"));
//! ```

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;

use crate::keybindings::parse_key_string;
use crate::{Action, ActionCategory};

/// Create a `KeyEvent` from a key string.
///
/// # Examples
///
/// ```
/// use tui_select_core::testing::key;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let k = key("down");
/// assert_eq!(k.code, KeyCode::Down);
///
/// let k = key("ctrl+p");
/// assert_eq!(k.code, KeyCode::Char('p'));
/// assert!(k.modifiers.contains(KeyModifiers::CONTROL));
/// ```
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Parse several whitespace-separated key strings at once.
///
/// ```
/// use tui_select_core::testing::keys;
///
/// assert_eq!(keys("down down enter").len(), 3);
/// ```
pub fn keys(s: &str) -> Vec<KeyEvent> {
    s.split_whitespace().map(key).collect()
}

/// Create a `KeyEvent` for a character with Ctrl modifier.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Left mouse button pressed at `(column, row)`.
pub fn mouse_down(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

/// Left mouse button released at `(column, row)`.
pub fn mouse_up(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Convert a buffer to plain text, one line per row, without styling.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| buffer_line(buffer, y))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain text of a single buffer row.
pub fn buffer_line(buffer: &Buffer, y: u16) -> String {
    let area = buffer.area;
    (area.left()..area.right())
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

/// Renders into a fixed-size in-memory terminal.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal dimensions.
    ///
    /// # Panics
    ///
    /// Panics if the test terminal cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("failed to create test terminal: {e}"));
        Self { terminal }
    }

    /// Render a frame and return the resulting buffer.
    ///
    /// # Panics
    ///
    /// Panics if drawing to the test backend fails.
    pub fn render(&mut self, draw: impl FnOnce(&mut Frame)) -> &Buffer {
        self.terminal
            .draw(draw)
            .unwrap_or_else(|e| panic!("failed to draw test frame: {e}"));
        self.terminal.backend().buffer()
    }

    /// Render a frame and return it as plain text.
    pub fn render_to_string_plain(&mut self, draw: impl FnOnce(&mut Frame)) -> String {
        buffer_to_string_plain(self.render(draw))
    }
}

/// Action capture for host tests.
///
/// # Example
///
/// ```ignore
/// let mut harness = TestHarness::<FormState, Action>::new(FormState::default());
/// harness.emit(Action::OptionsFetch);
/// let emitted = harness.drain_emitted();
/// assert_emitted!(emitted, Action::OptionsFetch);
/// ```
pub struct TestHarness<S, A: Action> {
    /// The state under test
    pub state: S,
    tx: mpsc::UnboundedSender<A>,
    rx: mpsc::UnboundedReceiver<A>,
}

impl<S, A: Action> TestHarness<S, A> {
    /// Create a new test harness with the given initial state.
    pub fn new(state: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { state, tx, rx }
    }

    /// Emit an action (simulates what a handler would do).
    pub fn emit(&self, action: A) {
        let _ = self.tx.send(action);
    }

    /// Emit every action from a component's `handle_event` result.
    pub fn emit_all(&self, actions: impl IntoIterator<Item = A>) {
        for action in actions {
            self.emit(action);
        }
    }

    /// Drain all emitted actions from the channel.
    pub fn drain_emitted(&mut self) -> Vec<A> {
        let mut actions = Vec::new();
        while let Ok(action) = self.rx.try_recv() {
            actions.push(action);
        }
        actions
    }
}

impl<S: Default, A: Action> Default for TestHarness<S, A> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S, A: ActionCategory> TestHarness<S, A> {
    /// Drain only the emitted actions of one category.
    ///
    /// Actions of other categories stay queued for a later drain.
    pub fn drain_category(&mut self, category: &str) -> Vec<A> {
        let (matching, rest): (Vec<A>, Vec<A>) = self
            .drain_emitted()
            .into_iter()
            .partition(|action| action.category() == Some(category));

        for action in rest {
            let _ = self.tx.send(action);
        }

        matching
    }
}

/// Assert that a specific action was emitted.
///
/// ```ignore
/// assert_emitted!(actions, Action::FormSubmit(_));
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that a specific action was NOT emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Count how many actions match a pattern.
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}
