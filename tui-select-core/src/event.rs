//! Event types delivered to components

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Event categories, mostly useful for logging and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Keyboard events
    Key,
    /// Mouse press/release/move events
    Mouse,
    /// Terminal resize events
    Resize,
    /// Terminal focus gained or lost
    Focus,
}

/// The actual event payload
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// The terminal window gained input focus
    FocusGained,
    /// The terminal window lost input focus (blur)
    FocusLost,
}

impl EventKind {
    /// Get the event type for this event kind
    pub fn event_type(&self) -> EventType {
        match self {
            EventKind::Key(_) => EventType::Key,
            EventKind::Mouse(_) => EventType::Mouse,
            EventKind::Resize(_, _) => EventType::Resize,
            EventKind::FocusGained | EventKind::FocusLost => EventType::Focus,
        }
    }

    /// Check if this is a global event (handled by the host before any component)
    pub fn is_global(&self) -> bool {
        match self {
            EventKind::Key(key) => {
                key.modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
            }
            EventKind::Resize(_, _) => true,
            _ => false,
        }
    }

    /// Position of a left-button press, if this is one
    pub fn left_press(&self) -> Option<(u16, u16)> {
        match self {
            EventKind::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => Some((*column, *row)),
            _ => None,
        }
    }
}
