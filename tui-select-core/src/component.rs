//! Component trait for UI elements

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A UI component that renders based on props and emits actions
///
/// Components follow these rules:
/// 1. Props contain ALL read-only data the component borrows from the host
/// 2. `handle_event` returns actions for the host, never mutates host state
/// 3. `render` is a function of props plus the component's own UI state
///
/// Interaction state that belongs to the component alone (open/closed, the
/// pseudo-focused row, the committed label of a dropdown) lives in `&mut self`.
/// Anything the host owns must go through actions.
///
/// # Focus
///
/// Components receive `EventKind` (the raw event). Whether the component has
/// keyboard focus is host knowledge and is passed through `Props`.
///
/// # Example
///
/// ```ignore
/// use tui_select::{Component, EventKind, Frame, Rect};
///
/// struct SubmitButton;
///
/// struct SubmitButtonProps {
///     is_focused: bool,
/// }
///
/// impl Component<FormAction> for SubmitButton {
///     type Props<'a> = SubmitButtonProps;
///
///     fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> impl IntoIterator<Item = FormAction> {
///         if !props.is_focused {
///             return None;
///         }
///         if let EventKind::Key(key) = event {
///             if key.code == KeyCode::Enter {
///                 return Some(FormAction::Submit);
///             }
///         }
///         None
///     }
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
///         frame.render_widget(Paragraph::new("[ Submit! ]"), area);
///     }
/// }
/// ```
pub trait Component<A> {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Handle an event and return actions to dispatch
    ///
    /// Returns any type implementing `IntoIterator<Item = A>`:
    /// - `None` - no actions (most common)
    /// - `Some(action)` - single action
    /// - `[a, b]` or `vec![...]` - multiple actions
    ///
    /// Default implementation returns no actions (render-only components).
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
