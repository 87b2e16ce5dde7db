//! Dropdown select component

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use tui_select_core::{Component, EventKind, Keybindings};

use crate::keys::{default_keybindings, DropdownKey};
use crate::option::OptionList;
use crate::semantics::{container_modifier, option_modifier, DropdownSemantics};
use crate::state::DropdownState;

/// Most option rows the popup shows before it scrolls
pub const MAX_VISIBLE_ROWS: usize = 6;

const ARROW_CLOSED: &str = "▾";
const ARROW_OPEN: &str = "▴";

/// Props for the Dropdown component
pub struct DropdownProps<'a, A> {
    /// Options to choose from, borrowed for this call only
    pub options: &'a OptionList,
    /// Whether the host has given this dropdown keyboard focus
    pub is_focused: bool,
    /// Optional notification when a value is committed
    ///
    /// The committed value always stays readable through [`Dropdown::value`];
    /// this only exists for hosts that want an action on every commit.
    pub on_commit: Option<fn(String) -> A>,
}

impl<A> Clone for DropdownProps<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for DropdownProps<'_, A> {}

/// A toggle button with a popup option list
///
/// Owns its interaction state: open/closed, the pseudo-focused row and the
/// committed value. Keys only reach it while `is_focused`; mouse presses and
/// terminal blur are handled regardless, since a press outside the widget is
/// exactly how it loses focus.
///
/// From the keyboard only Down opens the popup. Enter and Space commit the
/// focused row of an open popup and do nothing while it is closed.
pub struct Dropdown {
    state: DropdownState,
    keybindings: Keybindings<DropdownKey>,
    /// Scroll offset for the popup viewport
    scroll_offset: usize,
    /// Where the toggle was last drawn
    toggle_area: Rect,
    /// Outer popup rectangle, present while drawn open
    popup_area: Option<Rect>,
    /// Rows of the popup that hold options
    rows_area: Option<Rect>,
}

impl Dropdown {
    /// Closed dropdown showing `default_label`, with the default key table
    pub fn new(default_label: impl Into<String>) -> Self {
        Self {
            state: DropdownState::new(default_label),
            keybindings: default_keybindings(),
            scroll_offset: 0,
            toggle_area: Rect::default(),
            popup_area: None,
            rows_area: None,
        }
    }

    /// Replace the key table (typically defaults merged with a user file)
    pub fn with_keybindings(mut self, keybindings: Keybindings<DropdownKey>) -> Self {
        self.keybindings = keybindings;
        self
    }

    pub fn keybindings(&self) -> &Keybindings<DropdownKey> {
        &self.keybindings
    }

    /// The committed value, or the default label before any commit
    pub fn value(&self) -> &str {
        self.state.selected_value()
    }

    pub fn has_selection(&self) -> bool {
        self.state.has_selection()
    }

    pub fn state(&self) -> &DropdownState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Focus left the control. Closes the popup.
    pub fn blur(&mut self) {
        if self.state.close() {
            tracing::debug!("dropdown blurred");
        }
    }

    /// Whether a cell belongs to the toggle or the open popup
    pub fn contains(&self, column: u16, row: u16) -> bool {
        let position = Position::new(column, row);
        self.toggle_area.contains(position)
            || self
                .popup_area
                .is_some_and(|popup| self.state.is_open() && popup.contains(position))
    }

    /// Semantic snapshot for the given options
    pub fn semantics(&self, options: &OptionList) -> DropdownSemantics {
        DropdownSemantics::new(&self.state, options)
    }

    fn handle_key<A>(&mut self, key: &KeyEvent, props: DropdownProps<'_, A>) -> Option<A> {
        let len = props.options.len();
        match self.keybindings.resolve(key)? {
            DropdownKey::NavigatePrevious => {
                self.state.navigate_previous(len);
                None
            }
            DropdownKey::NavigateNext => {
                self.state.navigate_next(len);
                None
            }
            DropdownKey::Commit => {
                let value = self.state.commit_focused(props.options)?.to_string();
                notify(value, props.on_commit)
            }
            DropdownKey::Close => {
                self.state.close();
                None
            }
        }
    }

    fn handle_press<A>(&mut self, column: u16, row: u16, props: DropdownProps<'_, A>) -> Option<A> {
        if self.toggle_area.contains(Position::new(column, row)) {
            self.state.toggle();
            return None;
        }

        if let Some(index) = self.row_at(column, row, props.options.len()) {
            let value = self.state.commit_pointer(props.options, index)?.to_string();
            return notify(value, props.on_commit);
        }

        // Pressing anywhere else moves focus away
        self.blur();
        None
    }

    /// Option index under a cell of the open popup
    fn row_at(&self, column: u16, row: u16, len: usize) -> Option<usize> {
        if !self.state.is_open() {
            return None;
        }
        let rows = self.rows_area?;
        if !rows.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.scroll_offset + usize::from(row - rows.y);
        (index < len).then_some(index)
    }

    /// Ensure the focused index is visible within the viewport
    fn ensure_visible(&mut self, focused: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if focused < self.scroll_offset {
            self.scroll_offset = focused;
        } else if focused >= self.scroll_offset + viewport_height {
            self.scroll_offset = focused.saturating_sub(viewport_height - 1);
        }
    }

    fn render_toggle(&self, frame: &mut Frame, area: Rect, is_focused: bool) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(is_focused, self.state.is_open()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let arrow = if self.state.is_open() {
            ARROW_OPEN
        } else {
            ARROW_CLOSED
        };
        let label_style = if self.state.has_selection() {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let label_width = inner.width.saturating_sub(2);
        let label = Rect::new(inner.x, inner.y, label_width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(self.state.selected_value(), label_style)),
            label,
        );
        if inner.width >= 2 {
            let arrow_area = Rect::new(inner.right() - 1, inner.y, 1, 1);
            frame.render_widget(Paragraph::new(arrow), arrow_area);
        }
    }

    fn render_popup(&mut self, frame: &mut Frame, options: &OptionList, is_focused: bool) {
        let toggle = self.toggle_area;
        let bottom = frame.area().bottom();
        let wanted = options.len().clamp(1, MAX_VISIBLE_ROWS) as u16 + 2;
        let height = wanted.min(bottom.saturating_sub(toggle.bottom()));

        // Need both borders and at least one row
        if height < 3 {
            self.popup_area = None;
            self.rows_area = None;
            return;
        }

        let area = Rect::new(toggle.x, toggle.bottom(), toggle.width, height);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(is_focused, true));
        let rows = block.inner(area);
        let viewport_height = rows.height as usize;

        frame.render_widget(Clear, area);
        self.popup_area = Some(area);

        if options.is_empty() {
            self.rows_area = None;
            frame.render_widget(
                Paragraph::new(Line::styled(
                    "(no options)",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ))
                .block(block),
                area,
            );
            return;
        }

        let focus = self.state.focus_index();
        self.ensure_visible(focus.unwrap_or(0), viewport_height);
        let max_offset = options.len().saturating_sub(viewport_height);
        self.scroll_offset = self.scroll_offset.min(max_offset);

        let items: Vec<ListItem> = options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                ListItem::new(Line::raw(option.name.as_str())).style(option_style(i, focus))
            })
            .collect();

        let list = List::new(items).block(block);
        let mut state = ListState::default().with_selected(focus);
        *state.offset_mut() = self.scroll_offset;
        frame.render_stateful_widget(list, area, &mut state);

        let visible = options.len().saturating_sub(self.scroll_offset).min(viewport_height);
        self.rows_area = Some(Rect::new(rows.x, rows.y, rows.width, visible as u16));
    }
}

impl<A> Component<A> for Dropdown {
    type Props<'a> = DropdownProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        // The list may have been replaced since the last event
        self.state.sync_len(props.options.len());

        match event {
            EventKind::Key(key) if props.is_focused => self.handle_key(key, props),
            EventKind::Mouse(_) => {
                let Some((column, row)) = event.left_press() else {
                    return None;
                };
                self.handle_press(column, row, props)
            }
            EventKind::FocusLost => {
                self.blur();
                None
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.state.sync_len(props.options.len());

        let toggle = Rect {
            height: area.height.min(3),
            ..area
        };
        self.toggle_area = toggle;
        self.render_toggle(frame, toggle, props.is_focused);

        if self.state.is_open() {
            self.render_popup(frame, props.options, props.is_focused);
        } else {
            self.popup_area = None;
            self.rows_area = None;
        }
    }
}

fn notify<A>(value: String, on_commit: Option<fn(String) -> A>) -> Option<A> {
    tracing::debug!(value = %value, "dropdown committed");
    on_commit.map(|callback| callback(value))
}

fn border_style(is_focused: bool, is_open: bool) -> Style {
    let style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    match container_modifier(is_open) {
        Some(_) => style.add_modifier(Modifier::BOLD),
        None => style,
    }
}

fn option_style(index: usize, focus: Option<usize>) -> Style {
    match option_modifier(index, focus) {
        Some(_) => Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD),
        None => Style::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::SelectOption;
    use tui_select_core::testing::{buffer_line, key, mouse_down, RenderHarness};

    const DEFAULT_VALUE: &str = "Choose a fruit";

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Committed(String),
    }

    fn fruits() -> OptionList {
        OptionList::new(vec![
            SelectOption::new(0, "banana"),
            SelectOption::new(1, "cherry"),
            SelectOption::new(2, "orange"),
            SelectOption::new(3, "strawberry"),
        ])
        .unwrap()
    }

    fn props(options: &OptionList) -> DropdownProps<'_, TestAction> {
        DropdownProps {
            options,
            is_focused: true,
            on_commit: None,
        }
    }

    fn press(dropdown: &mut Dropdown, k: &str, props: DropdownProps<'_, TestAction>) -> Vec<TestAction> {
        dropdown
            .handle_event(&EventKind::Key(key(k)), props)
            .into_iter()
            .collect()
    }

    fn click(dropdown: &mut Dropdown, column: u16, row: u16, props: DropdownProps<'_, TestAction>) -> Vec<TestAction> {
        dropdown
            .handle_event(&EventKind::Mouse(mouse_down(column, row)), props)
            .into_iter()
            .collect()
    }

    fn draw(render: &mut RenderHarness, dropdown: &mut Dropdown, options: &OptionList) -> String {
        render.render_to_string_plain(|frame| {
            let area = Rect::new(0, 0, 24, 3);
            dropdown.render(frame, area, props(options));
        })
    }

    #[test]
    fn test_keyboard_scenario() {
        let options = fruits();
        let mut dropdown = Dropdown::new(DEFAULT_VALUE);
        let mut render = RenderHarness::new(24, 10);

        let output = draw(&mut render, &mut dropdown, &options);
        assert!(output.contains(DEFAULT_VALUE));
        assert!(!dropdown.is_open());

        press(&mut dropdown, "down", props(&options));
        assert!(dropdown.is_open());
        assert_eq!(dropdown.state().focus_index(), None);

        press(&mut dropdown, "down", props(&options));
        assert_eq!(dropdown.state().focus_index(), Some(0));
        press(&mut dropdown, "down", props(&options));
        assert_eq!(dropdown.state().focus_index(), Some(1));

        press(&mut dropdown, "enter", props(&options));
        assert_eq!(dropdown.value(), "cherry");
        assert!(dropdown.is_open());

        let output = draw(&mut render, &mut dropdown, &options);
        let toggle_line = output.lines().nth(1).unwrap();
        assert!(toggle_line.contains("cherry"));
        assert!(!toggle_line.contains(DEFAULT_VALUE));
    }

    #[test]
    fn test_pointer_scenario() {
        let options = fruits();
        let mut dropdown = Dropdown::new(DEFAULT_VALUE);
        let mut render = RenderHarness::new(24, 10);
        draw(&mut render, &mut dropdown, &options);

        // Toggle occupies rows 0..3
        click(&mut dropdown, 5, 1, props(&options));
        assert!(dropdown.is_open());
        draw(&mut render, &mut dropdown, &options);

        // Popup border at row 3, first option row at 4
        click(&mut dropdown, 3, 5, props(&options));
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.value(), "cherry");

        let output = draw(&mut render, &mut dropdown, &options);
        assert!(output.lines().nth(1).unwrap().contains("cherry"));
        assert!(!output.contains("banana"));
    }

    #[test]
    fn test_space_commits_like_enter() {
        let options = fruits();
        let mut dropdown = Dropdown::new(DEFAULT_VALUE);
        for k in ["down", "down", "down", "down"] {
            press(&mut dropdown, k, props(&options));
        }
        press(&mut dropdown, "space", props(&options));
        assert_eq!(dropdown.value(), "orange");
        assert!(dropdown.is_open());
    }

    #[test]
    fn test_only_down_opens_from_keyboard() {
        let options = fruits();
        let mut dropdown = Dropdown::new(DEFAULT_VALUE);

        for k in ["enter", "space", "up", "esc"] {
            let actions = press(
                &mut dropdown,
                k,
                DropdownProps {
                    on_commit: Some(TestAction::Committed),
                    ..props(&options)
                },
            );
            assert!(actions.is_empty(), "{k} on a closed dropdown");
            assert!(!dropdown.is_open(), "{k} must not open the popup");
        }

        press(&mut dropdown, "down", props(&options));
        assert!(dropdown.is_open());
        assert_eq!(dropdown.state().focus_index(), None);
    }

    #[test]
    fn test_enter_without_focus_is_inert() {
        let options = fruits();
        let mut dropdown = Dropdown::new(DEFAULT_VALUE);
        press(&mut dropdown, "down", props(&options));
        let actions = press(
            &mut dropdown,
            "enter",
            DropdownProps {
                on_commit: Some(TestAction::Committed),
                ..props(&options)
            },
        );
        assert!(actions.is_empty());
        assert_eq!(dropdown.value(), DEFAULT_VALUE);
        assert!(!dropdown.has_selection());
    }

    #[test]
    fn test_on_commit_notifies() {
        let options = fruits();
        let mut dropdown = Dropdown::new(DEFAULT_VALUE);
        let notifying = DropdownProps {
            on_commit: Some(TestAction::Committed),
            ..props(&options)
        };
        press(&mut dropdown, "down", notifying);
        press(&mut dropdown, "down", notifying);
        let actions = press(&mut dropdown, "enter", notifying);
        assert_eq!(actions, vec![TestAction::Committed("banana".into())]);
    }

    #[test]
    fn test_escape_closes_and_resets_focus() {
        let options = fruits();
        let mut dropdown = Dropdown::new(DEFAULT_VALUE);
        press(&mut dropdown, "down", props(&options));
        press(&mut dropdown, "down", props(&options));
        press(&mut dropdown, "esc", props(&options));
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.state().focus_index(), None);

        press(&mut dropdown, "esc", props(&options));
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_clamps_at_both_ends() {
        let options = fruits();
        let mut dropdown = Dropdown::new(DEFAULT_VALUE);
        for _ in 0..8 {
            press(&mut dropdown, "down", props(&options));
        }
        assert_eq!(dropdown.state().focus_index(), Some(3));
        for _ in 0..8 {
            press(&mut dropdown, "up", props(&options));
        }
        assert_eq!(dropdown.state().focus_index(), Some(0));
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let options = fruits();
        let mut dropdown = Dropdown::new(DEFAULT_VALUE);
        press(
            &mut dropdown,
            "down",
            DropdownProps {
                is_focused: false,
                ..props(&options)
            },
        );
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_blur_closes() {
        let options = fruits();
        let mut dropdown = Dropdown::new(DEFAULT_VALUE);
        press(&mut dropdown, "down", props(&options));
        press(&mut dropdown, "down", props(&options));

        let actions: Vec<TestAction> = dropdown
            .handle_event(&EventKind::FocusLost, props(&options))
            .into_iter()
            .collect();
        assert!(actions.is_empty());
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.state().focus_index(), None);
    }

    #[test]
    fn test_click_outside_closes() {
        let options = fruits();
        let mut dropdown = Dropdown::new(DEFAULT_VALUE);
        let mut render = RenderHarness::new(40, 12);
        draw(&mut render, &mut dropdown, &options);
        click(&mut dropdown, 1, 1, props(&options));
        draw(&mut render, &mut dropdown, &options);
        assert!(dropdown.contains(2, 5));

        click(&mut dropdown, 35, 1, props(&options));
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.value(), DEFAULT_VALUE);
    }

    #[test]
    fn test_custom_keybindings() {
        let options = fruits();
        let bindings = default_keybindings().with(DropdownKey::NavigateNext, &["j"]);
        let mut dropdown = Dropdown::new(DEFAULT_VALUE).with_keybindings(bindings);

        press(&mut dropdown, "down", props(&options));
        assert!(!dropdown.is_open());
        press(&mut dropdown, "j", props(&options));
        assert!(dropdown.is_open());
    }

    #[test]
    fn test_render_open_popup_marks_focus() {
        let options = fruits();
        let mut dropdown = Dropdown::new(DEFAULT_VALUE);
        let mut render = RenderHarness::new(24, 10);
        press(&mut dropdown, "down", props(&options));
        press(&mut dropdown, "down", props(&options));
        press(&mut dropdown, "down", props(&options));

        let buffer = render.render(|frame| {
            dropdown.render(frame, Rect::new(0, 0, 24, 3), props(&options));
        });
        assert!(buffer_line(buffer, 0).starts_with("┌"));
        assert!(buffer_line(buffer, 1).contains(ARROW_OPEN));
        assert!(buffer_line(buffer, 4).contains("banana"));
        assert!(buffer_line(buffer, 5).contains("cherry"));
        assert_eq!(buffer[(1, 5)].bg, Color::White);
        assert_ne!(buffer[(1, 4)].bg, Color::White);
    }

    #[test]
    fn test_popup_scrolls_to_focus() {
        let options = OptionList::new(
            (0..10)
                .map(|i| SelectOption::new(i, format!("fruit-{i}")))
                .collect(),
        )
        .unwrap();
        let mut dropdown = Dropdown::new(DEFAULT_VALUE);
        let mut render = RenderHarness::new(24, 12);
        for _ in 0..10 {
            press(&mut dropdown, "down", props(&options));
        }
        assert_eq!(dropdown.state().focus_index(), Some(8));

        let output = draw(&mut render, &mut dropdown, &options);
        assert!(output.contains("fruit-8"));
        assert!(!output.contains("fruit-0"));

        // Clicking the first visible row commits the scrolled index
        click(&mut dropdown, 2, 4, props(&options));
        assert_eq!(dropdown.value(), "fruit-3");
    }

    #[test]
    fn test_popup_clipped_to_frame() {
        let options = fruits();
        let mut dropdown = Dropdown::new(DEFAULT_VALUE);
        let mut render = RenderHarness::new(24, 5);
        press(&mut dropdown, "down", props(&options));

        let output = draw(&mut render, &mut dropdown, &options);
        // Room for two rows below the toggle: one border, one option
        assert!(!output.contains("banana"));
        assert!(dropdown.is_open());
        assert!(!dropdown.contains(2, 4));
    }

    #[test]
    fn test_empty_options() {
        let options = OptionList::empty();
        let mut dropdown = Dropdown::new(DEFAULT_VALUE);
        let mut render = RenderHarness::new(24, 8);
        press(&mut dropdown, "down", props(&options));
        press(&mut dropdown, "down", props(&options));
        press(&mut dropdown, "enter", props(&options));
        assert_eq!(dropdown.state().focus_index(), None);
        assert_eq!(dropdown.value(), DEFAULT_VALUE);

        let output = draw(&mut render, &mut dropdown, &options);
        assert!(output.contains("(no options)"));
    }

    #[test]
    fn test_shrunk_list_drops_focus() {
        let options = fruits();
        let mut dropdown = Dropdown::new(DEFAULT_VALUE);
        for _ in 0..5 {
            press(&mut dropdown, "down", props(&options));
        }
        assert_eq!(dropdown.state().focus_index(), Some(3));

        let shorter = OptionList::new(vec![SelectOption::new(0, "banana")]).unwrap();
        press(&mut dropdown, "enter", props(&shorter));
        assert_eq!(dropdown.state().focus_index(), None);
        assert_eq!(dropdown.value(), DEFAULT_VALUE);
    }

    #[test]
    fn test_semantics_follow_state() {
        let options = fruits();
        let mut dropdown = Dropdown::new(DEFAULT_VALUE);
        press(&mut dropdown, "down", props(&options));
        press(&mut dropdown, "down", props(&options));

        let semantics = dropdown.semantics(&options);
        assert_eq!(semantics.modifier, Some("open"));
        assert_eq!(
            semantics.toggle.active_descendant.as_deref(),
            Some("select-option-0")
        );
    }
}
